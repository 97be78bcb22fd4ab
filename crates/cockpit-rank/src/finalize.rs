//! Assembly of the immutable [`Action`] record.

use chrono::{DateTime, Utc};
use cockpit_core::types::{
    ActionDraft, ActionSource, Cta, CtaKind, Freshness, ImpactChip, Lane, Provenance, Severity,
    TrustLabel,
};
use serde::Serialize;

use crate::provenance::GatedAction;

/// A finalized, scored, gated record ready for display.
///
/// Only [`finalize_action`] can build one and no field can be changed
/// afterwards. A re-rank produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    id: String,
    lane: Lane,
    title: String,
    description: String,
    severity: Severity,
    provenance: Provenance,
    is_executable: bool,
    cta: Cta,
    impact_chips: Vec<ImpactChip>,
    event_time: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    source: ActionSource,
    #[serde(rename = "_created_at", skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updated_at", skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
    score: i32,
    visible: bool,
    trust_label: TrustLabel,
    freshness: Freshness,
}

impl Action {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_executable(&self) -> bool {
        self.is_executable
    }

    pub fn cta(&self) -> &Cta {
        &self.cta
    }

    pub fn impact_chips(&self) -> &[ImpactChip] {
        &self.impact_chips
    }

    pub fn event_time(&self) -> DateTime<Utc> {
        self.event_time
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn source(&self) -> &ActionSource {
        &self.source
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn trust_label(&self) -> TrustLabel {
        self.trust_label
    }

    pub fn freshness(&self) -> Freshness {
        self.freshness
    }
}

/// Build the display record from a draft and its pipeline results.
///
/// Display fields come from `draft`; executability, CTA and trust label
/// come from `gated`. An invisible action never keeps an executable CTA.
pub fn finalize_action(
    draft: &ActionDraft,
    score: i32,
    gated: GatedAction,
    eligible: bool,
    freshness: Freshness,
) -> Action {
    let (is_executable, cta) = if eligible {
        (gated.is_executable, gated.cta)
    } else {
        let kind = match gated.cta.kind {
            CtaKind::Execute => CtaKind::Review,
            other => other,
        };
        (false, Cta { kind, ..gated.cta })
    };

    Action {
        id: draft.id.clone(),
        lane: draft.lane,
        title: draft.title.clone(),
        description: draft.description.clone(),
        severity: draft.severity,
        provenance: draft.provenance,
        is_executable,
        cta,
        impact_chips: draft.impact_chips.clone(),
        event_time: draft.event_time,
        expires_at: draft.expires_at,
        source: draft.source.clone(),
        created_at: draft.created_at,
        updated_at: draft.updated_at,
        score,
        visible: eligible,
        trust_label: gated.trust_label,
        freshness,
    }
}
