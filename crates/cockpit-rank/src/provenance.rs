//! Provenance gating.
//!
//! Adjusts the trust label, executability and CTA of an action according
//! to how its underlying claim was obtained:
//!
//! | provenance | degraded | trust label  | executable | CTA                          |
//! |------------|----------|--------------|------------|------------------------------|
//! | confirmed  | any      | `verified`   | unchanged  | unchanged                    |
//! | simulated  | any      | `simulated`  | unchanged  | Execute -> Review unless elevated |
//! | heuristic  | no       | `estimated`  | unchanged  | unchanged                    |
//! | heuristic  | yes      | `unverified` | `false`    | Execute -> Review            |

use cockpit_core::types::{
    ActionDraft, ActionSource, AdapterContext, Cta, CtaKind, Lane, Provenance, Severity,
    TrustLabel,
};

/// Role labels that keep `Execute` on simulated actions when no
/// configuration overrides them.
pub const DEFAULT_ELEVATED_ROLES: [&str; 2] = ["owner", "admin"];

/// The gate-relevant view of an action as it moves through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct GatedAction {
    pub id: String,
    pub title: String,
    pub lane: Lane,
    pub severity: Severity,
    pub provenance: Provenance,
    pub is_executable: bool,
    pub cta: Cta,
    pub source: ActionSource,
    pub trust_label: TrustLabel,
}

impl GatedAction {
    /// Snapshot a draft before gating. The draft itself is left untouched.
    pub fn from_draft(draft: &ActionDraft) -> Self {
        Self {
            id: draft.id.clone(),
            title: draft.title.clone(),
            lane: draft.lane,
            severity: draft.severity,
            provenance: draft.provenance,
            is_executable: draft.is_executable,
            cta: draft.cta.clone(),
            source: draft.source.clone(),
            trust_label: base_trust_label(draft.provenance),
        }
    }

    fn review_only(self) -> Self {
        let kind = match self.cta.kind {
            CtaKind::Execute => CtaKind::Review,
            other => other,
        };
        Self {
            cta: Cta { kind, ..self.cta },
            ..self
        }
    }
}

fn base_trust_label(provenance: Provenance) -> TrustLabel {
    match provenance {
        Provenance::Confirmed => TrustLabel::Verified,
        Provenance::Simulated => TrustLabel::Simulated,
        Provenance::Heuristic => TrustLabel::Estimated,
    }
}

/// Provenance gate with a configurable set of elevated wallet roles.
#[derive(Debug, Clone)]
pub struct ProvenanceGate {
    elevated_roles: Vec<String>,
}

impl Default for ProvenanceGate {
    fn default() -> Self {
        Self::new(DEFAULT_ELEVATED_ROLES.iter().map(|r| r.to_string()).collect())
    }
}

impl ProvenanceGate {
    pub fn new(elevated_roles: Vec<String>) -> Self {
        Self { elevated_roles }
    }

    /// Gate one action. Total over every provenance and degraded combination.
    pub fn apply(&self, action: GatedAction, context: &AdapterContext) -> GatedAction {
        match (action.provenance, context.degraded_mode) {
            (Provenance::Confirmed, _) => GatedAction {
                trust_label: TrustLabel::Verified,
                ..action
            },
            (Provenance::Simulated, _) => {
                let gated = GatedAction {
                    trust_label: TrustLabel::Simulated,
                    ..action
                };
                if context.has_any_role(&self.elevated_roles) {
                    gated
                } else {
                    gated.review_only()
                }
            }
            (Provenance::Heuristic, false) => GatedAction {
                trust_label: TrustLabel::Estimated,
                ..action
            },
            (Provenance::Heuristic, true) => GatedAction {
                trust_label: TrustLabel::Unverified,
                is_executable: false,
                ..action
            }
            .review_only(),
        }
    }
}

/// Gate one action using the default elevated roles.
pub fn apply_provenance_gating(action: GatedAction, context: &AdapterContext) -> GatedAction {
    ProvenanceGate::default().apply(action, context)
}
