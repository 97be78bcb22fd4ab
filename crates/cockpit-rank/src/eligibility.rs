//! Preview-tier eligibility.

use cockpit_core::types::{AdapterContext, Lane, Severity};
use serde::{Deserialize, Serialize};

use crate::provenance::GatedAction;

/// Who the feed is being ranked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    /// Unauthenticated or demo user; preview gating applies.
    Preview,
    /// Fully unlocked user.
    #[default]
    Full,
}

/// Whether an action may be shown to a preview-tier user.
///
/// Critical findings, executable Protect actions and already-saved
/// references are excluded. Partially populated actions are never eligible.
pub fn is_eligible_for_preview(action: &GatedAction, context: &AdapterContext) -> bool {
    if !is_well_formed(action) {
        return false;
    }
    if action.severity == Severity::Critical {
        return false;
    }
    if action.lane == Lane::Protect && action.is_executable {
        return false;
    }
    !context.is_saved(&action.source.ref_id)
}

/// Eligibility for the given audience.
pub fn is_eligible(action: &GatedAction, context: &AdapterContext, audience: Audience) -> bool {
    match audience {
        Audience::Preview => is_eligible_for_preview(action, context),
        Audience::Full => is_well_formed(action),
    }
}

fn is_well_formed(action: &GatedAction) -> bool {
    [
        action.id.as_str(),
        action.title.as_str(),
        action.cta.href.as_str(),
        action.source.ref_id.as_str(),
    ]
    .iter()
    .all(|field| !field.trim().is_empty())
}
