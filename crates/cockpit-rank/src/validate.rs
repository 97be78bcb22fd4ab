//! Input-boundary validation of draft batches.
//!
//! Bad drafts are reported and dropped one by one; the rest of the batch
//! still ranks.

use std::collections::HashSet;

use cockpit_core::error::{CockpitError, Result};
use cockpit_core::types::ActionDraft;
use serde_json::Value;
use tracing::warn;

use crate::error::{ValidationError, ValidationIssue};

pub const MAX_IMPACT_CHIPS: usize = 2;

/// Drafts that passed validation plus the ones that did not.
#[derive(Debug, Clone, Default)]
pub struct ParsedBatch {
    /// Valid drafts, in input order.
    pub drafts: Vec<ActionDraft>,
    pub rejected: Vec<ValidationError>,
}

/// Shape checks on a single, already-typed draft.
pub fn validate_draft(draft: &ActionDraft) -> std::result::Result<(), ValidationIssue> {
    let required = [
        ("id", draft.id.as_str()),
        ("title", draft.title.as_str()),
        ("cta.href", draft.cta.href.as_str()),
        ("source.ref_id", draft.source.ref_id.as_str()),
    ];
    if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
        return Err(ValidationIssue::EmptyField(*name));
    }

    if draft.impact_chips.len() > MAX_IMPACT_CHIPS {
        return Err(ValidationIssue::TooManyImpactChips(draft.impact_chips.len()));
    }
    if let Some(pos) = draft.impact_chips.iter().position(|c| !c.value.is_finite()) {
        return Err(ValidationIssue::NonFiniteChipValue(pos));
    }

    if draft.expires_at.is_some_and(|expires| expires < draft.event_time) {
        return Err(ValidationIssue::ExpiresBeforeEvent);
    }
    Ok(())
}

/// Validate typed drafts, dropping invalid ones and repeated ids.
pub fn validate_batch<I>(drafts: I) -> ParsedBatch
where
    I: IntoIterator<Item = (usize, ActionDraft)>,
{
    let mut batch = ParsedBatch::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, draft) in drafts {
        let outcome = validate_draft(&draft).and_then(|()| {
            if seen.insert(draft.id.clone()) {
                Ok(())
            } else {
                Err(ValidationIssue::DuplicateId)
            }
        });
        match outcome {
            Ok(()) => batch.drafts.push(draft),
            Err(issue) => batch.rejected.push(reject(index, Some(draft.id), issue)),
        }
    }
    batch
}

/// Parse a JSON array of drafts. Each element is decoded independently.
///
/// Only a document that is not a JSON array fails as a whole.
pub fn parse_batch(json: &str) -> Result<ParsedBatch> {
    let value: Value = serde_json::from_str(json)?;
    parse_batch_value(value)
}

/// Same as [`parse_batch`] for an already-decoded JSON value.
pub fn parse_batch_value(value: Value) -> Result<ParsedBatch> {
    let Value::Array(items) = value else {
        return Err(CockpitError::Validation(
            "draft batch must be a JSON array".to_string(),
        ));
    };

    let mut malformed = Vec::new();
    let mut typed = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let draft_id = item.get("id").and_then(Value::as_str).map(str::to_string);
        match serde_json::from_value::<ActionDraft>(item) {
            Ok(draft) => typed.push((index, draft)),
            Err(e) => malformed.push(reject(index, draft_id, ValidationIssue::Malformed(e.to_string()))),
        }
    }

    let mut batch = validate_batch(typed);
    malformed.append(&mut batch.rejected);
    malformed.sort_by_key(|e| e.index);
    batch.rejected = malformed;
    Ok(batch)
}

fn reject(index: usize, draft_id: Option<String>, issue: ValidationIssue) -> ValidationError {
    let err = ValidationError {
        index,
        draft_id,
        issue,
    };
    warn!(error = %err, "Draft rejected");
    err
}
