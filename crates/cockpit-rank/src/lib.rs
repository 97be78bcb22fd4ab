//! Cockpit rank crate - scoring, provenance gating and preview eligibility.
//!
//! Turns adapter-produced drafts into immutable, scored actions:
//! - Input validation with per-draft rejection
//! - Urgency, freshness and batch signals (duplicates, bursts, relevance)
//! - Deterministic additive scoring
//! - Provenance gating and trust labels
//! - Preview eligibility and feed ordering

pub mod eligibility;
pub mod engine;
pub mod error;
pub mod finalize;
pub mod freshness;
pub mod order;
pub mod provenance;
pub mod scoring;
pub mod signals;
pub mod urgency;
pub mod validate;

#[cfg(test)]
mod proptest_scoring;

pub use eligibility::{is_eligible, is_eligible_for_preview, Audience};
pub use engine::{RankOutcome, RankingEngine};
pub use error::{ValidationError, ValidationIssue};
pub use finalize::{finalize_action, Action};
pub use freshness::classify_freshness;
pub use order::{feed_order, sort_for_feed};
pub use provenance::{apply_provenance_gating, GatedAction, ProvenanceGate};
pub use scoring::{compute_total_score, ScoreBreakdown, ScoreParams};
pub use urgency::urgency_score;
pub use validate::{parse_batch, ParsedBatch};
