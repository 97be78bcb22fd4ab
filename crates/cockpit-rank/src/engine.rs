//! The ranking pipeline.
//!
//! validate -> signals -> score -> provenance gate -> eligibility -> finalize
//!
//! Each draft is folded independently once the batch signals are known.
//! The engine assigns scores and visibility; ordering is left to the caller
//! (see [`crate::order`]).

use chrono::{DateTime, Utc};
use cockpit_core::config::RankingConfig;
use cockpit_core::error::Result;
use cockpit_core::types::{ActionDraft, AdapterContext};
use tracing::{debug, info};

use crate::eligibility::{is_eligible, Audience};
use crate::error::ValidationError;
use crate::finalize::{finalize_action, Action};
use crate::freshness::classify_freshness;
use crate::provenance::{GatedAction, ProvenanceGate};
use crate::scoring::{ScoreBreakdown, ScoreParams};
use crate::signals::{compute_signals, DraftSignals};
use crate::urgency::urgency_score;
use crate::validate::{parse_batch, validate_batch, ParsedBatch};

/// Result of one ranking pass.
#[derive(Debug, Clone, Default)]
pub struct RankOutcome {
    /// Finalized actions in input order.
    pub actions: Vec<Action>,
    /// Drafts excluded by validation.
    pub rejected: Vec<ValidationError>,
    /// Drafts skipped because they had already expired.
    pub expired: usize,
}

impl RankOutcome {
    pub fn visible_count(&self) -> usize {
        self.actions.iter().filter(|a| a.visible()).count()
    }
}

/// Stateless ranking engine. One instance can serve any number of passes.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    config: RankingConfig,
    gate: ProvenanceGate,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new(RankingConfig::default())
    }
}

impl RankingEngine {
    pub fn new(config: RankingConfig) -> Self {
        let gate = ProvenanceGate::new(config.elevated_wallet_roles.clone());
        Self { config, gate }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Rank typed drafts. Invalid drafts are reported, not ranked.
    pub fn rank(
        &self,
        drafts: &[ActionDraft],
        context: &AdapterContext,
        now: DateTime<Utc>,
        audience: Audience,
    ) -> RankOutcome {
        let batch = validate_batch(drafts.iter().cloned().enumerate());
        self.rank_batch(batch, context, now, audience)
    }

    /// Rank a JSON array of drafts. Fails only if the document is not an array.
    pub fn rank_json(
        &self,
        json: &str,
        context: &AdapterContext,
        now: DateTime<Utc>,
        audience: Audience,
    ) -> Result<RankOutcome> {
        let batch = parse_batch(json)?;
        Ok(self.rank_batch(batch, context, now, audience))
    }

    /// Rank an already-validated batch.
    pub fn rank_batch(
        &self,
        batch: ParsedBatch,
        context: &AdapterContext,
        now: DateTime<Utc>,
        audience: Audience,
    ) -> RankOutcome {
        let ParsedBatch { drafts, rejected } = batch;
        let total = drafts.len();

        let live: Vec<ActionDraft> = if self.config.drop_expired {
            drafts
                .into_iter()
                .filter(|d| !d.expires_at.is_some_and(|expires| expires < now))
                .collect()
        } else {
            drafts
        };
        let expired = total - live.len();

        let signals = compute_signals(&live, context, &self.config.burst);
        let actions: Vec<Action> = live
            .iter()
            .zip(signals)
            .map(|(draft, signals)| self.rank_one(draft, signals, context, now, audience))
            .collect();

        let outcome = RankOutcome {
            actions,
            rejected,
            expired,
        };
        info!(
            ranked = outcome.actions.len(),
            visible = outcome.visible_count(),
            rejected = outcome.rejected.len(),
            expired = outcome.expired,
            degraded = context.degraded_mode,
            ?audience,
            "Ranking pass complete"
        );
        outcome
    }

    fn rank_one(
        &self,
        draft: &ActionDraft,
        signals: DraftSignals,
        context: &AdapterContext,
        now: DateTime<Utc>,
        audience: Audience,
    ) -> Action {
        let freshness = classify_freshness(draft, context, now, &self.config.freshness);
        let params = ScoreParams {
            lane: draft.lane,
            severity: draft.severity,
            urgency_score: urgency_score(
                now,
                draft.event_time,
                draft.expires_at,
                draft.severity,
                &self.config.urgency,
            ),
            freshness,
            relevance_score: signals.relevance,
            is_burst: signals.is_burst,
            is_degraded: context.degraded_mode,
            is_duplicate: signals.is_duplicate,
        };
        let breakdown = ScoreBreakdown::of(&params);
        let score = breakdown.total();

        let gated = self.gate.apply(GatedAction::from_draft(draft), context);
        let eligible = is_eligible(&gated, context, audience);

        debug!(
            id = %draft.id,
            score,
            ?breakdown,
            trust = %gated.trust_label,
            eligible,
            "Action scored"
        );
        finalize_action(draft, score, gated, eligible, freshness)
    }
}
