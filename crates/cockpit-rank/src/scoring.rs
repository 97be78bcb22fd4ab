//! Locked-weight additive scoring.
//!
//! Every term is independent: changing one input moves the total by exactly
//! that term's contribution.

use cockpit_core::types::{Freshness, Lane, RelevanceScore, Severity, UrgencyScore};
use serde::Serialize;

pub const BURST_BONUS: i32 = 10;
pub const DEGRADED_PENALTY: i32 = -25;
pub const DUPLICATE_PENALTY: i32 = -30;

/// Lowest score any input can produce.
pub const MIN_SCORE: i32 = -25;
/// Highest score any input can produce.
pub const MAX_SCORE: i32 = 345;

pub fn lane_weight(lane: Lane) -> i32 {
    match lane {
        Lane::Protect => 80,
        Lane::Earn => 50,
        Lane::Watch => 20,
    }
}

pub fn severity_weight(severity: Severity) -> i32 {
    match severity {
        Severity::Critical => 100,
        Severity::High => 70,
        Severity::Med => 40,
        Severity::Low => 10,
    }
}

pub fn freshness_weight(freshness: Freshness) -> i32 {
    match freshness {
        Freshness::New => 25,
        Freshness::Expiring => 20,
        Freshness::Updated => 15,
        Freshness::Stable => 0,
    }
}

/// Inputs to [`compute_total_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreParams {
    pub lane: Lane,
    pub severity: Severity,
    pub urgency_score: UrgencyScore,
    pub freshness: Freshness,
    pub relevance_score: RelevanceScore,
    pub is_burst: bool,
    pub is_degraded: bool,
    pub is_duplicate: bool,
}

/// Per-term contributions of a score, for debug output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub lane: i32,
    pub severity: i32,
    pub urgency: i32,
    pub freshness: i32,
    pub relevance: i32,
    pub burst: i32,
    pub degraded: i32,
    pub duplicate: i32,
}

impl ScoreBreakdown {
    pub fn of(params: &ScoreParams) -> Self {
        Self {
            lane: lane_weight(params.lane),
            severity: severity_weight(params.severity),
            urgency: params.urgency_score.value(),
            freshness: freshness_weight(params.freshness),
            relevance: params.relevance_score.value(),
            burst: if params.is_burst { BURST_BONUS } else { 0 },
            degraded: if params.is_degraded { DEGRADED_PENALTY } else { 0 },
            duplicate: if params.is_duplicate { DUPLICATE_PENALTY } else { 0 },
        }
    }

    pub fn total(&self) -> i32 {
        self.lane
            + self.severity
            + self.urgency
            + self.freshness
            + self.relevance
            + self.burst
            + self.degraded
            + self.duplicate
    }
}

/// Compute the total score for one action. Pure and deterministic.
pub fn compute_total_score(params: &ScoreParams) -> i32 {
    ScoreBreakdown::of(params).total()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ScoreParams {
        ScoreParams {
            lane: Lane::Earn,
            severity: Severity::Med,
            urgency_score: UrgencyScore::new(50),
            freshness: Freshness::Stable,
            relevance_score: RelevanceScore::new(10),
            is_burst: false,
            is_degraded: false,
            is_duplicate: false,
        }
    }

    #[test]
    fn test_maximum_scenario_is_345() {
        let p = ScoreParams {
            lane: Lane::Protect,
            severity: Severity::Critical,
            urgency_score: UrgencyScore::new(100),
            freshness: Freshness::New,
            relevance_score: RelevanceScore::new(30),
            is_burst: true,
            is_degraded: false,
            is_duplicate: false,
        };
        assert_eq!(compute_total_score(&p), 345);
        assert_eq!(compute_total_score(&p), MAX_SCORE);
    }

    #[test]
    fn test_minimum_scenario_is_negative_25() {
        let p = ScoreParams {
            lane: Lane::Watch,
            severity: Severity::Low,
            urgency_score: UrgencyScore::new(0),
            freshness: Freshness::Stable,
            relevance_score: RelevanceScore::new(0),
            is_burst: false,
            is_degraded: true,
            is_duplicate: true,
        };
        assert_eq!(compute_total_score(&p), -25);
        assert_eq!(compute_total_score(&p), MIN_SCORE);
    }

    #[test]
    fn test_midrange_sum() {
        // 50 + 40 + 50 + 0 + 10
        assert_eq!(compute_total_score(&params()), 150);
    }

    #[test]
    fn test_flag_deltas() {
        let base = compute_total_score(&params());
        let burst = compute_total_score(&ScoreParams {
            is_burst: true,
            ..params()
        });
        let degraded = compute_total_score(&ScoreParams {
            is_degraded: true,
            ..params()
        });
        let duplicate = compute_total_score(&ScoreParams {
            is_duplicate: true,
            ..params()
        });
        let both = compute_total_score(&ScoreParams {
            is_degraded: true,
            is_duplicate: true,
            ..params()
        });
        assert_eq!(burst - base, 10);
        assert_eq!(degraded - base, -25);
        assert_eq!(duplicate - base, -30);
        assert_eq!(both - base, -55);
    }

    #[test]
    fn test_freshness_deltas() {
        let at = |freshness| compute_total_score(&ScoreParams { freshness, ..params() });
        let stable = at(Freshness::Stable);
        assert_eq!(at(Freshness::New) - stable, 25);
        assert_eq!(at(Freshness::Expiring) - stable, 20);
        assert_eq!(at(Freshness::Updated) - stable, 15);
    }

    #[test]
    fn test_breakdown_matches_total() {
        let p = ScoreParams {
            is_burst: true,
            is_duplicate: true,
            ..params()
        };
        let breakdown = ScoreBreakdown::of(&p);
        assert_eq!(breakdown.burst, 10);
        assert_eq!(breakdown.duplicate, -30);
        assert_eq!(breakdown.degraded, 0);
        assert_eq!(breakdown.total(), compute_total_score(&p));
    }
}
