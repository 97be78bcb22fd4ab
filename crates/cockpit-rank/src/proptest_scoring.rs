//! Property-based tests for the scoring and gating invariants.

use chrono::{DateTime, Utc};
use proptest::prelude::*;

use cockpit_core::types::{
    ActionDraft, ActionSource, AdapterContext, Cta, CtaKind, Freshness, Lane, Provenance,
    RelevanceScore, Severity, SourceKind, UrgencyScore,
};

use crate::eligibility::is_eligible_for_preview;
use crate::provenance::{apply_provenance_gating, GatedAction};
use crate::scoring::{
    compute_total_score, freshness_weight, lane_weight, severity_weight, ScoreParams, MAX_SCORE,
    MIN_SCORE,
};

fn lane() -> impl Strategy<Value = Lane> {
    prop_oneof![Just(Lane::Protect), Just(Lane::Earn), Just(Lane::Watch)]
}

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Critical),
        Just(Severity::High),
        Just(Severity::Med),
        Just(Severity::Low),
    ]
}

fn freshness() -> impl Strategy<Value = Freshness> {
    prop_oneof![
        Just(Freshness::New),
        Just(Freshness::Updated),
        Just(Freshness::Expiring),
        Just(Freshness::Stable),
    ]
}

fn provenance() -> impl Strategy<Value = Provenance> {
    prop_oneof![
        Just(Provenance::Confirmed),
        Just(Provenance::Simulated),
        Just(Provenance::Heuristic),
    ]
}

fn cta_kind() -> impl Strategy<Value = CtaKind> {
    prop_oneof![Just(CtaKind::Fix), Just(CtaKind::Execute), Just(CtaKind::Review)]
}

/// Strategy for any valid parameter tuple.
fn score_params() -> impl Strategy<Value = ScoreParams> {
    (
        lane(),
        severity(),
        0i64..=100,
        freshness(),
        0i64..=30,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(lane, severity, urgency, freshness, relevance, is_burst, is_degraded, is_duplicate)| {
                ScoreParams {
                    lane,
                    severity,
                    urgency_score: UrgencyScore::new(urgency),
                    freshness,
                    relevance_score: RelevanceScore::new(relevance),
                    is_burst,
                    is_degraded,
                    is_duplicate,
                }
            },
        )
}

fn draft() -> impl Strategy<Value = ActionDraft> {
    (lane(), severity(), provenance(), any::<bool>(), cta_kind()).prop_map(
        |(lane, severity, provenance, is_executable, kind)| ActionDraft {
            id: "prop-1".to_string(),
            lane,
            title: "Generated".to_string(),
            description: String::new(),
            severity,
            provenance,
            is_executable,
            cta: Cta {
                kind,
                href: "/act".to_string(),
            },
            impact_chips: vec![],
            event_time: DateTime::<Utc>::UNIX_EPOCH,
            expires_at: None,
            source: ActionSource {
                kind: SourceKind::Security,
                ref_id: "ref-1".to_string(),
            },
            created_at: None,
            updated_at: None,
        },
    )
}

fn context() -> impl Strategy<Value = AdapterContext> {
    (any::<bool>(), prop::option::of(prop_oneof![Just("owner"), Just("viewer")])).prop_map(
        |(degraded_mode, role)| {
            let mut ctx = AdapterContext {
                degraded_mode,
                ..AdapterContext::default()
            };
            if let Some(role) = role {
                ctx.wallet_roles.insert("0x1".to_string(), role.to_string());
            }
            ctx
        },
    )
}

proptest! {
    /// Property: identical inputs always yield identical scores.
    #[test]
    fn prop_score_is_deterministic(p in score_params()) {
        prop_assert_eq!(compute_total_score(&p), compute_total_score(&p));
    }

    /// Property: the score equals the closed-form sum.
    #[test]
    fn prop_score_matches_closed_form(p in score_params()) {
        let expected = lane_weight(p.lane)
            + severity_weight(p.severity)
            + p.urgency_score.value()
            + freshness_weight(p.freshness)
            + p.relevance_score.value()
            + if p.is_burst { 10 } else { 0 }
            + if p.is_degraded { -25 } else { 0 }
            + if p.is_duplicate { -30 } else { 0 };
        prop_assert_eq!(compute_total_score(&p), expected);
    }

    /// Property: Protect > Earn > Watch by exactly 30 each.
    #[test]
    fn prop_lane_steps_are_exactly_30(p in score_params()) {
        let protect = compute_total_score(&ScoreParams { lane: Lane::Protect, ..p });
        let earn = compute_total_score(&ScoreParams { lane: Lane::Earn, ..p });
        let watch = compute_total_score(&ScoreParams { lane: Lane::Watch, ..p });
        prop_assert_eq!(protect - earn, 30);
        prop_assert_eq!(earn - watch, 30);
    }

    /// Property: severity ordering is strict.
    #[test]
    fn prop_severity_is_strictly_ordered(p in score_params()) {
        let at = |severity| compute_total_score(&ScoreParams { severity, ..p });
        prop_assert!(at(Severity::Critical) > at(Severity::High));
        prop_assert!(at(Severity::High) > at(Severity::Med));
        prop_assert!(at(Severity::Med) > at(Severity::Low));
    }

    /// Property: urgency and relevance are additive with no cross terms.
    #[test]
    fn prop_urgency_and_relevance_are_additive(
        p in score_params(),
        urgency in 0i64..=100,
        relevance in 0i64..=30,
    ) {
        let moved = ScoreParams {
            urgency_score: UrgencyScore::new(urgency),
            relevance_score: RelevanceScore::new(relevance),
            ..p
        };
        let delta = (urgency as i32 - p.urgency_score.value())
            + (relevance as i32 - p.relevance_score.value());
        prop_assert_eq!(compute_total_score(&moved) - compute_total_score(&p), delta);
    }

    /// Property: freshness deltas against stable are 25/20/15.
    #[test]
    fn prop_freshness_deltas(p in score_params()) {
        let at = |freshness| compute_total_score(&ScoreParams { freshness, ..p });
        let stable = at(Freshness::Stable);
        prop_assert_eq!(at(Freshness::New) - stable, 25);
        prop_assert_eq!(at(Freshness::Expiring) - stable, 20);
        prop_assert_eq!(at(Freshness::Updated) - stable, 15);
    }

    /// Property: flags contribute fixed, cumulative deltas.
    #[test]
    fn prop_flag_deltas(p in score_params()) {
        let bare = ScoreParams { is_burst: false, is_degraded: false, is_duplicate: false, ..p };
        let base = compute_total_score(&bare);
        prop_assert_eq!(compute_total_score(&ScoreParams { is_burst: true, ..bare }) - base, 10);
        prop_assert_eq!(compute_total_score(&ScoreParams { is_degraded: true, ..bare }) - base, -25);
        prop_assert_eq!(compute_total_score(&ScoreParams { is_duplicate: true, ..bare }) - base, -30);
        prop_assert_eq!(
            compute_total_score(&ScoreParams { is_degraded: true, is_duplicate: true, ..bare }) - base,
            -55
        );
    }

    /// Property: every score lies within [-25, 345].
    #[test]
    fn prop_score_is_bounded(p in score_params()) {
        let score = compute_total_score(&p);
        prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
    }

    /// Property: critical actions are never preview-eligible.
    #[test]
    fn prop_critical_never_preview_eligible(d in draft(), ctx in context()) {
        let gated = GatedAction::from_draft(&ActionDraft { severity: Severity::Critical, ..d });
        prop_assert!(!is_eligible_for_preview(&gated, &ctx));
    }

    /// Property: heuristic claims under degraded mode are never executable.
    #[test]
    fn prop_heuristic_degraded_never_executable(d in draft(), ctx in context()) {
        let ctx = AdapterContext { degraded_mode: true, ..ctx };
        let gated = apply_provenance_gating(
            GatedAction::from_draft(&ActionDraft { provenance: Provenance::Heuristic, ..d }),
            &ctx,
        );
        prop_assert!(!gated.is_executable);
        prop_assert_ne!(gated.cta.kind, CtaKind::Execute);
    }

    /// Property: confirmed provenance passes through unchanged.
    #[test]
    fn prop_confirmed_passes_through(d in draft(), ctx in context()) {
        let d = ActionDraft { provenance: Provenance::Confirmed, ..d };
        let input = GatedAction::from_draft(&d);
        let gated = apply_provenance_gating(input.clone(), &ctx);
        prop_assert_eq!(gated.is_executable, input.is_executable);
        prop_assert_eq!(gated.cta, input.cta);
    }
}
