//! Time-to-deadline urgency scoring.
//!
//! Bands (with default policy):
//! - under 24h remaining: 90 to 100
//! - under 72h remaining: 60 to 89
//! - further out, or no deadline: 0
//!
//! Interpolation inside a band is linear in remaining seconds.

use chrono::{DateTime, Duration, Utc};
use cockpit_core::config::UrgencyPolicy;
use cockpit_core::types::{Severity, UrgencyScore};

const SECS_PER_HOUR: i64 = 3600;

/// The deadline an action is measured against.
///
/// An explicit `expires_at` wins; otherwise critical and high drafts get an
/// implicit deadline relative to their event time.
pub fn effective_deadline(
    event_time: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    severity: Severity,
    policy: &UrgencyPolicy,
) -> Option<DateTime<Utc>> {
    if expires_at.is_some() {
        return expires_at;
    }
    let hours = match severity {
        Severity::Critical => policy.critical_deadline_hours,
        Severity::High => policy.high_deadline_hours,
        Severity::Med | Severity::Low => return None,
    };
    event_time.checked_add_signed(Duration::hours(hours as i64))
}

/// Urgency contribution for an action evaluated at `now`.
pub fn urgency_score(
    now: DateTime<Utc>,
    event_time: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    severity: Severity,
    policy: &UrgencyPolicy,
) -> UrgencyScore {
    match effective_deadline(event_time, expires_at, severity, policy) {
        Some(deadline) => score_remaining((deadline - now).num_seconds().max(0), policy),
        None => UrgencyScore::new(0),
    }
}

fn score_remaining(remaining: i64, policy: &UrgencyPolicy) -> UrgencyScore {
    let top = policy.top_band_hours as i64 * SECS_PER_HOUR;
    let high = policy.high_band_hours as i64 * SECS_PER_HOUR;

    if remaining < top {
        UrgencyScore::new(100 - div_round(10 * remaining, top))
    } else if remaining < high {
        UrgencyScore::new(89 - div_round(29 * (remaining - top), high - top))
    } else {
        UrgencyScore::new(0)
    }
}

/// Integer division rounding half up. Both operands are non-negative.
fn div_round(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator / 2) / denominator
}
