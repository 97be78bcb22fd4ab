//! Freshness classification relative to the user's last feed view.

use chrono::{DateTime, Duration, Utc};
use cockpit_core::config::FreshnessPolicy;
use cockpit_core::types::{ActionDraft, AdapterContext, Freshness};

/// Classify a draft as `new`, `updated`, `expiring` or `stable`.
///
/// `expiring` wins over `new` and `updated`. With no recorded last view
/// every non-expiring draft is `new`.
pub fn classify_freshness(
    draft: &ActionDraft,
    context: &AdapterContext,
    now: DateTime<Utc>,
    policy: &FreshnessPolicy,
) -> Freshness {
    if is_expiring(draft.expires_at, now, policy) {
        return Freshness::Expiring;
    }

    let Some(last_opened) = context.last_opened_at else {
        return Freshness::New;
    };

    if draft.created_or_event_time() > last_opened {
        Freshness::New
    } else if draft.updated_at.is_some_and(|updated| updated > last_opened) {
        Freshness::Updated
    } else {
        Freshness::Stable
    }
}

fn is_expiring(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>, policy: &FreshnessPolicy) -> bool {
    let window = Duration::hours(policy.expiring_window_hours as i64);
    expires_at.is_some_and(|expires| expires - now <= window)
}
