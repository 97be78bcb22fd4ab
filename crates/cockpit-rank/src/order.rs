//! Feed ordering for callers that display ranked actions.

use std::cmp::Ordering;

use crate::finalize::Action;

/// Score descending, then lane (Protect, Earn, Watch), then newest event
/// first. The id is a final tie-break so the order is total.
pub fn feed_order(a: &Action, b: &Action) -> Ordering {
    b.score()
        .cmp(&a.score())
        .then_with(|| a.lane().cmp(&b.lane()))
        .then_with(|| b.event_time().cmp(&a.event_time()))
        .then_with(|| a.id().cmp(b.id()))
}

/// Sort actions in place for display.
pub fn sort_for_feed(actions: &mut [Action]) {
    actions.sort_by(feed_order);
}
