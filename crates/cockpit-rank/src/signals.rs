//! Batch-level score inputs: duplicates, bursts and context relevance.
//!
//! Computed once per ranking pass from the whole batch. Nothing here
//! mutates a draft.

use std::collections::{BTreeMap, HashSet};

use chrono::Duration;
use cockpit_core::config::BurstPolicy;
use cockpit_core::types::{ActionDraft, AdapterContext, Lane, RelevanceScore, SourceKind};

/// Points added per matching relevance signal.
pub const RELEVANCE_PER_SIGNAL: i64 = 10;

/// Derived per-draft inputs, parallel to the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftSignals {
    pub is_duplicate: bool,
    pub is_burst: bool,
    pub relevance: RelevanceScore,
}

/// Compute signals for every draft. Output index matches input index.
pub fn compute_signals(
    drafts: &[ActionDraft],
    context: &AdapterContext,
    policy: &BurstPolicy,
) -> Vec<DraftSignals> {
    let duplicates = duplicate_flags(drafts);
    let bursts = burst_flags(drafts, policy);

    drafts
        .iter()
        .zip(duplicates.into_iter().zip(bursts))
        .map(|(draft, (is_duplicate, is_burst))| DraftSignals {
            is_duplicate,
            is_burst,
            relevance: relevance_score(draft, context),
        })
        .collect()
}

/// A draft is a duplicate when an earlier draft points at the same source.
fn duplicate_flags(drafts: &[ActionDraft]) -> Vec<bool> {
    let mut seen: HashSet<(SourceKind, &str)> = HashSet::new();
    drafts
        .iter()
        .map(|d| !seen.insert((d.source.kind, d.source.ref_id.as_str())))
        .collect()
}

/// A draft is part of a burst when enough drafts of the same lane and
/// source kind happened within the window around it.
///
/// Each group is sorted by event time and scanned with a sliding window.
fn burst_flags(drafts: &[ActionDraft], policy: &BurstPolicy) -> Vec<bool> {
    let window = Duration::minutes(policy.window_minutes as i64);
    let mut groups: BTreeMap<(Lane, SourceKind), Vec<usize>> = BTreeMap::new();
    for (i, d) in drafts.iter().enumerate() {
        groups.entry((d.lane, d.source.kind)).or_default().push(i);
    }

    let mut flags = vec![false; drafts.len()];
    for members in groups.values_mut() {
        if members.len() < policy.min_cluster_size {
            continue;
        }
        members.sort_by_key(|&i| drafts[i].event_time);

        // [lo, hi) holds the members within `window` of the anchor
        let (mut lo, mut hi) = (0, 0);
        for &i in members.iter() {
            let anchor = drafts[i].event_time;
            while anchor - drafts[members[lo]].event_time > window {
                lo += 1;
            }
            while hi < members.len() && drafts[members[hi]].event_time - anchor <= window {
                hi += 1;
            }
            flags[i] = hi - lo >= policy.min_cluster_size;
        }
    }
    flags
}

/// 10 points each for a saved reference, a lane tag and a source-kind tag.
pub fn relevance_score(draft: &ActionDraft, context: &AdapterContext) -> RelevanceScore {
    let matches = [
        context.is_saved(&draft.source.ref_id),
        context.has_tag(draft.lane.tag()),
        context.has_tag(draft.source.kind.tag()),
    ]
    .into_iter()
    .filter(|&hit| hit)
    .count() as i64;
    RelevanceScore::new(matches * RELEVANCE_PER_SIGNAL)
}
