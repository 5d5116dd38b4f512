/*!
 * Selection Entries
 * Deterministic ranking shared by the key-based selectors
 */

use super::timeline::Timeline;
use crate::core::types::Tick;
use crate::process::Process;
use std::cmp::Ordering;

/// Candidate ranking: policy key, then earliest arrival, then input position
///
/// The smallest entry wins. The arrival/position tail makes every selection
/// deterministic regardless of how the ready set is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Entry<K> {
    pub key: K,
    pub arrival: Tick,
    pub index: usize,
}

impl<K: Ord> Ord for Entry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.arrival.cmp(&other.arrival))
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl<K: Ord> PartialOrd for Entry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pick the best-ranked ready process under `key`
pub(super) fn select_min_by<K, F>(timeline: &Timeline, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    timeline
        .ready()
        .map(|index| {
            let process = timeline.process(index);
            Entry {
                key: key(process),
                arrival: process.arrival_time(),
                index,
            }
        })
        .min()
        .map(|entry| entry.index)
}
