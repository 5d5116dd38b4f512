/*!
 * Shortest-Job-First (non-preemptive)
 */

use crate::process::Process;
use crate::scheduler::entry::select_min_by;
use crate::scheduler::timeline::Timeline;
use crate::scheduler::traits::Selector;
use crate::scheduler::types::Dispatch;

/// Picks the ready process with the smallest total burst and runs it to completion
pub(crate) struct ShortestJobFirst;

impl Selector for ShortestJobFirst {
    fn select(&mut self, timeline: &Timeline) -> Option<Dispatch> {
        let index = select_min_by(timeline, Process::burst_time)?;
        Some(Dispatch {
            index,
            slice: timeline.process(index).remaining_time(),
        })
    }
}
