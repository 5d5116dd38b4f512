/*!
 * Priority Scheduling (non-preemptive)
 */

use crate::process::Process;
use crate::scheduler::entry::select_min_by;
use crate::scheduler::timeline::Timeline;
use crate::scheduler::traits::Selector;
use crate::scheduler::types::Dispatch;

/// Picks the ready process with the lowest priority value and runs it to completion
///
/// Processes declared without a priority rank as `DEFAULT_PRIORITY`.
pub(crate) struct PriorityFirst;

impl Selector for PriorityFirst {
    fn select(&mut self, timeline: &Timeline) -> Option<Dispatch> {
        let index = select_min_by(timeline, Process::effective_priority)?;
        Some(Dispatch {
            index,
            slice: timeline.process(index).remaining_time(),
        })
    }
}
