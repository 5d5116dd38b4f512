/*!
 * Shortest-Remaining-Time-First (preemptive SJF)
 *
 * Event-driven: the selected process runs until it completes or until the next
 * arrival, whichever comes first. Between two arrivals only the running process
 * changes its remaining time, and it only shrinks, so re-deciding at every unit
 * would pick the same process; jumping straight to the next event yields the
 * same segments and completion times.
 */

use crate::process::Process;
use crate::scheduler::entry::select_min_by;
use crate::scheduler::timeline::Timeline;
use crate::scheduler::traits::Selector;
use crate::scheduler::types::Dispatch;

pub(crate) struct ShortestRemainingFirst;

impl Selector for ShortestRemainingFirst {
    fn select(&mut self, timeline: &Timeline) -> Option<Dispatch> {
        let index = select_min_by(timeline, Process::remaining_time)?;
        let remaining = timeline.process(index).remaining_time();

        let slice = match timeline.next_arrival() {
            Some(arrival) => remaining.min(arrival - timeline.clock()),
            None => remaining,
        };

        Some(Dispatch { index, slice })
    }

    fn coalesces_segments(&self) -> bool {
        true
    }
}
