/*!
 * Round Robin
 * FIFO ready queue with a fixed time quantum
 */

use super::arrival_order;
use crate::core::types::Tick;
use crate::process::Process;
use crate::scheduler::timeline::Timeline;
use crate::scheduler::traits::Selector;
use crate::scheduler::types::{Dispatch, TimeQuantum};
use std::collections::VecDeque;

/// Round Robin selector
///
/// Queue invariant: every arrived, incomplete process that is not on the CPU
/// appears exactly once. Arrivals that happen during a slice are enqueued ahead
/// of the process returning from that slice.
pub(crate) struct RoundRobin {
    quantum: Tick,
    arrivals: Vec<usize>,
    admitted: usize,
    queue: VecDeque<usize>,
}

impl RoundRobin {
    pub fn new(processes: &[Process], quantum: TimeQuantum) -> Self {
        Self {
            quantum: quantum.ticks(),
            arrivals: arrival_order(processes),
            admitted: 0,
            queue: VecDeque::with_capacity(processes.len()),
        }
    }

    /// Enqueue, in arrival order, every process whose arrival the clock has reached
    fn enqueue_arrivals(&mut self, timeline: &Timeline) {
        while let Some(&index) = self.arrivals.get(self.admitted) {
            if timeline.process(index).arrival_time() > timeline.clock() {
                break;
            }
            self.queue.push_back(index);
            self.admitted += 1;
        }
    }
}

impl Selector for RoundRobin {
    fn select(&mut self, timeline: &Timeline) -> Option<Dispatch> {
        self.enqueue_arrivals(timeline);

        let index = self.queue.pop_front()?;
        let slice = timeline.process(index).remaining_time().min(self.quantum);
        Some(Dispatch { index, slice })
    }

    fn on_slice_end(&mut self, timeline: &Timeline, dispatch: Dispatch) {
        self.enqueue_arrivals(timeline);

        if !timeline.process(dispatch.index).is_complete() {
            self.queue.push_back(dispatch.index);
        }
    }
}
