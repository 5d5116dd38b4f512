/*!
 * First-Come-First-Served
 * Fixed arrival order, each process runs to completion
 */

use super::arrival_order;
use crate::process::Process;
use crate::scheduler::timeline::Timeline;
use crate::scheduler::traits::Selector;
use crate::scheduler::types::Dispatch;

/// FCFS selector
///
/// The order is fixed once up front, so no ready-set scan is needed per decision.
pub(crate) struct Fcfs {
    order: Vec<usize>,
    next: usize,
}

impl Fcfs {
    pub fn new(processes: &[Process]) -> Self {
        Self {
            order: arrival_order(processes),
            next: 0,
        }
    }
}

impl Selector for Fcfs {
    fn select(&mut self, timeline: &Timeline) -> Option<Dispatch> {
        let &index = self.order.get(self.next)?;
        let process = timeline.process(index);

        // Head of the order has not arrived: let the clock jump to it
        if !process.is_ready() {
            return None;
        }

        self.next += 1;
        Some(Dispatch {
            index,
            slice: process.remaining_time(),
        })
    }
}
