/*!
 * Timeline Builder
 * Simulated clock, ready-set tracking, and Gantt segment emission shared by every policy
 */

use super::traits::Selector;
use super::types::{Dispatch, GanttSegment};
use crate::core::types::Tick;
use crate::process::{Process, ProcessState};
use tracing::{debug, trace};

/// One simulation run in progress
///
/// Owns the run's records outright; nothing here is shared with the caller's
/// input or with other runs.
pub(crate) struct Timeline {
    clock: Tick,
    processes: Vec<Process>,
    segments: Vec<GanttSegment>,
    completed: usize,
}

impl Timeline {
    pub fn new(processes: Vec<Process>) -> Self {
        let mut timeline = Self {
            clock: 0,
            processes,
            segments: Vec::new(),
            completed: 0,
        };
        timeline.admit_arrivals();
        timeline
    }

    #[inline(always)]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    #[inline(always)]
    pub fn process(&self, index: usize) -> &Process {
        &self.processes[index]
    }

    #[inline(always)]
    pub fn is_done(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Input positions of the ready set (arrived, incomplete, not on the CPU)
    pub fn ready(&self) -> impl Iterator<Item = usize> + '_ {
        self.processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_ready())
            .map(|(index, _)| index)
    }

    /// Earliest arrival among processes the clock has not reached yet
    pub fn next_arrival(&self) -> Option<Tick> {
        self.processes
            .iter()
            .filter(|p| p.state() == ProcessState::NotArrived)
            .map(Process::arrival_time)
            .min()
    }

    fn admit_arrivals(&mut self) {
        let clock = self.clock;
        for process in self
            .processes
            .iter_mut()
            .filter(|p| p.state() == ProcessState::NotArrived && p.arrival_time() <= clock)
        {
            process.admit();
        }
    }

    /// Jump the idle CPU to the next arrival
    ///
    /// Returns `false` when no arrival is pending, i.e. no progress is possible.
    fn idle(&mut self) -> bool {
        let Some(next) = self.next_arrival() else {
            return false;
        };
        trace!(from = self.clock, to = next, "CPU idle");
        self.clock = next;
        self.admit_arrivals();
        true
    }

    fn execute(&mut self, dispatch: Dispatch, coalesce: bool) {
        let Dispatch { index, slice } = dispatch;
        let start = self.clock;
        let end = start + slice;

        let process = &mut self.processes[index];
        debug!(pid = %process.pid(), start, slice, remaining = process.remaining_time(), "dispatch");
        process.dispatch(start);
        if process.run_for(slice, end) {
            self.completed += 1;
        }

        let extends_last = coalesce
            && self
                .segments
                .last()
                .is_some_and(|last| last.process == index && last.end == start);
        if extends_last {
            if let Some(last) = self.segments.last_mut() {
                last.end = end;
            }
        } else {
            let segment = GanttSegment::new(process.pid().clone(), index, start, end);
            self.segments.push(segment);
        }

        self.clock = end;
        self.admit_arrivals();
    }

    /// Run `selector` until every process completes
    ///
    /// Each iteration either executes a non-empty slice or moves the clock to a
    /// strictly later arrival, so the loop is bounded by total burst plus the
    /// number of distinct arrival times.
    pub fn drive(mut self, selector: &mut dyn Selector) -> (Vec<Process>, Vec<GanttSegment>) {
        let coalesce = selector.coalesces_segments();

        while !self.is_done() {
            match selector.select(&self) {
                Some(dispatch) => {
                    self.execute(dispatch, coalesce);
                    selector.on_slice_end(&self, dispatch);
                }
                None => {
                    if !self.idle() {
                        debug_assert!(false, "selector stalled at t={}", self.clock);
                        break;
                    }
                }
            }
        }

        (self.processes, self.segments)
    }
}
