/*!
 * Process Types
 * Caller-supplied process specs, per-run records, and completed metrics
 */

use crate::core::types::{Pid, Priority, Tick, DEFAULT_PRIORITY};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Process description as supplied by input collection
///
/// Values are signed so that malformed input (negative arrival, zero or negative
/// burst) reaches validation and is reported as `InvalidProcess` instead of failing
/// deserialization.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: Pid,
    #[serde(alias = "arrival")]
    pub arrival_time: i64,
    #[serde(alias = "burst")]
    pub burst_time: i64,
    #[serde(default)]
    pub priority: Option<i64>,
}

impl ProcessSpec {
    #[inline]
    #[must_use]
    pub fn new(pid: impl Into<Pid>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Process state during one simulation run
///
/// `NotArrived → Ready → Running → {Ready ⇄ Running}* → Complete`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Arrival time not yet reached by the clock
    NotArrived,
    /// Arrived and waiting for the CPU (initially or after preemption)
    Ready,
    /// Currently occupying the CPU
    Running,
    /// Burst fully served; terminal
    Complete,
}

impl ProcessState {
    /// Check whether `self → next` is an edge of the lifecycle
    #[inline]
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::NotArrived, Self::Ready)
                | (Self::Ready, Self::Running)
                | (Self::Running, Self::Ready)
                | (Self::Running, Self::Complete)
        )
    }
}

/// Mutable per-run process record
///
/// Owned by exactly one run. Computed fields are written once, when the record
/// completes.
#[derive(Debug, Clone)]
pub struct Process {
    pid: Pid,
    arrival_time: Tick,
    burst_time: Tick,
    priority: Option<Priority>,
    remaining_time: Tick,
    state: ProcessState,
    start_time: Option<Tick>,
    completion_time: Option<Tick>,
    turnaround_time: Option<Tick>,
    waiting_time: Option<Tick>,
}

impl Process {
    pub(crate) fn new(
        pid: Pid,
        arrival_time: Tick,
        burst_time: Tick,
        priority: Option<Priority>,
    ) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            state: ProcessState::NotArrived,
            start_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    #[inline(always)]
    pub fn pid(&self) -> &Pid {
        &self.pid
    }

    #[inline(always)]
    pub const fn arrival_time(&self) -> Tick {
        self.arrival_time
    }

    #[inline(always)]
    pub const fn burst_time(&self) -> Tick {
        self.burst_time
    }

    #[inline(always)]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Priority used for ranking; undeclared priorities rank as `DEFAULT_PRIORITY`
    #[inline(always)]
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }

    #[inline(always)]
    pub const fn remaining_time(&self) -> Tick {
        self.remaining_time
    }

    #[inline(always)]
    pub const fn state(&self) -> ProcessState {
        self.state
    }

    #[inline(always)]
    pub const fn start_time(&self) -> Option<Tick> {
        self.start_time
    }

    #[inline(always)]
    pub const fn completion_time(&self) -> Option<Tick> {
        self.completion_time
    }

    /// Check if process is waiting for the CPU
    ///
    /// # Performance
    /// Hot path - evaluated for every record at every decision point
    #[inline(always)]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, ProcessState::Ready)
    }

    #[inline(always)]
    pub const fn is_complete(&self) -> bool {
        matches!(self.state, ProcessState::Complete)
    }

    fn transition(&mut self, next: ProcessState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid transition for {}: {:?} -> {:?}",
            self.pid,
            self.state,
            next
        );
        self.state = next;
    }

    /// Mark the record ready once the clock has reached its arrival
    pub(crate) fn admit(&mut self) {
        self.transition(ProcessState::Ready);
    }

    /// Put the record on the CPU at `now`, recording the first dispatch
    pub(crate) fn dispatch(&mut self, now: Tick) {
        self.transition(ProcessState::Running);
        self.start_time.get_or_insert(now);
    }

    /// Account `slice` units of service ending at `end`
    ///
    /// Returns `true` when the burst is fully served and the record completed.
    pub(crate) fn run_for(&mut self, slice: Tick, end: Tick) -> bool {
        debug_assert!(slice > 0 && slice <= self.remaining_time);
        self.remaining_time -= slice;

        if self.remaining_time > 0 {
            self.transition(ProcessState::Ready);
            return false;
        }

        self.transition(ProcessState::Complete);
        let turnaround = end - self.arrival_time;
        debug_assert!(turnaround >= self.burst_time);
        self.completion_time = Some(end);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
        true
    }

    /// Snapshot of the computed metrics, available once the record is complete
    #[must_use]
    pub fn metrics(&self) -> Option<ProcessMetrics> {
        Some(ProcessMetrics {
            pid: self.pid.clone(),
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            priority: self.priority,
            start_time: self.start_time?,
            completion_time: self.completion_time?,
            waiting_time: self.waiting_time?,
            turnaround_time: self.turnaround_time?,
        })
    }
}

/// Per-process outcome of a completed run
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Option<Priority>,
    pub start_time: Tick,
    pub completion_time: Tick,
    pub waiting_time: Tick,
    pub turnaround_time: Tick,
}

impl ProcessMetrics {
    /// Delay between arrival and first dispatch
    #[inline(always)]
    pub const fn response_time(&self) -> Tick {
        self.start_time - self.arrival_time
    }
}
