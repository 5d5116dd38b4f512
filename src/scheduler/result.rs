/*!
 * Simulation Result
 * Immutable snapshot produced once per run
 */

use super::types::{GanttSegment, Policy, TimeQuantum};
use crate::metrics::{summarize, Summary};
use crate::process::ProcessMetrics;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt;

/// Outcome of one simulation run
///
/// Per-process metrics are listed in input order; segments in start order.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    policy: Policy,
    quantum: Option<TimeQuantum>,
    processes: Vec<ProcessMetrics>,
    gantt: Vec<GanttSegment>,
    summary: Summary,
}

impl SimulationResult {
    pub(crate) fn new(
        policy: Policy,
        quantum: Option<TimeQuantum>,
        processes: Vec<ProcessMetrics>,
        gantt: Vec<GanttSegment>,
    ) -> Self {
        let summary = summarize(&processes, &gantt);
        Self {
            policy,
            quantum,
            processes,
            gantt,
            summary,
        }
    }

    /// Zero-valued result of a run over no processes
    pub(crate) fn empty(policy: Policy, quantum: Option<TimeQuantum>) -> Self {
        Self::new(policy, quantum, Vec::new(), Vec::new())
    }

    #[inline(always)]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    #[inline(always)]
    pub fn quantum(&self) -> Option<TimeQuantum> {
        self.quantum
    }

    #[inline(always)]
    pub fn processes(&self) -> &[ProcessMetrics] {
        &self.processes
    }

    #[inline(always)]
    pub fn gantt(&self) -> &[GanttSegment] {
        &self.gantt
    }

    #[inline(always)]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    #[inline]
    pub fn avg_waiting_time(&self) -> f64 {
        self.summary.avg_waiting_time
    }

    #[inline]
    pub fn avg_turnaround_time(&self) -> f64 {
        self.summary.avg_turnaround_time
    }

    /// CPU utilization in percent
    #[inline]
    pub fn cpu_utilization(&self) -> f64 {
        self.summary.cpu_utilization
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.policy)?;
        if let Some(quantum) = self.quantum {
            write!(f, " (quantum={})", quantum.ticks())?;
        }
        if self.policy.is_preemptive() {
            write!(f, " [preemptive]")?;
        }
        writeln!(f)?;

        let chart: Vec<String> = self.gantt.iter().map(ToString::to_string).collect();
        writeln!(f, "  gantt: {}", chart.join(" | "))?;
        write!(
            f,
            "  avg_waiting={:.2} avg_turnaround={:.2} cpu_utilization={:.2}%",
            self.summary.avg_waiting_time,
            self.summary.avg_turnaround_time,
            self.summary.cpu_utilization
        )
    }
}
