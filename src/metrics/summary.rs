/*!
 * Summary Rollups
 * Aggregate statistics over a completed run
 */

use crate::core::types::Tick;
use crate::process::ProcessMetrics;
use crate::scheduler::GanttSegment;
use serde::{Deserialize, Serialize};

/// Aggregate statistics of one run
///
/// Every field is zero for an empty run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    /// Busy share of `[min arrival, max completion]`, in percent
    pub cpu_utilization: f64,
    /// Adjacent segments owned by different processes
    pub context_switches: usize,
    /// `max completion - min arrival`
    pub makespan: Tick,
}

/// Compute the aggregate statistics of a completed run
///
/// Reads the per-process metrics and the segments; mutates nothing.
pub fn summarize(processes: &[ProcessMetrics], segments: &[GanttSegment]) -> Summary {
    if processes.is_empty() {
        return Summary::default();
    }

    let makespan = makespan(processes);
    let total_burst: u128 = processes.iter().map(|p| u128::from(p.burst_time)).sum();

    Summary {
        avg_waiting_time: mean(processes.iter().map(|p| p.waiting_time)),
        avg_turnaround_time: mean(processes.iter().map(|p| p.turnaround_time)),
        avg_response_time: mean(processes.iter().map(ProcessMetrics::response_time)),
        cpu_utilization: utilization(total_burst, makespan),
        context_switches: context_switches(segments),
        makespan,
    }
}

/// Mean, summed in `u128`
fn mean(values: impl ExactSizeIterator<Item = Tick>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.map(u128::from).sum::<u128>() as f64 / count as f64
}

fn makespan(processes: &[ProcessMetrics]) -> Tick {
    let first_arrival = processes.iter().map(|p| p.arrival_time).min();
    let last_completion = processes.iter().map(|p| p.completion_time).max();
    match (first_arrival, last_completion) {
        (Some(first), Some(last)) => last.saturating_sub(first),
        _ => 0,
    }
}

/// `100 × busy / span`, clamped to 0 for an empty span
#[inline]
fn utilization(busy: u128, span: Tick) -> f64 {
    if span == 0 {
        return 0.0;
    }
    100.0 * busy as f64 / span as f64
}

fn context_switches(segments: &[GanttSegment]) -> usize {
    segments
        .windows(2)
        .filter(|pair| pair[0].process != pair[1].process)
        .count()
}
