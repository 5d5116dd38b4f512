/*!
 * Scheduler Module
 * Simulation entry points and policy dispatch
 */

mod entry;
mod policies;
pub mod result;
mod timeline;
mod traits;
pub mod types;

pub use result::SimulationResult;
pub use types::{GanttSegment, Policy, TimeQuantum};

use crate::core::errors::SchedulerError;
use crate::core::types::SchedulerResult;
use crate::process::validation::build_records;
use crate::process::{Process, ProcessSpec};
use policies::{Fcfs, PriorityFirst, RoundRobin, ShortestJobFirst, ShortestRemainingFirst};
use timeline::Timeline;
use tracing::{info, instrument};
use traits::Selector;

/// Simulate `policy` over `processes`
///
/// `quantum` is required for Round Robin and rejected for every other policy.
/// The specs are only read: the run builds its own records, so the same slice
/// can be passed to any number of runs.
///
/// # Errors
/// - `InvalidConfiguration` for a missing, non-positive, or unexpected quantum
/// - `InvalidProcess` for a negative arrival, non-positive burst, or out-of-range priority
///
/// Empty input is not an error and yields a zero-valued result.
///
/// # Examples
///
/// ```
/// use sched_sim::{run, Policy, ProcessSpec};
///
/// let processes = [
///     ProcessSpec::new("P1", 0, 8),
///     ProcessSpec::new("P2", 1, 4),
///     ProcessSpec::new("P3", 2, 2),
/// ];
/// let result = run(Policy::Fcfs, &processes, None).unwrap();
/// assert_eq!(result.gantt().len(), 3);
/// assert_eq!(result.cpu_utilization(), 100.0);
/// ```
#[instrument(skip(processes), fields(count = processes.len()))]
pub fn run(
    policy: Policy,
    processes: &[ProcessSpec],
    quantum: Option<i64>,
) -> SchedulerResult<SimulationResult> {
    let quantum = TimeQuantum::for_policy(policy, quantum)?;
    let records = build_records(processes)?;

    if records.is_empty() {
        info!(%policy, "empty workload, nothing to schedule");
        return Ok(SimulationResult::empty(policy, quantum));
    }

    let mut selector = selector_for(policy, quantum, &records)?;
    let (records, segments) = Timeline::new(records).drive(selector.as_mut());

    let metrics = records.iter().filter_map(Process::metrics).collect();
    let result = SimulationResult::new(policy, quantum, metrics, segments);

    info!(
        %policy,
        preemptive = policy.is_preemptive(),
        segments = result.gantt().len(),
        avg_waiting = result.avg_waiting_time(),
        avg_turnaround = result.avg_turnaround_time(),
        cpu_utilization = result.cpu_utilization(),
        "simulation complete"
    );

    Ok(result)
}

/// Simulate every policy over the same input
///
/// Each policy gets an independent run; `quantum` is passed to Round Robin only.
/// Results follow `Policy::ALL` order.
#[instrument(skip(processes), fields(count = processes.len()))]
pub fn compare(processes: &[ProcessSpec], quantum: i64) -> SchedulerResult<Vec<SimulationResult>> {
    Policy::ALL
        .iter()
        .map(|&policy| {
            let quantum = policy.requires_quantum().then_some(quantum);
            run(policy, processes, quantum)
        })
        .collect()
}

fn selector_for(
    policy: Policy,
    quantum: Option<TimeQuantum>,
    records: &[Process],
) -> SchedulerResult<Box<dyn Selector>> {
    let selector: Box<dyn Selector> = match policy {
        Policy::Fcfs => Box::new(Fcfs::new(records)),
        Policy::Sjf => Box::new(ShortestJobFirst),
        Policy::Srtf => Box::new(ShortestRemainingFirst),
        Policy::Priority => Box::new(PriorityFirst),
        Policy::RoundRobin => {
            let quantum = quantum.ok_or_else(|| {
                SchedulerError::invalid_configuration("round_robin requires a quantum")
            })?;
            Box::new(RoundRobin::new(records, quantum))
        }
    };
    Ok(selector)
}
