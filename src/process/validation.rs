/*!
 * Process Validation
 * Input checks that run before the simulated clock starts
 */

use super::types::{Process, ProcessSpec};
use crate::core::errors::SchedulerError;
use crate::core::types::{Priority, SchedulerResult, Tick};

/// Validate caller specs and build fresh, independently owned run records
///
/// Duplicate pids are accepted; records are identified by position.
pub(crate) fn build_records(specs: &[ProcessSpec]) -> SchedulerResult<Vec<Process>> {
    let records = specs
        .iter()
        .enumerate()
        .map(|(index, spec)| validate_spec(index, spec))
        .collect::<SchedulerResult<Vec<_>>>()?;

    validate_horizon(&records)?;
    Ok(records)
}

/// Every clock value of a run is bounded by the last arrival plus the total burst;
/// reject workloads where that bound leaves the `Tick` range.
fn validate_horizon(records: &[Process]) -> SchedulerResult<()> {
    let last_arrival = records.iter().map(Process::arrival_time).max().unwrap_or(0);

    records
        .iter()
        .enumerate()
        .try_fold(last_arrival, |horizon, (index, record)| {
            horizon.checked_add(record.burst_time()).ok_or_else(|| {
                SchedulerError::invalid_process(
                    index,
                    "schedule length exceeds the simulated clock range",
                )
            })
        })
        .map(|_| ())
}

fn validate_spec(index: usize, spec: &ProcessSpec) -> SchedulerResult<Process> {
    let arrival_time = validate_arrival(index, spec.arrival_time)?;
    let burst_time = validate_burst(index, spec.burst_time)?;
    let priority = spec
        .priority
        .map(|value| validate_priority(index, value))
        .transpose()?;

    Ok(Process::new(
        spec.pid.clone(),
        arrival_time,
        burst_time,
        priority,
    ))
}

fn validate_arrival(index: usize, arrival: i64) -> SchedulerResult<Tick> {
    Tick::try_from(arrival).map_err(|_| {
        SchedulerError::invalid_process(index, format!("arrival_time must be >= 0, got {}", arrival))
    })
}

fn validate_burst(index: usize, burst: i64) -> SchedulerResult<Tick> {
    match Tick::try_from(burst) {
        Ok(burst) if burst > 0 => Ok(burst),
        _ => Err(SchedulerError::invalid_process(
            index,
            format!("burst_time must be > 0, got {}", burst),
        )),
    }
}

fn validate_priority(index: usize, priority: i64) -> SchedulerResult<Priority> {
    Priority::try_from(priority).map_err(|_| {
        SchedulerError::invalid_process(
            index,
            format!("priority {} does not fit a 32-bit integer", priority),
        )
    })
}
