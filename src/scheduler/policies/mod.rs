/*!
 * Policy Selectors
 * Selection rules for each supported scheduling policy
 */

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub(crate) use fcfs::Fcfs;
pub(crate) use priority::PriorityFirst;
pub(crate) use round_robin::RoundRobin;
pub(crate) use sjf::ShortestJobFirst;
pub(crate) use srtf::ShortestRemainingFirst;

use crate::process::Process;

/// Input positions sorted by arrival time, ties kept in input order
fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    // Stable sort: equal arrivals keep their input order
    order.sort_by_key(|&index| processes[index].arrival_time());
    order
}
