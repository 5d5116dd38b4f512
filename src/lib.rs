/*!
 * Scheduling Simulator Library
 * Single-CPU scheduling policies, timelines, and metrics exposed as a library
 *
 * Supported policies: FCFS, SJF (non-preemptive), SRTF (preemptive SJF),
 * Priority (non-preemptive), and Round Robin. Every run is deterministic and
 * returns an immutable `SimulationResult`.
 */

pub mod config;
pub mod core;
pub mod metrics;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::{InlineString, Pid, Priority, SchedulerError, SchedulerResult, Tick};
pub use config::{ConfigError, SimConfig, Workload};
pub use metrics::Summary;
pub use monitoring::init_tracing;
pub use process::{ProcessMetrics, ProcessSpec, ProcessState};
pub use scheduler::{compare, run, GanttSegment, Policy, SimulationResult, TimeQuantum};
