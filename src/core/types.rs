/*!
 * Core Types
 * Common types used across the simulator
 */

use super::data_structures::InlineString;

/// Process identifier as supplied by the caller (e.g. `"P1"`)
///
/// Not required to be unique: records are addressed by their input position.
pub type Pid = InlineString;

/// Simulated time in abstract clock units
pub type Tick = u64;

/// Priority level (lower value = higher priority)
pub type Priority = i32;

/// Rank given to a process that was declared without a priority
pub const DEFAULT_PRIORITY: Priority = 0;

/// Common result type for simulator operations
pub type SchedulerResult<T> = Result<T, super::errors::SchedulerError>;
