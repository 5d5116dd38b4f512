/*!
 * Process Module
 * Process records, lifecycle states, and input validation
 */

pub mod types;
pub(crate) mod validation;

pub use types::{Process, ProcessMetrics, ProcessSpec, ProcessState};
