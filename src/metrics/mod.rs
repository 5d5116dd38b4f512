/*!
 * Metrics Module
 * Aggregate rollups derived from completed runs
 */

mod summary;

pub use summary::{summarize, Summary};
