/*!
 * Configuration Module
 * Environment defaults and workload files for the command-line front end
 */

mod env;
mod workload;

pub use env::{SimConfig, DEFAULT_QUANTUM, ENV_QUANTUM, ENV_TRACE_JSON};
pub use workload::Workload;

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or workloads
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read workload file {}", .path.display())]
    #[diagnostic(
        code(config::io),
        help("Check that the workload file exists and is readable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed workload: {0}")]
    #[diagnostic(
        code(config::parse),
        help("Expected a JSON object with a `processes` array of pid/arrival_time/burst_time entries.")
    )]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value {value:?} for {var}")]
    #[diagnostic(code(config::env), help("Expected an integer."))]
    InvalidEnv { var: &'static str, value: String },
}
