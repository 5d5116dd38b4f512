/*!
 * Environment Configuration
 * Process-wide defaults read from environment variables
 */

use super::ConfigError;

/// Enables JSON log output (`1` or `true`)
pub const ENV_TRACE_JSON: &str = "SCHED_SIM_TRACE_JSON";

/// Default Round Robin quantum when neither the command line nor the workload sets one
pub const ENV_QUANTUM: &str = "SCHED_SIM_QUANTUM";

/// Quantum used when nothing else configures one
pub const DEFAULT_QUANTUM: i64 = 2;

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Emit logs as JSON (default: false)
    pub trace_json: bool,

    /// Round Robin quantum fallback (default: 2)
    pub default_quantum: i64,
}

impl SimConfig {
    /// Create default configuration
    pub fn new() -> Self {
        Self {
            trace_json: false,
            default_quantum: DEFAULT_QUANTUM,
        }
    }

    /// Read configuration from the environment, falling back to defaults for unset variables
    ///
    /// The quantum is only parsed here; its positivity is checked when a run uses it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Ok(value) = std::env::var(ENV_TRACE_JSON) {
            config.trace_json = value == "1" || value.eq_ignore_ascii_case("true");
        }

        if let Ok(value) = std::env::var(ENV_QUANTUM) {
            let quantum: Option<i64> = value.trim().parse().ok();
            config.default_quantum = quantum.ok_or(ConfigError::InvalidEnv {
                var: ENV_QUANTUM,
                value,
            })?;
        }

        Ok(config)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
