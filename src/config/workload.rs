/*!
 * Workload Files
 * JSON process lists with optional policy and quantum
 */

use super::env::SimConfig;
use super::ConfigError;
use crate::process::ProcessSpec;
use crate::scheduler::Policy;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::path::Path;

/// Process set plus the run parameters stored alongside it
///
/// ```json
/// {
///   "policy": "round_robin",
///   "quantum": 3,
///   "processes": [
///     { "pid": "P1", "arrival_time": 0, "burst_time": 8 },
///     { "pid": "P2", "arrival": 1, "burst": 4, "priority": 1 }
///   ]
/// }
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    #[serde(default)]
    pub policy: Option<Policy>,
    #[serde(default)]
    pub quantum: Option<i64>,
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Built-in three-process workload used when no file is given
    pub fn demo() -> Self {
        Self {
            policy: None,
            quantum: None,
            processes: vec![
                ProcessSpec::new("P1", 0, 8),
                ProcessSpec::new("P2", 1, 4),
                ProcessSpec::new("P3", 2, 2),
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Policy for a single run: override, then workload, then FCFS
    pub fn resolve_policy(&self, policy: Option<Policy>) -> Policy {
        policy.or(self.policy).unwrap_or(Policy::Fcfs)
    }

    /// Quantum for a single run of `policy`
    ///
    /// An explicit value (override, then workload) is passed through untouched so
    /// that a quantum given to a non-Round-Robin policy is still reported. The
    /// environment default only fills in for Round Robin.
    pub fn resolve_quantum(
        &self,
        policy: Policy,
        quantum: Option<i64>,
        config: &SimConfig,
    ) -> Option<i64> {
        quantum
            .or(self.quantum)
            .or_else(|| policy.requires_quantum().then_some(config.default_quantum))
    }

    /// Quantum for a comparison over every policy
    pub fn comparison_quantum(&self, quantum: Option<i64>, config: &SimConfig) -> i64 {
        quantum.or(self.quantum).unwrap_or(config.default_quantum)
    }
}
