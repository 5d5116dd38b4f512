/*!
 * Scheduler Types
 * Policy selection, quantum configuration, and timeline segments
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, SchedulerResult, Tick};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-Come-First-Served, non-preemptive
    Fcfs,
    /// Shortest-Job-First, non-preemptive
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive SJF)
    Srtf,
    /// Static priority, non-preemptive (lower value runs first)
    Priority,
    /// Round Robin with a fixed time quantum
    RoundRobin,
}

impl Policy {
    /// Every policy, in presentation order
    pub const ALL: [Policy; 5] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::Priority,
        Self::RoundRobin,
    ];

    /// Canonical string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::Priority => "priority",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Whether the policy is driven by a time quantum
    #[inline(always)]
    pub const fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Whether a later arrival may interrupt a running process
    #[inline(always)]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin)
    }
}

impl FromStr for Policy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "sjf_non_preemptive" | "shortest_job_first" => Ok(Self::Sjf),
            "srtf" | "sjf_preemptive" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            "priority" | "prio" => Ok(Self::Priority),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SchedulerError::invalid_configuration(format!(
                "invalid policy '{}'. Valid: fcfs, sjf, srtf, priority, round_robin",
                s
            ))),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round Robin time slice, always strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Tick);

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(ticks: i64) -> SchedulerResult<Self> {
        match Tick::try_from(ticks) {
            Ok(ticks) if ticks > 0 => Ok(Self(ticks)),
            _ => Err(SchedulerError::invalid_configuration(format!(
                "quantum must be > 0, got {}",
                ticks
            ))),
        }
    }

    /// Resolve the quantum argument of a run against the chosen policy
    ///
    /// Round Robin requires one; every other policy rejects one.
    pub fn for_policy(policy: Policy, quantum: Option<i64>) -> SchedulerResult<Option<Self>> {
        match (policy.requires_quantum(), quantum) {
            (true, Some(ticks)) => Self::new(ticks).map(Some),
            (true, None) => Err(SchedulerError::invalid_configuration(format!(
                "{} requires a quantum",
                policy
            ))),
            (false, Some(_)) => Err(SchedulerError::invalid_configuration(format!(
                "{} does not take a quantum",
                policy
            ))),
            (false, None) => Ok(None),
        }
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Tick {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Contiguous interval during which one process exclusively occupies the CPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    pub pid: Pid,
    /// Input position of the owning process
    pub process: usize,
    pub start: Tick,
    pub end: Tick,
}

impl GanttSegment {
    #[inline]
    pub(crate) fn new(pid: Pid, process: usize, start: Tick, end: Tick) -> Self {
        debug_assert!(end > start, "empty segment for {} at {}", pid, start);
        Self {
            pid,
            process,
            start,
            end,
        }
    }

    #[inline(always)]
    pub const fn duration(&self) -> Tick {
        self.end - self.start
    }
}

impl fmt::Display for GanttSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}-{})", self.pid, self.start, self.end)
    }
}

/// Decision handed from a policy selector to the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Dispatch {
    /// Input position of the process to run
    pub index: usize,
    /// Units of service to grant before the next decision
    pub slice: Tick,
}
