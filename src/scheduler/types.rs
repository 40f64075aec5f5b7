/*!
 * Scheduler Types
 * Policy selection and tuning knobs for the dispatch engines
 */

use crate::core::errors::SchedulerError;
use crate::core::limits::DEFAULT_QUANTUM;
use crate::core::types::{SchedulerResult, Tick};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Scheduling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Round-robin with fixed time quantum
    RoundRobin,
    /// Shortest-job-first, non-preemptive
    Sjf,
    /// Shortest-remaining-time-first, preemptive
    Srtf,
}

impl SchedulingPolicy {
    pub const ALL: [SchedulingPolicy; 4] = [Self::Fcfs, Self::RoundRobin, Self::Sjf, Self::Srtf];

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::RoundRobin => "rr",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
        }
    }

    /// Whether a running process can lose the CPU mid-burst
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin | Self::Srtf)
    }
}

impl FromStr for SchedulingPolicy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "srtf" | "psjf" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            other => Err(SchedulerError::InvalidPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-Robin time slice, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeQuantum(NonZeroU64);

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(ticks: Tick) -> SchedulerResult<Self> {
        NonZeroU64::new(ticks)
            .map(Self)
            .ok_or(SchedulerError::InvalidQuantum(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Tick {
        self.0.get()
    }

    /// Whether `remaining` sits on a quantum boundary
    #[inline]
    pub const fn is_boundary(&self, remaining: Tick) -> bool {
        remaining % self.0.get() == 0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        const DEFAULT: NonZeroU64 = match NonZeroU64::new(DEFAULT_QUANTUM) {
            Some(ticks) => ticks,
            None => panic!("default quantum must be positive"),
        };
        Self(DEFAULT)
    }
}

impl Serialize for TimeQuantum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.ticks())
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = u64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// How Round-Robin treats a burst that has not executed yet
///
/// A fresh burst whose length is a multiple of the quantum already sits on a
/// quantum boundary before it has run a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantumBoundary {
    /// Every boundary preempts, including `remaining == burst`
    #[default]
    Always,
    /// Boundaries preempt only once the burst has executed
    SkipFreshBurst,
}

/// Direction of the total-time tie-break for shortest-job ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalTimeOrder {
    /// Less total work left runs first
    Ascending,
    /// More total work left runs first
    Descending,
}

/// Scheduler construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub policy: SchedulingPolicy,
    /// Only used by Round-Robin
    pub quantum: TimeQuantum,
    pub quantum_boundary: QuantumBoundary,
    pub sjf_total_order: TotalTimeOrder,
    pub srtf_total_order: TotalTimeOrder,
}

impl SchedulerConfig {
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn round_robin(quantum: TimeQuantum) -> Self {
        Self {
            policy: SchedulingPolicy::RoundRobin,
            quantum,
            ..Self::default()
        }
    }

    pub fn with_quantum_boundary(mut self, boundary: QuantumBoundary) -> Self {
        self.quantum_boundary = boundary;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            policy: SchedulingPolicy::Fcfs,
            quantum: TimeQuantum::default(),
            quantum_boundary: QuantumBoundary::Always,
            sjf_total_order: TotalTimeOrder::Ascending,
            srtf_total_order: TotalTimeOrder::Descending,
        }
    }
}
