/*!
 * Simulation Configuration
 * Serde-backed settings with environment overrides
 */

use crate::core::errors::{SchedulerError, SimulationError};
use crate::core::limits::{DEFAULT_MAX_TICKS, ENV_MAX_TICKS, ENV_POLICY, ENV_QUANTUM};
use crate::core::types::{SimulationResult, Tick};
use crate::scheduler::{SchedulerConfig, TimeQuantum};
use serde::{Deserialize, Serialize};

/// Settings for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub scheduler: SchedulerConfig,
    /// Abort the run after this many ticks
    pub max_ticks: Tick,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scheduler: SchedulerConfig::default(),
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

impl SimulationConfig {
    pub fn new(scheduler: SchedulerConfig) -> Self {
        Self {
            scheduler,
            ..Self::default()
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: Tick) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Parse from a JSON document
    pub fn from_json(json: &str) -> SimulationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `SCHED_POLICY`, `SCHED_QUANTUM` and `SCHED_MAX_TICKS`
    pub fn with_env_overrides(self) -> SimulationResult<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(mut self, lookup: F) -> SimulationResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup(ENV_POLICY) {
            self.scheduler.policy = policy.parse()?;
        }

        if let Some(quantum) = lookup(ENV_QUANTUM) {
            let ticks = parse_ticks(ENV_QUANTUM, &quantum)?;
            self.scheduler.quantum = TimeQuantum::new(ticks)?;
        }

        if let Some(max_ticks) = lookup(ENV_MAX_TICKS) {
            self.max_ticks = parse_ticks(ENV_MAX_TICKS, &max_ticks)?;
        }

        Ok(self)
    }
}

fn parse_ticks(key: &str, value: &str) -> Result<Tick, SimulationError> {
    value.trim().parse().map_err(|_| {
        SchedulerError::InvalidConfiguration(format!("{}={} is not a tick count", key, value))
            .into()
    })
}
