/*!
 * Workloads
 * Process arrival descriptions and scenario files
 */

use super::config::SimulationConfig;
use crate::core::errors::SimulationError;
use crate::core::limits::MAX_WORKLOAD_PROCESSES;
use crate::core::types::{Pid, SimulationResult, Tick};
use crate::process::SimProcess;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// One process to create during the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub name: String,
    #[serde(default)]
    pub arrival: Tick,
    pub bursts: Vec<Tick>,
}

impl ProcessSpec {
    pub fn new(name: impl Into<String>, arrival: Tick, bursts: Vec<Tick>) -> Self {
        Self {
            name: name.into(),
            arrival,
            bursts,
        }
    }
}

/// Set of processes for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    pub fn new(processes: Vec<ProcessSpec>) -> Self {
        Self { processes }
    }

    /// Small mixed workload used when no file is given
    pub fn demo() -> Self {
        Self::new(vec![
            ProcessSpec::new("editor", 0, vec![6, 3]),
            ProcessSpec::new("compiler", 1, vec![8, 2]),
            ProcessSpec::new("shell", 2, vec![3]),
            ProcessSpec::new("daemon", 3, vec![1, 1, 1]),
            ProcessSpec::new("indexer", 5, vec![12]),
        ])
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Instantiate processes, assigning pids in listing order starting at 1
    pub fn spawn(&self) -> SimulationResult<Vec<Arc<SimProcess>>> {
        if self.processes.len() > MAX_WORKLOAD_PROCESSES {
            return Err(SimulationError::TooManyProcesses(self.processes.len()));
        }

        self.processes
            .iter()
            .zip(1..)
            .map(|(spec, pid): (&ProcessSpec, Pid)| {
                SimProcess::new(pid, spec.name.clone(), spec.arrival, spec.bursts.clone())
                    .map(Arc::new)
            })
            .collect()
    }
}

/// Scenario file: optional configuration plus the workload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: SimulationConfig,
    #[serde(flatten)]
    pub workload: Workload,
}

impl Scenario {
    pub fn from_json(json: &str) -> SimulationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SimulationResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessView;
    use crate::scheduler::SchedulingPolicy;

    #[test]
    fn test_spawn_assigns_sequential_pids() {
        let processes = Workload::demo().spawn().unwrap();
        let pids: Vec<Pid> = processes.iter().map(|p| p.pid()).collect();
        assert_eq!(pids, vec![1, 2, 3, 4, 5]);
        assert_eq!(processes[1].name(), "compiler");
        assert_eq!(processes[1].arrival(), 1);
    }

    #[test]
    fn test_spawn_rejects_bad_bursts() {
        let workload = Workload::new(vec![
            ProcessSpec::new("ok", 0, vec![1]),
            ProcessSpec::new("broken", 0, vec![]),
        ]);
        assert_eq!(
            workload.spawn().unwrap_err(),
            SimulationError::EmptyBursts("broken".into())
        );
    }

    #[test]
    fn test_spawn_rejects_overflowing_service_time() {
        let scenario = Scenario::from_json(
            r#"{"processes": [{"name": "A", "bursts": [18446744073709551615, 1]}]}"#,
        )
        .unwrap();
        assert_eq!(
            scenario.workload.spawn().unwrap_err(),
            SimulationError::BurstOverflow("A".into())
        );
    }

    #[test]
    fn test_scenario_parsing() {
        let scenario = Scenario::from_json(
            r#"{
                "config": {"scheduler": {"policy": "sjf"}},
                "processes": [
                    {"name": "A", "bursts": [3]},
                    {"name": "B", "arrival": 2, "bursts": [1, 4]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(scenario.config.scheduler.policy, SchedulingPolicy::Sjf);
        assert_eq!(scenario.workload.len(), 2);
        assert_eq!(scenario.workload.processes[0].arrival, 0);
        assert_eq!(scenario.workload.processes[1].bursts, vec![1, 4]);
    }

    #[test]
    fn test_scenario_without_config_uses_defaults() {
        let scenario =
            Scenario::from_json(r#"{"processes": [{"name": "A", "bursts": [2]}]}"#).unwrap();
        assert_eq!(scenario.config, SimulationConfig::default());
    }

    #[test]
    fn test_missing_scenario_file() {
        let err = Scenario::load("/nonexistent/scenario.json").unwrap_err();
        assert!(matches!(err, SimulationError::Io(_)));
    }
}
