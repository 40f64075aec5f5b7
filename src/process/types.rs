/*!
 * Simulated Process
 * Burst-driven process model advanced by the simulation driver
 */

use super::traits::ProcessView;
use crate::core::errors::SimulationError;
use crate::core::types::{Pid, SimulationResult, Tick};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Observable phase of a process between two ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessPhase {
    /// Current burst still has work left
    Running,
    /// Current burst finished, more bursts remain
    BurstComplete,
    /// Nothing left to execute
    ExecutionComplete,
}

#[derive(Debug)]
struct ExecutionState {
    burst_index: usize,
    remaining_burst: Tick,
    total_time: Tick,
    finished_at: Option<Tick>,
}

/// Process with a fixed sequence of CPU bursts
///
/// Execution state sits behind a lock so schedulers can hold shared handles
/// while the driver executes ticks.
#[derive(Debug)]
pub struct SimProcess {
    pid: Pid,
    name: String,
    arrival: Tick,
    bursts: Vec<Tick>,
    service_time: Tick,
    state: RwLock<ExecutionState>,
}

impl SimProcess {
    /// Create a process that becomes ready at `arrival`
    pub fn new(
        pid: Pid,
        name: impl Into<String>,
        arrival: Tick,
        bursts: Vec<Tick>,
    ) -> SimulationResult<Self> {
        let name = name.into();
        let first = match bursts.first() {
            Some(&first) => first,
            None => return Err(SimulationError::EmptyBursts(name)),
        };
        if bursts.iter().any(|&burst| burst == 0) {
            return Err(SimulationError::ZeroBurst(name));
        }
        let total_time = match bursts
            .iter()
            .try_fold(0 as Tick, |acc, &burst| acc.checked_add(burst))
        {
            Some(total) => total,
            None => return Err(SimulationError::BurstOverflow(name)),
        };

        Ok(Self {
            pid,
            name,
            arrival,
            bursts,
            service_time: total_time,
            state: RwLock::new(ExecutionState {
                burst_index: 0,
                remaining_burst: first,
                total_time,
                finished_at: None,
            }),
        })
    }

    /// Tick at which the process enters the ready state
    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    /// All CPU bursts, in execution order
    pub fn bursts(&self) -> &[Tick] {
        &self.bursts
    }

    /// Total CPU time the process needs
    pub fn service_time(&self) -> Tick {
        self.service_time
    }

    /// Current phase
    pub fn phase(&self) -> ProcessPhase {
        let state = self.state.read();
        Self::phase_of(&state, self.bursts.len())
    }

    fn phase_of(state: &ExecutionState, burst_count: usize) -> ProcessPhase {
        if state.total_time == 0 {
            ProcessPhase::ExecutionComplete
        } else if state.remaining_burst == 0 && state.burst_index + 1 < burst_count {
            ProcessPhase::BurstComplete
        } else {
            ProcessPhase::Running
        }
    }

    /// Execute one tick on the CPU
    ///
    /// A process whose previous burst completed starts its next burst first.
    /// Executing a finished process is a no-op.
    pub fn execute_tick(&self) -> ProcessPhase {
        let mut state = self.state.write();
        if state.total_time == 0 {
            return ProcessPhase::ExecutionComplete;
        }

        if state.remaining_burst == 0 {
            state.burst_index += 1;
            state.remaining_burst = self.bursts[state.burst_index];
        }

        state.remaining_burst -= 1;
        state.total_time -= 1;
        Self::phase_of(&state, self.bursts.len())
    }

    /// Record the tick at which the driver observed completion
    pub fn mark_finished(&self, tick: Tick) {
        let mut state = self.state.write();
        if state.finished_at.is_none() {
            state.finished_at = Some(tick);
        }
    }

    /// Completion tick, once recorded
    pub fn finished_at(&self) -> Option<Tick> {
        self.state.read().finished_at
    }
}

impl ProcessView for SimProcess {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn burst_time(&self) -> Tick {
        self.bursts[self.state.read().burst_index]
    }

    fn remaining_burst(&self) -> Tick {
        self.state.read().remaining_burst
    }

    fn total_time(&self) -> Tick {
        self.state.read().total_time
    }

    fn is_burst_complete(&self) -> bool {
        self.phase() == ProcessPhase::BurstComplete
    }

    fn is_execution_complete(&self) -> bool {
        self.phase() == ProcessPhase::ExecutionComplete
    }
}
