/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler construction and configuration errors
///
/// Dispatch itself never fails: an empty ready queue yields an idle CPU.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::invalid_policy),
        help("Use fcfs, rr, sjf or srtf.")
    )]
    InvalidPolicy(String),

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round-Robin requires a quantum of at least one tick.")
    )]
    InvalidQuantum(u64),

    #[error("Invalid scheduler configuration: {0}")]
    #[diagnostic(
        code(scheduler::invalid_configuration),
        help("Review the scheduler section of the simulation configuration.")
    )]
    InvalidConfiguration(String),
}

/// Simulation driver errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Process '{0}' has no CPU bursts")]
    #[diagnostic(
        code(simulation::empty_bursts),
        help("Every process needs at least one CPU burst.")
    )]
    EmptyBursts(String),

    #[error("Process '{0}' has a zero-length CPU burst")]
    #[diagnostic(
        code(simulation::zero_burst),
        help("Burst lengths are measured in ticks and must be positive.")
    )]
    ZeroBurst(String),

    #[error("Process '{0}' needs more CPU time than a tick counter can hold")]
    #[diagnostic(
        code(simulation::burst_overflow),
        help("The sum of a process's bursts must fit in an unsigned 64-bit tick count.")
    )]
    BurstOverflow(String),

    #[error("Workload has {0} processes")]
    #[diagnostic(
        code(simulation::too_many_processes),
        help("Split the workload into smaller runs.")
    )]
    TooManyProcesses(usize),

    #[error("Simulation exceeded {limit} ticks with {unfinished} unfinished processes")]
    #[diagnostic(
        code(simulation::tick_limit_exceeded),
        help("Raise SCHED_MAX_TICKS or check the workload for very long bursts.")
    )]
    TickLimitExceeded { limit: u64, unfinished: usize },

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Failed to parse workload: {0}")]
    #[diagnostic(
        code(simulation::parse_error),
        help("Workload and configuration files are JSON documents.")
    )]
    Parse(String),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(simulation::io_error),
        help("Check that the workload file exists and is readable.")
    )]
    Io(String),
}

// Implement conversion from std::io::Error
impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        SimulationError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        SimulationError::Parse(err.to_string())
    }
}
