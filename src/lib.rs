/*!
 * CPU Scheduling Simulator Library
 * Interchangeable FCFS, Round-Robin, SJF and SRTF schedulers and a tick-driven driver
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::errors::{SchedulerError, SimulationError};
pub use crate::core::types::{Pid, SchedulerResult, SimulationResult, Tick};
pub use monitoring::{init_tracing, Platform, RecordingPlatform, TracingPlatform};
pub use process::{ProcessPhase, ProcessRef, ProcessView, SimProcess};
pub use scheduler::{
    build_scheduler, QuantumBoundary, Scheduler, SchedulerConfig, SchedulerStats,
    SchedulingPolicy, TimeQuantum, TotalTimeOrder,
};
pub use simulation::{
    ProcessReport, ProcessSpec, RunSegment, Scenario, Simulation, SimulationConfig,
    SimulationReport, Workload,
};
