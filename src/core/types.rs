/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated time, measured in scheduler ticks
pub type Tick = u64;

/// Common result type for scheduler construction and configuration
pub type SchedulerResult<T> = Result<T, super::errors::SchedulerError>;

/// Common result type for simulation runs
pub type SimulationResult<T> = Result<T, super::errors::SimulationError>;
