/*!
 * Simulator Limits and Defaults
 *
 * Centralized location for default values and safety limits used by the
 * schedulers and the simulation driver.
 */

// =============================================================================
// SCHEDULER DEFAULTS
// =============================================================================

/// Default Round-Robin time quantum (ticks)
pub const DEFAULT_QUANTUM: u64 = 4;

/// Initial capacity reserved for ready queues
/// [PERF] Avoids reallocation for typical classroom workloads
pub const READY_QUEUE_CAPACITY: usize = 64;

// =============================================================================
// SIMULATION LIMITS
// =============================================================================

/// Maximum number of ticks a simulation may run before it is aborted
/// Guards against workloads or policies that never drain the ready queue
pub const DEFAULT_MAX_TICKS: u64 = 1_000_000;

/// Maximum number of processes accepted in a single workload
pub const MAX_WORKLOAD_PROCESSES: usize = 10_000;

// =============================================================================
// ENVIRONMENT OVERRIDES
// =============================================================================

/// Overrides the scheduling policy of a loaded configuration
pub const ENV_POLICY: &str = "SCHED_POLICY";

/// Overrides the Round-Robin quantum of a loaded configuration
pub const ENV_QUANTUM: &str = "SCHED_QUANTUM";

/// Overrides the tick limit of a loaded configuration
pub const ENV_MAX_TICKS: &str = "SCHED_MAX_TICKS";

/// Enables JSON formatted tracing output
pub const ENV_TRACE_JSON: &str = "SCHED_TRACE_JSON";
