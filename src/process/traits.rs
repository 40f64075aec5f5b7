/*!
 * Process Traits
 * Capability contract a scheduler needs from a process
 */

use crate::core::types::{Pid, Tick};
use std::sync::Arc;

/// Shared handle to a process owned by the simulation driver
pub type ProcessRef = Arc<dyn ProcessView>;

/// Read-only view of a process
///
/// Schedulers never mutate processes. The driver advances execution between
/// `update` calls, so every accessor reflects the state at the time of the call.
pub trait ProcessView: Send + Sync {
    /// Stable identity, used for queue membership and preemption checks
    fn pid(&self) -> Pid;

    /// Display name, used for narration only
    fn name(&self) -> &str;

    /// Length of the current CPU burst
    fn burst_time(&self) -> Tick;

    /// Ticks left in the current CPU burst
    fn remaining_burst(&self) -> Tick;

    /// Ticks left across the current and all future bursts
    fn total_time(&self) -> Tick;

    /// Current burst finished and more bursts remain
    fn is_burst_complete(&self) -> bool;

    /// No execution left at all
    fn is_execution_complete(&self) -> bool;
}
