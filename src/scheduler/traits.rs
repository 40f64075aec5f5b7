/*!
 * Scheduler Traits
 * Dispatch contract shared by every scheduling policy
 */

use super::stats::SchedulerStats;
use super::types::SchedulingPolicy;
use crate::process::ProcessRef;

/// Single-CPU dispatch engine
///
/// The driver calls [`Scheduler::update`] exactly once per tick with the
/// process that occupied the CPU during the previous tick.
pub trait Scheduler: Send {
    /// Policy implemented by this scheduler
    fn policy(&self) -> SchedulingPolicy;

    /// Admit a process that just entered the ready state
    ///
    /// Never fails. Admitting a process that is already queued is ignored.
    fn notify_new_process(&mut self, process: ProcessRef);

    /// Decide which process occupies the CPU for the next tick
    ///
    /// Returns `None` when nothing is ready.
    fn update(&mut self, cpu: Option<ProcessRef>) -> Option<ProcessRef>;

    /// Cumulative context switches counted by this instance
    fn context_switches(&self) -> u64;

    /// Number of processes waiting in the ready queue
    fn ready_len(&self) -> usize;

    /// Snapshot of all counters
    fn stats(&self) -> SchedulerStats;
}
