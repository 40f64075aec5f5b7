/*!
 * Round-Robin Dispatch
 * FIFO rotation with quantum-boundary preemption
 */

use super::queue::{FifoQueue, ReadyQueue};
use super::stats::{SchedulerCounters, SchedulerStats};
use super::traits::Scheduler;
use super::types::{QuantumBoundary, SchedulingPolicy, TimeQuantum};
use crate::core::types::Pid;
use crate::monitoring::Platform;
use crate::process::{ProcessRef, ProcessView};
use std::sync::Arc;
use tracing::{debug, warn};

/// Round-Robin scheduler
///
/// A running process loses the CPU when its burst completes, its execution
/// completes, or its remaining burst lands on a multiple of the quantum.
/// Admissions are not counted as context switches; re-admissions, completions
/// and dispatches are.
pub struct RoundRobinScheduler {
    queue: FifoQueue,
    quantum: TimeQuantum,
    boundary: QuantumBoundary,
    platform: Arc<dyn Platform>,
    counters: SchedulerCounters,
}

impl RoundRobinScheduler {
    pub fn new(platform: Arc<dyn Platform>, quantum: TimeQuantum) -> Self {
        Self::with_boundary(platform, quantum, QuantumBoundary::Always)
    }

    pub fn with_boundary(
        platform: Arc<dyn Platform>,
        quantum: TimeQuantum,
        boundary: QuantumBoundary,
    ) -> Self {
        debug!(quantum = quantum.ticks(), ?boundary, "round-robin scheduler created");
        Self {
            queue: FifoQueue::new(),
            quantum,
            boundary,
            platform,
            counters: SchedulerCounters::default(),
        }
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    /// Pids in the order they would be dispatched
    pub fn ready_order(&self) -> Vec<Pid> {
        self.queue.dispatch_order()
    }

    fn quantum_expired(&self, cpu: &ProcessRef) -> bool {
        let remaining = cpu.remaining_burst();
        if remaining == 0 || !self.quantum.is_boundary(remaining) {
            return false;
        }
        match self.boundary {
            QuantumBoundary::Always => true,
            QuantumBoundary::SkipFreshBurst => remaining != cpu.burst_time(),
        }
    }

    fn dispatch(&mut self) -> Option<ProcessRef> {
        let next = self.queue.pop()?;
        self.platform.log(&format!("Scheduled: {}", next.name()));
        self.counters.inc_dispatches();
        self.counters.inc_context_switches();
        debug!(pid = next.pid(), ready = self.queue.len(), "dispatched");
        Some(next)
    }

    fn requeue(&mut self, process: ProcessRef) {
        let pid = process.pid();
        if self.queue.push(process) {
            self.counters.inc_requeues();
            self.counters.inc_context_switches();
        } else {
            warn!(pid, "process already queued, requeue ignored");
        }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::RoundRobin
    }

    fn notify_new_process(&mut self, process: ProcessRef) {
        let pid = process.pid();
        if self.queue.push(process) {
            self.counters.inc_admissions();
            debug!(pid, ready = self.queue.len(), "process admitted");
        } else {
            warn!(pid, "duplicate admission ignored");
        }
    }

    fn update(&mut self, cpu: Option<ProcessRef>) -> Option<ProcessRef> {
        let Some(cpu) = cpu else {
            return self.dispatch();
        };

        if cpu.is_execution_complete() {
            self.platform
                .log(&format!("Process {} execution completed", cpu.name()));
            self.counters.inc_completions();
            self.counters.inc_context_switches();
            return self.dispatch();
        }

        if cpu.is_burst_complete() {
            self.platform
                .log(&format!("Process {} burst completed", cpu.name()));
            self.requeue(cpu);
            return self.dispatch();
        }

        if self.quantum_expired(&cpu) {
            self.platform
                .log(&format!("Time quantum completed for process {}", cpu.name()));
            self.counters.inc_preemptions();
            self.requeue(cpu);
            return self.dispatch();
        }

        Some(cpu)
    }

    fn context_switches(&self) -> u64 {
        self.counters.context_switches()
    }

    fn ready_len(&self) -> usize {
        self.queue.len()
    }

    fn stats(&self) -> SchedulerStats {
        self.counters
            .snapshot(SchedulingPolicy::RoundRobin, self.queue.len())
    }
}
