/*!
 * Non-Preemptive Dispatch
 * FCFS and SJF: a process keeps the CPU until its burst or execution completes
 */

use super::queue::{FifoQueue, ReadyQueue, ShortestJobQueue};
use super::stats::{SchedulerCounters, SchedulerStats};
use super::traits::Scheduler;
use super::types::{SchedulingPolicy, TotalTimeOrder};
use crate::core::types::Pid;
use crate::monitoring::Platform;
use crate::process::{ProcessRef, ProcessView};
use std::sync::Arc;
use tracing::{debug, warn};

/// Run-to-completion scheduler parameterized by its ready-queue ordering
///
/// Context switches are counted on admission, on re-admission after a burst
/// completes, and on every dispatch.
pub struct NonPreemptiveScheduler<Q: ReadyQueue> {
    policy: SchedulingPolicy,
    queue: Q,
    platform: Arc<dyn Platform>,
    counters: SchedulerCounters,
}

/// First-come-first-served
pub type FcfsScheduler = NonPreemptiveScheduler<FifoQueue>;

/// Shortest-job-first, non-preemptive
pub type SjfScheduler = NonPreemptiveScheduler<ShortestJobQueue>;

impl FcfsScheduler {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self::with_queue(SchedulingPolicy::Fcfs, FifoQueue::new(), platform)
    }
}

impl SjfScheduler {
    /// SJF with total-time ties broken in ascending order
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self::with_total_order(platform, TotalTimeOrder::Ascending)
    }

    pub fn with_total_order(platform: Arc<dyn Platform>, order: TotalTimeOrder) -> Self {
        Self::with_queue(SchedulingPolicy::Sjf, ShortestJobQueue::new(order), platform)
    }
}

impl<Q: ReadyQueue> NonPreemptiveScheduler<Q> {
    fn with_queue(policy: SchedulingPolicy, queue: Q, platform: Arc<dyn Platform>) -> Self {
        debug!(policy = %policy, "scheduler created");
        Self {
            policy,
            queue,
            platform,
            counters: SchedulerCounters::default(),
        }
    }

    /// Pids in the order they would be dispatched
    pub fn ready_order(&self) -> Vec<Pid> {
        self.queue.dispatch_order()
    }

    /// FCFS narrates "complete", SJF "completed"
    fn completion_word(&self) -> &'static str {
        match self.policy {
            SchedulingPolicy::Fcfs => "complete",
            _ => "completed",
        }
    }

    fn dispatch(&mut self) -> Option<ProcessRef> {
        let next = self.queue.pop()?;
        self.platform.log(&format!("Scheduled: {}", next.name()));
        self.counters.inc_dispatches();
        self.counters.inc_context_switches();
        debug!(policy = %self.policy, pid = next.pid(), "dispatched");
        Some(next)
    }

    fn requeue(&mut self, process: ProcessRef) {
        let pid = process.pid();
        if self.queue.push(process) {
            self.counters.inc_requeues();
            self.counters.inc_context_switches();
        } else {
            warn!(policy = %self.policy, pid, "process already queued, requeue ignored");
        }
    }
}

impl<Q: ReadyQueue> Scheduler for NonPreemptiveScheduler<Q> {
    fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    fn notify_new_process(&mut self, process: ProcessRef) {
        let pid = process.pid();
        if self.queue.push(process) {
            self.counters.inc_admissions();
            self.counters.inc_context_switches();
            debug!(policy = %self.policy, pid, ready = self.queue.len(), "process admitted");
        } else {
            warn!(policy = %self.policy, pid, "duplicate admission ignored");
        }
    }

    fn update(&mut self, cpu: Option<ProcessRef>) -> Option<ProcessRef> {
        let Some(cpu) = cpu else {
            return self.dispatch();
        };

        let done = self.completion_word();
        if cpu.is_execution_complete() {
            self.platform.log(&format!("{} burst {}", cpu.name(), done));
            self.platform.log(&format!("{} execution {}", cpu.name(), done));
            self.counters.inc_completions();
            return self.dispatch();
        }

        if cpu.is_burst_complete() {
            self.platform.log(&format!("{} burst {}", cpu.name(), done));
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
        self.counters.snapshot(self.policy, self.queue.len())
    }
}
