/*!
 * Shortest-Remaining-Time-First Dispatch
 * Shortest-job ordering re-evaluated on every tick
 */

use super::queue::{ReadyQueue, ShortestJobQueue};
use super::stats::{SchedulerCounters, SchedulerStats};
use super::traits::Scheduler;
use super::types::{SchedulingPolicy, TotalTimeOrder};
use crate::core::types::Pid;
use crate::monitoring::Platform;
use crate::process::{ProcessRef, ProcessView};
use std::sync::Arc;
use tracing::{debug, warn};

/// Preemptive shortest-job scheduler
///
/// While a process is mid-burst it competes with the head of the ready queue
/// on every tick. A strictly shorter head takes the CPU; ties keep the running
/// process. A preemption counts two context switches: one for removing the
/// running process and one for dispatching its replacement.
pub struct SrtfScheduler {
    queue: ShortestJobQueue,
    platform: Arc<dyn Platform>,
    counters: SchedulerCounters,
}

impl SrtfScheduler {
    /// SRTF with total-time ties broken in descending order
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self::with_total_order(platform, TotalTimeOrder::Descending)
    }

    pub fn with_total_order(platform: Arc<dyn Platform>, order: TotalTimeOrder) -> Self {
        debug!(?order, "srtf scheduler created");
        Self {
            queue: ShortestJobQueue::new(order),
            platform,
            counters: SchedulerCounters::default(),
        }
    }

    /// Pids in the order they would be dispatched
    pub fn ready_order(&self) -> Vec<Pid> {
        self.queue.dispatch_order()
    }

    fn dispatch(&mut self) -> Option<ProcessRef> {
        let next = self.queue.pop()?;
        self.platform.log(&format!("Scheduled: {}", next.name()));
        self.counters.inc_dispatches();
        self.counters.inc_context_switches();
        debug!(pid = next.pid(), ready = self.queue.len(), "dispatched");
        Some(next)
    }

    fn requeue(&mut self, process: ProcessRef) -> bool {
        let pid = process.pid();
        let inserted = self.queue.push(process);
        if !inserted {
            warn!(pid, "process already queued, requeue ignored");
        }
        inserted
    }

    fn preempt(&mut self, running: ProcessRef) -> Option<ProcessRef> {
        // Take the head before the running process rejoins the queue
        let next = self.queue.pop()?;

        self.platform
            .log(&format!("{} preemptively removed", running.name()));
        self.counters.inc_preemptions();
        self.counters.inc_context_switches();
        debug!(preempted = running.pid(), by = next.pid(), "preemption");
        self.requeue(running);

        self.platform.log(&format!("Scheduled: {}", next.name()));
        self.counters.inc_dispatches();
        self.counters.inc_context_switches();
        Some(next)
    }
}

impl Scheduler for SrtfScheduler {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Srtf
    }

    fn notify_new_process(&mut self, process: ProcessRef) {
        let pid = process.pid();
        if self.queue.push(process) {
            self.counters.inc_admissions();
            self.counters.inc_context_switches();
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
            self.platform.log(&format!("{} burst completed", cpu.name()));
            self.platform.log(&format!("{} execution completed", cpu.name()));
            self.counters.inc_completions();
            return self.dispatch();
        }

        if cpu.is_burst_complete() {
            self.platform.log(&format!("{} burst completed", cpu.name()));
            if self.requeue(cpu) {
                self.counters.inc_requeues();
                self.counters.inc_context_switches();
            }
            return self.dispatch();
        }

        if self.queue.head_preempts(&cpu) {
            return self.preempt(cpu);
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
        self.counters.snapshot(SchedulingPolicy::Srtf, self.queue.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Tick;
    use crate::monitoring::RecordingPlatform;
    use crate::process::SimProcess;

    fn proc(pid: u32, name: &str, bursts: Vec<Tick>) -> Arc<SimProcess> {
        Arc::new(SimProcess::new(pid, name, 0, bursts).unwrap())
    }

    #[test]
    fn test_shorter_arrival_preempts_running_process() {
        let platform = Arc::new(RecordingPlatform::new());
        let mut scheduler = SrtfScheduler::new(platform.clone());
        let long = proc(1, "long", vec![10]);
        scheduler.notify_new_process(long.clone());

        let running = scheduler.update(None);
        long.execute_tick();
        let running = scheduler.update(running);
        assert_eq!(running.as_ref().map(|p| p.pid()), Some(1));

        let short = proc(2, "short", vec![1]);
        scheduler.notify_new_process(short.clone());
        let before = scheduler.context_switches();

        let running = scheduler.update(running);
        assert_eq!(running.as_ref().map(|p| p.pid()), Some(2));
        assert_eq!(scheduler.context_switches(), before + 2);
        assert_eq!(scheduler.ready_order(), vec![1]);
        assert_eq!(
            platform.drain()[1..],
            ["long preemptively removed", "Scheduled: short"]
        );

        // The preempted process resumes once the short one finishes
        short.execute_tick();
        let running = scheduler.update(running);
        assert_eq!(running.as_ref().map(|p| p.pid()), Some(1));
        assert_eq!(long.remaining_burst(), 9);
    }

    #[test]
    fn test_equal_key_keeps_running_process() {
        let platform = Arc::new(RecordingPlatform::new());
        let mut scheduler = SrtfScheduler::new(platform.clone());
        let a = proc(1, "A", vec![3]);
        scheduler.notify_new_process(a.clone());
        let running = scheduler.update(None);

        // Same burst length, but A has already made progress
        a.execute_tick();
        scheduler.notify_new_process(proc(2, "B", vec![3]));
        let running = scheduler.update(running);
        assert_eq!(running.as_ref().map(|p| p.pid()), Some(1));
        assert_eq!(scheduler.stats().preemptions, 0);
    }

    #[test]
    fn test_idempotent_update_without_contender() {
        let platform = Arc::new(RecordingPlatform::new());
        let mut scheduler = SrtfScheduler::new(platform.clone());
        let a = proc(1, "A", vec![6]);
        let b = proc(2, "B", vec![9]);
        scheduler.notify_new_process(a.clone());
        scheduler.notify_new_process(b.clone());
        let running = scheduler.update(None);
        a.execute_tick();

        let switches = scheduler.context_switches();
        let order = scheduler.ready_order();
        for _ in 0..4 {
            let again = scheduler.update(running.clone());
            assert_eq!(again.as_ref().map(|p| p.pid()), Some(1));
        }
        assert_eq!(scheduler.context_switches(), switches);
        assert_eq!(scheduler.ready_order(), order);
    }

    #[test]
    fn test_burst_complete_is_requeued_and_execution_complete_dropped() {
        let platform = Arc::new(RecordingPlatform::new());
        let mut scheduler = SrtfScheduler::new(platform.clone());
        let a = proc(1, "A", vec![1, 2]);
        let b = proc(2, "B", vec![2]);
        scheduler.notify_new_process(a.clone());
        scheduler.notify_new_process(b.clone());

        let running = scheduler.update(None);
        assert_eq!(running.as_ref().map(|p| p.pid()), Some(1));
        a.execute_tick();

        // A is re-admitted keyed by its finished burst of 1, so it wins again
        let running = scheduler.update(running);
        assert_eq!(running.as_ref().map(|p| p.pid()), Some(1));
        assert_eq!(scheduler.stats().requeues, 1);

        a.execute_tick();
        a.execute_tick();
        assert!(a.is_execution_complete());
        let running = scheduler.update(running);
        assert_eq!(running.as_ref().map(|p| p.pid()), Some(2));
        assert_eq!(scheduler.ready_len(), 0);
        assert_eq!(scheduler.stats().completions, 1);
    }

    #[test]
    fn test_requeued_process_keyed_by_finished_burst() {
        let platform = Arc::new(RecordingPlatform::new());
        let mut scheduler = SrtfScheduler::new(platform.clone());
        let a = proc(1, "A", vec![1, 20]);
        scheduler.notify_new_process(a.clone());
        scheduler.notify_new_process(proc(2, "B", vec![5]));

        let running = scheduler.update(None);
        a.execute_tick();

        // Keyed by its finished burst of 1, A beats B for the next dispatch
        let running = scheduler.update(running);
        assert_eq!(running.as_ref().map(|p| p.pid()), Some(1));
        a.execute_tick();

        // Its live key now reflects the 20-tick burst, so B takes over
        let running = scheduler.update(running);
        assert_eq!(running.as_ref().map(|p| p.pid()), Some(2));
        assert_eq!(
            platform.lines(),
            vec![
                "Scheduled: A",
                "A burst completed",
                "Scheduled: A",
                "A preemptively removed",
                "Scheduled: B",
            ]
        );
        assert_eq!(scheduler.context_switches(), 7);
        assert_eq!(scheduler.stats().preemptions, 1);
    }

    #[test]
    fn test_default_total_order_prefers_more_remaining_work() {
        let platform = Arc::new(RecordingPlatform::new());
        let mut scheduler = SrtfScheduler::new(platform);
        scheduler.notify_new_process(proc(1, "light", vec![2]));
        scheduler.notify_new_process(proc(2, "heavy", vec![2, 8]));
        assert_eq!(scheduler.ready_order(), vec![2, 1]);
    }
}
