/*!
 * Simulation Driver
 * Tick loop that feeds arrivals to a scheduler and executes its choices
 */

use super::config::SimulationConfig;
use super::report::{record_tick, ProcessReport, RunSegment, SimulationReport};
use super::workload::{Scenario, Workload};
use crate::core::errors::SimulationError;
use crate::core::types::{Pid, SimulationResult, Tick};
use crate::monitoring::{span_simulation, Platform};
use crate::process::{ProcessRef, ProcessView, SimProcess};
use crate::scheduler::{build_scheduler, Scheduler, SchedulingPolicy};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One simulation run
///
/// Each tick admits every process whose arrival has been reached, records
/// completion of the process on the CPU, asks the scheduler for the next
/// occupant and executes it for one tick.
pub struct Simulation {
    config: SimulationConfig,
    scheduler: Box<dyn Scheduler>,
    processes: HashMap<Pid, Arc<SimProcess>>,
    pending: VecDeque<Arc<SimProcess>>,
}

impl Simulation {
    /// Build the configured scheduler and spawn the workload
    pub fn new(
        config: SimulationConfig,
        workload: &Workload,
        platform: Arc<dyn Platform>,
    ) -> SimulationResult<Self> {
        let scheduler = build_scheduler(&config.scheduler, platform);
        Ok(Self::with_scheduler(config, workload.spawn()?, scheduler))
    }

    pub fn from_scenario(scenario: &Scenario, platform: Arc<dyn Platform>) -> SimulationResult<Self> {
        Self::new(scenario.config, &scenario.workload, platform)
    }

    /// Drive an already constructed scheduler over `processes`
    pub fn with_scheduler(
        config: SimulationConfig,
        processes: Vec<Arc<SimProcess>>,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        let mut pending: Vec<Arc<SimProcess>> = processes.clone();
        pending.sort_by_key(|p| (p.arrival(), p.pid()));

        Self {
            config,
            scheduler,
            processes: processes.into_iter().map(|p| (p.pid(), p)).collect(),
            pending: pending.into(),
        }
    }

    pub fn policy(&self) -> SchedulingPolicy {
        self.scheduler.policy()
    }

    /// Run until every process has completed
    pub fn run(mut self) -> SimulationResult<SimulationReport> {
        let policy = self.scheduler.policy();
        let span = span_simulation(policy.as_str(), self.processes.len());
        let _guard = span.enter();

        let total = self.processes.len();
        let mut finished = 0usize;
        let mut tick: Tick = 0;
        let mut idle_ticks: Tick = 0;
        let mut timeline: Vec<RunSegment> = Vec::new();
        let mut cpu: Option<ProcessRef> = None;

        loop {
            self.admit_arrivals(tick);

            if let Some(current) = &cpu {
                if current.is_execution_complete() && self.record_completion(current.pid(), tick) {
                    finished += 1;
                }
            }

            cpu = self.scheduler.update(cpu.take());

            if finished == total && cpu.is_none() && self.pending.is_empty() {
                break;
            }

            if tick >= self.config.max_ticks {
                warn!(tick, unfinished = total - finished, "tick limit reached");
                return Err(SimulationError::TickLimitExceeded {
                    limit: self.config.max_ticks,
                    unfinished: total - finished,
                });
            }

            let running = cpu.as_ref().and_then(|c| self.processes.get(&c.pid()));
            match running {
                Some(process) => {
                    process.execute_tick();
                    record_tick(&mut timeline, Some(process.pid()), tick);
                }
                None => {
                    if let Some(unknown) = &cpu {
                        warn!(pid = unknown.pid(), "scheduler returned an unknown process");
                    }
                    idle_ticks += 1;
                    record_tick(&mut timeline, None, tick);
                }
            }

            tick += 1;
        }

        let mut processes: Vec<ProcessReport> = self
            .processes
            .values()
            .filter_map(|p| ProcessReport::from_process(p))
            .collect();
        processes.sort_by_key(|p| p.pid);

        let stats = self.scheduler.stats();
        info!(
            total_ticks = tick,
            idle_ticks,
            context_switches = stats.context_switches,
            "simulation complete"
        );

        Ok(SimulationReport {
            policy,
            quantum: (policy == SchedulingPolicy::RoundRobin)
                .then(|| self.config.scheduler.quantum.ticks()),
            total_ticks: tick,
            idle_ticks,
            context_switches: stats.context_switches,
            stats,
            processes,
            timeline,
        })
    }

    fn admit_arrivals(&mut self, tick: Tick) {
        while self.pending.front().map_or(false, |p| p.arrival() <= tick) {
            if let Some(process) = self.pending.pop_front() {
                debug!(pid = process.pid(), tick, "arrival");
                self.scheduler.notify_new_process(process);
            }
        }
    }

    /// Returns true the first time completion is recorded for `pid`
    fn record_completion(&self, pid: Pid, tick: Tick) -> bool {
        match self.processes.get(&pid) {
            Some(process) if process.finished_at().is_none() => {
                process.mark_finished(tick);
                debug!(pid, tick, "process finished");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::RecordingPlatform;
    use crate::scheduler::SchedulerConfig;
    use crate::simulation::ProcessSpec;

    fn run(policy: SchedulingPolicy, specs: Vec<ProcessSpec>) -> SimulationReport {
        let config = SimulationConfig::new(SchedulerConfig::new(policy));
        Simulation::new(config, &Workload::new(specs), Arc::new(RecordingPlatform::new()))
            .unwrap()
            .run()
            .unwrap()
    }

    #[test]
    fn test_fcfs_run() {
        let report = run(
            SchedulingPolicy::Fcfs,
            vec![
                ProcessSpec::new("A", 0, vec![3]),
                ProcessSpec::new("B", 0, vec![2]),
            ],
        );
        assert_eq!(report.total_ticks, 5);
        assert_eq!(report.idle_ticks, 0);
        assert_eq!(report.context_switches, 4);
        assert_eq!(report.process(1).map(|p| p.turnaround), Some(3));
        assert_eq!(report.process(2).map(|p| p.waiting), Some(3));
        assert_eq!(report.quantum, None);
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let report = run(SchedulingPolicy::Fcfs, vec![ProcessSpec::new("late", 3, vec![2])]);
        assert_eq!(report.total_ticks, 5);
        assert_eq!(report.idle_ticks, 3);
        assert_eq!(
            report.timeline,
            vec![
                RunSegment { pid: None, start: 0, end: 3 },
                RunSegment { pid: Some(1), start: 3, end: 5 },
            ]
        );
        assert_eq!(report.process(1).map(|p| p.waiting), Some(0));
    }

    #[test]
    fn test_empty_workload() {
        let report = run(SchedulingPolicy::Srtf, Vec::new());
        assert_eq!(report.total_ticks, 0);
        assert!(report.processes.is_empty());
        assert_eq!(report.context_switches, 0);
    }

    #[test]
    fn test_tick_limit() {
        let config = SimulationConfig::default().with_max_ticks(5);
        let workload = Workload::new(vec![ProcessSpec::new("A", 0, vec![10])]);
        let err = Simulation::new(config, &workload, Arc::new(RecordingPlatform::new()))
            .unwrap()
            .run()
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::TickLimitExceeded {
                limit: 5,
                unfinished: 1
            }
        );
    }

    #[test]
    fn test_quantum_reported_for_round_robin() {
        let report = run(SchedulingPolicy::RoundRobin, vec![ProcessSpec::new("A", 0, vec![2])]);
        assert_eq!(report.quantum, Some(4));
    }
}
