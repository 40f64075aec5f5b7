/*!
 * Simulation Reports
 * Per-process timing and run-wide totals
 */

use crate::core::types::{Pid, Tick};
use crate::process::{ProcessView, SimProcess};
use crate::scheduler::{SchedulerStats, SchedulingPolicy};
use serde::{Deserialize, Serialize};

/// Timing for one finished process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub pid: Pid,
    pub name: String,
    pub arrival: Tick,
    pub service_time: Tick,
    pub finished_at: Tick,
    /// Completion minus arrival
    pub turnaround: Tick,
    /// Turnaround minus service time
    pub waiting: Tick,
}

impl ProcessReport {
    /// Build from a process whose completion has been recorded
    pub fn from_process(process: &SimProcess) -> Option<Self> {
        let finished_at = process.finished_at()?;
        let turnaround = finished_at.saturating_sub(process.arrival());
        let service_time = process.service_time();
        Some(Self {
            pid: process.pid(),
            name: process.name().to_string(),
            arrival: process.arrival(),
            service_time,
            finished_at,
            turnaround,
            waiting: turnaround.saturating_sub(service_time),
        })
    }
}

/// Contiguous stretch of ticks with the same occupant; `None` means idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSegment {
    pub pid: Option<Pid>,
    pub start: Tick,
    pub end: Tick,
}

impl RunSegment {
    pub fn len(&self) -> Tick {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Append a tick to the timeline, extending the last segment when possible
pub(super) fn record_tick(timeline: &mut Vec<RunSegment>, pid: Option<Pid>, tick: Tick) {
    match timeline.last_mut() {
        Some(last) if last.pid == pid && last.end == tick => last.end = tick + 1,
        _ => timeline.push(RunSegment {
            pid,
            start: tick,
            end: tick + 1,
        }),
    }
}

/// Outcome of a complete simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub policy: SchedulingPolicy,
    /// Quantum in ticks, Round-Robin only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Tick>,
    pub total_ticks: Tick,
    pub idle_ticks: Tick,
    pub context_switches: u64,
    pub stats: SchedulerStats,
    pub processes: Vec<ProcessReport>,
    pub timeline: Vec<RunSegment>,
}

impl SimulationReport {
    pub fn average_turnaround(&self) -> f64 {
        self.average(|p| p.turnaround)
    }

    pub fn average_waiting(&self) -> f64 {
        self.average(|p| p.waiting)
    }

    /// Fraction of ticks the CPU was busy
    pub fn cpu_utilization(&self) -> f64 {
        if self.total_ticks == 0 {
            0.0
        } else {
            (self.total_ticks - self.idle_ticks) as f64 / self.total_ticks as f64
        }
    }

    pub fn process(&self, pid: Pid) -> Option<&ProcessReport> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Occupant of every tick in order
    pub fn gantt(&self) -> Vec<Option<Pid>> {
        self.timeline
            .iter()
            .flat_map(|segment| (segment.start..segment.end).map(move |_| segment.pid))
            .collect()
    }

    fn average<F: Fn(&ProcessReport) -> Tick>(&self, metric: F) -> f64 {
        if self.processes.is_empty() {
            return 0.0;
        }
        let sum: Tick = self.processes.iter().map(metric).sum();
        sum as f64 / self.processes.len() as f64
    }
}
