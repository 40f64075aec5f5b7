/*!
 * Scheduler Statistics
 * Per-instance event counters and their serializable snapshot
 */

use super::types::SchedulingPolicy;
use serde::{Deserialize, Serialize};

/// Point-in-time view of a scheduler's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    pub policy: SchedulingPolicy,
    pub context_switches: u64,
    pub admissions: u64,
    pub dispatches: u64,
    pub requeues: u64,
    pub preemptions: u64,
    pub completions: u64,
    pub ready_processes: usize,
}

impl SchedulerStats {
    /// Share of dispatches that followed a preemption
    pub fn preemption_ratio(&self) -> f64 {
        if self.dispatches == 0 {
            0.0
        } else {
            self.preemptions as f64 / self.dispatches as f64
        }
    }
}

/// Event counters owned by a single scheduler
///
/// Which events count as a context switch is decided by each policy; this
/// type only accumulates.
#[derive(Debug, Default, Clone)]
pub(crate) struct SchedulerCounters {
    context_switches: u64,
    admissions: u64,
    dispatches: u64,
    requeues: u64,
    preemptions: u64,
    completions: u64,
}

impl SchedulerCounters {
    #[inline]
    pub fn inc_context_switches(&mut self) {
        self.context_switches += 1;
    }

    #[inline]
    pub fn inc_admissions(&mut self) {
        self.admissions += 1;
    }

    #[inline]
    pub fn inc_dispatches(&mut self) {
        self.dispatches += 1;
    }

    #[inline]
    pub fn inc_requeues(&mut self) {
        self.requeues += 1;
    }

    #[inline]
    pub fn inc_preemptions(&mut self) {
        self.preemptions += 1;
    }

    #[inline]
    pub fn inc_completions(&mut self) {
        self.completions += 1;
    }

    #[inline]
    pub fn context_switches(&self) -> u64 {
        self.context_switches
    }

    pub fn snapshot(&self, policy: SchedulingPolicy, ready_processes: usize) -> SchedulerStats {
        SchedulerStats {
            policy,
            context_switches: self.context_switches,
            admissions: self.admissions,
            dispatches: self.dispatches,
            requeues: self.requeues,
            preemptions: self.preemptions,
            completions: self.completions,
            ready_processes,
        }
    }
}
