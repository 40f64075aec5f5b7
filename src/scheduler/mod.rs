/*!
 * Scheduler Module
 * Ready-queue management, dispatch and context-switch accounting per policy
 */

mod entry;
mod non_preemptive;
mod queue;
mod round_robin;
mod srtf;
mod stats;

pub mod traits;
pub mod types;

// Re-export public API
pub use entry::JobKey;
pub use non_preemptive::{FcfsScheduler, NonPreemptiveScheduler, SjfScheduler};
pub use queue::{FifoQueue, ReadyQueue, ShortestJobQueue};
pub use round_robin::RoundRobinScheduler;
pub use srtf::SrtfScheduler;
pub use stats::SchedulerStats;
pub use traits::Scheduler;
pub use types::{QuantumBoundary, SchedulerConfig, SchedulingPolicy, TimeQuantum, TotalTimeOrder};

use crate::monitoring::Platform;
use std::sync::Arc;
use tracing::info;

/// Build the scheduler selected by `config`
pub fn build_scheduler(config: &SchedulerConfig, platform: Arc<dyn Platform>) -> Box<dyn Scheduler> {
    info!(policy = %config.policy, "building scheduler");
    match config.policy {
        SchedulingPolicy::Fcfs => Box::new(FcfsScheduler::new(platform)),
        SchedulingPolicy::RoundRobin => Box::new(RoundRobinScheduler::with_boundary(
            platform,
            config.quantum,
            config.quantum_boundary,
        )),
        SchedulingPolicy::Sjf => Box::new(SjfScheduler::with_total_order(
            platform,
            config.sjf_total_order,
        )),
        SchedulingPolicy::Srtf => Box::new(SrtfScheduler::with_total_order(
            platform,
            config.srtf_total_order,
        )),
    }
}
