/*!
 * Shortest-Job Entries
 * Ordering keys for the priority-ordered ready queue
 */

use super::types::TotalTimeOrder;
use crate::core::types::Tick;
use crate::process::{ProcessRef, ProcessView};
use std::cmp::Ordering;

/// Comparison key snapshotted from a process view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobKey {
    pub burst_time: Tick,
    pub remaining_burst: Tick,
    pub total_time: Tick,
}

impl JobKey {
    pub fn of(process: &dyn ProcessView) -> Self {
        Self {
            burst_time: process.burst_time(),
            remaining_burst: process.remaining_burst(),
            total_time: process.total_time(),
        }
    }

    /// `Less` means `self` runs before `other`
    ///
    /// Burst time ascending, then remaining burst ascending, then total time
    /// in the configured direction.
    pub fn compare(&self, other: &Self, order: TotalTimeOrder) -> Ordering {
        self.burst_time
            .cmp(&other.burst_time)
            .then_with(|| self.remaining_burst.cmp(&other.remaining_burst))
            .then_with(|| match order {
                TotalTimeOrder::Ascending => self.total_time.cmp(&other.total_time),
                TotalTimeOrder::Descending => other.total_time.cmp(&self.total_time),
            })
    }
}

/// Heap entry: a process plus the key it was admitted with
#[derive(Clone)]
pub(super) struct JobEntry {
    pub key: JobKey,
    pub seq: u64,
    pub order: TotalTimeOrder,
    pub process: ProcessRef,
}

impl PartialEq for JobEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for JobEntry {}

impl Ord for JobEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the shortest job must compare greatest.
        // Equal keys fall back to admission order.
        other
            .key
            .compare(&self.key, self.order)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for JobEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
