/*!
 * Ready Queues
 * FIFO and shortest-job-first orderings behind one interface
 */

use super::entry::{JobEntry, JobKey};
use super::types::TotalTimeOrder;
use crate::core::limits::READY_QUEUE_CAPACITY;
use crate::core::types::Pid;
use crate::process::ProcessRef;
use std::collections::{BinaryHeap, HashSet, VecDeque};

/// Ordered collection of ready processes
///
/// A process is held at most once; `push` reports whether it was inserted.
pub trait ReadyQueue: Send {
    fn push(&mut self, process: ProcessRef) -> bool;
    fn pop(&mut self) -> Option<ProcessRef>;
    fn peek(&self) -> Option<&ProcessRef>;
    fn contains(&self, pid: Pid) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queued pids in the order they would be dispatched
    fn dispatch_order(&self) -> Vec<Pid>;
}

/// Insertion-ordered queue
pub struct FifoQueue {
    queue: VecDeque<ProcessRef>,
    // Membership index for O(1) duplicate checks
    members: HashSet<Pid>,
}

impl FifoQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(READY_QUEUE_CAPACITY),
            members: HashSet::with_capacity(READY_QUEUE_CAPACITY),
        }
    }
}

impl Default for FifoQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadyQueue for FifoQueue {
    fn push(&mut self, process: ProcessRef) -> bool {
        if !self.members.insert(process.pid()) {
            return false;
        }
        self.queue.push_back(process);
        true
    }

    fn pop(&mut self) -> Option<ProcessRef> {
        let process = self.queue.pop_front()?;
        self.members.remove(&process.pid());
        Some(process)
    }

    fn peek(&self) -> Option<&ProcessRef> {
        self.queue.front()
    }

    fn contains(&self, pid: Pid) -> bool {
        self.members.contains(&pid)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn dispatch_order(&self) -> Vec<Pid> {
        self.queue.iter().map(|p| p.pid()).collect()
    }
}

/// Min-heap on [`JobKey`], ties broken by admission order
///
/// Keys are captured when a process enters the queue. Queued processes do not
/// execute, so their keys cannot go stale while they wait.
pub struct ShortestJobQueue {
    heap: BinaryHeap<JobEntry>,
    members: HashSet<Pid>,
    order: TotalTimeOrder,
    next_seq: u64,
}

impl ShortestJobQueue {
    pub fn new(order: TotalTimeOrder) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(READY_QUEUE_CAPACITY),
            members: HashSet::with_capacity(READY_QUEUE_CAPACITY),
            order,
            next_seq: 0,
        }
    }

    pub fn order(&self) -> TotalTimeOrder {
        self.order
    }

    /// Whether the head would strictly win against `running`
    ///
    /// Equal keys keep the running process on the CPU.
    pub fn head_preempts(&self, running: &ProcessRef) -> bool {
        match self.heap.peek() {
            Some(head) => head
                .key
                .compare(&JobKey::of(running.as_ref()), self.order)
                .is_lt(),
            None => false,
        }
    }
}

impl ReadyQueue for ShortestJobQueue {
    fn push(&mut self, process: ProcessRef) -> bool {
        if !self.members.insert(process.pid()) {
            return false;
        }
        let entry = JobEntry {
            key: JobKey::of(process.as_ref()),
            seq: self.next_seq,
            order: self.order,
            process,
        };
        self.next_seq += 1;
        self.heap.push(entry);
        true
    }

    fn pop(&mut self) -> Option<ProcessRef> {
        let entry = self.heap.pop()?;
        self.members.remove(&entry.process.pid());
        Some(entry.process)
    }

    fn peek(&self) -> Option<&ProcessRef> {
        self.heap.peek().map(|entry| &entry.process)
    }

    fn contains(&self, pid: Pid) -> bool {
        self.members.contains(&pid)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn dispatch_order(&self) -> Vec<Pid> {
        // into_sorted_vec is ascending by Ord; the next dispatch compares greatest
        let mut entries = self.heap.clone().into_sorted_vec();
        entries.reverse();
        entries.into_iter().map(|entry| entry.process.pid()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Tick;
    use crate::process::SimProcess;
    use std::sync::Arc;

    fn proc(pid: Pid, bursts: Vec<Tick>) -> ProcessRef {
        Arc::new(SimProcess::new(pid, format!("P{}", pid), 0, bursts).unwrap())
    }

    #[test]
    fn test_fifo_order_and_dedup() {
        let mut queue = FifoQueue::new();
        assert!(queue.is_empty());
        assert!(queue.push(proc(1, vec![3])));
        assert!(queue.push(proc(2, vec![1])));
        assert!(!queue.push(proc(1, vec![3])));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dispatch_order(), vec![1, 2]);

        assert_eq!(queue.pop().map(|p| p.pid()), Some(1));
        assert!(!queue.contains(1));
        // Re-admission after leaving the queue goes to the tail
        assert!(queue.push(proc(1, vec![3])));
        assert_eq!(queue.dispatch_order(), vec![2, 1]);
        assert_eq!(queue.peek().map(|p| p.pid()), Some(2));
    }

    #[test]
    fn test_shortest_job_order() {
        let mut queue = ShortestJobQueue::new(TotalTimeOrder::Ascending);
        queue.push(proc(1, vec![5]));
        queue.push(proc(2, vec![2]));
        queue.push(proc(3, vec![8]));
        assert_eq!(queue.dispatch_order(), vec![2, 1, 3]);

        assert_eq!(queue.pop().map(|p| p.pid()), Some(2));
        assert_eq!(queue.pop().map(|p| p.pid()), Some(1));
        assert_eq!(queue.pop().map(|p| p.pid()), Some(3));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_shortest_job_ties_follow_admission_order() {
        let mut queue = ShortestJobQueue::new(TotalTimeOrder::Descending);
        queue.push(proc(4, vec![3]));
        queue.push(proc(9, vec![3]));
        queue.push(proc(1, vec![3]));
        assert_eq!(queue.dispatch_order(), vec![4, 9, 1]);
    }

    #[test]
    fn test_total_time_tie_break_direction() {
        let mut ascending = ShortestJobQueue::new(TotalTimeOrder::Ascending);
        let mut descending = ShortestJobQueue::new(TotalTimeOrder::Descending);
        assert_eq!(ascending.order(), TotalTimeOrder::Ascending);
        assert_eq!(descending.order(), TotalTimeOrder::Descending);
        for queue in [&mut ascending, &mut descending] {
            // Same first burst, different total work
            queue.push(proc(1, vec![2, 10]));
            queue.push(proc(2, vec![2, 1]));
        }
        assert_eq!(ascending.dispatch_order(), vec![2, 1]);
        assert_eq!(descending.dispatch_order(), vec![1, 2]);
    }

    #[test]
    fn test_head_preempts_requires_strictly_smaller_key() {
        let mut queue = ShortestJobQueue::new(TotalTimeOrder::Descending);
        let running = proc(1, vec![4]);
        assert!(!queue.head_preempts(&running));

        queue.push(proc(2, vec![4]));
        assert!(!queue.head_preempts(&running));

        queue.push(proc(3, vec![1]));
        assert!(queue.head_preempts(&running));
    }
}
