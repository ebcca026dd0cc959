//! Timer queue for delayed engine transitions.
//!
//! Transitions are ordered by due time, then by the order they were issued,
//! so continuations scheduled for the same instant fire first-in first-out.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A deferred step of the answer/reset sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Publish the post-move position (special tiles applied) and the win flag.
    ResolveMove { raw_position: u8 },
    /// Hide feedback, drop the question, maybe queue the next one.
    /// `raw_position` is the pre-redirect landing cell.
    ClearFeedback { raw_position: u8 },
    PresentQuestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub due_ms: u64,
    pub seq: u64,
    pub transition: Transition,
}

impl Ord for ScheduledTransition {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

impl PartialOrd for ScheduledTransition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<ScheduledTransition>>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `transition` to fire at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, transition: Transition) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(ScheduledTransition {
            due_ms,
            seq,
            transition,
        }));
    }

    /// Remove and return the earliest transition due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<ScheduledTransition> {
        match self.heap.peek() {
            Some(Reverse(next)) if next.due_ms <= now_ms => self.heap.pop().map(|r| r.0),
            _ => None,
        }
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.heap.peek().map(|r| r.0.due_ms)
    }

    /// Drop everything pending. Returns how many transitions were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.heap.len();
        self.heap.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_in_due_order() {
        let mut q = TimerQueue::new();
        q.schedule(3000, Transition::ClearFeedback { raw_position: 2 });
        q.schedule(1000, Transition::ResolveMove { raw_position: 2 });
        q.schedule(500, Transition::PresentQuestion);

        assert_eq!(q.next_due_ms(), Some(500));
        assert_eq!(q.pop_due(5000).map(|t| t.due_ms), Some(500));
        assert_eq!(q.pop_due(5000).map(|t| t.due_ms), Some(1000));
        assert_eq!(q.pop_due(5000).map(|t| t.due_ms), Some(3000));
        assert!(q.pop_due(5000).is_none());
    }

    #[test]
    fn test_not_due_yet() {
        let mut q = TimerQueue::new();
        q.schedule(1000, Transition::PresentQuestion);
        assert!(q.pop_due(999).is_none());
        assert_eq!(q.len(), 1);
        assert!(q.pop_due(1000).is_some());
        assert!(q.is_empty());
    }

    #[test]
    fn test_same_instant_fires_in_issue_order() {
        let mut q = TimerQueue::new();
        q.schedule(1000, Transition::ResolveMove { raw_position: 4 });
        q.schedule(1000, Transition::PresentQuestion);
        q.schedule(1000, Transition::ClearFeedback { raw_position: 4 });

        let order: Vec<Transition> = std::iter::from_fn(|| q.pop_due(1000))
            .map(|t| t.transition)
            .collect();
        assert_eq!(
            order,
            vec![
                Transition::ResolveMove { raw_position: 4 },
                Transition::PresentQuestion,
                Transition::ClearFeedback { raw_position: 4 },
            ]
        );
    }

    #[test]
    fn test_cancel_all() {
        let mut q = TimerQueue::new();
        q.schedule(10, Transition::PresentQuestion);
        q.schedule(20, Transition::PresentQuestion);
        assert_eq!(q.cancel_all(), 2);
        assert!(q.is_empty());
        assert_eq!(q.next_due_ms(), None);
    }
}
