//! One-shot deferred events keyed by frame time.
//!
//! The queue holds no thread or task of its own. The frame driver asks for the
//! events that became due and applies them inside the frame, so a deferred
//! action mutates the game on the same task as everything else.
use std::collections::{BTreeMap, HashMap};

use wheel_core::Millis;

/// Cancellation token for a scheduled event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
pub struct TimerQueue<E> {
    next_id: u64,
    /// Ordered by due time, then by scheduling order.
    pending: BTreeMap<(Millis, u64), E>,
    due_by_id: HashMap<u64, Millis>,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: BTreeMap::new(),
            due_by_id: HashMap::new(),
        }
    }

    pub fn schedule(&mut self, due: Millis, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert((due, id), event);
        self.due_by_id.insert(id, due);
        TimerHandle(id)
    }

    /// Drops a pending event. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.due_by_id.remove(&handle.0) {
            Some(due) => self.pending.remove(&(due, handle.0)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.due_by_id.contains_key(&handle.0)
    }

    /// Removes and returns every event due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Millis) -> Vec<E> {
        let mut fired = Vec::new();
        while let Some(entry) = self.pending.first_entry() {
            let (due, id) = *entry.key();
            if due > now {
                break;
            }
            fired.push(entry.remove());
            self.due_by_id.remove(&id);
        }
        fired
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order_once() {
        let mut timers = TimerQueue::new();
        timers.schedule(Millis(300), "late");
        timers.schedule(Millis(100), "early");
        timers.schedule(Millis(100), "early-second");

        assert!(timers.drain_due(Millis(99)).is_empty());
        assert_eq!(timers.drain_due(Millis(100)), ["early", "early-second"]);
        assert_eq!(timers.next_due(), Some(Millis(300)));
        assert_eq!(timers.drain_due(Millis(1_000)), ["late"]);
        assert!(timers.drain_due(Millis(2_000)).is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn cancelled_event_never_fires() {
        let mut timers = TimerQueue::new();
        let handle = timers.schedule(Millis(2_000), ());
        assert!(timers.is_pending(handle));

        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert!(timers.drain_due(Millis(5_000)).is_empty());
    }

    #[test]
    fn cancel_after_firing_is_a_no_op() {
        let mut timers = TimerQueue::new();
        let handle = timers.schedule(Millis(10), 1);
        assert_eq!(timers.drain_due(Millis(10)), [1]);
        assert!(!timers.is_pending(handle));
        assert!(!timers.cancel(handle));
    }
}
