//! Logical-clock task queue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use super::deferred::DeferredAction;

#[derive(Clone, Debug)]
struct ScheduledTask {
    due: Duration,
    /// Scheduling order.
    seq: u64,
    action: DeferredAction,
}

// Min-heap on (due, seq): earliest first, scheduling order breaks ties.
impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due, other.seq).cmp(&(self.due, self.seq))
    }
}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledTask {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for ScheduledTask {}

/// Deferred actions ordered by due time on a logical clock.
///
/// The clock only moves when the owner calls `advance`; nothing runs in
/// the background.
///
/// ```
/// use std::time::Duration;
/// use memory_match::core::CardId;
/// use memory_match::schedule::{DeferredAction, RevealedCard, Scheduler};
///
/// let mut scheduler = Scheduler::new();
/// let action = DeferredAction::flip_back(
///     RevealedCard { id: CardId(0), stamp: 0 },
///     RevealedCard { id: CardId(1), stamp: 1 },
///     1,
/// );
/// scheduler.schedule(Duration::from_secs(1), action);
///
/// assert!(scheduler.advance(Duration::from_millis(500)).is_empty());
/// assert_eq!(scheduler.advance(Duration::from_millis(500)).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    queue: BinaryHeap<ScheduledTask>,
    next_seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `action` to run `delay` from now. Returns its due time.
    pub fn schedule(&mut self, delay: Duration, action: DeferredAction) -> Duration {
        let seq = self.next_seq;
        self.next_seq += 1;
        let due = self.now.saturating_add(delay);
        self.queue.push(ScheduledTask { due, seq, action });
        due
    }

    /// Move the clock forward and pop every action that is now due,
    /// earliest first.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<DeferredAction> {
        self.now = self.now.saturating_add(elapsed);

        let mut due = Vec::new();
        while self.queue.peek().is_some_and(|task| task.due <= self.now) {
            if let Some(task) = self.queue.pop() {
                due.push(task.action);
            }
        }
        due
    }

    /// Drop every pending task. The clock keeps its value.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }
}
