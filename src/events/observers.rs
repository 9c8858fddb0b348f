//! Observer registry.
//!
//! Observers are notified synchronously, in subscription order, on the
//! thread that issued the command.

use serde::{Deserialize, Serialize};

use super::event::GameEvent;
use crate::core::GameState;

/// Handle returned by `ObserverRegistry::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// Receives game events together with the state after the change.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent, state: &GameState);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent, &GameState),
{
    fn on_event(&mut self, event: &GameEvent, state: &GameState) {
        self(event, state);
    }
}

#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(SubscriptionId, Box<dyn GameObserver>)>,
    next_id: u32,
}

impl ObserverRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if the ID is not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, event: &GameEvent, state: &GameState) {
        log::trace!("event: {event}");
        for (_, observer) in &mut self.observers {
            observer.on_event(event, state);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
