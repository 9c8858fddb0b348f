//! Change notification for the presentation layer.
//!
//! Instead of watching fields, a front end subscribes a `GameObserver` and
//! receives a `GameEvent` for every state change the engine makes.

pub mod event;
pub mod observers;

pub use event::GameEvent;
pub use observers::{GameObserver, ObserverRegistry, SubscriptionId};
