//! Deferred work on the engine's logical clock.
//!
//! The only delayed behavior in the game is turning a mismatched pair back
//! over. It is modeled as a `DeferredAction` queued on a `Scheduler`:
//!
//! - The scheduler owns a logical clock that the caller advances; tasks run
//!   on the caller's thread inside `MatchEngine::advance`.
//! - Actions carry card IDs, not references, and re-validate before
//!   mutating (see `DeferredAction::run`).

mod deferred;
mod scheduler;

pub use deferred::{DeferredAction, RevealedCard};
pub use scheduler::Scheduler;
