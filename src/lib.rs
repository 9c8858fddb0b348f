//! # memory-match
//!
//! The engine of a single-screen memory-matching card game.
//!
//! A deck holds one pair of cards per symbol. The player turns up two cards
//! per turn: a pair scores and stays up, a mismatch costs a point and turns
//! back over after a short delay. The game ends when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: `MatchEngine` holds the `GameState` and is the
//!    only thing that mutates it. Front ends read snapshots and send
//!    commands.
//!
//! 2. **No hidden threads**: the delayed flip-back runs on a logical clock
//!    the caller advances. Deferred actions carry card IDs and re-validate
//!    before touching the deck, so a new game started during the delay is
//!    never corrupted.
//!
//! 3. **Deterministic when seeded**: dealing and shuffling go through a
//!    ChaCha8 `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Card IDs, state, commands, RNG, configuration, errors
//! - `cards`: Symbols, alphabets and cards
//! - `rules`: Scoring and selection outcomes
//! - `schedule`: Deferred actions on a logical clock
//! - `events`: Observer interface for change notification
//! - `engine`: `MatchEngine`

pub mod cards;
pub mod core;
pub mod engine;
pub mod events;
pub mod rules;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{
    CardId, Command, ConfigError, GameRng, GameState, MatchConfig, TurnRecord,
};

pub use crate::cards::{Alphabet, Card, Face, Symbol};

pub use crate::rules::{IgnoreReason, Scoring, SelectOutcome};

pub use crate::schedule::{DeferredAction, Scheduler};

pub use crate::events::{GameEvent, GameObserver, SubscriptionId};

pub use crate::engine::MatchEngine;
