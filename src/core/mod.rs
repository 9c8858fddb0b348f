//! Core engine types: card IDs, state, commands, RNG, configuration.
//!
//! These are the building blocks the engine, scheduler and observers share.

pub mod card_id;
pub mod command;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use card_id::{CardId, CardIdAllocator};
pub use command::{Command, TurnRecord};
pub use config::{MatchConfig, DEFAULT_FLIP_BACK_DELAY};
pub use error::ConfigError;
pub use rng::GameRng;
pub use state::GameState;
