//! The matching-game engine.
//!
//! `MatchEngine` is the only stateful component. A presentation layer reads
//! its state, forwards intents (`new_game`, `shuffle`, `select_card`, or a
//! `Command` through `apply`), reports elapsed time through `advance`, and
//! subscribes observers to hear about changes.

mod match_engine;

pub use match_engine::MatchEngine;
