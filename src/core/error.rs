//! Configuration errors.
//!
//! Game commands never fail; ignored commands are reported through
//! `SelectOutcome`. Only building an engine from a `MatchConfig` can be
//! rejected.

use thiserror::Error;

use crate::cards::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("symbol {0} appears more than once in the alphabet")]
    DuplicateSymbol(Symbol),

    #[error("flip-back delay must be greater than zero")]
    ZeroFlipBackDelay,
}
