//! Matching rules: scoring arithmetic and selection outcomes.
//!
//! The engine applies these; it never hardcodes point values.

pub mod outcome;
pub mod scoring;

pub use outcome::{IgnoreReason, SelectOutcome};
pub use scoring::Scoring;
