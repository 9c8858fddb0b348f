//! Card faces and dealt cards.
//!
//! ## Key Types
//!
//! - `Symbol`: The face value compared when two cards are turned up
//! - `Alphabet`: Distinct symbols a deck is dealt from (one pair each)
//! - `Card`: A dealt card with its face-up / matched state
//! - `Face`: The card lifecycle as a single value

pub mod card;
pub mod symbol;

pub use card::{Card, Face};
pub use symbol::{Alphabet, Symbol, DEFAULT_SYMBOLS};
