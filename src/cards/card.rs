//! A dealt card and its face state.
//!
//! Per card: `FaceDown -> FaceUp -> (Matched | FaceDown)`. `Matched` is
//! terminal for the rest of the game.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::CardId;

/// Where a card is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Down,
    Up,
    Matched,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn face(&self) -> Face {
        match (self.matched, self.face_up) {
            (true, _) => Face::Matched,
            (false, true) => Face::Up,
            (false, false) => Face::Down,
        }
    }

    /// Whether the two cards share a symbol.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.symbol == other.symbol
    }

    pub(crate) fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Turn the card back over. Matched cards stay up.
    pub(crate) fn hide(&mut self) {
        if !self.matched {
            self.face_up = false;
        }
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}
