//! Commands and turn records.
//!
//! A presentation layer forwards user intents as `Command` values and
//! applies them with `MatchEngine::apply`. Resolved comparisons are kept
//! as `TurnRecord`s in the game state.

use serde::{Deserialize, Serialize};

use super::card_id::CardId;
use crate::cards::Alphabet;

/// A user intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Deal a fresh game from the given alphabet.
    NewGame(Alphabet),
    /// Deal a fresh game from the current alphabet.
    Restart,
    /// Re-order the current deck.
    Shuffle,
    /// Turn a card up.
    Select(CardId),
}

/// One resolved comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based; equals `moves` after this turn.
    pub move_number: u32,
    pub first: CardId,
    pub second: CardId,
    pub matched: bool,
}

impl TurnRecord {
    #[must_use]
    pub fn new(move_number: u32, first: CardId, second: CardId, matched: bool) -> Self {
        Self {
            move_number,
            first,
            second,
            matched,
        }
    }
}
