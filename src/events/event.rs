//! Game events delivered to observers.
//!
//! Events are emitted after the state change they describe, so an observer
//! reading the `GameState` passed alongside sees the new values.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new deck was dealt.
    GameStarted { card_count: usize },

    /// The deck order changed.
    Shuffled,

    /// A selection turned a card face-up.
    CardRevealed { card: CardId },

    PairMatched { first: CardId, second: CardId },

    /// The pair will be turned back over when the delay elapses.
    PairMismatched { first: CardId, second: CardId },

    /// A flip-back turned these cards face-down.
    CardsHidden { cards: SmallVec<[CardId; 2]> },

    ScoreChanged { score: u32 },

    /// The last pair was matched.
    GameOver { score: u32, moves: u32 },
}

impl GameEvent {
    /// Cards this event is about.
    #[must_use]
    pub fn cards(&self) -> SmallVec<[CardId; 2]> {
        match self {
            GameEvent::CardRevealed { card } => SmallVec::from_slice(&[*card]),
            GameEvent::PairMatched { first, second } | GameEvent::PairMismatched { first, second } => {
                SmallVec::from_slice(&[*first, *second])
            }
            GameEvent::CardsHidden { cards } => cards.clone(),
            GameEvent::GameStarted { .. }
            | GameEvent::Shuffled
            | GameEvent::ScoreChanged { .. }
            | GameEvent::GameOver { .. } => SmallVec::new(),
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { card_count } => write!(f, "game started with {card_count} cards"),
            GameEvent::Shuffled => write!(f, "deck shuffled"),
            GameEvent::CardRevealed { card } => write!(f, "{card} revealed"),
            GameEvent::PairMatched { first, second } => write!(f, "{first} and {second} matched"),
            GameEvent::PairMismatched { first, second } => write!(f, "{first} and {second} mismatched"),
            GameEvent::CardsHidden { cards } => write!(f, "{} card(s) hidden", cards.len()),
            GameEvent::ScoreChanged { score } => write!(f, "score is now {score}"),
            GameEvent::GameOver { score, moves } => write!(f, "game over: {score} points in {moves} moves"),
        }
    }
}
