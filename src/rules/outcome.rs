//! What a selection did.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Why a selection left the game untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card with that ID in the current deck.
    UnknownCard,
    /// The card is already part of a matched pair.
    AlreadyMatched,
    /// The card is the open first selection of this turn.
    RepeatTap,
    /// Every pair has been found.
    GameOver,
}

/// Result of `MatchEngine::select_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    Ignored(IgnoreReason),
    /// The card was turned up and opens the turn.
    FirstSelected(CardId),
    /// The second card paired with the first.
    Matched {
        first: CardId,
        second: CardId,
        game_over: bool,
    },
    /// The second card did not pair; both turn back at `flip_back_at`.
    Mismatched {
        first: CardId,
        second: CardId,
        flip_back_at: Duration,
    },
}

impl SelectOutcome {
    /// Whether the selection changed any state.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }

    /// Whether the selection completed a comparison (and counted a move).
    #[must_use]
    pub fn completes_turn(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. } | SelectOutcome::Mismatched { .. })
    }
}
