//! Deferred actions and their stale-reference checks.
//!
//! A deferred action never holds references into the deck. It carries card
//! IDs plus the values it expects to find (game number, reveal stamps) and
//! re-validates all of them against the current state before mutating.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardId, GameState};

/// A card as it was when the action was scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevealedCard {
    pub id: CardId,
    /// Reveal stamp the card carried when the action was scheduled.
    pub stamp: u64,
}

/// Work to run once its delay has elapsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredAction {
    /// Turn a mismatched pair back face-down.
    FlipBack {
        cards: SmallVec<[RevealedCard; 2]>,
        game_number: u64,
    },
}

impl DeferredAction {
    /// Schedule-time description of a mismatched pair.
    #[must_use]
    pub fn flip_back(first: RevealedCard, second: RevealedCard, game_number: u64) -> Self {
        let mut cards = SmallVec::new();
        cards.push(first);
        cards.push(second);
        DeferredAction::FlipBack { cards, game_number }
    }

    /// Run against the current state.
    ///
    /// A card is turned down only if the game is the one the action was
    /// scheduled in, the card still exists, is face-up and unmatched, and
    /// has not been revealed again since. Each card is checked on its own.
    /// Returns the cards that were actually turned down.
    pub fn run(
        &self,
        state: &mut GameState,
        reveal_stamps: &FxHashMap<CardId, u64>,
    ) -> SmallVec<[CardId; 2]> {
        let mut hidden = SmallVec::new();

        match self {
            DeferredAction::FlipBack { cards, game_number } => {
                if *game_number != state.game_number() {
                    log::trace!(
                        "flip-back from game {} skipped in game {}",
                        game_number,
                        state.game_number()
                    );
                    return hidden;
                }

                for revealed in cards {
                    if reveal_stamps.get(&revealed.id) != Some(&revealed.stamp) {
                        log::trace!("{} was revealed again, leaving it up", revealed.id);
                        continue;
                    }
                    let Some(card) = state.card_mut(revealed.id) else {
                        log::trace!("{} no longer in the deck", revealed.id);
                        continue;
                    };
                    if card.is_face_up() && !card.is_matched() {
                        card.hide();
                        hidden.push(revealed.id);
                    }
                }
            }
        }

        hidden
    }
}
