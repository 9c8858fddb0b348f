//! Game state: the deck and the counters observed by the presentation layer.
//!
//! Uses `im::Vector` so `GameState` clones in O(1); the engine hands out
//! snapshots freely.
//!
//! Mutation goes through `pub(crate)` methods; outside the crate the state
//! is read-only.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card_id::CardId;
use super::command::TurnRecord;
use crate::cards::Card;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Cards in display order.
    cards: Vector<Card>,

    score: u32,

    /// Completed comparisons (one per second selection).
    moves: u32,

    /// First card of the open comparison.
    pending: Option<CardId>,

    is_over: bool,

    /// Resolved comparisons, oldest first.
    turns: Vector<TurnRecord>,

    /// Incremented by each new game. Deferred actions carry it.
    game_number: u64,
}

impl GameState {
    /// Fresh state for a dealt deck. Cards are taken as face-down.
    #[must_use]
    pub fn new(cards: Vector<Card>, game_number: u64) -> Self {
        let is_over = cards.iter().all(Card::is_matched);
        Self {
            cards,
            score: 0,
            moves: 0,
            pending: None,
            is_over,
            turns: Vector::new(),
            game_number,
        }
    }

    // === Read Access ===

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn pending(&self) -> Option<CardId> {
        self.pending
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub fn turns(&self) -> &Vector<TurnRecord> {
        &self.turns
    }

    #[must_use]
    pub fn game_number(&self) -> u64 {
        self.game_number
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Number of matched pairs so far.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count() / 2
    }

    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    // === Mutation ===

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    pub(crate) fn cards_mut(&mut self) -> &mut Vector<Card> {
        &mut self.cards
    }

    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub(crate) fn set_pending(&mut self, pending: Option<CardId>) {
        self.pending = pending;
    }

    /// Count a completed comparison and record it. Returns the move number.
    pub(crate) fn record_turn(&mut self, first: CardId, second: CardId, matched: bool) -> u32 {
        self.moves += 1;
        self.turns.push_back(TurnRecord::new(self.moves, first, second, matched));
        self.moves
    }

    /// Latch the over flag once every card is matched. Never clears it.
    pub(crate) fn refresh_over(&mut self) -> bool {
        if !self.is_over && self.all_matched() {
            self.is_over = true;
        }
        self.is_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;

    fn deck(symbols: &[&str]) -> Vector<Card> {
        symbols
            .iter()
            .enumerate()
            .map(|(i, s)| Card::new(CardId(i as u32), Symbol::from(*s)))
            .collect()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(deck(&["A", "A", "B", "B"]), 1);

        assert_eq!(state.len(), 4);
        assert_eq!(state.score(), 0);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.pending(), None);
        assert!(!state.is_over());
        assert!(state.turns().is_empty());
        assert_eq!(state.game_number(), 1);
    }

    #[test]
    fn test_empty_deck_is_over() {
        let state = GameState::new(Vector::new(), 1);
        assert!(state.is_empty());
        assert!(state.is_over());
    }

    #[test]
    fn test_lookup_by_id() {
        let state = GameState::new(deck(&["A", "B", "A", "B"]), 1);

        assert_eq!(state.card(CardId(3)).map(|c| c.symbol.as_str()), Some("B"));
        assert!(state.card(CardId(99)).is_none());
    }

    #[test]
    fn test_record_turn_counts_moves() {
        let mut state = GameState::new(deck(&["A", "A"]), 1);

        assert_eq!(state.record_turn(CardId(0), CardId(1), false), 1);
        assert_eq!(state.record_turn(CardId(1), CardId(0), true), 2);

        assert_eq!(state.moves(), 2);
        assert_eq!(state.turns().len(), 2);
        assert_eq!(state.turns()[1], TurnRecord::new(2, CardId(1), CardId(0), true));
    }

    #[test]
    fn test_refresh_over_latches() {
        let mut state = GameState::new(deck(&["A", "A"]), 1);
        assert!(!state.refresh_over());

        for id in [CardId(0), CardId(1)] {
            state.card_mut(id).unwrap().mark_matched();
        }
        assert!(state.refresh_over());
        assert_eq!(state.pairs_found(), 1);
        assert!(state.is_over());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new(deck(&["A", "A"]), 1);
        let snapshot = state.clone();

        state.card_mut(CardId(0)).unwrap().reveal();

        assert!(state.card(CardId(0)).unwrap().is_face_up());
        assert!(!snapshot.card(CardId(0)).unwrap().is_face_up());
    }
}
