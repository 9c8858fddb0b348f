//! The matching-game engine.

use std::time::Duration;

use rustc_hash::FxHashMap;

use crate::cards::{Alphabet, Card};
use crate::core::{CardId, CardIdAllocator, Command, ConfigError, GameRng, GameState, MatchConfig};
use crate::events::{GameEvent, GameObserver, ObserverRegistry, SubscriptionId};
use crate::rules::{IgnoreReason, SelectOutcome};
use crate::schedule::{DeferredAction, RevealedCard, Scheduler};

/// Owns the deck and applies every game-state transition.
///
/// All mutation happens through `&mut self` on the caller's thread. The
/// mismatch flip-back is queued on an internal logical clock and runs when
/// the caller reports elapsed time through [`MatchEngine::advance`].
///
/// ## Turn protocol
///
/// - First selection: the card turns up and becomes pending.
/// - Second selection: the card turns up, `moves` goes up by one and the
///   pair is compared by symbol. A match scores and locks both cards; a
///   mismatch costs points (never below zero) and schedules a flip-back.
///   Either way the pending selection is cleared immediately.
/// - Selecting the pending card again is a repeat tap and is ignored. A
///   card can never pair with itself.
///
/// ```
/// use std::time::Duration;
/// use memory_match::cards::Alphabet;
/// use memory_match::core::MatchConfig;
/// use memory_match::engine::MatchEngine;
///
/// let config = MatchConfig::new()
///     .with_alphabet(Alphabet::new(["A"]).unwrap())
///     .with_seed(1);
/// let mut engine = MatchEngine::new(config).unwrap();
///
/// let ids: Vec<_> = engine.state().cards().iter().map(|c| c.id).collect();
/// engine.select_card(ids[0]);
/// engine.select_card(ids[1]);
///
/// assert_eq!(engine.score(), 2);
/// assert_eq!(engine.moves(), 1);
/// assert!(engine.is_over());
/// ```
#[derive(Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    /// Alphabet of the current game; `restart` deals from it again.
    alphabet: Alphabet,
    state: GameState,
    rng: GameRng,
    ids: CardIdAllocator,
    scheduler: Scheduler,
    observers: ObserverRegistry,
    /// Stamp of the most recent reveal per card, for flip-back validation.
    reveal_stamps: FxHashMap<CardId, u64>,
    next_stamp: u64,
    games_dealt: u64,
}

impl MatchEngine {
    /// Create an engine and deal the first game from the configured
    /// alphabet.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: MatchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let alphabet = config.alphabet.clone();

        let mut engine = Self {
            config,
            alphabet: alphabet.clone(),
            state: GameState::new(im::Vector::new(), 0),
            rng,
            ids: CardIdAllocator::new(),
            scheduler: Scheduler::new(),
            observers: ObserverRegistry::new(),
            reveal_stamps: FxHashMap::default(),
            next_stamp: 0,
            games_dealt: 0,
        };
        engine.new_game(&alphabet);
        engine
    }

    // === Commands ===

    /// Discard the current game and deal a fresh one: one pair per symbol,
    /// shuffled, all face-down. Pending flip-backs are dropped.
    pub fn new_game(&mut self, alphabet: &Alphabet) {
        self.scheduler.clear();
        self.reveal_stamps.clear();
        self.games_dealt += 1;
        self.alphabet = alphabet.clone();

        let mut cards: Vec<Card> = Vec::with_capacity(alphabet.deck_size());
        for symbol in alphabet.iter() {
            cards.push(Card::new(self.ids.alloc(), symbol.clone()));
            cards.push(Card::new(self.ids.alloc(), symbol.clone()));
        }
        self.rng.shuffle(&mut cards);

        self.state = GameState::new(cards.into_iter().collect(), self.games_dealt);
        log::debug!(
            "game {} dealt: {} cards from {} symbols",
            self.games_dealt,
            self.state.len(),
            alphabet.len()
        );

        self.emit(GameEvent::GameStarted {
            card_count: self.state.len(),
        });
    }

    /// Deal a fresh game from the current game's alphabet.
    pub fn restart(&mut self) {
        let alphabet = self.alphabet.clone();
        self.new_game(&alphabet);
    }

    /// Re-order the deck. Card faces, score, moves and the pending
    /// selection are untouched.
    pub fn shuffle(&mut self) {
        let mut cards: Vec<Card> = self.state.cards().iter().cloned().collect();
        self.rng.shuffle(&mut cards);
        *self.state.cards_mut() = cards.into_iter().collect();

        log::debug!("deck of {} shuffled", self.state.len());
        self.emit(GameEvent::Shuffled);
    }

    /// Turn a card up and resolve the turn if it is the second selection.
    ///
    /// Unknown cards, matched cards, a repeat tap on the pending card and
    /// any selection after the game is over are ignored without touching
    /// state.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        if let Some(reason) = self.ignore_reason(id) {
            log::trace!("select {id} ignored: {reason:?}");
            return SelectOutcome::Ignored(reason);
        }

        match self.state.pending() {
            None => {
                self.reveal(id);
                self.state.set_pending(Some(id));
                log::debug!("{id} opens the turn");
                self.emit(GameEvent::CardRevealed { card: id });
                SelectOutcome::FirstSelected(id)
            }
            Some(first) => self.resolve_pair(first, id),
        }
    }

    /// Apply a forwarded user intent.
    ///
    /// Returns the selection outcome for `Command::Select`, `None` for the
    /// other commands.
    pub fn apply(&mut self, command: Command) -> Option<SelectOutcome> {
        match command {
            Command::NewGame(alphabet) => {
                self.new_game(&alphabet);
                None
            }
            Command::Restart => {
                self.restart();
                None
            }
            Command::Shuffle => {
                self.shuffle();
                None
            }
            Command::Select(id) => Some(self.select_card(id)),
        }
    }

    /// Move the logical clock forward and run every flip-back that is due.
    ///
    /// Returns the cards that were turned face-down.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<CardId> {
        let mut hidden_all = Vec::new();

        for action in self.scheduler.advance(elapsed) {
            let hidden = action.run(&mut self.state, &self.reveal_stamps);
            if hidden.is_empty() {
                continue;
            }
            log::debug!("flip-back hid {} card(s)", hidden.len());
            hidden_all.extend_from_slice(&hidden);
            self.emit(GameEvent::CardsHidden { cards: hidden });
        }

        hidden_all
    }

    // === Observers ===

    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // === Read Access ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Independent copy of the current state (O(1)).
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.state.card(id)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.state.moves()
    }

    #[must_use]
    pub fn pending(&self) -> Option<CardId> {
        self.state.pending()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of flip-backs waiting for their delay.
    #[must_use]
    pub fn pending_flip_backs(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Seed of the engine RNG, for reproducing a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Internals ===

    fn ignore_reason(&self, id: CardId) -> Option<IgnoreReason> {
        if self.state.is_over() {
            return Some(IgnoreReason::GameOver);
        }
        let Some(card) = self.state.card(id) else {
            return Some(IgnoreReason::UnknownCard);
        };
        if card.is_matched() {
            return Some(IgnoreReason::AlreadyMatched);
        }
        if self.state.pending() == Some(id) {
            return Some(IgnoreReason::RepeatTap);
        }
        None
    }

    fn reveal(&mut self, id: CardId) {
        if let Some(card) = self.state.card_mut(id) {
            card.reveal();
        }
        self.reveal_stamps.insert(id, self.next_stamp);
        self.next_stamp += 1;
    }

    fn revealed(&self, id: CardId) -> RevealedCard {
        RevealedCard {
            id,
            stamp: self.reveal_stamps.get(&id).copied().unwrap_or_default(),
        }
    }

    fn resolve_pair(&mut self, first: CardId, second: CardId) -> SelectOutcome {
        self.reveal(second);
        self.state.set_pending(None);

        let matched = match (self.state.card(first), self.state.card(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };
        let move_number = self.state.record_turn(first, second, matched);
        self.emit(GameEvent::CardRevealed { card: second });

        if matched {
            for id in [first, second] {
                if let Some(card) = self.state.card_mut(id) {
                    card.mark_matched();
                }
            }
            let score = self.config.scoring.after_match(self.state.score());
            self.state.set_score(score);
            let game_over = self.state.refresh_over();
            log::debug!("move {move_number}: {first} and {second} matched, score {score}");

            self.emit(GameEvent::PairMatched { first, second });
            self.emit(GameEvent::ScoreChanged { score });
            if game_over {
                log::debug!("game over after {} moves with {score} points", self.state.moves());
                self.emit(GameEvent::GameOver {
                    score,
                    moves: self.state.moves(),
                });
            }

            SelectOutcome::Matched {
                first,
                second,
                game_over,
            }
        } else {
            let before = self.state.score();
            let score = self.config.scoring.after_mismatch(before);
            self.state.set_score(score);

            let action = DeferredAction::flip_back(
                self.revealed(first),
                self.revealed(second),
                self.state.game_number(),
            );
            let flip_back_at = self.scheduler.schedule(self.config.flip_back_delay, action);
            log::debug!("move {move_number}: {first} and {second} mismatched, flip-back at {flip_back_at:?}");

            self.emit(GameEvent::PairMismatched { first, second });
            if score != before {
                self.emit(GameEvent::ScoreChanged { score });
            }

            SelectOutcome::Mismatched {
                first,
                second,
                flip_back_at,
            }
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.observers.notify(&event, &self.state);
    }
}

impl Default for MatchEngine {
    /// Engine with the default configuration and an entropy seed.
    fn default() -> Self {
        Self::with_valid_config(MatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;

    fn engine(symbols: &[&str]) -> MatchEngine {
        let config = MatchConfig::new()
            .with_alphabet(Alphabet::new(symbols.iter().copied()).unwrap())
            .with_seed(42);
        MatchEngine::new(config).unwrap()
    }

    /// IDs of the two cards carrying `symbol`.
    fn pair_of(engine: &MatchEngine, symbol: &str) -> (CardId, CardId) {
        let ids: Vec<_> = engine
            .state()
            .cards()
            .iter()
            .filter(|c| c.symbol == Symbol::from(symbol))
            .map(|c| c.id)
            .collect();
        (ids[0], ids[1])
    }

    #[test]
    fn test_new_engine_deals_default_alphabet() {
        let engine = MatchEngine::new(MatchConfig::new().with_seed(1)).unwrap();

        assert_eq!(engine.state().len(), 16);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.moves(), 0);
        assert_eq!(engine.pending(), None);
        assert!(!engine.is_over());
        assert_eq!(engine.seed(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatchConfig::new().with_flip_back_delay(Duration::ZERO);
        assert_eq!(MatchEngine::new(config).unwrap_err(), ConfigError::ZeroFlipBackDelay);
    }

    #[test]
    fn test_first_selection_opens_turn() {
        let mut engine = engine(&["A", "B"]);
        let (a1, _) = pair_of(&engine, "A");

        assert_eq!(engine.select_card(a1), SelectOutcome::FirstSelected(a1));
        assert!(engine.card(a1).unwrap().is_face_up());
        assert_eq!(engine.pending(), Some(a1));
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn test_repeat_tap_is_ignored() {
        let mut engine = engine(&["A", "B"]);
        let (a1, _) = pair_of(&engine, "A");

        engine.select_card(a1);
        let before = engine.snapshot();

        assert_eq!(
            engine.select_card(a1),
            SelectOutcome::Ignored(IgnoreReason::RepeatTap)
        );
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.pending_flip_backs(), 0);
    }

    #[test]
    fn test_mismatch_schedules_flip_back() {
        let mut engine = engine(&["A", "B"]);
        let (a1, _) = pair_of(&engine, "A");
        let (b1, _) = pair_of(&engine, "B");

        engine.select_card(a1);
        let outcome = engine.select_card(b1);

        assert_eq!(
            outcome,
            SelectOutcome::Mismatched {
                first: a1,
                second: b1,
                flip_back_at: Duration::from_secs(1),
            }
        );
        assert_eq!(engine.pending_flip_backs(), 1);
        assert_eq!(engine.advance(Duration::from_secs(1)), vec![a1, b1]);
        assert_eq!(engine.pending_flip_backs(), 0);
    }

    #[test]
    fn test_restart_reuses_current_alphabet() {
        let mut engine = engine(&["A"]);
        engine.new_game(&Alphabet::new(["X", "Y", "Z"]).unwrap());

        engine.restart();

        assert_eq!(engine.state().len(), 6);
        assert_eq!(engine.alphabet().len(), 3);
    }

    #[test]
    fn test_ids_not_reused_across_games() {
        let mut engine = engine(&["A", "B"]);
        let old: Vec<_> = engine.state().cards().iter().map(|c| c.id).collect();

        engine.restart();

        assert!(engine.state().cards().iter().all(|c| !old.contains(&c.id)));
    }

    #[test]
    fn test_apply_dispatches() {
        let mut engine = engine(&["A", "B"]);
        let (a1, a2) = pair_of(&engine, "A");

        assert_eq!(engine.apply(Command::Shuffle), None);
        assert_eq!(
            engine.apply(Command::Select(a1)),
            Some(SelectOutcome::FirstSelected(a1))
        );
        assert!(matches!(
            engine.apply(Command::Select(a2)),
            Some(SelectOutcome::Matched { .. })
        ));

        assert_eq!(engine.apply(Command::Restart), None);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.state().game_number(), 2);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let first = engine(&["A", "B", "C", "D"]);
        let second = engine(&["A", "B", "C", "D"]);

        let symbols = |e: &MatchEngine| -> Vec<Symbol> {
            e.state().cards().iter().map(|c| c.symbol.clone()).collect()
        };
        assert_eq!(symbols(&first), symbols(&second));
    }

    #[test]
    fn test_flip_back_due_after_clock_moved() {
        let mut engine = engine(&["A", "B"]);
        let (a1, _) = pair_of(&engine, "A");
        let (b1, _) = pair_of(&engine, "B");

        engine.advance(Duration::from_millis(500));
        engine.select_card(a1);
        let outcome = engine.select_card(b1);

        assert_eq!(
            outcome,
            SelectOutcome::Mismatched {
                first: a1,
                second: b1,
                flip_back_at: Duration::from_millis(1500),
            }
        );
        assert!(engine.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(engine.advance(Duration::from_millis(1)), vec![a1, b1]);
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut first = engine(&["A", "B", "C", "D"]);
        let mut second = engine(&["A", "B", "C", "D"]);

        first.shuffle();
        second.shuffle();

        let ids = |e: &MatchEngine| -> Vec<CardId> { e.state().cards().iter().map(|c| c.id).collect() };
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.state().len(), 8);
    }
}
