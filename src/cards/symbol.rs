//! Card faces: symbols and the alphabet a deck is dealt from.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// The face value printed on a card. Two cards match when their symbols
/// are equal.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Symbol {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Symbols used when no alphabet is configured.
pub const DEFAULT_SYMBOLS: [&str; 8] = ["🍎", "🍌", "🍒", "🍍", "🍇", "🍉", "🍓", "🍑"];

/// An ordered set of distinct symbols. A deck holds one pair per symbol.
///
/// ```
/// use memory_match::cards::Alphabet;
///
/// let alphabet = Alphabet::new(["A", "B", "C"]).unwrap();
/// assert_eq!(alphabet.len(), 3);
/// assert!(Alphabet::new(["A", "A"]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Build an alphabet, rejecting duplicate symbols.
    pub fn new<I, S>(symbols: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let symbols: Vec<Symbol> = symbols.into_iter().map(Into::into).collect();
        let mut seen = FxHashSet::default();
        for symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }
        Ok(Self { symbols })
    }

    /// An alphabet with no symbols. Deals an empty deck.
    #[must_use]
    pub fn empty() -> Self {
        Self { symbols: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Number of cards in a deck dealt from this alphabet.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.symbols.len() * 2
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().copied().map(Symbol::from).collect(),
        }
    }
}

impl TryFrom<Vec<Symbol>> for Alphabet {
    type Error = ConfigError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<Symbol> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}
