//! Engine configuration.
//!
//! A `MatchConfig` fixes everything the engine does not decide per game:
//! - the alphabet `restart()` deals from
//! - how long a mismatched pair stays up before turning back
//! - scoring
//! - an optional RNG seed (entropy when absent)
//!
//! Every field has a default, so a partial document deserializes:
//!
//! ```
//! use memory_match::core::MatchConfig;
//!
//! let config: MatchConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.alphabet.len(), 8);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::Alphabet;
use crate::rules::Scoring;

/// Delay before a mismatched pair is turned back over.
pub const DEFAULT_FLIP_BACK_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub alphabet: Alphabet,
    pub flip_back_delay: Duration,
    pub scoring: Scoring,
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            flip_back_delay: DEFAULT_FLIP_BACK_DELAY,
            scoring: Scoring::default(),
            seed: None,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alphabet (builder pattern).
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the flip-back delay (builder pattern).
    #[must_use]
    pub fn with_flip_back_delay(mut self, delay: Duration) -> Self {
        self.flip_back_delay = delay;
        self
    }

    /// Set the scoring rules (builder pattern).
    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Fix the RNG seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the settings that cannot be enforced by construction.
    ///
    /// The alphabet is validated when it is built or deserialized.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flip_back_delay.is_zero() {
            return Err(ConfigError::ZeroFlipBackDelay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();

        assert_eq!(config.alphabet, Alphabet::default());
        assert_eq!(config.flip_back_delay, Duration::from_secs(1));
        assert_eq!(config.scoring, Scoring::default());
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let alphabet = Alphabet::new(["A", "B"]).unwrap();
        let config = MatchConfig::new()
            .with_alphabet(alphabet.clone())
            .with_flip_back_delay(Duration::from_millis(250))
            .with_seed(9);

        assert_eq!(config.alphabet, alphabet);
        assert_eq!(config.flip_back_delay, Duration::from_millis(250));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_zero_delay_rejected() {
        let config = MatchConfig::new().with_flip_back_delay(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroFlipBackDelay));
    }

    #[test]
    fn test_deserialize_full_document() {
        let json = r#"{
            "alphabet": ["A", "B", "C"],
            "flip_back_delay": { "secs": 2, "nanos": 0 },
            "scoring": { "match_reward": 3, "mismatch_penalty": 2 },
            "seed": 11
        }"#;

        let config: MatchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.alphabet.len(), 3);
        assert_eq!(config.flip_back_delay, Duration::from_secs(2));
        assert_eq!(config.scoring.match_reward, 3);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_deserialize_duplicate_alphabet_fails() {
        let result: Result<MatchConfig, _> = serde_json::from_str(r#"{ "alphabet": ["A", "A"] }"#);
        assert!(result.is_err());

        // The typed error is available when building directly.
        assert_eq!(
            Alphabet::new(["A", "A"]),
            Err(ConfigError::DuplicateSymbol(Symbol::from("A")))
        );
    }
}
