//! Score arithmetic for resolved comparisons.

use serde::{Deserialize, Serialize};

/// Points awarded and deducted per comparison.
///
/// The score never drops below zero: a penalty larger than the current
/// score leaves it at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
    pub match_reward: u32,
    pub mismatch_penalty: u32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            match_reward: 2,
            mismatch_penalty: 1,
        }
    }
}

impl Scoring {
    #[must_use]
    pub fn after_match(&self, score: u32) -> u32 {
        score.saturating_add(self.match_reward)
    }

    #[must_use]
    pub fn after_mismatch(&self, score: u32) -> u32 {
        score.saturating_sub(self.mismatch_penalty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let scoring = Scoring::default();
        assert_eq!(scoring.match_reward, 2);
        assert_eq!(scoring.mismatch_penalty, 1);
    }

    #[test]
    fn test_match_adds_reward() {
        let scoring = Scoring::default();
        assert_eq!(scoring.after_match(0), 2);
        assert_eq!(scoring.after_match(5), 7);
    }

    #[test]
    fn test_mismatch_is_floored_at_zero() {
        let scoring = Scoring::default();
        assert_eq!(scoring.after_mismatch(3), 2);
        assert_eq!(scoring.after_mismatch(1), 0);
        assert_eq!(scoring.after_mismatch(0), 0);

        let harsh = Scoring {
            match_reward: 2,
            mismatch_penalty: 10,
        };
        assert_eq!(harsh.after_mismatch(4), 0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let scoring: Scoring = serde_json::from_str(r#"{"match_reward": 5}"#).unwrap();
        assert_eq!(scoring.match_reward, 5);
        assert_eq!(scoring.mismatch_penalty, 1);
    }
}
