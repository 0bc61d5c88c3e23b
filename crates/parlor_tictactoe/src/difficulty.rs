//! Computer opponent strength.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How often the computer plays the search-optimal move.
///
/// Fixed for the duration of one match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Optimal 30% of the time.
    Easy,
    /// Optimal 70% of the time.
    #[default]
    Medium,
    /// Always optimal.
    Hard,
}

impl Difficulty {
    /// Probability of choosing the minimax move over a random legal move.
    pub fn optimal_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.7,
            Difficulty::Hard => 1.0,
        }
    }

    /// Difficulty used for a numbered level: 1-10 easy, 11-30 medium,
    /// hard afterwards.
    #[instrument]
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=10 => Difficulty::Easy,
            11..=30 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probabilities() {
        assert_eq!(Difficulty::Easy.optimal_probability(), 0.3);
        assert_eq!(Difficulty::Medium.optimal_probability(), 0.7);
        assert_eq!(Difficulty::Hard.optimal_probability(), 1.0);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(Difficulty::for_level(1), Difficulty::Easy);
        assert_eq!(Difficulty::for_level(10), Difficulty::Easy);
        assert_eq!(Difficulty::for_level(11), Difficulty::Medium);
        assert_eq!(Difficulty::for_level(30), Difficulty::Medium);
        assert_eq!(Difficulty::for_level(31), Difficulty::Hard);
    }

    #[test]
    fn test_names_round_trip() {
        assert_eq!(Difficulty::Hard.to_string(), "hard");
        assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
