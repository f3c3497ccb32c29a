//! Choice Domain
//!
//! The three hands and the cyclic beats-relation between them.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

/// A hand a player can throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Choice {
    /// Beats Scissors
    Rock = 0,
    /// Beats Rock
    Paper = 1,
    /// Beats Paper
    Scissors = 2,
}

impl Choice {
    /// Every choice, in index order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The choice this one defeats.
    #[inline]
    pub fn defeats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    /// The choice that defeats this one.
    #[inline]
    pub fn beaten_by(self) -> Choice {
        match self {
            Choice::Rock => Choice::Paper,
            Choice::Paper => Choice::Scissors,
            Choice::Scissors => Choice::Rock,
        }
    }

    /// Check if this choice beats another.
    #[inline]
    pub fn beats(self, other: Choice) -> bool {
        self.defeats() == other
    }

    /// Stable index (0-2).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Get choice from index (0-2).
    pub fn from_index(index: u8) -> Option<Choice> {
        match index {
            0 => Some(Choice::Rock),
            1 => Some(Choice::Paper),
            2 => Some(Choice::Scissors),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input text that names no choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown choice {0:?}, expected rock, paper or scissors")]
pub struct ParseChoiceError(pub String);

impl FromStr for Choice {
    type Err = ParseChoiceError;

    /// Accepts full names, single letters and the hand emoji, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // ✌️ carries a variation selector; match with or without it
        let key = trimmed.trim_end_matches('\u{FE0F}').to_ascii_lowercase();
        match key.as_str() {
            "rock" | "r" | "\u{270A}" => Ok(Choice::Rock),
            "paper" | "p" | "\u{270B}" => Ok(Choice::Paper),
            "scissors" | "scissor" | "s" | "\u{270C}" => Ok(Choice::Scissors),
            _ => Err(ParseChoiceError(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_is_cyclic() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Scissors.beats(Choice::Paper));
        assert!(Choice::Paper.beats(Choice::Rock));
        for c in Choice::ALL {
            assert!(!c.beats(c));
            assert!(c.beaten_by().beats(c));
            assert_eq!(c.defeats().beaten_by(), c);
        }
    }

    #[test]
    fn test_exactly_one_direction() {
        for a in Choice::ALL {
            for b in Choice::ALL {
                if a != b {
                    assert!(a.beats(b) ^ b.beats(a), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_index_roundtrip() {
        for c in Choice::ALL {
            assert_eq!(Choice::from_index(c.index()), Some(c));
        }
        assert_eq!(Choice::from_index(3), None);
    }

    #[test]
    fn test_parse_names_and_letters() {
        assert_eq!("Rock".parse(), Ok(Choice::Rock));
        assert_eq!(" p ".parse(), Ok(Choice::Paper));
        assert_eq!("SCISSORS".parse(), Ok(Choice::Scissors));
        assert_eq!("s".parse(), Ok(Choice::Scissors));
    }

    #[test]
    fn test_parse_emoji() {
        assert_eq!("✊".parse(), Ok(Choice::Rock));
        assert_eq!("✋".parse(), Ok(Choice::Paper));
        assert_eq!("✌️".parse(), Ok(Choice::Scissors));
        assert_eq!("✌".parse(), Ok(Choice::Scissors));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "lizard".parse::<Choice>().unwrap_err();
        assert_eq!(err, ParseChoiceError("lizard".to_string()));
        assert!(err.to_string().contains("lizard"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Choice::Scissors).unwrap();
        assert_eq!(json, "\"scissors\"");
        let back: Choice = serde_json::from_str("\"paper\"").unwrap();
        assert_eq!(back, Choice::Paper);
    }
}
