//! Round Outcome

use serde::{Serialize, Deserialize};

/// Result of comparing the user's choice with the computer's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// User's choice beats the computer's
    UserWins,
    /// Computer's choice beats the user's
    ComputerWins,
    /// Both threw the same hand
    Tie,
}

impl Outcome {
    /// Same round seen from the other side.
    ///
    /// Swaps UserWins and ComputerWins; Tie stays Tie.
    #[inline]
    pub fn flipped(self) -> Outcome {
        match self {
            Outcome::UserWins => Outcome::ComputerWins,
            Outcome::ComputerWins => Outcome::UserWins,
            Outcome::Tie => Outcome::Tie,
        }
    }

    /// Check for a tie.
    #[inline]
    pub fn is_tie(self) -> bool {
        self == Outcome::Tie
    }
}
