//! Choice Commitment
//!
//! The computer commits to its hand before the user moves and reveals it
//! afterwards, so the pick provably did not depend on the user's choice.

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::hash::{short_hex, to_hex, CommitHash, CommitHasher};
use crate::core::rng::RandomSource;
use crate::game::choice::Choice;
use crate::game::resolver::Round;

/// Published hash of a hidden choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceCommitment {
    /// SHA-256 over domain, choice index and nonce.
    pub hash: CommitHash,
}

/// Secret half of a commitment, kept until reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentOpening {
    /// Committed hand.
    pub choice: Choice,
    /// Random blinding nonce.
    pub nonce: [u8; 32],
}

impl CommitmentOpening {
    /// Full hex of the nonce.
    pub fn nonce_hex(&self) -> String {
        hex::encode(self.nonce)
    }
}

/// Commitment errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitmentError {
    /// Opening does not hash to the commitment.
    #[error("opening does not match commitment {expected}")]
    PreimageMismatch {
        /// Hex of the published commitment.
        expected: String,
    },
}

impl ChoiceCommitment {
    /// Commit to `choice` with a fresh nonce drawn from `rng`.
    pub fn commit<R: RandomSource>(choice: Choice, rng: &mut R) -> (Self, CommitmentOpening) {
        let mut nonce = [0u8; 32];
        rng.fill_bytes(&mut nonce);
        let opening = CommitmentOpening { choice, nonce };
        (Self::from_opening(&opening), opening)
    }

    /// Recompute the commitment for an opening.
    pub fn from_opening(opening: &CommitmentOpening) -> Self {
        let mut hasher = CommitHasher::for_choice();
        hasher.update_u8(opening.choice.index());
        hasher.update_bytes(&opening.nonce);
        Self { hash: hasher.finalize() }
    }

    /// Verify that an opening matches this commitment.
    pub fn verify(&self, opening: &CommitmentOpening) -> Result<(), CommitmentError> {
        if Self::from_opening(opening).hash == self.hash {
            Ok(())
        } else {
            Err(CommitmentError::PreimageMismatch { expected: self.to_hex() })
        }
    }

    /// Full hex of the hash.
    pub fn to_hex(&self) -> String {
        to_hex(&self.hash)
    }
}

/// A round whose computer hand is fixed and sealed but not yet shown.
#[derive(Clone, Debug)]
pub struct SealedRound {
    commitment: ChoiceCommitment,
    opening: CommitmentOpening,
}

impl SealedRound {
    pub(crate) fn new(commitment: ChoiceCommitment, opening: CommitmentOpening) -> Self {
        debug!(commitment = %short_hex(&commitment.hash), "computer choice sealed");
        Self { commitment, opening }
    }

    /// The hash to publish before the user moves.
    pub fn commitment(&self) -> ChoiceCommitment {
        self.commitment
    }

    /// Resolve against the user's hand and hand out the opening for checking.
    pub fn reveal(self, user: Choice) -> (Round, CommitmentOpening) {
        (Round::new(user, self.opening.choice), self.opening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::DeterministicRng;
    use crate::game::outcome::Outcome;
    use crate::game::resolver::RoundResolver;

    #[test]
    fn test_commit_verifies() {
        let mut rng = DeterministicRng::new(1);
        let (commitment, opening) = ChoiceCommitment::commit(Choice::Paper, &mut rng);
        assert_eq!(commitment.verify(&opening), Ok(()));
    }

    #[test]
    fn test_swapped_choice_fails() {
        let mut rng = DeterministicRng::new(2);
        let (commitment, opening) = ChoiceCommitment::commit(Choice::Rock, &mut rng);
        let forged = CommitmentOpening { choice: Choice::Paper, ..opening };
        let err = commitment.verify(&forged).unwrap_err();
        assert_eq!(err, CommitmentError::PreimageMismatch { expected: commitment.to_hex() });
    }

    #[test]
    fn test_nonce_hex() {
        let opening = CommitmentOpening { choice: Choice::Rock, nonce: [0x0f; 32] };
        assert_eq!(opening.nonce_hex(), "0f".repeat(32));
    }

    #[test]
    fn test_nonce_blinds_choice() {
        let mut rng = DeterministicRng::new(3);
        let (a, _) = ChoiceCommitment::commit(Choice::Scissors, &mut rng);
        let (b, _) = ChoiceCommitment::commit(Choice::Scissors, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_sealed_round_reveal() {
        let mut resolver = RoundResolver::from_seed(99);
        let sealed = resolver.commit_computer_choice();
        let commitment = sealed.commitment();

        let (round, opening) = sealed.reveal(Choice::Rock);
        assert_eq!(commitment.verify(&opening), Ok(()));
        assert_eq!(round.computer, opening.choice);
        assert_eq!(round.user, Choice::Rock);
        assert_eq!(round.outcome == Outcome::Tie, opening.choice == Choice::Rock);
    }
}
