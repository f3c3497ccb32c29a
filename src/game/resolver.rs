//! Round Resolution
//!
//! Picks the computer's hand and decides the winner.
//! Resolution itself is pure; only `random_choice` touches the RNG.

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::rng::{DeterministicRng, RandomSource};
use crate::game::choice::Choice;
use crate::game::commitment::{ChoiceCommitment, SealedRound};
use crate::game::outcome::Outcome;

/// One resolved round. Plain data, not retained by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// User's hand
    pub user: Choice,
    /// Computer's hand
    pub computer: Choice,
    /// Derived from the two hands
    pub outcome: Outcome,
}

impl Round {
    /// Build a round from two hands.
    pub fn new(user: Choice, computer: Choice) -> Self {
        Self {
            user,
            computer,
            outcome: resolve(user, computer),
        }
    }
}

/// Decide a round.
///
/// Total over all nine pairs: equal hands tie, otherwise the hand that
/// beats the other wins.
///
/// ```
/// use rps::{resolve, Choice, Outcome};
///
/// assert_eq!(resolve(Choice::Rock, Choice::Scissors), Outcome::UserWins);
/// assert_eq!(resolve(Choice::Paper, Choice::Paper), Outcome::Tie);
/// ```
#[inline]
pub fn resolve(user: Choice, computer: Choice) -> Outcome {
    if user == computer {
        Outcome::Tie
    } else if user.beats(computer) {
        Outcome::UserWins
    } else {
        Outcome::ComputerWins
    }
}

/// Plays the computer's side of a round.
#[derive(Clone, Debug)]
pub struct RoundResolver<R = DeterministicRng> {
    rng: R,
}

impl RoundResolver<DeterministicRng> {
    /// Resolver with a fixed seed; same seed, same computer picks.
    pub fn from_seed(seed: u64) -> Self {
        debug!(seed, "resolver seeded");
        Self::new(DeterministicRng::new(seed))
    }

    /// Resolver seeded from OS entropy. Also returns the seed for replay.
    pub fn from_entropy() -> (Self, u64) {
        let (rng, seed) = DeterministicRng::from_entropy();
        (Self::new(rng), seed)
    }
}

impl Default for RoundResolver<DeterministicRng> {
    fn default() -> Self {
        Self::from_entropy().0
    }
}

impl<R: RandomSource> RoundResolver<R> {
    /// Wrap a random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniformly random hand, each with probability 1/3.
    pub fn random_choice(&mut self) -> Choice {
        let idx = self.rng.next_int(Choice::ALL.len() as u32);
        Choice::ALL[idx as usize]
    }

    /// Decide a round. Does not consume randomness.
    #[inline]
    pub fn resolve(user: Choice, computer: Choice) -> Outcome {
        resolve(user, computer)
    }

    /// Pick the computer's hand and resolve against `user`.
    pub fn play(&mut self, user: Choice) -> Round {
        let computer = self.random_choice();
        let round = Round::new(user, computer);
        debug!(
            user = %round.user,
            computer = %round.computer,
            outcome = ?round.outcome,
            "round resolved"
        );
        round
    }

    /// Pick the computer's hand now and seal it behind a commitment.
    ///
    /// The commitment can be shown before the user moves; the sealed round
    /// is revealed against the user's hand afterwards.
    pub fn commit_computer_choice(&mut self) -> SealedRound {
        let computer = self.random_choice();
        let (commitment, opening) = ChoiceCommitment::commit(computer, &mut self.rng);
        SealedRound::new(commitment, opening)
    }

    /// Borrow the random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::*;
    use Outcome::*;

    /// Always returns the same raw value.
    struct Fixed(u64);

    impl RandomSource for Fixed {
        fn next_u64(&mut self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_full_table() {
        let table = [
            (Rock, Rock, Tie),
            (Rock, Paper, ComputerWins),
            (Rock, Scissors, UserWins),
            (Paper, Rock, UserWins),
            (Paper, Paper, Tie),
            (Paper, Scissors, ComputerWins),
            (Scissors, Rock, ComputerWins),
            (Scissors, Paper, UserWins),
            (Scissors, Scissors, Tie),
        ];
        for (user, computer, expected) in table {
            assert_eq!(resolve(user, computer), expected, "{user} vs {computer}");
            assert_eq!(RoundResolver::<Fixed>::resolve(user, computer), expected);
        }
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(resolve(Rock, Scissors), UserWins);
        assert_eq!(resolve(Scissors, Rock), ComputerWins);
        assert_eq!(resolve(Paper, Paper), Tie);
        assert_eq!(resolve(Scissors, Paper), UserWins);
        assert_eq!(resolve(Rock, Paper), ComputerWins);
        assert_eq!(resolve(Paper, Rock), UserWins);
    }

    #[test]
    fn test_random_choice_maps_index() {
        assert_eq!(RoundResolver::new(Fixed(0)).random_choice(), Rock);
        assert_eq!(RoundResolver::new(Fixed(1)).random_choice(), Paper);
        assert_eq!(RoundResolver::new(Fixed(5)).random_choice(), Scissors);
    }

    #[test]
    fn test_play_uses_random_choice() {
        let mut resolver = RoundResolver::new(Fixed(2));
        let round = resolver.play(Paper);
        assert_eq!(round, Round { user: Paper, computer: Scissors, outcome: ComputerWins });
    }

    #[test]
    fn test_seeded_resolvers_agree() {
        let mut a = RoundResolver::from_seed(2024);
        let mut b = RoundResolver::from_seed(2024);
        for _ in 0..100 {
            assert_eq!(a.play(Rock), b.play(Rock));
        }
    }

    #[test]
    fn test_all_choices_appear() {
        let mut resolver = RoundResolver::from_seed(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[resolver.random_choice().index() as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_play_consumes_one_draw() {
        let mut resolver = RoundResolver::from_seed(11);
        let mut reference = resolver.rng().clone();
        resolver.play(Rock);
        reference.next_u64();
        assert_eq!(resolver.rng(), &reference);
    }

    #[test]
    fn test_resolver_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<RoundResolver>();
    }

    #[test]
    fn test_round_serializes() {
        let round = Round::new(Rock, Scissors);
        let json = serde_json::to_value(round).unwrap();
        assert_eq!(json["user"], "rock");
        assert_eq!(json["computer"], "scissors");
        assert_eq!(json["outcome"], "user_wins");
    }
}
