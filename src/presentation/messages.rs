//! Display strings for the terminal front-end.

use crate::game::{Choice, ChoiceCommitment, CommitmentOpening, Outcome, Round};

/// Screen title.
pub const TITLE: &str = "Rock, Paper, Scissors!";

/// Shown before the first round and after each result.
pub const PROMPT: &str = "Make your move!";

/// Hand gesture for a choice.
pub fn emoji(choice: Choice) -> &'static str {
    match choice {
        Choice::Rock => "\u{270A}",
        Choice::Paper => "\u{270B}",
        Choice::Scissors => "\u{270C}\u{FE0F}",
    }
}

/// Emoji plus capitalised name, e.g. `✊ Rock`.
pub fn label(choice: Choice) -> String {
    let name = match choice {
        Choice::Rock => "Rock",
        Choice::Paper => "Paper",
        Choice::Scissors => "Scissors",
    };
    format!("{} {}", emoji(choice), name)
}

/// Result line for an outcome.
pub fn result_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::UserWins => "You win!",
        Outcome::ComputerWins => "Computer wins!",
        Outcome::Tie => "It's a tie!",
    }
}

/// The two "choice" lines shown as soon as a round is played.
pub fn choices_lines(round: &Round) -> [String; 2] {
    [
        format!("Your choice: {}", emoji(round.user)),
        format!("Computer's choice: {}", emoji(round.computer)),
    ]
}

/// Published before the user moves.
pub fn commitment_line(commitment: &ChoiceCommitment) -> String {
    format!("Computer has committed: {}", commitment.to_hex())
}

/// Shown after the reveal so the commitment can be checked.
pub fn opening_line(opening: &CommitmentOpening) -> String {
    format!(
        "Revealed {} with nonce {} (commitment verified)",
        emoji(opening.choice),
        opening.nonce_hex()
    )
}

/// Menu of accepted inputs.
pub fn options_line() -> String {
    let labels: Vec<String> = Choice::ALL.iter().map(|c| label(*c)).collect();
    format!("{}  (type rock, paper or scissors; quit to leave)", labels.join("   "))
}
