//! Game Logic Module
//!
//! Round resolution. Pure apart from the resolver's own RNG.
//!
//! ## Module Structure
//!
//! - `choice`: The three hands and the beats-relation
//! - `outcome`: Win/lose/tie from the user's side
//! - `resolver`: Random computer pick and round resolution
//! - `commitment`: Sealing the computer's pick before the user moves

pub mod choice;
pub mod outcome;
pub mod resolver;
pub mod commitment;

// Re-export key types
pub use choice::{Choice, ParseChoiceError};
pub use outcome::Outcome;
pub use resolver::{resolve, Round, RoundResolver};
pub use commitment::{ChoiceCommitment, CommitmentOpening, CommitmentError, SealedRound};
