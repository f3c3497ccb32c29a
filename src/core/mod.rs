//! Core deterministic primitives.
//!
//! Randomness and hashing shared by the game logic.

pub mod rng;
pub mod hash;

// Re-export core types
pub use rng::{DeterministicRng, RandomSource};
pub use hash::{CommitHash, CommitHasher};
