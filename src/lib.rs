//! # Rock, Paper, Scissors
//!
//! Round resolution for Rock, Paper, Scissors, plus a small terminal front-end.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  ROCK PAPER SCISSORS                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rng.rs      - Seedable Xorshift128+ PRNG                │
//! │  └── hash.rs     - Domain-separated SHA-256                  │
//! │                                                              │
//! │  game/           - Round logic (deterministic per seed)      │
//! │  ├── choice.rs   - Hands and the beats-relation              │
//! │  ├── outcome.rs  - Win/lose/tie                              │
//! │  ├── resolver.rs - Random pick and resolution                │
//! │  └── commitment.rs - Commit/reveal of the computer's pick    │
//! │                                                              │
//! │  presentation/   - Display (non-deterministic)               │
//! │  ├── messages.rs - Strings and emoji                         │
//! │  ├── reveal.rs   - Delayed outcome reveal                    │
//! │  └── session.rs  - Terminal loop with commit/reveal          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use rps::{Choice, Outcome, RoundResolver};
//!
//! let mut resolver = RoundResolver::from_seed(7);
//! let round = resolver.play(Choice::Rock);
//! assert_eq!(round.user, Choice::Rock);
//! assert_eq!(round.outcome == Outcome::Tie, round.computer == Choice::Rock);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod presentation;

// Re-export commonly used types
pub use config::{GameConfig, OutputFormat};
pub use crate::core::rng::{DeterministicRng, RandomSource};
pub use error::{Error, Result};
pub use game::{resolve, Choice, Outcome, Round, RoundResolver};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
