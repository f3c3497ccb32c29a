//! Presentation layer (non-deterministic).
//!
//! Display strings, timing and the terminal session.
//! Calls into `game`; nothing in `game` depends on this module.

pub mod messages;
pub mod reveal;
pub mod session;

pub use messages::{emoji, label, result_message, PROMPT, TITLE};
pub use reveal::reveal_after;
pub use session::{run_session, SessionSummary};
