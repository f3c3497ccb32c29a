//! Crate-level error type.

use crate::config::ConfigError;
use crate::game::{CommitmentError, ParseChoiceError};

/// Everything that can fail at the edges of the crate.
///
/// Resolution itself cannot fail; these come from input parsing,
/// commitment checks, configuration and the terminal session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unrecognised choice text.
    #[error(transparent)]
    ParseChoice(#[from] ParseChoiceError),

    /// Commitment did not verify.
    #[error(transparent)]
    Commitment(#[from] CommitmentError),

    /// Bad configuration value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal input or output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Round record could not be encoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
