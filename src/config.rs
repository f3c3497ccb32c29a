//! Game configuration.
//!
//! Defaults match the original screen; environment variables override them.

use std::time::Duration;

use tracing::info;

use crate::core::rng::DeterministicRng;
use crate::game::RoundResolver;

/// Default pause before the result is shown (ms).
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 500;

/// Fixed RNG seed.
pub const ENV_SEED: &str = "RPS_SEED";
/// Reveal delay in milliseconds.
pub const ENV_REVEAL_DELAY_MS: &str = "RPS_REVEAL_DELAY_MS";
/// Output format, `text` or `json`.
pub const ENV_OUTPUT: &str = "RPS_OUTPUT";

/// How rounds are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines with emoji.
    #[default]
    Text,
    /// One JSON object per round.
    Json,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Value could not be parsed for its key.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Pause before the outcome is displayed.
    pub reveal_delay: Duration,
    /// Output format.
    pub output: OutputFormat,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
            output: OutputFormat::Text,
        }
    }
}

impl GameConfig {
    /// Load from process environment.
    pub fn from_env() -> crate::Result<Self> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Load using an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_u64(ENV_SEED, &raw)?);
        }

        if let Some(raw) = lookup(ENV_REVEAL_DELAY_MS) {
            config.reveal_delay = Duration::from_millis(parse_u64(ENV_REVEAL_DELAY_MS, &raw)?);
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            let format = raw.trim().to_ascii_lowercase();
            config.output = match format.as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue { key: ENV_OUTPUT, value: raw });
                }
            };
        }

        Ok(config)
    }

    /// Build the resolver for this configuration.
    ///
    /// Uses the fixed seed when set, otherwise OS entropy. Returns the seed
    /// actually used so the session can be replayed.
    pub fn resolver(&self) -> (RoundResolver<DeterministicRng>, u64) {
        match self.seed {
            Some(seed) => (RoundResolver::from_seed(seed), seed),
            None => {
                let (resolver, seed) = RoundResolver::from_entropy();
                info!("RNG Seed: {} (set {} to replay)", seed, ENV_SEED);
                (resolver, seed)
            }
        }
    }
}

fn parse_u64(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}
