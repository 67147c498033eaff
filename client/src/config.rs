//! Client configuration, read from TOML with environment overrides.

use serde::Deserialize;

use crate::error::ClientError;

/// Runtime configuration for a betting session and its sandbox backend.
///
/// Every field has a default, so an empty TOML document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Points credited at sign-up (default: 10 000).
    pub initial_points: i64,

    /// Ledgers between placing a wager and its earliest settlement
    /// (default: 1, about five seconds).
    pub settle_delay_ledgers: u32,

    /// Chat message limit in bytes (default: 500).
    pub max_message_len: u32,

    /// Leaderboard size (default: 10).
    pub ranking_limit: u32,

    /// `tracing` filter string, e.g. `"info"` or `"mock_betting_client=debug"`.
    pub log_level: String,

    /// Fixed seed for the sandbox's outcome draws. Unset means a fresh
    /// random seed per sandbox.
    pub prng_seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            initial_points: 10_000,
            settle_delay_ledgers: 1,
            max_message_len: 500,
            ranking_limit: 10,
            log_level: "info".to_owned(),
            prng_seed: None,
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ClientError> {
        toml::from_str(source).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Applies `MOCKBET_LOG`, `MOCKBET_INITIAL_POINTS`,
    /// `MOCKBET_SETTLE_DELAY` and `MOCKBET_PRNG_SEED` on top of the current
    /// values. Unparsable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = std::env::var("MOCKBET_LOG") {
            self.log_level = level;
        }
        self.initial_points = parse_env("MOCKBET_INITIAL_POINTS", self.initial_points);
        self.settle_delay_ledgers = parse_env("MOCKBET_SETTLE_DELAY", self.settle_delay_ledgers);
        if let Some(seed) = std::env::var("MOCKBET_PRNG_SEED").ok().and_then(|v| v.parse().ok()) {
            self.prng_seed = Some(seed);
        }
        self
    }

    /// The subset stored by the contract at initialization.
    pub fn contract_config(&self) -> mock_betting::Config {
        mock_betting::Config {
            initial_points: self.initial_points as i128,
            settle_delay_ledgers: self.settle_delay_ledgers,
            max_message_len: self.max_message_len,
            ranking_limit: self.ranking_limit,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
