//! Runtime configuration, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `QUICKFOOD_ROSTER` | `drivers.txt` |
//! | `QUICKFOOD_INVOICE` | `invoice.txt` |
//! | `QUICKFOOD_FIELD_ATTEMPTS` | `3` |
//! | `QUICKFOOD_CHANNEL_CAPACITY` | `32` |

use std::path::PathBuf;
use thiserror::Error;

pub const ROSTER_VAR: &str = "QUICKFOOD_ROSTER";
pub const INVOICE_VAR: &str = "QUICKFOOD_INVOICE";
pub const FIELD_ATTEMPTS_VAR: &str = "QUICKFOOD_FIELD_ATTEMPTS";
pub const CHANNEL_CAPACITY_VAR: &str = "QUICKFOOD_CHANNEL_CAPACITY";

/// Errors for configuration values that are present but unusable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    NotPositive { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Driver roster read at startup.
    pub roster_path: PathBuf,
    /// Append-only invoice log.
    pub invoice_path: PathBuf,
    /// Tries per text field before the order attempt restarts.
    pub max_field_attempts: usize,
    /// Mailbox size of each actor.
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from("drivers.txt"),
            invoice_path: PathBuf::from("invoice.txt"),
            max_field_attempts: 3,
            channel_capacity: 32,
        }
    }
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable lookup; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = lookup(ROSTER_VAR) {
            config.roster_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(INVOICE_VAR) {
            config.invoice_path = PathBuf::from(path);
        }
        if let Some(value) = lookup(FIELD_ATTEMPTS_VAR) {
            config.max_field_attempts = positive(FIELD_ATTEMPTS_VAR, value)?;
        }
        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = positive(CHANNEL_CAPACITY_VAR, value)?;
        }
        Ok(config)
    }
}

fn positive(var: &'static str, value: String) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::NotPositive { var, value }),
    }
}
