//! Configuration management for the rolodex bot.
//!
//! This module handles loading and validating configuration from
//! environment variables, with a `.env` file picked up when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default data file, relative to the working directory.
const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Default birthday lookahead window in days.
const DEFAULT_LOOKAHEAD_DAYS: u32 = 7;

/// Configuration for the rolodex bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON data file
    pub book_path: PathBuf,

    /// Size of the upcoming-birthdays window in days (default: 7)
    pub lookahead_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: data file location (default: `addressbook.json`)
    /// - `BIRTHDAY_LOOKAHEAD_DAYS`: window size in days, 1-366 (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Pick up a .env file if one exists, without failing when absent.
        let _ = dotenvy::dotenv();

        let book_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_PATH));

        let lookahead_days =
            Self::parse_env_u32("BIRTHDAY_LOOKAHEAD_DAYS", DEFAULT_LOOKAHEAD_DAYS)?;

        if lookahead_days == 0 || lookahead_days > 366 {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_LOOKAHEAD_DAYS".to_string(),
                reason: "Must be between 1 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            lookahead_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            log_level: "error".to_string(),
        }
    }
}
