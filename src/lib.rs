//! Rolodex Bot - an interactive command-line address book.
//!
//! Stores contact names, validated 10-digit phone numbers, and optional
//! DD.MM.YYYY birthdays; accepts line-oriented commands; reports
//! upcoming birthdays within a lookahead window, observing
//! weekend-falling anniversaries on the following Monday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (`Phone`, `Birthday`)
//! - **models**: `Record` and the `AddressBook` that holds them
//! - **commands**: input parsing and command dispatch
//! - **storage**: JSON save/load of the whole book
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use commands::{dispatch, parse_input, Reply};
pub use config::Config;
pub use domain::{Birthday, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
