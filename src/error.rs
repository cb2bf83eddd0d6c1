//! Error types for the rolodex bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! `CommandError` doubles as the user-facing message catalogue: its `Display` output is
//! exactly what the dispatcher prints when a handler fails.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by command handlers and the data model beneath them.
///
/// Every variant is recovered at the dispatcher boundary and rendered as
/// a one-line reply; none propagate to the read loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No record exists under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record has no phone equal to the given number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// Phone failed validation (must be exactly 10 digits)
    #[error("Invalid phone number '{0}': expected exactly 10 digits")]
    InvalidPhone(String),

    /// Birthday failed validation (must be DD.MM.YYYY, real date)
    #[error("Invalid date '{0}': expected DD.MM.YYYY")]
    InvalidDate(String),

    /// Birthday queried on a record that has none
    #[error("{0} has no birthday set")]
    NoBirthdaySet(String),

    /// Wrong number of positional arguments for a command
    #[error("Usage: {usage}")]
    BadArgumentCount { usage: &'static str },
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidPhone(phone) => CommandError::InvalidPhone(phone),
            ValidationError::InvalidDate(date) => CommandError::InvalidDate(date),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while saving or loading the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("Address book I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not valid address book JSON
    #[error("Address book file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::ContactNotFound("Bob".to_string());
        assert_eq!(err.to_string(), "Contact not found: Bob");

        let err = CommandError::NoBirthdaySet("Ann".to_string());
        assert_eq!(err.to_string(), "Ann has no birthday set");

        let err = CommandError::BadArgumentCount {
            usage: "add <name> <phone>",
        };
        assert_eq!(err.to_string(), "Usage: add <name> <phone>");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_LOOKAHEAD_DAYS".to_string(),
            reason: "Must be at least 1".to_string(),
        };
        assert!(err.to_string().contains("BIRTHDAY_LOOKAHEAD_DAYS"));
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: CommandError = ValidationError::InvalidPhone("123".to_string()).into();
        assert_eq!(err, CommandError::InvalidPhone("123".to_string()));

        let err: CommandError = ValidationError::InvalidDate("1.1.1".to_string()).into();
        assert_eq!(err, CommandError::InvalidDate("1.1.1".to_string()));
    }
}
