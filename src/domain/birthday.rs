//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and parse format for birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono's %d/%m accept single-digit values, so the shape is checked
// separately to enforce zero padding.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("date pattern is a valid regex"));

/// A type-safe wrapper for a contact's birthday.
///
/// Accepts only `DD.MM.YYYY` with zero-padded day and month, and only
/// dates that exist on the calendar. The stored value is a
/// [`NaiveDate`]; `Display` renders it back in the same format.
///
/// # Example
///
/// ```
/// use rolodex_bot::domain::Birthday;
///
/// let birthday = Birthday::new("12.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "12.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse and validate a `DD.MM.YYYY` birthday string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the shape is wrong or
    /// the date does not exist (e.g. `31.02.2000`).
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();

        if !DATE_PATTERN.is_match(&date) {
            return Err(ValidationError::InvalidDate(date));
        }

        NaiveDate::parse_from_str(&date, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(date))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The nearest future (or same-day) anniversary of this birthday.
    ///
    /// Projects the month/day onto `today`'s year and rolls forward one
    /// year if that date has already passed. A 29 February birthday is
    /// observed on 1 March in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let candidate = self.on_year(today.year());
        if candidate < today {
            self.on_year(today.year() + 1)
        } else {
            candidate
        }
    }

    fn on_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .expect("1 March exists in every year")
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
