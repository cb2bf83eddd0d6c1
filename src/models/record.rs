//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Phone};
use crate::error::{CommandError, CommandResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is the record's identity key within an address book and never
/// changes after construction. Every phone and the birthday passed
/// validation at insertion time, so a `Record` in hand is always
/// well-formed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Contact name, the identity key
    pub name: String,

    /// Validated phone numbers, in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<Phone>,

    /// Validated birthday, at most one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate and append a phone number.
    ///
    /// Adding a number the record already holds is a successful no-op,
    /// so repeated `add` commands never build up duplicate entries.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidPhone` without mutating the record.
    pub fn add_phone(&mut self, phone: &str) -> CommandResult<()> {
        let phone = Phone::new(phone)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Replace the first phone equal to `old` with a validated `new`.
    ///
    /// `old` is looked up first, then `new` is validated, then the slot
    /// is assigned in place. An absent `old` wins over an invalid `new`,
    /// and an invalid replacement never leaves the record without its
    /// old number.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if `old` is absent,
    /// `CommandError::InvalidPhone` if `new` fails validation. The phone
    /// list is untouched in both cases.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| CommandError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = Phone::new(new)?;
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> CommandResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| CommandError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set (or overwrite) the birthday.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidDate` without mutating the record.
    pub fn set_birthday(&mut self, date: &str) -> CommandResult<()> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    /// The next anniversary of this record's birthday, if one is set.
    pub fn next_birthday(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.birthday.map(|b| b.next_occurrence(today))
    }

    /// Days from `today` until the next birthday anniversary.
    ///
    /// A birthday falling on `today` counts as 0 days away. The result
    /// is always in `[0, 366)`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::NoBirthdaySet` if the record has no
    /// birthday.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> CommandResult<i64> {
        let next = self
            .next_birthday(today)
            .ok_or_else(|| CommandError::NoBirthdaySet(self.name.clone()))?;
        Ok((next - today).num_days())
    }

    /// Semicolon-joined phone list, e.g. `0501234567; 0671112233`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    /// One-line summary: `name: p1; p2, birthday: DD.MM.YYYY`, with the
    /// birthday clause omitted when unset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_display())?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
