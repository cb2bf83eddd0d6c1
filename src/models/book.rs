//! AddressBook model: the name-keyed collection of records.

use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One entry in the upcoming-birthdays report.
///
/// `date` is the date the birthday is observed on, i.e. the next
/// anniversary after weekend roll-forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Observed (possibly shifted) celebration date
    pub date: NaiveDate,
}

/// The in-memory address book: records keyed by name, iterated in
/// insertion order.
///
/// Backed by a `Vec` with linear name lookup; an interactive book never
/// grows past the point where that matters, and the `Vec` keeps
/// insertion order without an extra index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any existing record with the same
    /// name. Overwriting keeps the original position in iteration order.
    pub fn add_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name == record.name) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Exact-match mutable lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name == name)
    }

    /// Remove and return the record with the given name. Absent names
    /// are a no-op, not an error.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.records.iter().position(|r| r.name == name)?;
        Some(self.records.remove(index))
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose next birthday falls within the lookahead window.
    ///
    /// For every record with a birthday, the next anniversary is
    /// computed; a Saturday anniversary is observed two days later and a
    /// Sunday anniversary one day later (the following Monday). A record
    /// is included iff the observed date lies in
    /// `[today, today + window_days - 1]` inclusive. The shift is applied
    /// BEFORE the window test, so a weekend anniversary near the end of
    /// the window can shift out of it. Results follow book insertion
    /// order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(next) = record.next_birthday(today) else {
                continue;
            };

            let observed = match next.weekday() {
                Weekday::Sat => next + Duration::days(2),
                Weekday::Sun => next + Duration::days(1),
                _ => next,
            };

            let days_away = (observed - today).num_days();
            if (0..i64::from(window_days)).contains(&days_away) {
                upcoming.push(UpcomingBirthday {
                    name: record.name.clone(),
                    date: observed,
                });
            }
        }

        debug!(
            window_days,
            matches = upcoming.len(),
            "computed upcoming birthdays"
        );
        upcoming
    }
}
