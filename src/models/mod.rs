//! Data models: the contact record and the address book that holds them.

pub mod book;
pub mod record;

pub use book::{AddressBook, UpcomingBirthday};
pub use record::Record;
