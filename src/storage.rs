//! JSON persistence for the address book.
//!
//! The whole book is written as one pretty-printed JSON array of records.
//! The value objects re-validate on deserialize, so a hand-edited file
//! with a bad phone or date fails the load instead of smuggling invalid
//! data into the book.

use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Load the address book from `path`.
///
/// A missing file is a first run and yields an empty book. Any other
/// read failure, or a file that does not parse as an address book, is an
/// error.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no data file, starting with an empty book");
            return Ok(AddressBook::new());
        }
        Err(err) => return Err(StorageError::Io(err)),
    };

    let book: AddressBook = serde_json::from_str(&data)?;
    info!(path = %path.display(), records = book.len(), "address book loaded");
    Ok(book)
}

/// Save the address book to `path`, replacing any previous contents.
pub fn save(path: &Path, book: &AddressBook) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(book)?;
    fs::write(path, json)?;
    info!(path = %path.display(), records = book.len(), "address book saved");
    Ok(())
}
