//! Command handlers and the dispatcher that routes to them.
//!
//! Every handler takes the parsed argument list and the address book and
//! produces a one-line reply. Validation and lookup failures from the
//! model layer surface as `CommandError`; the dispatcher renders them,
//! so no error ever reaches the read loop.

use crate::commands::parse_input;
use crate::domain::DATE_FORMAT;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;
use tracing::debug;

/// Dispatcher outcome for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and read the next command.
    Message(String),

    /// Print this and end the session.
    Farewell(String),
}

impl Reply {
    /// The reply text, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Farewell(text) => text,
        }
    }
}

/// Route one raw input line to its handler.
///
/// `today` anchors the birthday computations and `window_days` sizes the
/// `birthdays` lookahead; both are passed in so sessions and tests share
/// the same code path.
pub fn dispatch(
    book: &mut AddressBook,
    line: &str,
    today: NaiveDate,
    window_days: u32,
) -> Reply {
    let Some((keyword, args)) = parse_input(line) else {
        return Reply::Message("Invalid command".to_string());
    };

    debug!(command = %keyword, args = args.len(), "dispatching");

    let result = match keyword.as_str() {
        "close" | "exit" => return Reply::Farewell("Good bye!".to_string()),
        "hello" => Ok("Hello! How can I help you?".to_string()),
        "add" => add_contact(&args, book),
        "change" => change_contact(&args, book),
        "phone" => phone_of(&args, book),
        "all" => Ok(all_contacts(book)),
        "show" if args == ["all"] => Ok(all_contacts(book)),
        "add-birthday" => add_birthday(&args, book),
        "show-birthday" => show_birthday(&args, book),
        "birthdays" => birthdays(&args, book, today, window_days),
        _ => Ok("Invalid command".to_string()),
    };

    Reply::Message(result.unwrap_or_else(|err| err.to_string()))
}

fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::BadArgumentCount {
            usage: "add <name> <phone>",
        });
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            // Validate before the record enters the book: a bad phone
            // must not leave an empty contact behind.
            let mut record = Record::new(*name);
            record.add_phone(phone)?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new] = args else {
        return Err(CommandError::BadArgumentCount {
            usage: "change <name> <old_phone> <new_phone>",
        });
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old, new)?;
    Ok(format!("Phone for {} changed.", name))
}

fn phone_of(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::BadArgumentCount {
            usage: "phone <name>",
        });
    };

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    Ok(format!("{}: {}", record.name, record.phones_display()))
}

fn all_contacts(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }

    book.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = args else {
        return Err(CommandError::BadArgumentCount {
            usage: "add-birthday <name> <DD.MM.YYYY>",
        });
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.set_birthday(date)?;

    // Echo the stored value, not the raw input.
    let stored = record
        .birthday
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    Ok(format!("Birthday for {} added: {}", name, stored))
}

fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::BadArgumentCount {
            usage: "show-birthday <name>",
        });
    };

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    let birthday = record
        .birthday
        .as_ref()
        .ok_or_else(|| CommandError::NoBirthdaySet(name.to_string()))?;
    Ok(format!("{}'s birthday: {}", name, birthday))
}

fn birthdays(
    args: &[&str],
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> CommandResult<String> {
    if !args.is_empty() {
        return Err(CommandError::BadArgumentCount {
            usage: "birthdays",
        });
    }

    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return Ok(format!(
            "No upcoming birthdays in next {} days",
            window_days
        ));
    }

    Ok(upcoming
        .iter()
        .map(|u| format!("{} -> {}", u.name, u.date.format(DATE_FORMAT)))
        .collect::<Vec<_>>()
        .join("\n"))
}
