//! End-to-end command conversations over a single address book.
//!
//! These tests drive the dispatcher exactly the way the read loop does:
//! raw input lines in, one-line replies out, state accumulating in one
//! `AddressBook` across the session.

use chrono::NaiveDate;
use rolodex_bot::commands::{dispatch, Reply};
use rolodex_bot::AddressBook;

/// Fixed session date: Monday, 10 June 2024.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn send(book: &mut AddressBook, line: &str) -> String {
    dispatch(book, line, today(), 7).text().to_string()
}

#[test]
fn test_full_session() {
    let mut book = AddressBook::new();

    assert_eq!(send(&mut book, "hello"), "Hello! How can I help you?");
    assert_eq!(send(&mut book, "show all"), "No contacts found.");

    assert_eq!(send(&mut book, "add Ann 1234567890"), "Contact added.");
    assert_eq!(send(&mut book, "add Bob 0987654321"), "Contact added.");
    assert_eq!(send(&mut book, "add Ann 0671112233"), "Contact updated.");

    assert_eq!(send(&mut book, "phone Ann"), "Ann: 1234567890; 0671112233");

    assert_eq!(
        send(&mut book, "change Ann 1234567890 0501234567"),
        "Phone for Ann changed."
    );
    assert_eq!(send(&mut book, "phone Ann"), "Ann: 0501234567; 0671112233");

    assert_eq!(
        send(&mut book, "add-birthday Ann 12.06.1990"),
        "Birthday for Ann added: 12.06.1990"
    );
    assert_eq!(
        send(&mut book, "show-birthday Ann"),
        "Ann's birthday: 12.06.1990"
    );

    assert_eq!(
        send(&mut book, "show all"),
        "Ann: 0501234567; 0671112233, birthday: 12.06.1990\nBob: 0987654321"
    );

    assert_eq!(send(&mut book, "birthdays"), "Ann -> 12.06.2024");

    assert_eq!(
        dispatch(&mut book, "exit", today(), 7),
        Reply::Farewell("Good bye!".to_string())
    );
}

#[test]
fn test_repeated_add_of_same_phone_is_idempotent() {
    let mut book = AddressBook::new();

    assert_eq!(send(&mut book, "add Bob 1234567890"), "Contact added.");
    assert_eq!(send(&mut book, "add Bob 1234567890"), "Contact updated.");

    // Idempotent-add policy: the number appears exactly once.
    assert_eq!(send(&mut book, "phone Bob"), "Bob: 1234567890");
    assert_eq!(book.find("Bob").unwrap().phones.len(), 1);
}

#[test]
fn test_unknown_contact_messages() {
    let mut book = AddressBook::new();

    assert_eq!(send(&mut book, "phone Nobody"), "Contact not found: Nobody");
    assert_eq!(
        send(&mut book, "change Nobody 1234567890 0987654321"),
        "Contact not found: Nobody"
    );
    assert_eq!(
        send(&mut book, "add-birthday Nobody 01.01.2000"),
        "Contact not found: Nobody"
    );
    assert_eq!(
        send(&mut book, "show-birthday Nobody"),
        "Contact not found: Nobody"
    );
}

#[test]
fn test_change_with_unknown_old_phone_keeps_list() {
    let mut book = AddressBook::new();
    send(&mut book, "add Bob 1234567890");

    let text = send(&mut book, "change Bob 0000000000 1111111111");
    assert_eq!(text, "Phone number not found: 0000000000");
    assert_eq!(send(&mut book, "phone Bob"), "Bob: 1234567890");
}

#[test]
fn test_change_with_short_old_and_new_reports_missing_phone() {
    let mut book = AddressBook::new();
    send(&mut book, "add Bob 1234567890");

    // Neither argument is a valid phone; the lookup of the old number
    // runs first, so the reply is about the missing phone, not the
    // invalid replacement.
    let text = send(&mut book, "change Bob 000 111");
    assert_eq!(text, "Phone number not found: 000");
    assert_eq!(send(&mut book, "phone Bob"), "Bob: 1234567890");
}

#[test]
fn test_change_with_invalid_new_phone_keeps_old() {
    let mut book = AddressBook::new();
    send(&mut book, "add Bob 1234567890");

    let text = send(&mut book, "change Bob 1234567890 123");
    assert!(text.contains("Invalid phone number"));
    assert_eq!(send(&mut book, "phone Bob"), "Bob: 1234567890");
}

#[test]
fn test_validation_failures_are_messages_not_panics() {
    let mut book = AddressBook::new();

    assert!(send(&mut book, "add Bob 12345").contains("Invalid phone number"));
    send(&mut book, "add Bob 1234567890");
    assert!(send(&mut book, "add-birthday Bob 1990-06-12").contains("Invalid date"));
    assert!(send(&mut book, "add-birthday Bob 31.02.2000").contains("Invalid date"));
}

#[test]
fn test_wrong_argument_counts_give_usage() {
    let mut book = AddressBook::new();

    assert_eq!(send(&mut book, "add"), "Usage: add <name> <phone>");
    assert_eq!(
        send(&mut book, "change Bob"),
        "Usage: change <name> <old_phone> <new_phone>"
    );
    assert_eq!(send(&mut book, "phone"), "Usage: phone <name>");
    assert_eq!(
        send(&mut book, "add-birthday Bob"),
        "Usage: add-birthday <name> <DD.MM.YYYY>"
    );
    assert_eq!(send(&mut book, "show-birthday"), "Usage: show-birthday <name>");
    assert_eq!(send(&mut book, "birthdays now"), "Usage: birthdays");
}

#[test]
fn test_unrecognized_input() {
    let mut book = AddressBook::new();

    assert_eq!(send(&mut book, "dance"), "Invalid command");
    assert_eq!(send(&mut book, "show"), "Invalid command");
    assert_eq!(send(&mut book, "show everything"), "Invalid command");
}

#[test]
fn test_names_are_case_sensitive_but_keywords_are_not() {
    let mut book = AddressBook::new();
    send(&mut book, "ADD Bob 1234567890");

    assert_eq!(send(&mut book, "PHONE Bob"), "Bob: 1234567890");
    assert_eq!(send(&mut book, "phone bob"), "Contact not found: bob");
}
