//! Rolodex Bot - Main entry point
//!
//! Runs the interactive read-eval-print loop: one command per line, one
//! reply per command, until `close`/`exit` or end of input.

use anyhow::Result;
use chrono::Local;
use rolodex_bot::commands::{dispatch, Reply};
use rolodex_bot::{storage, Config};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so it can supply the default log level.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr; stdout is the conversation.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(path = %config.book_path.display(), "loading address book");
    let mut book = match storage::load(&config.book_path) {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("Welcome to the assistant bot!");
    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        line.clear();
        // EOF behaves like `exit`: save and leave politely.
        if stdin.lock().read_line(&mut line)? == 0 {
            println!("Good bye!");
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let today = Local::now().date_naive();
        match dispatch(&mut book, &line, today, config.lookahead_days) {
            Reply::Message(text) => println!("{}", text),
            Reply::Farewell(text) => {
                println!("{}", text);
                break;
            }
        }
    }

    storage::save(&config.book_path, &book)?;
    info!("session ended");
    Ok(())
}
