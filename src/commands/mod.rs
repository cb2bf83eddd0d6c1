//! Command layer: input-line parsing and dispatch to handlers.
//!
//! The dispatcher is the error boundary of the application. Handlers
//! return `CommandResult`; `dispatch` renders both successes and
//! failures as one-line replies for the read loop to print.

pub mod handlers;
pub mod parser;

pub use handlers::{dispatch, Reply};
pub use parser::parse_input;
