//! Raw input line tokenizer.

/// Split an input line into a lowercased command keyword and verbatim
/// positional arguments.
///
/// Splits on any whitespace; there is no quoting support. Returns `None`
/// for blank lines.
///
/// # Example
///
/// ```
/// use rolodex_bot::commands::parse_input;
///
/// let (keyword, args) = parse_input("ADD Bob 1234567890").unwrap();
/// assert_eq!(keyword, "add");
/// assert_eq!(args, vec!["Bob", "1234567890"]);
/// ```
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?.to_lowercase();
    Some((keyword, tokens.collect()))
}
