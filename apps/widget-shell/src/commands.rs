//! Parser for the shell's line commands.
//!
//! `parse_command` takes one input line and returns the [`Command`] it
//! names. Keywords are case-insensitive; the item code after `add` is passed
//! through untouched and matched exactly by the basket.
//!
//!  - `add <code>`
//!  - `total`
//!  - `widgets`
//!  - `catalog`
//!  - `offers`
//!  - `clear`
//!  - `help`
//!  - `exit`

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Add(String),
    /// `add` without exactly one code.
    MalformedAdd,
    Total,
    Widgets,
    Catalog,
    Offers,
    Clear,
    Help,
    Exit,
    /// Blank line.
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let parts = line.split_whitespace().collect::<Vec<_>>();
    let keyword = parts[0].to_lowercase();
    match keyword.as_str() {
        "add" => match parts.as_slice() {
            [_, code] => Command::Add(code.to_string()),
            _ => Command::MalformedAdd,
        },
        "total" if parts.len() == 1 => Command::Total,
        "widgets" if parts.len() == 1 => Command::Widgets,
        "catalog" if parts.len() == 1 => Command::Catalog,
        "offers" if parts.len() == 1 => Command::Offers,
        "clear" if parts.len() == 1 => Command::Clear,
        "help" if parts.len() == 1 => Command::Help,
        "exit" | "quit" if parts.len() == 1 => Command::Exit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Command summary printed at start-up and by `help`.
pub const HELP: &str = "\
Waiting for user prompt to be:
    - add code - Add new widget to the basket, code should be one of [R01, G01, B01]
    - total - Returns total price of the basket
    - widgets - Returns current widgets added to the basket
    - catalog - Returns details about the widget catalog
    - offers - Returns current offers available
    - clear - Resets the basket
    - help - Shows this message
    - exit - exit this interactive session";
