//! Terminal presentation of records and errors.
//!
//! The core never prints. This layer turns records and `BookError`s into
//! user-facing lines, optionally colored.

use crate::book::AddressBook;
use crate::config::{Config, OutputFormat};
use crate::error::BookError;
use crate::models::Record;
use colored::Colorize;

/// A number the numbering plan accepts, shown next to format errors.
pub const PHONE_EXAMPLE: &str = "+380112223344";

/// `Contact name: <name>, phones: <p1> <p2>`, name in cyan and phones in
/// yellow when `color` is set.
pub fn render_record(record: &Record, color: bool) -> String {
    let phones = record.phone_values().collect::<Vec<_>>().join(" ");

    if color {
        format!(
            "Contact name: {}, phones: {}",
            record.name().cyan(),
            phones.yellow()
        )
    } else {
        format!("Contact name: {}, phones: {}", record.name(), phones)
    }
}

/// `[ERR]` tag plus the error message. Format errors get a valid example
/// appended so the user can correct the input.
pub fn render_error(error: &BookError, color: bool) -> String {
    let tag = if color {
        "[ERR]".red().to_string()
    } else {
        "[ERR]".to_string()
    };

    match error {
        BookError::InvalidPhoneFormat { .. } => {
            format!("{} {} Example: {}", tag, error, PHONE_EXAMPLE)
        }
        _ => format!("{} {}", tag, error),
    }
}

/// Render every record in book order according to `config`.
pub fn render_book(book: &AddressBook, config: &Config) -> serde_json::Result<String> {
    match config.output_format {
        OutputFormat::Text => Ok(book
            .iter()
            .map(|(_, record)| render_record(record, config.color))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let records: Vec<&Record> = book.iter().map(|(_, record)| record).collect();
            serde_json::to_string_pretty(&records)
        }
    }
}
