//! Contact Book - demo entry point
//!
//! Builds a small address book, removes one contact and prints the rest.

use anyhow::Result;
use contact_book::display::{render_book, render_error};
use contact_book::{AddressBook, BookResult, Config, Record};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr; stdout carries the book
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut book = AddressBook::new();

    for name in ["John", "Jane"] {
        let mut record = Record::new(name);
        for phone in ["+380112223344", "+380115556677"] {
            report(record.add_phone(phone), config.color);
        }
        book.add_record(record);
    }

    report(book.delete("Jane").map(|_| ()), config.color);

    println!("{}", render_book(&book, &config)?);

    info!(records = book.len(), "Done");
    Ok(())
}

/// Print a core failure for the user and carry on.
fn report(result: BookResult<()>, color: bool) {
    if let Err(e) = result {
        eprintln!("{}", render_error(&e, color));
    }
}
