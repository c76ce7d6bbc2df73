//! Contact Book - an in-memory address book with validated phone numbers.
//!
//! # Architecture
//!
//! - **domain**: the `PhoneNumber` value object and its numbering plan
//! - **models**: `Record`, a named contact with an ordered phone list
//! - **book**: `AddressBook`, records keyed by name
//! - **error**: custom error types for precise error handling
//! - **config**: configuration from environment variables
//! - **display**: terminal rendering of records and errors

pub mod book;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use config::{Config, OutputFormat};
pub use domain::{PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, PhoneOperation};
pub use models::Record;
