//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::fmt;
use thiserror::Error;

/// Which phone mutation rejected a candidate number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneOperation {
    /// `Record::add_phone`
    Adding,
    /// `Record::edit_phone`
    Editing,
}

impl fmt::Display for PhoneOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adding => write!(f, "adding"),
            Self::Editing => write!(f, "editing"),
        }
    }
}

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Candidate did not match the numbering plan
    #[error("Wrong phone number {phone} during {operation}.")]
    InvalidPhoneFormat {
        phone: String,
        operation: PhoneOperation,
    },

    /// No phone with this exact value in the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// No record stored under this name
    #[error("Record not found: {0}")]
    RecordNotFound(String),
}

impl BookError {
    /// Lift a domain validation failure into a book error for `operation`.
    pub fn invalid_phone(err: ValidationError, operation: PhoneOperation) -> Self {
        match err {
            ValidationError::InvalidPhone(phone) => Self::InvalidPhoneFormat { phone, operation },
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
