//! Data models for contact book entities.

pub mod record;

pub use record::Record;
