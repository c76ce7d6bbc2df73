//! Domain value objects and types.
//!
//! Phone numbers are the only value with a format rule, so they get a
//! type-safe wrapper validated at construction time. Contact names stay
//! plain strings.

pub mod errors;
pub mod phone;

pub use errors::ValidationError;
pub use phone::PhoneNumber;
