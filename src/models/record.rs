//! Record model representing a named contact with its phone numbers.

use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult, PhoneOperation};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A named contact holding zero or more validated phone numbers.
///
/// Phones keep insertion order and may repeat. Lookups by value always
/// address the first matching entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name, also the key in the address book
    name: String,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with no phone numbers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Phone values as string slices, in insertion order.
    pub fn phone_values(&self) -> impl Iterator<Item = &str> + '_ {
        self.phones.iter().map(PhoneNumber::as_str)
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// `BookError::InvalidPhoneFormat` if the number is rejected; the record
    /// is left unchanged.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> BookResult<()> {
        let phone = PhoneNumber::new(phone)
            .map_err(|e| BookError::invalid_phone(e, PhoneOperation::Adding))?;

        debug!(name = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `previous` with `new_phone`, in place.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `previous` is not in the record
    /// - `BookError::InvalidPhoneFormat` if `new_phone` is rejected
    pub fn edit_phone(&mut self, previous: &str, new_phone: impl Into<String>) -> BookResult<()> {
        let index = self.position(previous)?;
        self.phones[index]
            .set(new_phone)
            .map_err(|e| BookError::invalid_phone(e, PhoneOperation::Editing))?;

        debug!(
            name = %self.name,
            previous = %previous,
            phone = %self.phones[index],
            "Phone edited"
        );
        Ok(())
    }

    /// Remove the first phone equal to `phone` and hand it back.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<PhoneNumber> {
        let index = self.position(phone)?;
        let removed = self.phones.remove(index);

        debug!(name = %self.name, phone = %removed, "Phone removed");
        Ok(removed)
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> BookResult<&PhoneNumber> {
        self.phones
            .iter()
            .find(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }

    fn position(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phone_values().collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Record {
        let mut record = Record::new("John");
        record.add_phone("+380112223344").unwrap();
        record.add_phone("+380115556677").unwrap();
        record
    }

    #[test]
    fn test_record_new_is_empty() {
        let record = Record::new("John");
        assert_eq!(record.name(), "John");
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_stores_verbatim() {
        let mut record = Record::new("John");
        record.add_phone("+380112223344").unwrap();
        assert_eq!(record.phone_values().collect::<Vec<_>>(), vec!["+380112223344"]);
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut record = john();
        let err = record.add_phone("123456").unwrap_err();
        assert_eq!(
            err,
            BookError::InvalidPhoneFormat {
                phone: "123456".to_string(),
                operation: PhoneOperation::Adding,
            }
        );
        assert_eq!(record, john());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = Record::new("John");
        record.add_phone("0112223344").unwrap();
        record.add_phone("0112223344").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = john();
        record.edit_phone("+380112223344", "0671112233").unwrap();
        assert_eq!(
            record.phone_values().collect::<Vec<_>>(),
            vec!["0671112233", "+380115556677"]
        );
    }

    #[test]
    fn test_edit_phone_missing_previous() {
        let mut record = john();
        let err = record.edit_phone("0000000000", "0671112233").unwrap_err();
        assert_eq!(err, BookError::PhoneNotFound("0000000000".to_string()));
        assert_eq!(record, john());
    }

    #[test]
    fn test_edit_phone_missing_previous_reported_before_validation() {
        let mut record = john();
        let err = record.edit_phone("0000000000", "bad").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound(_)));
    }

    #[test]
    fn test_edit_phone_invalid_new_value() {
        let mut record = john();
        let err = record.edit_phone("+380112223344", "bad").unwrap_err();
        assert_eq!(
            err,
            BookError::InvalidPhoneFormat {
                phone: "bad".to_string(),
                operation: PhoneOperation::Editing,
            }
        );
        assert_eq!(record, john());
    }

    #[test]
    fn test_edit_phone_touches_first_duplicate_only() {
        let mut record = Record::new("John");
        record.add_phone("0112223344").unwrap();
        record.add_phone("0112223344").unwrap();
        record.edit_phone("0112223344", "0671112233").unwrap();
        assert_eq!(
            record.phone_values().collect::<Vec<_>>(),
            vec!["0671112233", "0112223344"]
        );
    }

    #[test]
    fn test_remove_phone() {
        let mut record = john();
        let removed = record.remove_phone("+380112223344").unwrap();
        assert_eq!(removed.as_str(), "+380112223344");
        assert_eq!(record.phone_values().collect::<Vec<_>>(), vec!["+380115556677"]);
    }

    #[test]
    fn test_remove_phone_not_found() {
        let mut record = john();
        let err = record.remove_phone("0671112233").unwrap_err();
        assert_eq!(err, BookError::PhoneNotFound("0671112233".to_string()));
        assert_eq!(record, john());
    }

    #[test]
    fn test_find_phone() {
        let record = john();
        assert_eq!(record.find_phone("+380115556677").unwrap(), "+380115556677");
        assert!(matches!(
            record.find_phone("+380115556678"),
            Err(BookError::PhoneNotFound(_))
        ));
    }

    #[test]
    fn test_record_display() {
        assert_eq!(
            john().to_string(),
            "Contact name: John, phones: +380112223344 +380115556677"
        );
        assert_eq!(Record::new("Empty").to_string(), "Contact name: Empty, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_value(john()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "John",
                "phones": ["+380112223344", "+380115556677"]
            })
        );
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_phone() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name": "John", "phones": ["123456"]}"#);
        assert!(result.is_err());
    }
}
