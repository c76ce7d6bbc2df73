//! In-memory address book keyed by contact name.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Collection of contact records keyed by exact name.
///
/// Adding a record under a name that is already present replaces the
/// previous record (last-write-wins). Iteration follows the order in which
/// names were first added; a replaced record keeps its slot.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().to_string();
        let replaced = self.records.insert(name.clone(), record);

        if replaced.is_some() {
            warn!(name = %name, "Record replaced");
        } else {
            debug!(name = %name, "Record added");
            self.order.push(name);
        }

        replaced
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Look up a record by exact name for in-place phone edits.
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Remove the record stored under `name` and hand it back.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let removed = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        self.order.retain(|n| n != name);

        debug!(name = %name, "Record deleted");
        Ok(removed)
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            names: self.order.iter(),
            records: &self.records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Borrowing iterator over an [`AddressBook`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    names: std::slice::Iter<'a, String>,
    records: &'a HashMap<String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        // `order` and `records` always hold the same key set.
        let name = self.names.next()?;
        self.records.get(name).map(|record| (name.as_str(), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
