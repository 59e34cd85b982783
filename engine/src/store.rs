//! Store - the authoritative record list.
//!
//! The Store owns every record in insertion order. Derived views are computed
//! from it by [`crate::view`] and never written back.

use crate::{error::Result, Error, Record, RecordId, UserData, NO_RECORD};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The main store holding all records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Record>", try_from = "Vec<Record>")]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a store holding the built-in seed records.
    pub fn seeded() -> Self {
        Self {
            records: crate::seed::seed_records(),
        }
    }

    /// Create a store from existing records.
    ///
    /// Every id must be non-zero and unique.
    pub fn with_records(records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.is_new() {
                return Err(Error::InvalidInput(format!(
                    "record '{} {}' has reserved id 0",
                    record.name, record.surname
                )));
            }
            if !seen.insert(record.id) {
                return Err(Error::InvalidInput(format!(
                    "duplicate record id {}",
                    record.id
                )));
            }
        }
        Ok(Self { records })
    }

    /// Load a store from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Record> =
            serde_json::from_str(json).map_err(|e| Error::InvalidInput(e.to_string()))?;
        Self::with_records(records)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Count of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by ID.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Check if a record exists.
    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// The id the next inserted record will receive.
    ///
    /// Fails once the highest id is `RecordId::MAX`.
    pub fn next_id(&self) -> Result<RecordId> {
        let max = self.records.iter().map(|r| r.id).max().unwrap_or(NO_RECORD);
        max.checked_add(1)
            .ok_or_else(|| Error::InvalidInput(format!("no record id left after {}", max)))
    }

    /// Append a new record, assigning it the next id.
    pub fn insert(&mut self, data: UserData) -> Result<RecordId> {
        let id = self.next_id()?;
        self.records.push(Record::from_data(id, data));
        Ok(id)
    }

    /// Remove a record by ID, returning it.
    pub fn remove(&mut self, id: RecordId) -> Result<Record> {
        let index = self.position(id).ok_or(Error::RecordNotFound(id))?;
        Ok(self.records.remove(index))
    }

    /// Insert a new record (id `0`) or replace the record with the same id.
    ///
    /// Replacing keeps the record's position. A non-zero id with no matching
    /// record is rejected rather than inserted.
    pub fn upsert(&mut self, record: Record) -> Result<RecordId> {
        if record.is_new() {
            return self.insert(record.data());
        }

        let id = record.id;
        let index = self.position(id).ok_or(Error::RecordNotFound(id))?;
        self.records[index] = record;
        Ok(id)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        if id == NO_RECORD {
            return None;
        }
        self.records.iter().position(|r| r.id == id)
    }
}

impl TryFrom<Vec<Record>> for Store {
    type Error = Error;

    fn try_from(records: Vec<Record>) -> Result<Self> {
        Self::with_records(records)
    }
}

impl From<Store> for Vec<Record> {
    fn from(store: Store) -> Self {
        store.records
    }
}
