//! Patient record store.
//!
//! The store answers read-only lookups over the patient collection. The
//! backing file is read wholesale on every query, so each call observes one
//! consistent snapshot and edits to the file between requests are picked up
//! without any cache invalidation.
//!
//! ## Storage layout
//!
//! One JSON object, key = record id, value = the stored entry:
//!
//! ```text
//! {
//!   "P001": { "name": "John Doe", "height": 1.72, "weight": 98.6 },
//!   "P002": { "name": "Jane Smith", "height": 1.65, "weight": 70.2 }
//! }
//! ```
//!
//! Record ids are unique by construction (JSON object keys), and the textual
//! order of entries in the file is the collection's natural order.

use crate::config::CoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::patient::{PatientRecord, StoredPatient};
use std::fs;
use std::sync::Arc;

/// Read-only provider of patient record data to the query layer.
#[derive(Clone, Debug)]
pub struct RecordStore {
    cfg: Arc<CoreConfig>,
}

impl RecordStore {
    /// Creates a store reading from the data file named in `cfg`.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Returns the full record collection in natural order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileRead` if the backing file cannot be read and
    /// `StoreError::Parse` if its contents are not a valid keyed patient
    /// collection.
    pub fn get_all(&self) -> StoreResult<Vec<PatientRecord>> {
        let contents =
            fs::read_to_string(self.cfg.patient_data_file()).map_err(StoreError::FileRead)?;
        let entries: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&contents).map_err(StoreError::Parse)?;

        let mut records = Vec::with_capacity(entries.len());
        for (id, value) in entries {
            let stored: StoredPatient =
                serde_json::from_value(value).map_err(StoreError::Parse)?;
            records.push(PatientRecord::from_stored(id, stored));
        }

        Ok(records)
    }

    /// Returns the record whose id matches exactly, or `None`.
    ///
    /// Absence is a regular result, not an error; only an unreadable backing
    /// file is an error.
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<PatientRecord>> {
        Ok(self.get_all()?.into_iter().find(|r| r.id == id))
    }

    /// Returns all records whose name matches exactly (case-sensitive), in
    /// natural relative order.
    ///
    /// No match yields an empty vec, not an error.
    pub fn get_by_name(&self, name: &str) -> StoreResult<Vec<PatientRecord>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|r| r.name.as_str() == name)
            .collect())
    }
}
