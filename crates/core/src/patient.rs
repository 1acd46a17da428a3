//! Patient record model.

use pms_types::{NonEmptyText, PositiveMeasure};
use serde::{Deserialize, Serialize};

/// A single patient record as served by the query layer.
///
/// `bmi` is derived from `height` and `weight` when the record is loaded, so
/// it is always consistent with them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientRecord {
    /// Unique record identifier, the key of the entry in the data file.
    pub id: String,
    /// Patient name, not necessarily unique across records.
    pub name: NonEmptyText,
    /// Height in metres.
    pub height: PositiveMeasure,
    /// Weight in kilograms.
    pub weight: PositiveMeasure,
    /// Body mass index, weight / height².
    pub bmi: f64,
}

/// On-disk shape of one patient entry.
///
/// The record id is the key of the enclosing JSON object and is not repeated
/// inside the entry.
#[derive(Debug, Deserialize)]
pub struct StoredPatient {
    pub name: NonEmptyText,
    pub height: PositiveMeasure,
    pub weight: PositiveMeasure,
}

impl PatientRecord {
    /// Builds a full record from a stored entry, deriving `bmi`.
    pub fn from_stored(id: String, stored: StoredPatient) -> Self {
        let bmi = stored.weight.value() / (stored.height.value() * stored.height.value());

        Self {
            id,
            name: stored.name,
            height: stored.height,
            weight: stored.weight,
            bmi,
        }
    }
}
