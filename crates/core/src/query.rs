//! Query/sort engine producing ordered views of the record store.
//!
//! Requested sort parameters are parsed into closed enums before any store
//! access, so a request naming an unknown field or order is rejected without
//! touching the backing file.

use crate::error::{QueryError, QueryResult};
use crate::patient::PatientRecord;
use crate::store::RecordStore;
use std::fmt;
use std::str::FromStr;

/// Numeric fields a caller may sort patient records by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Height,
    Weight,
    Bmi,
}

impl SortField {
    /// External string vocabulary, as accepted in `sort_by` parameters.
    pub const ALLOWED: [&'static str; 3] = ["height", "weight", "bmi"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Height => "height",
            SortField::Weight => "weight",
            SortField::Bmi => "bmi",
        }
    }

    fn key(&self, record: &PatientRecord) -> f64 {
        match self {
            SortField::Height => record.height.value(),
            SortField::Weight => record.weight.value(),
            SortField::Bmi => record.bmi,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height" => Ok(SortField::Height),
            "weight" => Ok(SortField::Weight),
            "bmi" => Ok(SortField::Bmi),
            other => Err(QueryError::InvalidField(other.to_string())),
        }
    }
}

/// Direction of a sorted view. Ascending unless the caller asks otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(QueryError::InvalidOrder(other.to_string())),
        }
    }
}

/// Stable sort of `records` by the numeric value of `field`.
///
/// Records with equal key retain their relative order from the input, in both
/// directions. The reversal for descending order happens inside the
/// comparator, where equal keys still compare equal, rather than by reversing
/// the sorted output, which would reverse ties as well.
pub fn sort_records(
    mut records: Vec<PatientRecord>,
    field: SortField,
    order: SortOrder,
) -> Vec<PatientRecord> {
    records.sort_by(|a, b| {
        let ordering = field.key(a).total_cmp(&field.key(b));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    records
}

/// Validation-and-ordering layer between the HTTP boundary and the record store.
///
/// Stateless; each call reads the store's current snapshot.
#[derive(Clone, Debug)]
pub struct QueryEngine {
    store: RecordStore,
}

impl QueryEngine {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Returns the full record collection ordered by `field`.
    ///
    /// An empty store yields an empty vec, a valid non-error result.
    ///
    /// # Errors
    ///
    /// Propagates `StoreError` (as `QueryError::Store`) if the backing file
    /// cannot be read.
    pub fn sort_by(&self, field: SortField, order: SortOrder) -> QueryResult<Vec<PatientRecord>> {
        let records = self.store.get_all()?;
        Ok(sort_records(records, field, order))
    }
}
