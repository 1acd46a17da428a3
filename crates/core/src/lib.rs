//! # PMS Core
//!
//! Core business logic for the PMS patient record service.
//!
//! This crate contains pure read-only data operations:
//! - The record store, answering lookups over the keyed patient data file
//! - The query/sort engine, producing ordered views of the records
//!
//! **No API concerns**: HTTP servers, status codes and wire formats belong in `api-rest`.

pub mod config;
pub mod error;
pub mod patient;
pub mod query;
pub mod store;

pub use config::CoreConfig;
pub use error::{QueryError, QueryResult, StoreError, StoreResult};
pub use patient::PatientRecord;
pub use query::{QueryEngine, SortField, SortOrder};
pub use store::RecordStore;
