//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use std::path::{Path, PathBuf};

/// Default patient data file, relative to the working directory.
pub const DEFAULT_PATIENT_DATA_FILE: &str = "patients.json";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    patient_data_file: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` pointing at the given patient data file.
    pub fn new(patient_data_file: PathBuf) -> Self {
        Self { patient_data_file }
    }

    /// Resolve the patient data file path from an optional environment value.
    ///
    /// If `value` is `None` or empty/whitespace, falls back to [`DEFAULT_PATIENT_DATA_FILE`].
    pub fn from_env_value(value: Option<String>) -> Self {
        let path = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PATIENT_DATA_FILE.to_string());

        Self::new(PathBuf::from(path))
    }

    pub fn patient_data_file(&self) -> &Path {
        &self.patient_data_file
    }
}
