/// Errors raised when the backing patient data source cannot be read.
///
/// Either variant means the store is unavailable for this request; the
/// boundary layer surfaces both as server errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read patient data file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to parse patient data file: {0}")]
    Parse(serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by the query/sort engine.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The requested sort field is not one of the enumerated set.
    #[error("invalid sorting field '{0}'. Select from height, weight, bmi.")]
    InvalidField(String),
    /// The requested sort order is neither `asc` nor `desc`.
    #[error("invalid sorting order '{0}'. Select either 'asc' or 'desc'.")]
    InvalidOrder(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type QueryResult<T> = std::result::Result<T, QueryError>;
