use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("Column(s) not found: {}", .0.join(", "))]
    ColumnNotFound(Vec<String>),

    #[error("Invalid strategy: {0}")]
    InvalidStrategy(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("Inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("Empty column list")]
    EmptyColumnList,
}

impl Error {
    /// Build a `ColumnNotFound` error for a single column name
    pub(crate) fn column_not_found(name: impl Into<String>) -> Self {
        Error::ColumnNotFound(vec![name.into()])
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
