use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("Schema already exists: {0}")]
    SchemaConflict(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to close connection: {0}")]
    Close(#[source] rusqlite::Error),
}

impl StoreError {
    /// True when the error came from the storage engine rather than the façade.
    #[must_use]
    pub fn is_sqlite(&self) -> bool {
        matches!(self, StoreError::Sqlite(_))
    }
}
