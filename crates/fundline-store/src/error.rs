/// Errors from state store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure serializing or deserializing the backing document.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The backing document exists but cannot be understood.
    #[error("corrupt store at {path}: {reason}")]
    Corrupt { path: String, reason: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
