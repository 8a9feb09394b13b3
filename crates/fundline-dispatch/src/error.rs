use fundline_ledger::LedgerError;

/// Errors produced by operation dispatch.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The operation name matched no known entry point.
    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),

    /// Wrong argument count or an argument that failed to parse. Nothing
    /// was written.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The engine rejected or failed the operation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
