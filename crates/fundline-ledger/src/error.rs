use fundline_store::StoreError;
use fundline_types::CodecError;

/// Errors produced by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Malformed caller input (negative target, non-positive donation).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A referenced record is missing where its absence is a hard error
    /// (donating to a request that does not exist).
    #[error("not found: {key}")]
    NotFound { key: String },

    /// Stored bytes failed to deserialize into the expected record shape.
    #[error(transparent)]
    Decode(#[from] CodecError),

    /// The request index is absent from the store. The index is created at
    /// initialization and is never auto-healed.
    #[error("request index unavailable: {reason}")]
    IndexUnavailable { reason: String },

    /// The id space produced no unused token within the retry budget.
    #[error("no unused {prefix} id after {attempts} attempts; enlarge the token length")]
    IdSpaceExhausted { prefix: String, attempts: usize },

    /// Underlying get/put failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl LedgerError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
