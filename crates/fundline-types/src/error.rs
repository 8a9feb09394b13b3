use thiserror::Error;

use crate::record::RecordKind;

/// Errors produced by the record codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A record failed to serialize to JSON.
    #[error("cannot encode {kind}: {reason}")]
    Encode { kind: RecordKind, reason: String },

    /// Stored bytes do not deserialize into the expected record shape.
    #[error("cannot decode {kind}: {reason}")]
    Decode { kind: RecordKind, reason: String },
}
