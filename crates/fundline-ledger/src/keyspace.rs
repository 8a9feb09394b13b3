//! Store key layout for ledger records.
//!
//! The prefixes are fixed by previously stored ledger data and must not
//! change:
//!
//! - `Per:` + person id
//! - `Req:` + request id
//! - `Dn:` + donation id
//! - the single index record under the fixed key `allRequests`

use fundline_types::RecordKind;

/// Key prefix for person records.
pub const PERSON_PREFIX: &str = "Per:";

/// Key prefix for request records.
pub const REQUEST_PREFIX: &str = "Req:";

/// Key prefix for donation records.
pub const DONATION_PREFIX: &str = "Dn:";

/// Fixed key of the request index record.
pub const INDEX_KEY: &str = "allRequests";

/// Store key for a person id.
pub fn person_key(id: &str) -> String {
    format!("{PERSON_PREFIX}{id}")
}

/// Store key for a request id.
pub fn request_key(id: &str) -> String {
    format!("{REQUEST_PREFIX}{id}")
}

/// Store key for a donation id.
pub fn donation_key(id: &str) -> String {
    format!("{DONATION_PREFIX}{id}")
}

/// Identify which record kind a raw store key addresses, if any.
///
/// Used for pretty-printing raw reads; the engine itself always builds keys
/// through the constructors above.
pub fn classify(key: &str) -> Option<RecordKind> {
    if key == INDEX_KEY {
        Some(RecordKind::Index)
    } else if key.starts_with(PERSON_PREFIX) {
        Some(RecordKind::Person)
    } else if key.starts_with(REQUEST_PREFIX) {
        Some(RecordKind::Request)
    } else if key.starts_with(DONATION_PREFIX) {
        Some(RecordKind::Donation)
    } else {
        None
    }
}
