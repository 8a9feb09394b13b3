//! JSON codec between ledger records and store values.
//!
//! Pure and stateless. The byte encoding is plain JSON with the wire field
//! names declared on the record types, so values written by older
//! deployments decode unchanged.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;
use crate::record::{Donation, Person, RecordKind, Request, RequestIndex};

/// A ledger record that can be stored as a keyed value.
pub trait Record: Serialize + DeserializeOwned {
    /// The kind tag, used for error context and keyspace routing.
    const KIND: RecordKind;
}

impl Record for Person {
    const KIND: RecordKind = RecordKind::Person;
}

impl Record for Request {
    const KIND: RecordKind = RecordKind::Request;
}

impl Record for Donation {
    const KIND: RecordKind = RecordKind::Donation;
}

impl Record for RequestIndex {
    const KIND: RecordKind = RecordKind::Index;
}

/// Serialize a record to its store value.
pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(record).map_err(|e| CodecError::Encode {
        kind: R::KIND,
        reason: e.to_string(),
    })
}

/// Deserialize a store value into a record.
pub fn decode<R: Record>(bytes: &[u8]) -> Result<R, CodecError> {
    serde_json::from_slice(bytes).map_err(|e| CodecError::Decode {
        kind: R::KIND,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_roundtrip() {
        let p = Person::new("alice");
        let bytes = encode(&p).unwrap();
        let back: Person = decode(&bytes).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn request_roundtrip_preserves_donations() {
        let mut r = Request::new("r1", "alice", "Tuition", "pay for school", 1000);
        r.apply_donation("d1", 500);
        let bytes = encode(&r).unwrap();
        let back: Request = decode(&bytes).unwrap();
        assert_eq!(back.current_money, 500);
        assert_eq!(back.donation_list, vec!["d1"]);
    }

    #[test]
    fn decode_failure_names_the_record_kind() {
        let err = decode::<Request>(b"not json").unwrap_err();
        match err {
            CodecError::Decode { kind, .. } => assert_eq!(kind, RecordKind::Request),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        // A donation value is not a person value.
        let bytes = encode(&Donation::new("d1", "bob", "r1", 5)).unwrap();
        assert!(decode::<Person>(&bytes).is_err());
    }

    #[test]
    fn index_roundtrip() {
        let mut index = RequestIndex::empty();
        index.push(Request::new("r1", "alice", "n", "d", 10));
        let bytes = encode(&index).unwrap();
        let back: RequestIndex = decode(&bytes).unwrap();
        assert_eq!(back, index);
    }
}
