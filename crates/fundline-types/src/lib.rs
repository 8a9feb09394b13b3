//! Foundation types for the Fundline ledger.
//!
//! This crate provides the four record types that make up the ledger state,
//! the JSON codec that turns them into store values, and the random token
//! generator used for fresh record ids. Every other Fundline crate depends
//! on `fundline-types`.
//!
//! # Key Types
//!
//! - [`Person`] — an identity with the requests it authored and donations it made
//! - [`Request`] — a funding request with a running donation total
//! - [`Donation`] — a single immutable donation against a request
//! - [`RequestIndex`] — the denormalized mirror of every request ever created
//!
//! Records serialize to the exact JSON field names used by previously stored
//! ledger data, so a Fundline ledger can read state written by older
//! deployments unchanged.

pub mod codec;
pub mod error;
pub mod record;
pub mod token;

pub use codec::{decode, encode, Record};
pub use error::CodecError;
pub use record::{Donation, Person, RecordKind, Request, RequestIndex};
pub use token::{alnum_token, DEFAULT_TOKEN_LEN};

/// Identifier of a [`Person`]. Doubles as the display name.
pub type PersonId = String;

/// Generated identifier of a [`Request`].
pub type RequestId = String;

/// Generated identifier of a [`Donation`].
pub type DonationId = String;
