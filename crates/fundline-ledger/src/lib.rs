//! Keyed-state ledger for crowdfunding donations.
//!
//! This crate is the heart of Fundline. It provides:
//! - The keyspace convention mapping entities to store keys
//! - [`LedgerEngine`], which implements initialization, `create_request`,
//!   `create_donation`, and raw `read` over any [`fundline_store::StateStore`]
//! - The cross-record invariants: every donation updates exactly one
//!   request's total and donation list, exactly one person's donation list,
//!   and the request index's mirrored copy of that request
//!
//! The engine holds no record state between operations; every operation
//! re-reads what it needs and writes fresh snapshots back.

pub mod engine;
pub mod error;
pub mod keyspace;

pub use engine::{LedgerEngine, MISSING_VALUE_PLACEHOLDER};
pub use error::LedgerError;
