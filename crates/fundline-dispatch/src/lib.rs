//! Operation dispatch for the Fundline ledger.
//!
//! The invocation transport hands over an operation name and an ordered
//! sequence of string arguments; this crate maps the name onto a
//! [`fundline_ledger::LedgerEngine`] method, validates arity, parses the
//! numeric arguments, and returns the result bytes. Each dispatch is a
//! single atomic step with no cross-call memory.

pub mod dispatcher;
pub mod error;
pub mod operation;

pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use operation::Operation;
