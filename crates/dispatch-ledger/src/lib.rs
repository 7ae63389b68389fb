//! Core message logic for Dispatch.
//!
//! This crate is the heart of the system. It provides:
//! - The immutable [`Message`] record with its derived identifier and hash
//! - The [`MessageLedger`] validator/factory with sequence reservation
//! - [`Admission`] outcomes encoding accept/reject decisions as values
//!
//! Validation failures are never errors: a rejected composition returns
//! [`Admission::Rejected`] carrying the constructed record and a
//! [`RejectReason`], and releases its reserved sequence number back to the
//! ledger.

pub mod ledger;
pub mod message;

pub use ledger::MessageLedger;
pub use message::{Admission, Message, RejectReason, MAX_BODY_CHARS};
