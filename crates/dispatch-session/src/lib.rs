//! Composition sessions for Dispatch.
//!
//! A [`Session`] ties a [`MessageLedger`](dispatch_ledger::MessageLedger)
//! to a [`MessageStore`](dispatch_store::MessageStore) and a per-run quota.
//! What to do with an accepted message is decided by a caller-supplied
//! function returning a [`Disposition`] — there is no modal prompt or any
//! other I/O mechanism baked in.

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::{Dispatch, Disposition, Session};
