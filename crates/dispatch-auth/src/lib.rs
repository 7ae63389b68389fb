//! Credential format validation for Dispatch.
//!
//! Pure format checks with no state machine: a username rule, a password
//! complexity rule, and a South African cell number rule. Registration
//! reports the first failed rule as a typed error; login is an exact
//! credential match. No persistence and no password hashing — this crate
//! only decides whether credentials are shaped correctly.

pub mod account;
pub mod error;

pub use account::Account;
pub use error::RegistrationError;
