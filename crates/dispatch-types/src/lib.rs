//! Foundation types for Dispatch.
//!
//! This crate provides the value types shared by every other Dispatch crate.
//!
//! # Key Types
//!
//! - [`MessageId`] — 10-digit decimal message identifier, drawn at random
//! - [`Recipient`] — raw phone-number-shaped destination string
//! - [`MessageHash`] — derived uppercase verification string

pub mod error;
pub mod hash;
pub mod id;
pub mod recipient;

pub use error::TypeError;
pub use hash::MessageHash;
pub use id::MessageId;
pub use recipient::Recipient;
