//! Append-only message persistence for Dispatch.
//!
//! Accepted messages are mirrored to disk as newline-delimited JSON: one
//! object per line, UTF-8, appended and never rewritten or compacted.
//!
//! # Storage Backends
//!
//! All backends implement the [`MessageStore`] trait:
//!
//! - [`JsonlStore`] — file-backed JSON-lines store
//! - [`InMemoryStore`] — `Vec`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Records are appended, never rewritten.
//! 2. Appends are not deduplicated; calling twice with the same record
//!    produces two lines.
//! 3. All I/O errors are propagated, never silently ignored, and leave
//!    previously appended records intact.

pub mod error;
pub mod jsonl;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use jsonl::JsonlStore;
pub use memory::InMemoryStore;
pub use record::MessageRecord;
pub use traits::MessageStore;
