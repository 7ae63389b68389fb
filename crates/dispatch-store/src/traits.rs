use crate::error::StoreResult;
use crate::record::MessageRecord;

/// Append-only message persistence.
///
/// All implementations must satisfy these invariants:
/// - Records are appended in call order and never rewritten or compacted.
/// - Appends are not deduplicated: two appends of the same record produce
///   two stored entries. Calling once per logical send is the caller's
///   responsibility.
/// - A failed append leaves previously stored records intact and is
///   retryable.
/// - All I/O errors are propagated, never silently ignored.
pub trait MessageStore: Send + Sync {
    /// Append one record to the store.
    fn append(&self, record: &MessageRecord) -> StoreResult<()>;

    /// Read every stored record in append order.
    fn read_all(&self) -> StoreResult<Vec<MessageRecord>>;

    /// Number of stored records.
    ///
    /// Default implementation reads everything; backends may override with
    /// something cheaper.
    fn count(&self) -> StoreResult<u64> {
        Ok(self.read_all()?.len() as u64)
    }
}
