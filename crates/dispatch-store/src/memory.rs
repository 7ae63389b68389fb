use std::sync::Mutex;

use crate::error::StoreResult;
use crate::record::MessageRecord;
use crate::traits::MessageStore;

/// In-memory message store for tests and embedding.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<MessageRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageStore for InMemoryStore {
    fn append(&self, record: &MessageRecord) -> StoreResult<()> {
        let mut records = self.records.lock().expect("store mutex poisoned");
        records.push(record.clone());
        Ok(())
    }

    fn read_all(&self) -> StoreResult<Vec<MessageRecord>> {
        let records = self.records.lock().expect("store mutex poisoned");
        Ok(records.clone())
    }

    fn count(&self) -> StoreResult<u64> {
        let records = self.records.lock().expect("store mutex poisoned");
        Ok(records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use dispatch_types::{MessageHash, MessageId, Recipient};

    use super::*;

    fn make_record(seq: u64) -> MessageRecord {
        let id = MessageId::parse("0012345678").unwrap();
        let hash = MessageHash::derive(&id, seq, Some("hello there"));
        MessageRecord {
            message_id: id,
            message_number: seq,
            recipient: Recipient::new("+27718693002"),
            message: Some("hello there".to_string()),
            message_hash: hash,
        }
    }

    #[test]
    fn append_preserves_order() {
        let store = InMemoryStore::new();
        store.append(&make_record(1)).unwrap();
        store.append(&make_record(2)).unwrap();

        let read = store.read_all().unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].message_number, 1);
        assert_eq!(read[1].message_number, 2);
    }

    #[test]
    fn duplicates_are_kept() {
        let store = InMemoryStore::new();
        let record = make_record(1);
        store.append(&record).unwrap();
        store.append(&record).unwrap();
        assert_eq!(store.count().unwrap(), 2);
    }
}
