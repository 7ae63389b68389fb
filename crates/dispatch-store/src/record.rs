use serde::{Deserialize, Serialize};

use dispatch_types::{MessageHash, MessageId, Recipient};

/// Wire form of a persisted message.
///
/// One record serializes to one JSON object; the store writes one object
/// per line. Field names on the wire are fixed:
///
/// ```text
/// {"messageID": "...", "messageNumber": 1, "recipient": "+27...",
///  "message": "..." | null, "messageHash": "..."}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "messageID")]
    pub message_id: MessageId,
    #[serde(rename = "messageNumber")]
    pub message_number: u64,
    pub recipient: Recipient,
    pub message: Option<String>,
    #[serde(rename = "messageHash")]
    pub message_hash: MessageHash,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: Option<&str>) -> MessageRecord {
        let id = MessageId::parse("0012345678").unwrap();
        let hash = MessageHash::derive(&id, 1, body);
        MessageRecord {
            message_id: id,
            message_number: 1,
            recipient: Recipient::new("+27718693002"),
            message: body.map(str::to_string),
            message_hash: hash,
        }
    }

    #[test]
    fn wire_field_names() {
        let json = serde_json::to_string(&record(Some("Hi tonight"))).unwrap();
        assert!(json.contains("\"messageID\":\"0012345678\""));
        assert!(json.contains("\"messageNumber\":1"));
        assert!(json.contains("\"recipient\":\"+27718693002\""));
        assert!(json.contains("\"message\":\"Hi tonight\""));
        assert!(json.contains("\"messageHash\":\"00:1:HITONIGHT\""));
    }

    #[test]
    fn absent_body_serializes_as_null() {
        let json = serde_json::to_string(&record(None)).unwrap();
        assert!(json.contains("\"message\":null"));
    }

    #[test]
    fn serde_roundtrip() {
        let original = record(Some("Hi tonight"));
        let json = serde_json::to_string(&original).unwrap();
        let parsed: MessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }
}
