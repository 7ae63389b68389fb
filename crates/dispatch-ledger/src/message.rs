use std::fmt;

use dispatch_store::MessageRecord;
use dispatch_types::{MessageHash, MessageId, Recipient};

/// Maximum body length in characters. Longer bodies are nulled at
/// construction and refused by the ledger.
pub const MAX_BODY_CHARS: usize = 250;

/// An immutable composed message.
///
/// Every field is fixed at construction time by
/// [`MessageLedger::compose`](crate::MessageLedger::compose): the identifier
/// is drawn at random, the sequence number is reserved from the ledger's
/// counter, and the hash is derived from the identifier prefix, the
/// sequence number, and the first and last words of the body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub(crate) id: MessageId,
    pub(crate) sequence: u64,
    pub(crate) recipient: Recipient,
    pub(crate) body: Option<String>,
    pub(crate) hash: MessageHash,
}

impl Message {
    /// The 10-digit message identifier.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// The 1-based sequence number reserved at construction.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The raw destination.
    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// The body text, absent when no body was supplied or the supplied
    /// body exceeded [`MAX_BODY_CHARS`].
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The derived verification hash.
    pub fn hash(&self) -> &MessageHash {
        &self.hash
    }
}

impl From<&Message> for MessageRecord {
    fn from(message: &Message) -> Self {
        Self {
            message_id: message.id.clone(),
            message_number: message.sequence,
            recipient: message.recipient.clone(),
            message: message.body.clone(),
            message_hash: message.hash.clone(),
        }
    }
}

/// Why a composed message was refused entry into the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The supplied body exceeded [`MAX_BODY_CHARS`]; it was nulled before
    /// hashing and the record refused.
    OversizedBody,
    /// The recipient does not start with `+` or is longer than 14 characters.
    InvalidRecipient,
    /// The identifier is not exactly ten digits. Near-impossible under
    /// normal generation; checked defensively.
    InvalidIdentifier,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::OversizedBody => "message body exceeds 250 characters",
            Self::InvalidRecipient => "recipient is not a wellformed cell number",
            Self::InvalidIdentifier => "message identifier is not ten digits",
        };
        f.write_str(reason)
    }
}

/// Result of a single composition attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The message passed validation and was appended to the ledger.
    Accepted(Message),
    /// The message failed validation; its reserved sequence number was
    /// released back to the ledger.
    Rejected {
        message: Message,
        reason: RejectReason,
    },
}

impl Admission {
    /// Returns `true` for an accepted composition.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The constructed message, accepted or not.
    pub fn message(&self) -> &Message {
        match self {
            Self::Accepted(message) => message,
            Self::Rejected { message, .. } => message,
        }
    }
}
