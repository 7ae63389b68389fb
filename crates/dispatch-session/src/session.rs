use tracing::debug;

use dispatch_ledger::{Admission, Message, MessageLedger, RejectReason};
use dispatch_store::{MessageRecord, MessageStore};
use dispatch_types::Recipient;

use crate::error::SessionError;

/// What a caller chose to do with an accepted message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Persist the message and treat it as sent.
    Send,
    /// Persist the message for later without sending.
    Store,
    /// Keep the message in the ledger only.
    Disregard,
}

/// Outcome of a single dispatch attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Accepted, persisted, and sent.
    Sent(Message),
    /// Accepted and persisted for later.
    Stored(Message),
    /// Accepted but not persisted.
    Disregarded(Message),
    /// Refused by the ledger; the reserved sequence number was released.
    Rejected {
        message: Message,
        reason: RejectReason,
    },
    /// The per-run quota was already exhausted; nothing was composed.
    QuotaReached,
}

/// A single-actor composition session.
///
/// Owns the ledger, a store, and the maximum number of messages for the
/// run. The quota is enforced before calling into the core, against the
/// ledger's net counter — rejected attempts release their reservation and
/// so do not consume quota.
pub struct Session<S: MessageStore> {
    ledger: MessageLedger,
    store: S,
    quota: u64,
}

impl<S: MessageStore> Session<S> {
    /// Start a session writing to `store`, allowing at most `quota`
    /// accepted messages.
    pub fn new(store: S, quota: u64) -> Self {
        Self {
            ledger: MessageLedger::new(),
            store,
            quota,
        }
    }

    /// Compose one message and act on the caller's disposition.
    ///
    /// An accepted message stays in the ledger whatever the disposition;
    /// only `Send` and `Store` append it to the store. A store failure is
    /// returned as an error while the ledger keeps the message, so the
    /// append can be retried with [`Session::persist`].
    pub fn dispatch<F>(
        &self,
        recipient: Recipient,
        body: Option<String>,
        decide: F,
    ) -> Result<Dispatch, SessionError>
    where
        F: FnOnce(&Message) -> Disposition,
    {
        if self.ledger.total_attempts() >= self.quota {
            debug!(quota = self.quota, "quota reached");
            return Ok(Dispatch::QuotaReached);
        }

        let message = match self.ledger.compose(recipient, body) {
            Admission::Rejected { message, reason } => {
                return Ok(Dispatch::Rejected { message, reason });
            }
            Admission::Accepted(message) => message,
        };

        match decide(&message) {
            Disposition::Send => {
                self.persist(&message)?;
                Ok(Dispatch::Sent(message))
            }
            Disposition::Store => {
                self.persist(&message)?;
                Ok(Dispatch::Stored(message))
            }
            Disposition::Disregard => Ok(Dispatch::Disregarded(message)),
        }
    }

    /// Append one message to the store.
    ///
    /// Idempotence is not provided: every call appends another record.
    pub fn persist(&self, message: &Message) -> Result<(), SessionError> {
        self.store.append(&MessageRecord::from(message))?;
        Ok(())
    }

    /// The session's ledger.
    pub fn ledger(&self) -> &MessageLedger {
        &self.ledger
    }

    /// The session's store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Render the ledger's accepted messages.
    pub fn transcript(&self) -> String {
        self.ledger.render()
    }
}
