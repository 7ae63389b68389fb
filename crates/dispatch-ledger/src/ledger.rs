use std::sync::Mutex;

use tracing::{debug, warn};

use dispatch_types::{MessageHash, MessageId, Recipient};

use crate::message::{Admission, Message, RejectReason, MAX_BODY_CHARS};

/// Sentinel returned by [`MessageLedger::render`] when nothing was accepted.
const EMPTY_TRANSCRIPT: &str = "No messages sent.";

/// Ordered in-memory collection of accepted messages, plus the sequence
/// counter that numbers every composition attempt.
///
/// The counter and the accepted list live behind one mutex so the
/// reserve → validate → append sequence is a single critical section:
/// construction order and the no-duplicate-sequence-number invariant hold
/// even if a future caller turns out to be concurrent. The expected use is
/// still a single logical actor issuing calls serially.
///
/// The ledger owns its counter; there is no process-wide state. Create one
/// ledger per run and pass it where it is needed.
pub struct MessageLedger {
    inner: Mutex<LedgerState>,
}

#[derive(Default)]
struct LedgerState {
    /// Net reserved-then-released sequence counter. Equals the number of
    /// currently accepted messages; see `total_attempts`.
    counter: u64,
    accepted: Vec<Message>,
}

impl MessageLedger {
    /// Create an empty ledger with its counter at zero.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LedgerState::default()),
        }
    }

    /// Construct a message from a recipient and an optional body, decide
    /// acceptance, and append to the ledger on acceptance.
    ///
    /// A sequence number is reserved up front and released again if the
    /// message is rejected, so the next composition reuses it. The
    /// identifier is random; uniqueness is best-effort only.
    pub fn compose(&self, recipient: Recipient, body: Option<String>) -> Admission {
        let mut state = self.inner.lock().expect("ledger mutex poisoned");

        state.counter += 1;
        let sequence = state.counter;
        let id = MessageId::random();

        // An oversized body is nulled before hashing; the record is still
        // constructed so the attempt can be reported, then refused below.
        let oversized = body
            .as_deref()
            .is_some_and(|b| b.chars().count() > MAX_BODY_CHARS);
        let body = if oversized { None } else { body };

        let hash = MessageHash::derive(&id, sequence, body.as_deref());
        let message = Message {
            id,
            sequence,
            recipient,
            body,
            hash,
        };

        let reason = if oversized {
            Some(RejectReason::OversizedBody)
        } else if !message.recipient.is_wellformed() {
            Some(RejectReason::InvalidRecipient)
        } else if !message.id.is_wellformed() {
            Some(RejectReason::InvalidIdentifier)
        } else {
            None
        };

        match reason {
            None => {
                state.accepted.push(message.clone());
                debug!(id = %message.id, sequence, "message accepted");
                Admission::Accepted(message)
            }
            Some(reason) => {
                state.counter -= 1;
                warn!(id = %message.id, sequence, %reason, "message rejected");
                Admission::Rejected { message, reason }
            }
        }
    }

    /// Current counter value: the net count of reserved-then-released
    /// sequence numbers, equal to the number of accepted messages.
    ///
    /// Rejected attempts release their reservation, so they do not show up
    /// here. This is the reserved/released interpretation of the counter,
    /// not a monotonic attempt log.
    pub fn total_attempts(&self) -> u64 {
        self.inner.lock().expect("ledger mutex poisoned").counter
    }

    /// Snapshot of all accepted messages in construction order.
    pub fn accepted(&self) -> Vec<Message> {
        self.inner
            .lock()
            .expect("ledger mutex poisoned")
            .accepted
            .clone()
    }

    /// Human-readable multi-line summary of all accepted messages, or the
    /// `"No messages sent."` sentinel when the ledger is empty.
    pub fn render(&self) -> String {
        let state = self.inner.lock().expect("ledger mutex poisoned");
        if state.accepted.is_empty() {
            return EMPTY_TRANSCRIPT.to_string();
        }

        let mut out = String::new();
        for message in &state.accepted {
            out.push_str(&format!(
                "ID: {}, Hash: {}, Recipient: {}, Message: {}\n",
                message.id,
                message.hash,
                message.recipient,
                message.body().unwrap_or(""),
            ));
        }
        out
    }
}

impl Default for MessageLedger {
    fn default() -> Self {
        Self::new()
    }
}
