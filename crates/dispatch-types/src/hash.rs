use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::MessageId;

/// Digest used when a message has no body to digest.
const NO_MESSAGE: &str = "NOMESSAGE";

/// Derived, uppercase verification string for a message.
///
/// The hash has three `:`-separated parts: the first two digits of the
/// message identifier, the sequence number, and a digest of the body's
/// first and last words concatenated with no separator. A one-word body
/// contributes that word twice. An absent or whitespace-only body yields
/// the `NOMESSAGE` digest.
///
/// This is a verification string, not a cryptographic hash.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageHash(String);

impl MessageHash {
    /// Derive the hash for a message's identifier, sequence number, and body.
    pub fn derive(id: &MessageId, sequence: u64, body: Option<&str>) -> Self {
        let prefix = id.prefix();
        let trimmed = body.map(str::trim).unwrap_or("");
        if trimmed.is_empty() {
            return Self(format!("{prefix}:{sequence}:{NO_MESSAGE}"));
        }
        let mut words = trimmed.split_whitespace();
        let first = words.next().unwrap_or(trimmed);
        let last = words.last().unwrap_or(first);
        Self(format!("{prefix}:{sequence}:{first}{last}").to_uppercase())
    }

    /// The hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for MessageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageHash({})", self.0)
    }
}

impl fmt::Display for MessageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn id(s: &str) -> MessageId {
        MessageId::parse(s).unwrap()
    }

    #[test]
    fn two_word_body() {
        let hash = MessageHash::derive(&id("0012345678"), 1, Some("Hi tonight"));
        assert_eq!(hash.as_str(), "00:1:HITONIGHT");
    }

    #[test]
    fn one_word_body_contributes_the_word_twice() {
        let hash = MessageHash::derive(&id("4212345678"), 3, Some("Hello"));
        assert_eq!(hash.as_str(), "42:3:HELLOHELLO");
    }

    #[test]
    fn long_body_digests_first_and_last_words_only() {
        let hash = MessageHash::derive(&id("9912345678"), 7, Some("see you at the usual place"));
        assert_eq!(hash.as_str(), "99:7:SEEPLACE");
    }

    #[test]
    fn whitespace_runs_do_not_produce_empty_words() {
        let hash = MessageHash::derive(&id("1012345678"), 2, Some("  hi \t  there  "));
        assert_eq!(hash.as_str(), "10:2:HITHERE");
    }

    #[test]
    fn absent_body_digests_to_nomessage() {
        let hash = MessageHash::derive(&id("0712345678"), 5, None);
        assert_eq!(hash.as_str(), "07:5:NOMESSAGE");
    }

    #[test]
    fn whitespace_only_body_digests_to_nomessage() {
        let hash = MessageHash::derive(&id("0712345678"), 5, Some("   \t "));
        assert_eq!(hash.as_str(), "07:5:NOMESSAGE");
    }

    #[test]
    fn serde_is_transparent() {
        let hash = MessageHash::derive(&id("0012345678"), 1, Some("Hi tonight"));
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"00:1:HITONIGHT\"");
        let parsed: MessageHash = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, parsed);
    }

    proptest! {
        #[test]
        fn hash_equals_its_own_uppercase(body in "[a-zA-Z ]{0,60}", seq in 1u64..10_000) {
            let hash = MessageHash::derive(&id("3141592653"), seq, Some(&body));
            prop_assert_eq!(hash.as_str(), hash.as_str().to_uppercase());
        }

        #[test]
        fn hash_starts_with_prefix_and_sequence(body in "[a-zA-Z ]{0,60}", seq in 1u64..10_000) {
            let hash = MessageHash::derive(&id("3141592653"), seq, Some(&body));
            let prefix = format!("31:{}:", seq);
            prop_assert!(hash.as_str().starts_with(&prefix));
        }
    }
}
