use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum recipient length in characters, including the leading `+`.
pub const MAX_RECIPIENT_CHARS: usize = 14;

/// A raw, phone-number-shaped destination.
///
/// The string is stored as supplied, even when malformed, so rejected
/// composition attempts can still report what the caller asked for. Format
/// checking happens at acceptance time via [`Recipient::is_wellformed`]:
/// the value must begin with `+` and be at most 14 characters. This is
/// deliberately looser than the registration-side cell number validator —
/// it is not full E.164 validation.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipient(String);

impl Recipient {
    /// Wrap a raw destination string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns `true` if the destination starts with `+` and fits the
    /// length limit.
    pub fn is_wellformed(&self) -> bool {
        self.0.starts_with('+') && self.0.chars().count() <= MAX_RECIPIENT_CHARS
    }

    /// The raw destination string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Recipient({})", self.0)
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Recipient {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn international_number_is_wellformed() {
        assert!(Recipient::new("+27718693002").is_wellformed());
    }

    #[test]
    fn missing_plus_is_malformed() {
        assert!(!Recipient::new("27718693002").is_wellformed());
    }

    #[test]
    fn empty_is_malformed() {
        assert!(!Recipient::new("").is_wellformed());
    }

    #[test]
    fn fourteen_characters_is_the_limit() {
        assert!(Recipient::new("+2771869300212").is_wellformed());
        assert!(!Recipient::new("+27718693002123").is_wellformed());
    }

    #[test]
    fn raw_string_is_preserved() {
        let r = Recipient::new("27718693002");
        assert_eq!(r.as_str(), "27718693002");
    }

    #[test]
    fn serde_is_transparent() {
        let r = Recipient::new("+27718693002");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"+27718693002\"");
        let parsed: Recipient = serde_json::from_str(&json).unwrap();
        assert_eq!(r, parsed);
    }
}
