use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Number of decimal digits in a wellformed identifier.
pub const ID_DIGITS: usize = 10;

/// Ten-digit decimal message identifier.
///
/// Identifiers are drawn uniformly at random from `[0, 10^10)` and
/// zero-padded to ten digits. Uniqueness within a run is best-effort only:
/// there is no collision check, and collisions are accepted as a known
/// limitation of the scheme.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Draw a fresh random identifier.
    pub fn random() -> Self {
        let number = rand::thread_rng().gen_range(0..10_000_000_000u64);
        Self(format!("{number:010}"))
    }

    /// Parse an identifier, enforcing the 10-digit format.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        if s.len() != ID_DIGITS {
            return Err(TypeError::InvalidLength {
                expected: ID_DIGITS,
                actual: s.len(),
            });
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::NonNumeric(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Wrap a raw string without validation. Use [`MessageId::parse`] when
    /// the format must hold; this exists so malformed input can still be
    /// carried through validation and reported.
    pub fn from_raw(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns `true` if the identifier is exactly ten ASCII digits.
    pub fn is_wellformed(&self) -> bool {
        self.0.len() == ID_DIGITS && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// The identifier digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first two digits, used as the hash prefix.
    pub fn prefix(&self) -> &str {
        self.0.get(..2).unwrap_or(&self.0)
    }
}

impl fmt::Debug for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageId({})", self.0)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
