//! Key validation and half-open key ranges.
//!
//! Keys are opaque strings ordered lexicographically by their raw UTF-8
//! bytes, which is exactly `str`'s `Ord`. Valid keys:
//! - Must be non-empty
//! - Must not exceed the configured maximum length in bytes
//! - Must not contain `\u{0}`, which the ledger host reserves for
//!   composite-key namespaces

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Default upper bound on key length, in bytes.
pub const DEFAULT_MAX_KEY_LEN: usize = 256;

/// Validate a key, returning `Ok(())` if it may be stored.
///
/// # Examples
///
/// ```
/// use lkv_types::key::validate_key;
///
/// assert!(validate_key("record0", 256).is_ok());
/// assert!(validate_key("", 256).is_err());
/// assert!(validate_key("a\u{0}b", 256).is_err());
/// ```
pub fn validate_key(key: &str, max_len: usize) -> Result<(), TypeError> {
    if key.is_empty() {
        return Err(TypeError::InvalidKey {
            key: key.to_string(),
            reason: "key must not be empty".into(),
        });
    }

    if key.len() > max_len {
        return Err(TypeError::InvalidKey {
            key: key.to_string(),
            reason: format!("key is {} bytes, limit is {max_len}", key.len()),
        });
    }

    if key.contains('\u{0}') {
        return Err(TypeError::InvalidKey {
            key: key.to_string(),
            reason: "key must not contain a NUL character".into(),
        });
    }

    Ok(())
}

/// A half-open key interval `[start, end)`.
///
/// A key `k` is inside the range when `start <= k < end`. A range whose
/// `start` is not below its `end` contains nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyRange {
    pub start: String,
    pub end: String,
}

impl KeyRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns `true` if `key` lies in `[start, end)`.
    pub fn contains(&self, key: &str) -> bool {
        self.start.as_str() <= key && key < self.end.as_str()
    }

    /// Returns `true` if no key can satisfy the range.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn valid_keys() {
        assert!(validate_key("record0", DEFAULT_MAX_KEY_LEN).is_ok());
        assert!(validate_key("record99", DEFAULT_MAX_KEY_LEN).is_ok());
        assert!(validate_key("fruit/with spaces", DEFAULT_MAX_KEY_LEN).is_ok());
        assert!(validate_key("ключ", DEFAULT_MAX_KEY_LEN).is_ok());
    }

    #[test]
    fn reject_empty_key() {
        let err = validate_key("", DEFAULT_MAX_KEY_LEN).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidKey);
    }

    #[test]
    fn reject_nul() {
        assert!(validate_key("\u{0}record", DEFAULT_MAX_KEY_LEN).is_err());
        assert!(validate_key("record\u{0}", DEFAULT_MAX_KEY_LEN).is_err());
    }

    #[test]
    fn reject_overlong_key() {
        let key = "k".repeat(9);
        assert!(validate_key(&key, 8).is_err());
        assert!(validate_key(&key[..8], 8).is_ok());
    }

    #[test]
    fn range_is_half_open() {
        let range = KeyRange::new("record0", "record99");
        assert!(range.contains("record0"));
        assert!(range.contains("record10"));
        assert!(range.contains("record98"));
        assert!(!range.contains("record99"));
        assert!(!range.contains("record990"));
        assert!(!range.contains("recor"));
    }

    #[test]
    fn lexicographic_not_numeric() {
        let range = KeyRange::new("record0", "record99");
        // "record100" sorts between "record1" and "record2".
        assert!(range.contains("record100"));
        assert!(range.contains("record9"));
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(KeyRange::new("b", "a").is_empty());
        assert!(KeyRange::new("a", "a").is_empty());
        assert!(!KeyRange::new("a", "b").is_empty());
        assert!(!KeyRange::new("a", "a").contains("a"));
    }

    #[test]
    fn display() {
        let range = KeyRange::new("a", "b");
        assert_eq!(range.to_string(), "[\"a\", \"b\")");
    }

    proptest! {
        #[test]
        fn contains_matches_byte_order(start in ".{0,6}", end in ".{0,6}", key in ".{0,6}") {
            let range = KeyRange::new(start.clone(), end.clone());
            let expected = start.as_bytes() <= key.as_bytes() && key.as_bytes() < end.as_bytes();
            prop_assert_eq!(range.contains(&key), expected);
        }
    }
}
