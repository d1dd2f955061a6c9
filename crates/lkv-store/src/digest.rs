use std::fmt;

/// Domain tag mixed into every state digest.
const STATE_DOMAIN: &str = "lkv-state-v1";

/// BLAKE3 fingerprint of a world state's `(key, value)` pairs.
///
/// Pairs are hashed in ascending key order with length prefixes, so two
/// stores holding the same data produce the same digest regardless of
/// insertion order or how many times each key was rewritten.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateDigest([u8; 32]);

impl StateDigest {
    /// Digest a sequence of pairs that is already sorted by key.
    pub fn compute<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [u8])>,
    {
        let mut hasher = blake3::Hasher::new();
        hasher.update(STATE_DOMAIN.as_bytes());
        hasher.update(b":");
        for (key, value) in pairs {
            hasher.update(&(key.len() as u64).to_le_bytes());
            hasher.update(key.as_bytes());
            hasher.update(&(value.len() as u64).to_le_bytes());
            hasher.update(value);
        }
        Self(*hasher.finalize().as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First 8 hex characters.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Debug for StateDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateDigest({})", self.short_hex())
    }
}

impl fmt::Display for StateDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_is_stable() {
        let empty: [(&str, &[u8]); 0] = [];
        assert_eq!(StateDigest::compute(empty), StateDigest::compute(empty));
    }

    #[test]
    fn length_prefix_separates_key_and_value() {
        let a = StateDigest::compute([("ab", b"c".as_slice())]);
        let b = StateDigest::compute([("a", b"bc".as_slice())]);
        assert_ne!(a, b);
    }

    #[test]
    fn hex_forms() {
        let d = StateDigest::compute([("k", b"v".as_slice())]);
        assert_eq!(d.to_hex().len(), 64);
        assert_eq!(d.short_hex().len(), 8);
        assert!(d.to_hex().starts_with(&d.short_hex()));
        assert!(format!("{d:?}").starts_with("StateDigest("));
    }
}
