/// A committed value together with the key it lives under and its version.
///
/// Versions start at 1 on the first write of a key and increase by one on
/// every later write. Entries handed out by the store are copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredEntry {
    pub key: String,
    pub value: Vec<u8>,
    pub version: u64,
}

impl StoredEntry {
    pub fn new(key: impl Into<String>, value: Vec<u8>, version: u64) -> Self {
        Self {
            key: key.into(),
            value,
            version,
        }
    }

    /// Consume the entry, keeping only the key and value.
    pub fn into_pair(self) -> (String, Vec<u8>) {
        (self.key, self.value)
    }
}
