//! Key-value entry as reported by the key-value store.

/// Result of a key lookup.
///
/// `exists == false` with an empty `value` means the key is absent. That is a
/// normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvEntry {
    pub key: String,
    pub value: String,
    pub exists: bool,
}

impl KvEntry {
    /// An entry for a key that holds `value`.
    pub fn found(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            exists: true,
        }
    }

    /// An entry for a key the store does not hold.
    pub fn missing(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
            exists: false,
        }
    }
}
