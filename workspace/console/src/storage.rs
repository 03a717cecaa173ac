use std::collections::BTreeMap;

/// Per-session key/value storage, the console's stand-in for browser
/// `localStorage`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalStorage {
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every entry whose key is not in `keep`. Returns how many went.
    pub fn clear_except(&mut self, keep: &[&str]) -> usize {
        let before = self.items.len();
        self.items.retain(|key, _| keep.contains(&key.as_str()));
        before - self.items.len()
    }
}
