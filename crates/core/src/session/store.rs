/// Key-value session storage, injected wherever the core needs it.
///
/// The web client this library backs kept its session in browser
/// localStorage: string keys, JSON-string values, synchronous access. This
/// trait is the explicit replacement — a frontend shell can bridge it to
/// localStorage, a desktop shell to a settings file, tests to a HashMap.
pub trait SessionStore: Send {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Remove the value under `key`, if any.
    fn remove(&mut self, key: &str);

    /// Remove everything.
    fn clear(&mut self);
}

/// In-memory `SessionStore`. The default for tests and headless use.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
