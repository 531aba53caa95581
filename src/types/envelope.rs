use std::collections::HashMap;

/// # TransportEnvelope
/// Key-value carrier used to hand a value from one component to another.
/// The envelope is owned by the caller, values are only read from and written to well known keys.
pub trait TransportEnvelope {
    /// Gets the value stored under `key`
    fn get_extra(&self, key: &str) -> Option<&str>;

    /// Stores `value` under `key`, replacing any previous value
    fn put_extra(&mut self, key: &str, value: String);

    /// Checks whether the envelope has a value under `key`
    fn has_extra(&self, key: &str) -> bool {
        self.get_extra(key).is_some()
    }
}

/// # Envelope
/// A plain in memory [TransportEnvelope]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Envelope {
    extras: HashMap<String, String>,
}

impl Envelope {
    /// Creates an empty envelope
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the envelope
    pub fn len(&self) -> usize {
        self.extras.len()
    }

    /// Checks if the envelope carries nothing
    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }

    /// Consumes the envelope, returning the raw entries
    pub fn into_inner(self) -> HashMap<String, String> {
        self.extras
    }
}

impl From<HashMap<String, String>> for Envelope {
    fn from(extras: HashMap<String, String>) -> Self {
        Self { extras }
    }
}

impl TransportEnvelope for Envelope {
    fn get_extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }

    fn put_extra(&mut self, key: &str, value: String) {
        self.extras.insert(key.to_string(), value);
    }
}

impl TransportEnvelope for HashMap<String, String> {
    fn get_extra(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn put_extra(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }
}
