//! Ordered key → response mapping for one category.

use super::KnowledgeError;

/// One canned answer: lookup key and the response returned for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub response: String,
}

/// Insertion-ordered section of the knowledge base. Keys are unique.
///
/// Order is part of the contract: scans that stop at the first hit, and the
/// token-overlap tie-break, both walk entries in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeSection {
    entries: Vec<Entry>,
}

impl KnowledgeSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a section from `(key, response)` pairs, keeping their order.
    pub fn from_pairs<K, R>(
        pairs: impl IntoIterator<Item = (K, R)>,
    ) -> Result<Self, KnowledgeError>
    where
        K: Into<String>,
        R: Into<String>,
    {
        let mut section = Self::new();
        for (key, response) in pairs {
            section.push(key, response)?;
        }
        Ok(section)
    }

    /// Appends an entry. Fails if the key is already present.
    pub fn push(
        &mut self,
        key: impl Into<String>,
        response: impl Into<String>,
    ) -> Result<(), KnowledgeError> {
        let key = key.into();
        if self.contains_key(&key) {
            return Err(KnowledgeError::DuplicateKey(key));
        }
        self.entries.push(Entry {
            key,
            response: response.into(),
        });
        Ok(())
    }

    /// Exact (case-sensitive) lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.response.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
