//! The fixed schema every extraction run produces

use serde::{Deserialize, Serialize};

/// Structured documentation for one API symbol.
///
/// Every field is always present; sections the page lacks are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationRecord {
    pub description: String,
    pub syntax: String,
    pub parameters: Vec<Parameter>,
    pub return_value: String,
    pub remarks: String,
    pub requirements: Requirements,
}

/// One documented parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Full list item text, name included
    pub description: String,
}

/// Requirement rows in document order.
///
/// Keys are unique. Inserting a key that is already present replaces its value
/// but keeps the position where it was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requirements {
    entries: Vec<(String, String)>,
}

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Requirements {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut requirements = Requirements::new();
        for (key, value) in iter {
            requirements.insert(key, value);
        }
        requirements
    }
}
