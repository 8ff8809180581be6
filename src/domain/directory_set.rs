use std::collections::{BTreeSet, HashSet};

/// De-duplicated input directory names, kept in first-seen order for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySet {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl DirectorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a directory; returns false when it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if !self.seen.insert(name.clone()) {
            return false;
        }
        self.entries.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Order-insensitive view.
    pub fn to_set(&self) -> BTreeSet<String> {
        self.entries.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for DirectorySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = DirectorySet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}
