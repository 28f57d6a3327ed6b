//! Immutable enum model handed to exporters.

/// A single named value of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    name: String,
    value: i128,
    comment: Option<String>,
}

impl EnumEntry {
    pub(crate) fn new(name: String, value: i128, comment: Option<String>) -> Self {
        Self {
            name,
            value,
            comment,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value; it is range checked against a storage type at export time.
    pub fn value(&self) -> i128 {
        self.value
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// A validated enum, produced by [`EnumBuilder::build`](crate::EnumBuilder::build).
///
/// Entries keep the order in which they were pushed. A definition cannot be
/// mutated and can be exported any number of times with different options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    name: String,
    comment: Option<String>,
    entries: Vec<EnumEntry>,
}

impl EnumDefinition {
    pub(crate) fn new(name: String, comment: Option<String>, entries: Vec<EnumEntry>) -> Self {
        Self {
            name,
            comment,
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Summary comment of the enum.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an entry by its (case-sensitive) name.
    pub fn entry(&self, name: &str) -> Option<&EnumEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}
