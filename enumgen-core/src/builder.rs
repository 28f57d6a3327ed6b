//! Staged construction of enum definitions.

use indexmap::IndexMap;

use crate::{EnumDefinition, EnumEntry, Error, Result, ident};

/// Mutable staging area for an enum.
///
/// Entries are accumulated in push order and frozen into an
/// [`EnumDefinition`] by [`build`](Self::build). Values are not checked
/// here: the storage type is only known when exporting.
///
/// # Example
///
/// ```
/// use enumgen_core::EnumBuilder;
///
/// let mut builder = EnumBuilder::new("Color");
/// builder.push_entry("Red", 1)?.push_entry("Green", 2)?;
/// let def = builder.build()?;
///
/// assert_eq!(def.entries().len(), 2);
/// # Ok::<(), enumgen_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct EnumBuilder {
    name: String,
    comment: Option<String>,
    entries: IndexMap<String, EnumEntry>,
}

impl EnumBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            entries: IndexMap::new(),
        }
    }

    /// Set the summary comment of the enum.
    ///
    /// A comment that is empty or only whitespace clears it.
    pub fn set_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = non_blank(comment.into());
        self
    }

    /// Append an entry without a comment.
    ///
    /// Fails with [`Error::DuplicateEntryName`] if an entry with the same
    /// name was already pushed.
    pub fn push_entry(
        &mut self,
        name: impl Into<String>,
        value: impl Into<i128>,
    ) -> Result<&mut Self> {
        self.insert(name.into(), value.into(), None)
    }

    /// Append an entry that is rendered with a documentation comment.
    ///
    /// A blank comment is treated as no comment.
    pub fn push_entry_with_comment(
        &mut self,
        name: impl Into<String>,
        value: impl Into<i128>,
        comment: impl Into<String>,
    ) -> Result<&mut Self> {
        self.insert(name.into(), value.into(), non_blank(comment.into()))
    }

    fn insert(&mut self, name: String, value: i128, comment: Option<String>) -> Result<&mut Self> {
        if self.entries.contains_key(&name) {
            return Err(Error::DuplicateEntryName { name });
        }
        let entry = EnumEntry::new(name.clone(), value, comment);
        self.entries.insert(name, entry);
        Ok(self)
    }

    /// Validate names and snapshot the entries into an immutable definition.
    ///
    /// Later pushes to this builder do not affect the returned definition.
    pub fn build(&self) -> Result<EnumDefinition> {
        if let Some(reason) = ident::identifier_error(&self.name) {
            return Err(Error::InvalidName {
                name: self.name.clone(),
                context: "enum",
                reason,
            });
        }

        for name in self.entries.keys() {
            if let Some(reason) = ident::identifier_error(name) {
                return Err(Error::InvalidName {
                    name: name.clone(),
                    context: "entry",
                    reason,
                });
            }
        }

        Ok(EnumDefinition::new(
            self.name.clone(),
            self.comment.clone(),
            self.entries.values().cloned().collect(),
        ))
    }
}

fn non_blank(comment: String) -> Option<String> {
    if comment.trim().is_empty() {
        None
    } else {
        Some(comment)
    }
}
