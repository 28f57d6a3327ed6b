use enumgen_core::{EnumDefinition, GeneratorInfo, StorageType};

use super::ExportOptions;

/// Validated inputs of a single export, handed to [`Exporter::render`](super::Exporter::render).
///
/// By the time a context exists the namespace is valid, notation tokens
/// are valid, and every entry fits in [`storage`](Self::storage).
#[derive(Debug, Clone, Copy)]
pub struct ExportContext<'a> {
    definition: &'a EnumDefinition,
    options: &'a ExportOptions,
    storage: StorageType,
    namespace: Option<&'a str>,
}

impl<'a> ExportContext<'a> {
    pub(crate) fn new(
        definition: &'a EnumDefinition,
        options: &'a ExportOptions,
        storage: StorageType,
        namespace: Option<&'a str>,
    ) -> Self {
        Self {
            definition,
            options,
            storage,
            namespace,
        }
    }

    pub fn definition(&self) -> &'a EnumDefinition {
        self.definition
    }

    pub fn options(&self) -> &'a ExportOptions {
        self.options
    }

    /// The resolved storage type (explicit option, else the default).
    pub fn storage(&self) -> StorageType {
        self.storage
    }

    /// Whether the resolved storage type is the notation-independent default.
    pub fn is_default_storage(&self) -> bool {
        self.storage == StorageType::default()
    }

    /// The target namespace; an empty namespace option counts as absent.
    pub fn namespace(&self) -> Option<&'a str> {
        self.namespace
    }

    pub fn generator(&self) -> &'a GeneratorInfo {
        &self.options.generator
    }

    /// The enum name, prefixed with the namespace when one is set.
    pub fn qualified_name(&self) -> String {
        match self.namespace {
            Some(ns) => format!("{}.{}", ns, self.definition.name()),
            None => self.definition.name().to_string(),
        }
    }

    /// Whether a blank line separates entry `index` from the previous entry.
    ///
    /// Entries are kept compact unless one of the two neighbours carries a
    /// documentation block.
    pub fn gap_before(&self, index: usize) -> bool {
        let entries = self.definition.entries();
        if index == 0 || index >= entries.len() {
            return false;
        }
        entries[index - 1].comment().is_some() || entries[index].comment().is_some()
    }
}

#[cfg(test)]
mod tests {
    use enumgen_core::EnumBuilder;

    use super::*;

    #[test]
    fn test_qualified_name() {
        let def = EnumBuilder::new("TestEnum").build().unwrap();
        let options = ExportOptions::default();

        let ctx = ExportContext::new(&def, &options, StorageType::default(), None);
        assert_eq!(ctx.qualified_name(), "TestEnum");

        let ctx = ExportContext::new(&def, &options, StorageType::default(), Some("A.B"));
        assert_eq!(ctx.qualified_name(), "A.B.TestEnum");
    }

    #[test]
    fn test_default_storage() {
        let def = EnumBuilder::new("TestEnum").build().unwrap();
        let options = ExportOptions::default();

        let ctx = ExportContext::new(&def, &options, StorageType::Signed32Bit, None);
        assert!(ctx.is_default_storage());

        let ctx = ExportContext::new(&def, &options, StorageType::Unsigned8Bit, None);
        assert!(!ctx.is_default_storage());
    }

    #[test]
    fn test_gap_before() {
        let mut builder = EnumBuilder::new("TestEnum");
        builder.push_entry("A", 1).unwrap();
        builder.push_entry("B", 2).unwrap();
        builder.push_entry_with_comment("C", 3, "C.").unwrap();
        builder.push_entry("D", 4).unwrap();
        builder.push_entry("E", 5).unwrap();
        let def = builder.build().unwrap();
        let options = ExportOptions::default();
        let ctx = ExportContext::new(&def, &options, StorageType::default(), None);

        let gaps: Vec<bool> = (0..def.len()).map(|i| ctx.gap_before(i)).collect();
        assert_eq!(gaps, [false, false, true, true, false]);
    }
}
