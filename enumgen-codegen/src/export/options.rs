use enumgen_core::{GeneratorInfo, StorageType};

use crate::builder::{BraceStyle, Indent};

/// Whether a document starts with the auto-generated banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// Emit the banner naming the generator and its version.
    #[default]
    Default,
    /// Start directly with the notation preamble.
    None,
}

/// Per-call export settings. Nothing here is persisted on the definition.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub header: HeaderMode,
    pub indent: Indent,
    /// Only used by notations with braced scopes.
    pub brace_style: BraceStyle,
    /// Dotted namespace path; `None` or an empty string means no namespace.
    pub namespace: Option<String>,
    /// Storage type; `None` resolves to signed 32-bit.
    pub storage: Option<StorageType>,
    pub generator: GeneratorInfo,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, header: HeaderMode) -> Self {
        self.header = header;
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_brace_style(mut self, brace_style: BraceStyle) -> Self {
        self.brace_style = brace_style;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_storage(mut self, storage: StorageType) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_generator(mut self, generator: GeneratorInfo) -> Self {
        self.generator = generator;
        self
    }
}
