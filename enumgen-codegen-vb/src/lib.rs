//! Visual Basic exporter for enumgen.
//!
//! Renders an [`EnumDefinition`](enumgen_core::EnumDefinition) as a
//! `Public Enum` block, optionally nested in a `Namespace`, with XML
//! documentation comments and a `GeneratedCode` attribute.

mod exporter;
mod type_mapper;

pub use enumgen_codegen::{ExportOptions, Exporter};
pub use exporter::VisualBasicExporter;
pub use type_mapper::VisualBasicTypeMapper;

use enumgen_core::{EnumDefinition, Result};

/// Export `definition` as Visual Basic source.
pub fn export(definition: &EnumDefinition, options: &ExportOptions) -> Result<String> {
    VisualBasicExporter.export(definition, options)
}
