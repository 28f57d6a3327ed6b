//! C# exporter for enumgen.
//!
//! Renders an [`EnumDefinition`](enumgen_core::EnumDefinition) as a
//! `public enum`, optionally wrapped in a `namespace`, with XML documentation
//! comments and a `GeneratedCode` attribute.

mod exporter;
mod type_mapper;

pub use enumgen_codegen::{ExportOptions, Exporter};
pub use exporter::CSharpExporter;
pub use type_mapper::CSharpTypeMapper;

use enumgen_core::{EnumDefinition, Result};

/// Export `definition` as C# source.
pub fn export(definition: &EnumDefinition, options: &ExportOptions) -> Result<String> {
    CSharpExporter.export(definition, options)
}
