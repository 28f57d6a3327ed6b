//! CIL exporter for enumgen.
//!
//! Renders an [`EnumDefinition`](enumgen_core::EnumDefinition) as an IL
//! assembler listing: an `mscorlib` reference, an assembly and module
//! declaration, and a sealed class extending `System.Enum` with one literal
//! field per entry.
//!
//! ```
//! use enumgen_codegen::{ExportOptions, Exporter, HeaderMode};
//! use enumgen_codegen_cil::CilExporter;
//! use enumgen_core::EnumBuilder;
//!
//! let mut builder = EnumBuilder::new("Color");
//! builder.push_entry("Red", 1)?;
//! let def = builder.build()?;
//!
//! let il = CilExporter::new()
//!     .with_assembly_name("Colors")
//!     .export(&def, &ExportOptions::new().with_header(HeaderMode::None))?;
//! assert!(il.contains(".module Colors.dll"));
//! # Ok::<(), enumgen_core::Error>(())
//! ```
//!
//! IL has no documentation comments, so summary and entry comments are not
//! rendered.

mod exporter;
mod type_mapper;

pub use enumgen_codegen::{ExportOptions, Exporter};
pub use exporter::CilExporter;
pub use type_mapper::CilTypeMapper;

use enumgen_core::{EnumDefinition, Result};

/// Export `definition` as CIL, using the enum name as assembly name.
pub fn export(definition: &EnumDefinition, options: &ExportOptions) -> Result<String> {
    CilExporter::new().export(definition, options)
}
