//! Dispatch from a [`Format`] to its exporter.

use enumgen_codegen::{ExportOptions, Exporter};
use enumgen_codegen_cil::CilExporter;
use enumgen_codegen_csharp::CSharpExporter;
use enumgen_codegen_vb::VisualBasicExporter;
use enumgen_core::{EnumDefinition, Result};
use enumgen_manifest::Format;

/// The exporter for `format`.
///
/// `assembly` is only meaningful for [`Format::Cil`].
pub fn exporter(format: Format, assembly: Option<&str>) -> Box<dyn Exporter> {
    match format {
        Format::Cil => {
            let mut exporter = CilExporter::new();
            if let Some(name) = assembly {
                exporter = exporter.with_assembly_name(name);
            }
            Box::new(exporter)
        }
        Format::VisualBasic => Box::new(VisualBasicExporter),
        Format::CSharp => Box::new(CSharpExporter),
    }
}

/// Export `definition` in `format`.
pub fn render(
    format: Format,
    definition: &EnumDefinition,
    options: &ExportOptions,
    assembly: Option<&str>,
) -> Result<String> {
    exporter(format, assembly).export(definition, options)
}
