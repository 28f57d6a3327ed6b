//! CIL document rendering.

use enumgen_codegen::{CodeBuilder, ExportContext, ExportOptions, Exporter, TypeMapper};
use enumgen_core::{EnumDefinition, Error, Result, ident};

use crate::CilTypeMapper;

/// Exporter for the IL assembler notation.
///
/// The assembly name doubles as module base name (`<name>.dll`). When it is
/// not set the enum's own name is used.
#[derive(Debug, Clone, Default)]
pub struct CilExporter {
    assembly_name: Option<String>,
}

impl CilExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assembly_name(mut self, name: impl Into<String>) -> Self {
        self.assembly_name = Some(name.into());
        self
    }

    fn assembly_name<'a>(&'a self, definition: &'a EnumDefinition) -> &'a str {
        self.assembly_name
            .as_deref()
            .unwrap_or_else(|| definition.name())
    }
}

impl Exporter for CilExporter {
    fn notation(&self) -> &'static str {
        "cil"
    }

    fn file_extension(&self) -> &'static str {
        "il"
    }

    fn comment_prefix(&self) -> &'static str {
        "//"
    }

    fn validate(&self, definition: &EnumDefinition, _options: &ExportOptions) -> Result<()> {
        let name = self.assembly_name(definition);
        if !ident::is_valid_assembly_name(name) {
            return Err(Error::InvalidAssemblyName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn render(&self, out: &mut CodeBuilder, ctx: &ExportContext<'_>) {
        let definition = ctx.definition();
        let assembly = self.assembly_name(definition);
        let qualified = ctx.qualified_name();
        let storage = ctx.storage();

        if definition.comment().is_some() {
            tracing::trace!("summary comment not representable in CIL, skipped");
        }

        out.push_line(".assembly extern mscorlib { }").push_blank();

        out.open_scope(&format!(".assembly {}", assembly))
            .push_line(".ver 1:0:0:0")
            .close_scope()
            .push_blank();

        out.push_line(&format!(".module {}.dll", assembly))
            .push_blank();

        out.open_scope(&format!(
            ".class public sealed {} extends [mscorlib]System.Enum",
            qualified
        ));
        out.push_line(&format!(
            ".field public specialname rtspecialname {} value__",
            CilTypeMapper.storage_type(storage)
        ));
        if !definition.is_empty() {
            out.push_blank();
        }
        for entry in definition.entries() {
            out.push_line(&format!(
                ".field public static literal valuetype {} {} = {}",
                qualified,
                entry.name(),
                CilTypeMapper.literal(storage, entry.value())
            ));
        }
        out.close_scope();
    }
}
