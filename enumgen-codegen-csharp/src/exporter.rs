use enumgen_codegen::{CodeBuilder, ExportContext, Exporter, TypeMapper, export::push_summary};

use crate::CSharpTypeMapper;

const DOC_PREFIX: &str = "///";

/// Exporter for C# source.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpExporter;

impl Exporter for CSharpExporter {
    fn notation(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn comment_prefix(&self) -> &'static str {
        "//"
    }

    fn render(&self, out: &mut CodeBuilder, ctx: &ExportContext<'_>) {
        let definition = ctx.definition();
        let generator = ctx.generator();
        let storage = ctx.storage();

        out.push_line("using System.CodeDom.Compiler;").push_blank();

        if let Some(ns) = ctx.namespace() {
            out.open_scope(&format!("namespace {}", ns));
        }

        if let Some(comment) = definition.comment() {
            push_summary(out, DOC_PREFIX, comment);
        }
        out.push_line(&format!(
            "[GeneratedCode(\"{}\", \"{}\")]",
            escape(generator.tool_name()),
            escape(generator.version())
        ));

        let header = if ctx.is_default_storage() {
            format!("public enum {}", definition.name())
        } else {
            format!(
                "public enum {} : {}",
                definition.name(),
                CSharpTypeMapper.storage_type(storage)
            )
        };
        out.open_scope(&header);

        for (index, entry) in definition.entries().iter().enumerate() {
            if ctx.gap_before(index) {
                out.push_blank();
            }
            if let Some(comment) = entry.comment() {
                push_summary(out, DOC_PREFIX, comment);
            }
            out.push_line(&format!(
                "{} = {},",
                entry.name(),
                CSharpTypeMapper.literal(storage, entry.value())
            ));
        }
        out.close_scope();

        if ctx.namespace().is_some() {
            out.close_scope();
        }
    }
}

/// Escape text for a regular string literal.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
