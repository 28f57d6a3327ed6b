use enumgen_codegen::{CodeBuilder, ExportContext, Exporter, TypeMapper, export::push_summary};

use crate::VisualBasicTypeMapper;

const DOC_PREFIX: &str = "'''";

/// Exporter for Visual Basic source.
///
/// Keyword-delimited scopes (`Namespace` … `End Namespace`) ignore the brace
/// style option. The `As <Type>` clause is only written for non-default
/// storage types, matching the language default of `Integer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualBasicExporter;

impl Exporter for VisualBasicExporter {
    fn notation(&self) -> &'static str {
        "visual-basic"
    }

    fn file_extension(&self) -> &'static str {
        "vb"
    }

    fn comment_prefix(&self) -> &'static str {
        "''"
    }

    fn render(&self, out: &mut CodeBuilder, ctx: &ExportContext<'_>) {
        let definition = ctx.definition();
        let generator = ctx.generator();
        let storage = ctx.storage();

        out.push_line("Imports System.CodeDom.Compiler").push_blank();

        if let Some(ns) = ctx.namespace() {
            out.open_keyword_scope(&format!("Namespace {}", ns), "End Namespace");
        }

        if let Some(comment) = definition.comment() {
            push_summary(out, DOC_PREFIX, comment);
        }
        out.push_line(&format!(
            "<GeneratedCode(\"{}\", \"{}\")>",
            escape(generator.tool_name()),
            escape(generator.version())
        ));

        let header = if ctx.is_default_storage() {
            format!("Public Enum {}", definition.name())
        } else {
            format!(
                "Public Enum {} As {}",
                definition.name(),
                VisualBasicTypeMapper.storage_type(storage)
            )
        };
        out.open_keyword_scope(&header, "End Enum");

        for (index, entry) in definition.entries().iter().enumerate() {
            if ctx.gap_before(index) {
                out.push_blank();
            }
            if let Some(comment) = entry.comment() {
                push_summary(out, DOC_PREFIX, comment);
            }
            out.push_line(&format!(
                "{} = {}",
                entry.name(),
                VisualBasicTypeMapper.literal(storage, entry.value())
            ));
        }
        out.close_scope();

        if ctx.namespace().is_some() {
            out.close_scope();
        }
    }
}

/// Quotes inside a string literal are doubled.
fn escape(value: &str) -> String {
    value.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use enumgen_codegen::{BraceStyle, ExportOptions, HeaderMode};
    use enumgen_core::EnumBuilder;

    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(VisualBasicExporter.notation(), "visual-basic");
        assert_eq!(VisualBasicExporter.file_extension(), "vb");
        assert_eq!(VisualBasicExporter.comment_prefix(), "''");
    }

    #[test]
    fn test_brace_style_is_ignored() {
        let mut builder = EnumBuilder::new("TestEnum");
        builder.push_entry("A", 1).unwrap();
        let def = builder.build().unwrap();

        let options = ExportOptions::new().with_header(HeaderMode::None);
        let new_line = VisualBasicExporter.export(&def, &options).unwrap();
        let same_line = VisualBasicExporter
            .export(&def, &options.with_brace_style(BraceStyle::SameLine))
            .unwrap();
        assert_eq!(new_line, same_line);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("1.0"), "1.0");
        assert_eq!(escape(r#"My "Tool""#), r#"My ""Tool"""#);
        assert_eq!(escape(r"C:\tools"), r"C:\tools");
    }

    #[test]
    fn test_empty_enum() {
        let def = EnumBuilder::new("Empty").build().unwrap();
        let options = ExportOptions::new().with_header(HeaderMode::None);
        let out = VisualBasicExporter.export(&def, &options).unwrap();
        assert!(out.ends_with("Public Enum Empty\nEnd Enum\n"));
    }
}
