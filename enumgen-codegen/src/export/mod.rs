//! Export pipeline shared by every notation.
//!
//! An export always runs the same steps: validate the namespace, let the
//! notation validate its own tokens, resolve the storage type and range
//! check every entry, then compose the document. Validation completes before
//! the first line is written, so a failing export never produces text.

mod context;
mod doc;
mod header;
mod options;
mod type_mapper;

pub use context::ExportContext;
pub use doc::push_summary;
pub use header::push_banner;
pub use options::{ExportOptions, HeaderMode};
pub use type_mapper::TypeMapper;

use enumgen_core::{EnumDefinition, Error, Result, ident};

use crate::builder::CodeBuilder;

/// A target notation an [`EnumDefinition`] can be rendered into.
///
/// Implementors describe the notation-specific parts of a document; the
/// provided [`export`](Self::export) method runs the shared pipeline.
pub trait Exporter {
    /// Notation identifier (e.g., "cil", "visual-basic").
    fn notation(&self) -> &'static str;

    /// File extension for generated files (e.g., "il", "vb").
    fn file_extension(&self) -> &'static str;

    /// Line comment prefix used for the header banner (e.g., "//").
    fn comment_prefix(&self) -> &'static str;

    /// Validate notation-specific options.
    ///
    /// Runs after the namespace check and before values are range checked.
    fn validate(&self, _definition: &EnumDefinition, _options: &ExportOptions) -> Result<()> {
        Ok(())
    }

    /// Write everything after the header banner.
    fn render(&self, out: &mut CodeBuilder, ctx: &ExportContext<'_>);

    /// Validate and render `definition` into a complete document.
    fn export(&self, definition: &EnumDefinition, options: &ExportOptions) -> Result<String> {
        export(self, definition, options)
    }
}

/// Run the shared export pipeline for `exporter`.
pub fn export<E>(
    exporter: &E,
    definition: &EnumDefinition,
    options: &ExportOptions,
) -> Result<String>
where
    E: Exporter + ?Sized,
{
    let _span = tracing::debug_span!(
        "export",
        notation = exporter.notation(),
        name = definition.name()
    )
    .entered();

    let ctx = validate(exporter, definition, options).inspect_err(|err| {
        tracing::debug!(error = %err, "export rejected");
    })?;

    tracing::debug!(
        storage = %ctx.storage(),
        namespace = ?ctx.namespace(),
        entries = definition.len(),
        "exporting enum"
    );

    let mut out = CodeBuilder::new(options.indent, options.brace_style);
    if options.header == HeaderMode::Default {
        push_banner(&mut out, exporter.comment_prefix(), &options.generator);
    }
    exporter.render(&mut out, &ctx);

    Ok(out.build())
}

fn validate<'a, E>(
    exporter: &E,
    definition: &'a EnumDefinition,
    options: &'a ExportOptions,
) -> Result<ExportContext<'a>>
where
    E: Exporter + ?Sized,
{
    let namespace = options.namespace.as_deref().filter(|ns| !ns.is_empty());
    if let Some(ns) = namespace.filter(|ns| !ident::is_valid_namespace(ns)) {
        return Err(Error::InvalidNamespace {
            namespace: ns.to_string(),
        });
    }

    exporter.validate(definition, options)?;

    let storage = options.storage.unwrap_or_default();
    if let Some(entry) = definition
        .entries()
        .iter()
        .find(|entry| !storage.contains(entry.value()))
    {
        return Err(Error::out_of_bounds(entry.name(), entry.value(), storage));
    }

    Ok(ExportContext::new(definition, options, storage, namespace))
}
