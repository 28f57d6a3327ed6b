use std::path::PathBuf;

use enumgen_codegen::{BraceStyle, ExportOptions, HeaderMode, Indent};
use enumgen_core::StorageType;
use serde::Deserialize;

use crate::{Format, Result, error::SourceContext};

/// Accepted range for `indent_size`.
const INDENT_SIZES: std::ops::RangeInclusive<u8> = 1..=16;

/// Kind of indentation requested by the `[output]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentKind {
    Spaces,
    Tabs,
}

/// The optional `[output]` table of a definition file.
///
/// Every key is optional. Command line flags take precedence over it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<Format>,
    pub path: Option<PathBuf>,
    pub namespace: Option<String>,
    pub storage: Option<StorageType>,
    pub indent: Option<IndentKind>,
    pub indent_size: Option<u8>,
    pub brace_style: Option<BraceStyle>,
    pub header: Option<bool>,
    /// Assembly name for the IL notation.
    pub assembly: Option<String>,
}

impl OutputConfig {
    /// Resolve `indent` and `indent_size` into an [`Indent`].
    ///
    /// Returns `None` when neither key is set.
    pub fn indent(&self) -> Option<Indent> {
        match (self.indent, self.indent_size) {
            (Some(IndentKind::Tabs), _) => Some(Indent::Tab),
            (Some(IndentKind::Spaces), size) => {
                Some(Indent::Spaces(size.unwrap_or(4)))
            }
            (None, Some(size)) => Some(Indent::Spaces(size)),
            (None, None) => None,
        }
    }

    /// Export options described by this table, defaults filled in.
    pub fn export_options(&self) -> ExportOptions {
        let mut options = ExportOptions::new();
        if let Some(indent) = self.indent() {
            options.indent = indent;
        }
        if let Some(brace_style) = self.brace_style {
            options.brace_style = brace_style;
        }
        if self.header == Some(false) {
            options.header = HeaderMode::None;
        }
        options.namespace = self.namespace.clone();
        options.storage = self.storage;
        options
    }

    pub(crate) fn validate(&self, ctx: &SourceContext<'_>) -> Result<()> {
        if let Some(size) = self.indent_size {
            if !INDENT_SIZES.contains(&size) {
                return Err(ctx.invalid_option(
                    "indent_size",
                    format!(
                        "must be between {} and {}",
                        INDENT_SIZES.start(),
                        INDENT_SIZES.end()
                    ),
                ));
            }
        }
        if self.indent == Some(IndentKind::Tabs) && self.indent_size.is_some() {
            return Err(ctx.invalid_option("indent_size", "cannot be combined with tabs"));
        }
        Ok(())
    }
}
