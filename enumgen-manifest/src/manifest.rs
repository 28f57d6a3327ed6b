//! Loading enum definition files.

use std::{path::Path, str::FromStr};

use enumgen_core::{EnumBuilder, EnumDefinition};
use serde::Deserialize;

use crate::{Error, OutputConfig, Result, error::SourceContext};

/// A parsed and validated definition file.
#[derive(Debug, Clone)]
pub struct EnumManifest {
    definition: EnumDefinition,
    output: OutputConfig,
}

/// File shape before it goes through [`EnumBuilder`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    name: String,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    entries: Vec<RawEntry>,
    #[serde(default)]
    output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    name: String,
    value: EntryValue,
    #[serde(default)]
    comment: Option<String>,
}

/// Either half of the signed/unsigned 64-bit range.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum EntryValue {
    Signed(i64),
    Unsigned(u64),
}

impl From<EntryValue> for i128 {
    fn from(value: EntryValue) -> Self {
        match value {
            EntryValue::Signed(v) => v.into(),
            EntryValue::Unsigned(v) => v.into(),
        }
    }
}

impl FromStr for EnumManifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s, "enum.toml")
    }
}

impl EnumManifest {
    /// Load a definition file, reading JSON for `.json` files and TOML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;

        let filename = path.display().to_string();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content, &filename)
        } else {
            Self::from_toml_str(&content, &filename)
        }
    }

    /// Parse TOML content with a custom filename for error reporting.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawManifest = toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
        Self::from_raw(raw, &ctx)
    }

    /// Parse JSON content with a custom filename for error reporting.
    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawManifest = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
        Self::from_raw(raw, &ctx)
    }

    fn from_raw(raw: RawManifest, ctx: &SourceContext<'_>) -> Result<Self> {
        let mut builder = EnumBuilder::new(raw.name);
        if let Some(comment) = raw.comment {
            builder.set_comment(comment);
        }

        for entry in raw.entries {
            let pushed = match entry.comment {
                Some(comment) => builder.push_entry_with_comment(entry.name, entry.value, comment),
                None => builder.push_entry(entry.name, entry.value),
            };
            pushed.map_err(|e| ctx.definition_error(e))?;
        }

        let definition = builder.build().map_err(|e| ctx.definition_error(e))?;
        raw.output.validate(ctx)?;

        tracing::debug!(
            name = definition.name(),
            entries = definition.len(),
            "loaded enum definition"
        );

        Ok(Self {
            definition,
            output: raw.output,
        })
    }

    pub fn definition(&self) -> &EnumDefinition {
        &self.definition
    }

    /// The `[output]` table; empty when the file has none.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}
