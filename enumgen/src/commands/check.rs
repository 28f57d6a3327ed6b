use std::path::{Path, PathBuf};

use clap::Args;
use enumgen_core::EnumDefinition;
use enumgen_manifest::{EnumManifest, Format};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{render::render, target::Target};

#[derive(Args)]
pub struct CheckCommand {
    /// Enum definition file (.toml or .json)
    pub input: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = EnumManifest::from_file(&self.input).unwrap_or_exit();
        let format = verify(&self.input, &manifest).unwrap_or_exit();
        tracing::debug!(%format, "definition exports cleanly");

        println!("✓ {} is valid\n", self.input.display());
        print!("{}", summary(manifest.definition()));
        Ok(())
    }
}

/// Export `manifest` the way `generate` would without flags.
///
/// Range and assembly checks depend on the resolved notation, so this runs
/// the full export and discards the text.
fn verify(input: &Path, manifest: &EnumManifest) -> enumgen_core::Result<Format> {
    let output = manifest.output();
    let target = Target::resolve(input, None, None, output);
    render(
        target.format,
        manifest.definition(),
        &output.export_options(),
        output.assembly.as_deref(),
    )?;
    Ok(target.format)
}

/// Render a short listing of the definition.
fn summary(definition: &EnumDefinition) -> String {
    let mut out = String::new();
    let count = definition.len();
    out.push_str(&format!(
        "  {} ({} entr{})\n",
        definition.name(),
        count,
        if count == 1 { "y" } else { "ies" }
    ));
    if let Some(comment) = definition.comment() {
        for line in comment.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    if !definition.is_empty() {
        out.push('\n');
    }
    for entry in definition.entries() {
        out.push_str(&format!("    {} = {}\n", entry.name(), entry.value()));
    }
    out
}
