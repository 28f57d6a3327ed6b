use std::path::PathBuf;

use clap::Args;
use enumgen_codegen::{BraceStyle, ExportOptions, HeaderMode, Indent};
use enumgen_core::StorageType;
use enumgen_manifest::{EnumManifest, Format, OutputConfig};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{output::write_file, render::exporter, target::Target};

#[derive(Args, Debug, Default)]
pub struct GenerateCommand {
    /// Enum definition file (.toml or .json)
    pub input: PathBuf,

    /// Output notation (defaults to the output path's extension, then csharp)
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Output file (defaults to `path` in the [output] table, else stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Dotted namespace to declare the enum in
    #[arg(long)]
    pub namespace: Option<String>,

    /// Backing integer type (int8, uint8, ..., uint64)
    #[arg(long)]
    pub storage: Option<StorageType>,

    /// Indent with tabs instead of spaces
    #[arg(long)]
    pub tabs: bool,

    /// Number of spaces per indentation level
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=16), conflicts_with = "tabs")]
    pub indent_size: Option<u8>,

    /// Put opening braces at the end of the header line
    #[arg(long)]
    pub same_line_braces: bool,

    /// Omit the auto-generated banner
    #[arg(long)]
    pub no_header: bool,

    /// Assembly and module name for IL output (defaults to the enum name)
    #[arg(long)]
    pub assembly: Option<String>,

    /// Print the document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Settings after merging command line flags over the `[output]` table.
#[derive(Debug)]
struct Plan {
    target: Target,
    options: ExportOptions,
    assembly: Option<String>,
}

/// What a generate run produced.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Printed(String),
    Written(PathBuf),
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        match self.execute()? {
            Outcome::Printed(text) => print!("{}", text),
            Outcome::Written(path) => println!("Generated {}", path.display()),
        }
        Ok(())
    }

    fn execute(&self) -> Result<Outcome> {
        let manifest = EnumManifest::from_file(&self.input).unwrap_or_exit();
        let definition = manifest.definition();
        let plan = self.plan(manifest.output());

        let exporter = exporter(plan.target.format, plan.assembly.as_deref());
        let path = plan
            .target
            .file(definition.name(), exporter.file_extension());
        tracing::debug!(format = %plan.target.format, path = ?path, "resolved output");

        let text = exporter.export(definition, &plan.options).unwrap_or_exit();

        match path {
            Some(path) if !self.dry_run => {
                write_file(&path, &text)?;
                Ok(Outcome::Written(path))
            }
            _ => Ok(Outcome::Printed(text)),
        }
    }

    fn plan(&self, config: &OutputConfig) -> Plan {
        let target = Target::resolve(
            &self.input,
            self.format,
            self.output.as_deref(),
            config,
        );

        let mut options = config.export_options();
        if self.tabs {
            options.indent = Indent::Tab;
        } else if let Some(size) = self.indent_size {
            options.indent = Indent::Spaces(size);
        }
        if self.same_line_braces {
            options.brace_style = BraceStyle::SameLine;
        }
        if self.no_header {
            options.header = HeaderMode::None;
        }
        if let Some(namespace) = &self.namespace {
            options.namespace = Some(namespace.clone());
        }
        if let Some(storage) = self.storage {
            options.storage = Some(storage);
        }

        Plan {
            target,
            options,
            assembly: self.assembly.clone().or_else(|| config.assembly.clone()),
        }
    }
}
