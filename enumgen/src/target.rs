//! Resolution of the output notation and destination.

use std::path::{Path, PathBuf, is_separator};

use enumgen_manifest::{Format, OutputConfig};

/// Notation and destination of one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub format: Format,
    /// `None` means stdout.
    pub path: Option<PathBuf>,
}

impl Target {
    /// Merge command line values over the `[output]` table of `input`.
    ///
    /// The format comes from the flag, then the table, then the extension
    /// of the resolved path, then the default.
    pub fn resolve(
        input: &Path,
        format: Option<Format>,
        output: Option<&Path>,
        config: &OutputConfig,
    ) -> Self {
        // A path from the definition file is relative to that file
        let path = output.map(Path::to_path_buf).or_else(|| {
            config
                .path
                .as_deref()
                .map(|path| relative_to(input, path))
        });

        let format = format
            .or(config.format)
            .or_else(|| path.as_deref().and_then(Format::from_path))
            .unwrap_or_default();

        Self { format, path }
    }

    /// The file to write, naming it `<name>.<extension>` when the
    /// destination is a directory.
    pub fn file(&self, name: &str, extension: &str) -> Option<PathBuf> {
        let path = self.path.as_ref()?;
        if is_directory(path) {
            Some(path.join(format!("{}.{}", name, extension)))
        } else {
            Some(path.clone())
        }
    }
}

fn relative_to(input: &Path, path: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

fn is_directory(path: &Path) -> bool {
    path.is_dir() || path.to_string_lossy().ends_with(is_separator)
}
