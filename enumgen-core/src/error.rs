use miette::Diagnostic;
use thiserror::Error;

use crate::StorageType;

/// Result type for building and exporting enums.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures raised while building or exporting an enum.
///
/// Every variant is raised before any text is produced, so a failed export
/// never yields partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(enumgen::invalid_name),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidName {
        name: String,
        context: &'static str,
        reason: &'static str,
    },

    #[error("duplicate entry name '{name}'")]
    #[diagnostic(
        code(enumgen::duplicate_entry),
        help("entry names are case-sensitive and must be unique within an enum")
    )]
    DuplicateEntryName { name: String },

    #[error("invalid namespace '{namespace}'")]
    #[diagnostic(
        code(enumgen::invalid_namespace),
        help("a namespace is a list of identifiers separated by '.', e.g. 'Company.Product'")
    )]
    InvalidNamespace { namespace: String },

    #[error("invalid assembly name '{name}'")]
    #[diagnostic(
        code(enumgen::invalid_assembly_name),
        help("use only letters, numbers, and underscores, starting with a letter or underscore")
    )]
    InvalidAssemblyName { name: String },

    #[error("value {value} of entry '{entry}' does not fit in {storage}")]
    #[diagnostic(
        code(enumgen::out_of_bounds),
        help("{storage} holds values from {min} to {max}; pick a wider storage type")
    )]
    OutOfBoundsValue {
        entry: String,
        value: i128,
        storage: StorageType,
        min: i128,
        max: i128,
    },
}

impl Error {
    /// Create an out-of-bounds error for `entry` using the bounds of `storage`.
    pub fn out_of_bounds(entry: impl Into<String>, value: i128, storage: StorageType) -> Self {
        let (min, max) = storage.range();
        Error::OutOfBoundsValue {
            entry: entry.into(),
            value,
            storage,
            min,
            max,
        }
    }

    /// The identifier or value that triggered the error.
    pub fn subject(&self) -> String {
        match self {
            Error::InvalidName { name, .. }
            | Error::DuplicateEntryName { name }
            | Error::InvalidAssemblyName { name } => name.clone(),
            Error::InvalidNamespace { namespace } => namespace.clone(),
            Error::OutOfBoundsValue { entry, .. } => entry.clone(),
        }
    }
}
