//! Enum definition files for enumgen.
//!
//! A definition file describes one enum and, optionally, how to export it:
//!
//! ```toml
//! name = "Months"
//! comment = "Enum with all the months."
//!
//! [[entries]]
//! name = "January"
//! value = 1
//! comment = "Janus is the Roman god of gates and doorways."
//!
//! [output]
//! format = "csharp"
//! namespace = "Example"
//! ```
//!
//! The same shape is accepted as JSON for files ending in `.json`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod format;
mod manifest;
mod output;
mod span;

pub use error::{Error, Result};
pub use format::Format;
pub use manifest::EnumManifest;
pub use output::{IndentKind, OutputConfig};
