//! Text composition building blocks.
//!
//! - [`CodeBuilder`] - Line and scope oriented writer producing indented text
//! - [`Indent`] - Indentation unit (spaces or tab)
//! - [`BraceStyle`] - Placement of opening braces

mod brace;
mod code_builder;
mod indent;

pub use brace::BraceStyle;
pub use code_builder::CodeBuilder;
pub use indent::Indent;
