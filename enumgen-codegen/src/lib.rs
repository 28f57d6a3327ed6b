//! Shared code generation utilities for enumgen notations.
//!
//! This crate provides the notation-agnostic half of every export:
//!
//! - [`builder`] - The [`CodeBuilder`] composer, [`Indent`] and [`BraceStyle`]
//! - [`export`] - [`ExportOptions`], the [`Exporter`] strategy trait and the
//!   validate-then-compose pipeline every notation goes through
//!
//! Notation crates (`enumgen-codegen-cil`, `enumgen-codegen-vb`,
//! `enumgen-codegen-csharp`) implement [`Exporter`] and only describe how a
//! scope, a documentation block or a literal looks in their syntax.

pub mod builder;
pub mod export;

pub use builder::{BraceStyle, CodeBuilder, Indent};
pub use enumgen_core::{
    EnumBuilder, EnumDefinition, EnumEntry, Error, GeneratorInfo, Result, StorageType,
};
pub use export::{ExportContext, ExportOptions, Exporter, HeaderMode, TypeMapper};
