//! Core model and validation rules for the enumgen generator.
//!
//! This crate holds everything that is independent of a target notation:
//! the immutable [`EnumDefinition`] and its staging [`EnumBuilder`], the
//! [`StorageType`] classification used to bound entry values, identifier
//! predicates, and the [`Error`] taxonomy shared by all exporters.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod builder;
mod definition;
mod error;
mod generator;
mod storage;

pub mod ident;

pub use builder::EnumBuilder;
pub use definition::{EnumDefinition, EnumEntry};
pub use error::{Error, Result};
pub use generator::GeneratorInfo;
pub use storage::StorageType;
