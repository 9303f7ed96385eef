//! # tsiface Codegen
//!
//! TypeScript interface generation from type graphs.
//!
//! This crate provides:
//! - Depth-first collection of records reachable from root types
//! - Flattening of embedded records and handling of field annotations
//! - Mapping of kinds to TypeScript type expressions
//! - Emission of `export interface` declarations
//!
//! The generator works on any [`TypeDescriptor`](tsiface_schema::TypeDescriptor);
//! [`Generator`] and [`Exporter`] drive it over a [`TypeGraph`](tsiface_schema::TypeGraph).

pub mod collect;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod naming;
pub mod record;
pub mod typescript;

#[cfg(test)]
mod fixtures;

pub use config::{Config, ConfigBuilder, Indent, PackagePrefixFn};
pub use context::Context;
pub use error::CodegenError;
pub use generator::{Exporter, Generator};
pub use naming::{NamePath, default_package_prefix};
pub use record::{FieldInfo, RecordInfo};
pub use typescript::TsType;

use tsiface_schema::Reflect;

/// Generates the declarations of `T` and every record reachable from it,
/// using the default configuration.
///
/// # Errors
/// Returns `CodegenError` if `T` is not a named record or an unsupported map
/// key is reached.
pub fn generate<T: Reflect + ?Sized>() -> Result<String, CodegenError> {
    generate_with::<T>(Config::default())
}

/// Generates the declarations of `T` with the given configuration.
///
/// # Errors
/// Returns `CodegenError` if `T` is not a named record or an unsupported map
/// key is reached.
pub fn generate_with<T: Reflect + ?Sized>(config: Config) -> Result<String, CodegenError> {
    let mut exporter = Exporter::new(config);
    exporter.add::<T>()?;
    exporter.generate()
}
