//! # tsiface
//!
//! Generate TypeScript interface declarations from Rust data types.
//!
//! Every named record reachable from the requested roots becomes one
//! `export interface`. Names are prefixed with their package, anonymous
//! records are inlined as object literals, and fields follow the name and
//! type annotations carried by the source types.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tsiface::prelude::*;
//!
//! #[derive(Reflect)]
//! #[tsiface(package = "models")]
//! struct User {
//!     #[tsiface(rename = "id")]
//!     id: u32,
//!     #[tsiface(rename = "email", omit_empty)]
//!     email: Option<String>,
//! }
//!
//! let ts = tsiface::generate::<User>()?;
//! assert_eq!(ts, "export interface Models_User {\n    id: number;\n    email?: string;\n}\n\n");
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Type descriptors, struct tags and the type graph
//! - [`codegen`] - Collection, type mapping and emission

pub mod prelude;

/// Type descriptors, struct tags and the type graph.
pub mod schema {
    pub use tsiface_schema::*;
}

/// TypeScript generation.
pub mod codegen {
    pub use tsiface_codegen::*;
}

pub use tsiface_codegen::{
    CodegenError, Config, ConfigBuilder, Exporter, Generator, Indent, generate, generate_with,
};
pub use tsiface_derive::Reflect;
pub use tsiface_schema::{Reflect, TypeGraph, TypeGraphBuilder};
