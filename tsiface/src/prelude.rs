//! Prelude module for convenient imports.
//!
//! ```ignore
//! use tsiface::prelude::*;
//! ```

// Schema types
pub use tsiface_schema::{
    FieldDef, Kind, Reflect, StructTag, TypeDescriptor, TypeGraph, TypeGraphBuilder, TypeIndex,
    TypeRef,
};

// Generation
pub use tsiface_codegen::{CodegenError, Config, Exporter, Generator, Indent};

// Derive
pub use tsiface_derive::Reflect;
