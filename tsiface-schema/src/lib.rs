//! # tsiface Schema
//!
//! Type descriptors and the type graph model consumed by the code generator.
//!
//! This crate provides:
//! - The [`TypeDescriptor`] capability trait the generator walks
//! - Structural kind classification, including map-key classes
//! - Struct-tag annotation parsing (`json:"name,omitempty" tstype:"T"`)
//! - A hand-built, cycle-friendly [`TypeGraph`] and its builder
//! - The [`Reflect`] trait describing Rust types into a graph

pub mod descriptor;
pub mod error;
pub mod graph;
pub mod kind;
pub mod reflect;
pub mod tag;

pub use descriptor::{FieldDescriptor, TypeDescriptor};
pub use error::SchemaError;
pub use graph::{FieldDef, TypeGraph, TypeGraphBuilder, TypeIndex, TypeRef};
pub use kind::{Kind, MapKeyClass};
pub use reflect::Reflect;
pub use tag::{NAME_KEY, NameAnnotation, StructTag, TYPE_KEY};
