//! The type descriptor capability.
//!
//! The generator never sees a concrete type system. Anything that can answer
//! the questions below (a reflection facility, a hand-built graph, a schema
//! file loader) can be fed to it.

use crate::kind::Kind;
use crate::tag::StructTag;
use std::fmt;
use std::hash::Hash;

/// Abstract view of a source type.
///
/// Equality and hashing must follow type identity: two handles compare equal
/// exactly when they describe the same type. The generator keys its
/// visitation cache and name table on this identity.
pub trait TypeDescriptor: Clone + Eq + Hash + fmt::Display {
    /// Structural kind.
    fn kind(&self) -> Kind;

    /// Declaring package identity; empty for built-in and anonymous types.
    fn package(&self) -> &str;

    /// Local name; empty for anonymous types.
    fn name(&self) -> &str;

    /// Fields in declaration order. Empty for non-record kinds.
    fn fields(&self) -> Vec<FieldDescriptor<Self>>;

    /// Element type of pointer, slice, array and map kinds.
    fn elem(&self) -> Option<Self>;

    /// Key type of map kinds.
    fn key(&self) -> Option<Self>;

    /// Returns true for records without a local name.
    fn is_anonymous_record(&self) -> bool {
        self.kind() == Kind::Struct && self.name().is_empty()
    }
}

/// One field of a record as seen through a [`TypeDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor<T> {
    /// Source field name.
    pub name: String,
    /// Field type.
    pub ty: T,
    /// Whether the field is embedded (declared without its own name).
    pub embedded: bool,
    /// Raw annotation string.
    pub tag: StructTag,
}
