//! Hand-built type graphs.
//!
//! A [`TypeGraph`] is an arena of type nodes addressed by [`TypeIndex`].
//! Records are declared first and receive their fields afterwards, which is
//! what makes self-referential and mutually-referential graphs expressible.
//! Unnamed structural types (pointers, slices, arrays, maps, basic kinds) are
//! interned, so the same shape always yields the same index.

use crate::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::error::SchemaError;
use crate::kind::Kind;
use crate::reflect::Reflect;
use crate::tag::StructTag;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Index of a type inside a [`TypeGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIndex(usize);

impl TypeIndex {
    /// Returns the raw arena position.
    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TypeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Field definition supplied to [`TypeGraphBuilder::define_fields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Source field name.
    pub name: String,
    /// Field type.
    pub ty: TypeIndex,
    /// Whether the field is embedded.
    pub embedded: bool,
    /// Raw annotation string.
    pub tag: StructTag,
}

impl FieldDef {
    /// Creates a plain field without annotations.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeIndex) -> Self {
        Self {
            name: name.into(),
            ty,
            embedded: false,
            tag: StructTag::default(),
        }
    }

    /// Marks the field as embedded.
    #[must_use]
    pub fn embed(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Attaches a raw annotation string.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<StructTag>) -> Self {
        self.tag = tag.into();
        self
    }
}

#[derive(Debug, Clone)]
struct TypeNode {
    kind: Kind,
    package: String,
    name: String,
    elem: Option<TypeIndex>,
    key: Option<TypeIndex>,
    len: Option<usize>,
    fields: Vec<FieldDef>,
    fields_defined: bool,
}

impl TypeNode {
    fn structural(kind: Kind) -> Self {
        Self {
            kind,
            package: String::new(),
            name: String::new(),
            elem: None,
            key: None,
            len: None,
            fields: Vec::new(),
            fields_defined: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Shape {
    Basic(Kind),
    Pointer(TypeIndex),
    Slice(TypeIndex),
    Array(TypeIndex, usize),
    Map(TypeIndex, TypeIndex),
}

/// Immutable type graph.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    nodes: Vec<TypeNode>,
}

impl TypeGraph {
    /// Returns a handle to the type at `index`.
    #[must_use]
    pub fn get(&self, index: TypeIndex) -> Option<TypeRef<'_>> {
        (index.0 < self.nodes.len()).then_some(TypeRef { graph: self, index })
    }

    /// Returns a handle to the type at `index`.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownType` if the index is out of range.
    pub fn resolve(&self, index: TypeIndex) -> Result<TypeRef<'_>, SchemaError> {
        self.get(index).ok_or(SchemaError::UnknownType { index })
    }

    /// Returns the number of types in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph holds no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Handle to one type of a [`TypeGraph`].
///
/// Identity is the pair (graph, index).
#[derive(Clone, Copy)]
pub struct TypeRef<'g> {
    graph: &'g TypeGraph,
    index: TypeIndex,
}

impl<'g> TypeRef<'g> {
    /// Returns the index of this type.
    #[must_use]
    pub const fn index(&self) -> TypeIndex {
        self.index
    }

    /// Returns the length of an array type.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        self.node().len
    }

    fn node(&self) -> &'g TypeNode {
        &self.graph.nodes[self.index.0]
    }

    fn related(&self, index: Option<TypeIndex>) -> Option<Self> {
        index.map(|index| Self {
            graph: self.graph,
            index,
        })
    }
}

impl PartialEq for TypeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.index == other.index
    }
}

impl Eq for TypeRef<'_> {}

impl Hash for TypeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.graph, state);
        self.index.hash(state);
    }
}

impl fmt::Debug for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRef")
            .field("index", &self.index)
            .field("type", &self.to_string())
            .finish()
    }
}

impl fmt::Display for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        let elem = self.related(node.elem);
        match (node.kind, elem) {
            (Kind::Pointer, Some(elem)) => write!(f, "*{elem}"),
            (Kind::Slice, Some(elem)) => write!(f, "[]{elem}"),
            (Kind::Array, Some(elem)) => write!(f, "[{}]{elem}", node.len.unwrap_or_default()),
            (Kind::Map, Some(elem)) => match self.related(node.key) {
                Some(key) => write!(f, "map[{key}]{elem}"),
                None => write!(f, "map[?]{elem}"),
            },
            (Kind::Struct, _) if node.name.is_empty() => {
                let names: Vec<&str> = node.fields.iter().map(|field| field.name.as_str()).collect();
                write!(f, "struct {{ {} }}", names.join(", "))
            }
            _ if !node.name.is_empty() && !node.package.is_empty() => {
                write!(f, "{}.{}", node.package, node.name)
            }
            _ if !node.name.is_empty() => f.write_str(&node.name),
            (kind, _) => f.write_str(kind.name()),
        }
    }
}

impl TypeDescriptor for TypeRef<'_> {
    fn kind(&self) -> Kind {
        self.node().kind
    }

    fn package(&self) -> &str {
        &self.node().package
    }

    fn name(&self) -> &str {
        &self.node().name
    }

    fn fields(&self) -> Vec<FieldDescriptor<Self>> {
        self.node()
            .fields
            .iter()
            .map(|field| FieldDescriptor {
                name: field.name.clone(),
                ty: Self {
                    graph: self.graph,
                    index: field.ty,
                },
                embedded: field.embedded,
                tag: field.tag.clone(),
            })
            .collect()
    }

    fn elem(&self) -> Option<Self> {
        self.related(self.node().elem)
    }

    fn key(&self) -> Option<Self> {
        self.related(self.node().key)
    }
}

/// Builder for [`TypeGraph`].
#[derive(Debug, Default)]
pub struct TypeGraphBuilder {
    nodes: Vec<TypeNode>,
    interned: HashMap<Shape, TypeIndex>,
    reflected: HashMap<TypeId, TypeIndex>,
}

impl TypeGraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the basic type of the given kind.
    ///
    /// # Errors
    /// Returns `SchemaError::NotBasic` for pointer, slice, array, map and
    /// struct kinds.
    pub fn basic(&mut self, kind: Kind) -> Result<TypeIndex, SchemaError> {
        if !kind.is_basic() {
            return Err(SchemaError::NotBasic { kind });
        }
        Ok(self.intern(Shape::Basic(kind), || TypeNode::structural(kind)))
    }

    /// Returns the pointer type to `elem`.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownType` if `elem` is not part of this builder.
    pub fn pointer(&mut self, elem: TypeIndex) -> Result<TypeIndex, SchemaError> {
        self.check(elem)?;
        Ok(self.intern(Shape::Pointer(elem), || TypeNode {
            elem: Some(elem),
            ..TypeNode::structural(Kind::Pointer)
        }))
    }

    /// Returns the slice type of `elem`.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownType` if `elem` is not part of this builder.
    pub fn slice(&mut self, elem: TypeIndex) -> Result<TypeIndex, SchemaError> {
        self.check(elem)?;
        Ok(self.intern(Shape::Slice(elem), || TypeNode {
            elem: Some(elem),
            ..TypeNode::structural(Kind::Slice)
        }))
    }

    /// Returns the array type of `len` elements of `elem`.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownType` if `elem` is not part of this builder.
    pub fn array(&mut self, elem: TypeIndex, len: usize) -> Result<TypeIndex, SchemaError> {
        self.check(elem)?;
        Ok(self.intern(Shape::Array(elem, len), || TypeNode {
            elem: Some(elem),
            len: Some(len),
            ..TypeNode::structural(Kind::Array)
        }))
    }

    /// Returns the map type from `key` to `value`.
    ///
    /// Key kinds are not restricted here; the generator rejects unsupported
    /// keys when it reaches them.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownType` if either index is not part of this
    /// builder.
    pub fn map(&mut self, key: TypeIndex, value: TypeIndex) -> Result<TypeIndex, SchemaError> {
        self.check(key)?;
        self.check(value)?;
        Ok(self.intern(Shape::Map(key, value), || TypeNode {
            elem: Some(value),
            key: Some(key),
            ..TypeNode::structural(Kind::Map)
        }))
    }

    /// Declares a named record. Every call creates a distinct type, even for
    /// a repeated (package, name) pair.
    pub fn declare_record(
        &mut self,
        package: impl Into<String>,
        name: impl Into<String>,
    ) -> TypeIndex {
        self.push(TypeNode {
            package: package.into(),
            name: name.into(),
            ..TypeNode::structural(Kind::Struct)
        })
    }

    /// Declares a record without a name; it is inlined wherever it is used.
    pub fn declare_anonymous_record(&mut self) -> TypeIndex {
        self.push(TypeNode::structural(Kind::Struct))
    }

    /// Supplies the fields of a declared record.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownType` for foreign indices,
    /// `SchemaError::NotARecord` if `record` is not a record and
    /// `SchemaError::FieldsAlreadyDefined` on a second call for the same
    /// record.
    pub fn define_fields(
        &mut self,
        record: TypeIndex,
        fields: Vec<FieldDef>,
    ) -> Result<(), SchemaError> {
        self.check(record)?;
        for field in &fields {
            self.check(field.ty)?;
        }

        let node = &mut self.nodes[record.0];
        if node.kind != Kind::Struct {
            return Err(SchemaError::NotARecord { index: record });
        }
        if node.fields_defined {
            return Err(SchemaError::FieldsAlreadyDefined {
                name: node.name.clone(),
            });
        }
        node.fields = fields;
        node.fields_defined = true;
        Ok(())
    }

    /// Describes `T` into the graph, reusing an earlier description of the
    /// same Rust type.
    ///
    /// # Errors
    /// Propagates errors from `T`'s [`Reflect`] implementation.
    pub fn reflect<T: Reflect + ?Sized>(&mut self) -> Result<TypeIndex, SchemaError> {
        if let Some(&index) = self.reflected.get(&TypeId::of::<T>()) {
            return Ok(index);
        }
        let index = T::reflect(self)?;
        self.memoize::<T>(index);
        Ok(index)
    }

    /// Records `index` as the description of `T`.
    ///
    /// Record implementations call this right after declaring themselves and
    /// before describing their fields, so recursive references resolve to the
    /// declared record instead of recursing forever.
    pub fn memoize<T: ?Sized + 'static>(&mut self, index: TypeIndex) {
        self.reflected.insert(TypeId::of::<T>(), index);
    }

    /// Finishes the graph.
    #[must_use]
    pub fn build(self) -> TypeGraph {
        TypeGraph { nodes: self.nodes }
    }

    fn check(&self, index: TypeIndex) -> Result<(), SchemaError> {
        if index.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(SchemaError::UnknownType { index })
        }
    }

    fn intern(&mut self, shape: Shape, node: impl FnOnce() -> TypeNode) -> TypeIndex {
        if let Some(&index) = self.interned.get(&shape) {
            return index;
        }
        let index = self.push(node());
        self.interned.insert(shape, index);
        index
    }

    fn push(&mut self, node: TypeNode) -> TypeIndex {
        let index = TypeIndex(self.nodes.len());
        self.nodes.push(node);
        index
    }
}
