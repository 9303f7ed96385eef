//! Describing Rust types into a [`TypeGraph`](crate::TypeGraph).
//!
//! Records implement [`Reflect`] through `#[derive(Reflect)]`; this module
//! covers the standard library types a record's fields are made of.
//!
//! | Rust type | Kind |
//! |---|---|
//! | `bool` | `Bool` |
//! | `i8`..`i64`, `isize` | `Int8`..`Int64`, `Int` |
//! | `u8`..`u64`, `usize` | `Uint8`..`Uint64`, `Uint` |
//! | `f32`, `f64` | `Float32`, `Float64` |
//! | `String`, `str`, `char` | `String` |
//! | `Option<T>` | `Pointer` to `T` |
//! | `Box<T>`, `Rc<T>`, `Arc<T>` | same as `T` |
//! | `Vec<T>`, `VecDeque<T>`, `[T]`, sets | `Slice` of `T` |
//! | `[T; N]` | `Array` of `T` |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | `Map` from `K` to `V` |

use crate::error::SchemaError;
use crate::graph::{TypeGraphBuilder, TypeIndex};
use crate::kind::Kind;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// A Rust type that can describe itself into a type graph.
pub trait Reflect: 'static {
    /// Adds this type (and whatever it references) to `graph`.
    ///
    /// Call [`TypeGraphBuilder::reflect`] rather than this method directly;
    /// it memoizes descriptions per Rust type.
    ///
    /// # Errors
    /// Returns `SchemaError` if the graph rejects a construction step.
    fn reflect(graph: &mut TypeGraphBuilder) -> Result<TypeIndex, SchemaError>;
}

macro_rules! reflect_basic {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(graph: &mut TypeGraphBuilder) -> Result<TypeIndex, SchemaError> {
                    graph.basic($kind)
                }
            }
        )*
    };
}

reflect_basic! {
    bool => Kind::Bool,
    i8 => Kind::Int8,
    i16 => Kind::Int16,
    i32 => Kind::Int32,
    i64 => Kind::Int64,
    isize => Kind::Int,
    u8 => Kind::Uint8,
    u16 => Kind::Uint16,
    u32 => Kind::Uint32,
    u64 => Kind::Uint64,
    usize => Kind::Uint,
    f32 => Kind::Float32,
    f64 => Kind::Float64,
    String => Kind::String,
    str => Kind::String,
    char => Kind::String,
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(graph: &mut TypeGraphBuilder) -> Result<TypeIndex, SchemaError> {
        let elem = graph.reflect::<T>()?;
        graph.pointer(elem)
    }
}

macro_rules! reflect_transparent {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $wrapper<T> {
                fn reflect(graph: &mut TypeGraphBuilder) -> Result<TypeIndex, SchemaError> {
                    graph.reflect::<T>()
                }
            }
        )*
    };
}

reflect_transparent!(Box, Rc, Arc);

macro_rules! reflect_sequence {
    ($($seq:ident),*) => {
        $(
            impl<T: Reflect> Reflect for $seq<T> {
                fn reflect(graph: &mut TypeGraphBuilder) -> Result<TypeIndex, SchemaError> {
                    let elem = graph.reflect::<T>()?;
                    graph.slice(elem)
                }
            }
        )*
    };
}

reflect_sequence!(Vec, VecDeque, HashSet, BTreeSet);

impl<T: Reflect> Reflect for [T] {
    fn reflect(graph: &mut TypeGraphBuilder) -> Result<TypeIndex, SchemaError> {
        let elem = graph.reflect::<T>()?;
        graph.slice(elem)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(graph: &mut TypeGraphBuilder) -> Result<TypeIndex, SchemaError> {
        let elem = graph.reflect::<T>()?;
        graph.array(elem, N)
    }
}

macro_rules! reflect_map {
    ($($map:ident),*) => {
        $(
            impl<K: Reflect, V: Reflect> Reflect for $map<K, V> {
                fn reflect(graph: &mut TypeGraphBuilder) -> Result<TypeIndex, SchemaError> {
                    let key = graph.reflect::<K>()?;
                    let value = graph.reflect::<V>()?;
                    graph.map(key, value)
                }
            }
        )*
    };
}

reflect_map!(HashMap, BTreeMap);
