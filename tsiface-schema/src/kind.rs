//! Structural kind classification.
//!
//! A [`Kind`] is the only thing the generator knows about a type's shape
//! before it asks for elements, keys or fields.

use std::fmt;

/// Structural kind of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Boolean.
    Bool,
    /// Platform-sized signed integer.
    Int,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Platform-sized unsigned integer.
    Uint,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Text.
    String,
    /// Nullable reference to an element type.
    Pointer,
    /// Variable-length sequence.
    Slice,
    /// Fixed-length sequence.
    Array,
    /// Key/value mapping.
    Map,
    /// Record with named fields.
    Struct,
    /// Dynamically typed value.
    Interface,
    /// Function value.
    Func,
    /// Channel value.
    Chan,
}

/// Map key family accepted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKeyClass {
    /// Keys rendered as numbers.
    Numeric,
    /// Keys rendered as strings.
    Text,
}

impl Kind {
    /// Returns the kind name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Pointer => "pointer",
            Self::Slice => "slice",
            Self::Array => "array",
            Self::Map => "map",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Func => "func",
            Self::Chan => "chan",
        }
    }

    /// Returns true for kinds that carry no element, key or fields.
    #[must_use]
    pub const fn is_basic(&self) -> bool {
        !matches!(
            self,
            Self::Pointer | Self::Slice | Self::Array | Self::Map | Self::Struct
        )
    }

    /// Returns true for kinds that expose an element type.
    #[must_use]
    pub const fn has_elem(&self) -> bool {
        matches!(self, Self::Pointer | Self::Slice | Self::Array | Self::Map)
    }

    /// Returns true for numbers that fit a double without loss.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Uint
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Float32
                | Self::Float64
        )
    }

    /// Returns true for the 64-bit integer kinds.
    #[must_use]
    pub const fn is_wide_integer(&self) -> bool {
        matches!(self, Self::Int64 | Self::Uint64)
    }

    /// Classifies the kind as a map key, or `None` if it cannot be one.
    ///
    /// 64-bit integers are keyed by text because their exact value does not
    /// survive a round trip through a double.
    #[must_use]
    pub const fn map_key_class(&self) -> Option<MapKeyClass> {
        if self.is_number() {
            Some(MapKeyClass::Numeric)
        } else if self.is_wide_integer() || matches!(self, Self::String) {
            Some(MapKeyClass::Text)
        } else {
            None
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
