//! Error types for type graph construction.

use crate::graph::TypeIndex;
use crate::kind::Kind;
use thiserror::Error;

/// Error type for type graph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Index does not belong to the graph.
    #[error("unknown type index {index}")]
    UnknownType {
        /// Offending index.
        index: TypeIndex,
    },

    /// Fields were supplied for a type that is not a record.
    #[error("type {index} is not a record")]
    NotARecord {
        /// Offending index.
        index: TypeIndex,
    },

    /// A composite kind was requested where a basic kind is required.
    #[error("kind '{kind}' is not a basic kind")]
    NotBasic {
        /// Requested kind.
        kind: Kind,
    },

    /// Fields of a record were defined twice.
    #[error("fields of record '{name}' are already defined")]
    FieldsAlreadyDefined {
        /// Record name (empty for anonymous records).
        name: String,
    },
}
