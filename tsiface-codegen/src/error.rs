//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Every variant is fatal to the run: the context that produced it must be
/// discarded.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Type graph error.
    #[error("schema error: {0}")]
    Schema(#[from] tsiface_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Root type without a declaring package.
    #[error("anonymous types are not supported as root type: '{type_name}'")]
    AnonymousRoot {
        /// Type description.
        type_name: String,
    },

    /// Map key kind outside the number and string families.
    #[error("unsupported map key type '{key}'")]
    UnsupportedMapKey {
        /// Key type description.
        key: String,
    },
}
