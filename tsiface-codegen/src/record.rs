//! Collected records and fields.

/// A named record discovered during collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInfo<D> {
    /// Source type.
    pub ty: D,
    /// Emitted name.
    pub generated_name: String,
    /// Flattened fields in declaration order.
    pub fields: Vec<FieldInfo<D>>,
}

impl<D> RecordInfo<D> {
    /// Creates a record without fields.
    #[must_use]
    pub fn new(ty: D, generated_name: impl Into<String>) -> Self {
        Self {
            ty,
            generated_name: generated_name.into(),
            fields: Vec::new(),
        }
    }
}

/// One emitted field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo<D> {
    /// Source field name.
    pub source_name: String,
    /// Source field type.
    pub ty: D,
    /// TypeScript type emitted verbatim instead of mapping `ty`.
    pub type_override: Option<String>,
    /// External name from the annotation.
    pub external_name: Option<String>,
}

impl<D> FieldInfo<D> {
    /// Returns the name the field is emitted under.
    #[must_use]
    pub fn output_name(&self) -> &str {
        match self.external_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.source_name,
        }
    }
}
