//! Per-run generation state.

use crate::config::Config;
use crate::record::RecordInfo;
use std::collections::{HashMap, HashSet};
use tsiface_schema::TypeDescriptor;

/// State of one generation run.
///
/// Holds the visitation cache, the name table, the records in discovery
/// order, the configuration and the custom header lines. A context is
/// mutated by a single caller; after an error it must be discarded.
#[derive(Debug)]
pub struct Context<D: TypeDescriptor> {
    records: Vec<RecordInfo<D>>,
    visited: HashSet<D>,
    type_names: HashMap<D, String>,
    config: Config,
    custom_headers: Vec<String>,
}

impl<D: TypeDescriptor> Context<D> {
    /// Creates an empty context.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            records: Vec::new(),
            visited: HashSet::new(),
            type_names: HashMap::new(),
            config,
            custom_headers: Vec::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Appends a line emitted verbatim before the first declaration.
    pub fn add_custom_header(&mut self, header: impl Into<String>) {
        self.custom_headers.push(header.into());
    }

    /// Returns the custom header lines.
    #[must_use]
    pub fn custom_headers(&self) -> &[String] {
        &self.custom_headers
    }

    /// Returns the named records in discovery order.
    #[must_use]
    pub fn records(&self) -> &[RecordInfo<D>] {
        &self.records
    }

    /// Returns the generated name registered for `ty`.
    #[must_use]
    pub fn type_name(&self, ty: &D) -> Option<&str> {
        self.type_names.get(ty).map(String::as_str)
    }

    /// Returns true if `ty` has been visited.
    #[must_use]
    pub fn is_visited(&self, ty: &D) -> bool {
        self.visited.contains(ty)
    }

    /// Marks `ty` visited; returns false if it already was.
    pub(crate) fn mark_visited(&mut self, ty: &D) -> bool {
        self.visited.insert(ty.clone())
    }

    pub(crate) fn register_name(&mut self, ty: &D, name: String) {
        self.type_names.insert(ty.clone(), name);
    }

    pub(crate) fn push_record(&mut self, record: RecordInfo<D>) {
        self.records.push(record);
    }
}

impl<D: TypeDescriptor> Default for Context<D> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
