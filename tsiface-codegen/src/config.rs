//! Generator configuration.

use crate::naming::default_package_prefix;
use std::fmt;
use std::sync::Arc;

/// Maps a package identity to the prefix of generated names.
pub type PackagePrefixFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Indentation unit of emitted declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// One tab per level.
    Tabs,
    /// The given number of spaces per level.
    Spaces(usize),
}

impl Indent {
    /// Returns the text of one indentation level.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Self::Tabs => "\t".to_string(),
            Self::Spaces(width) => " ".repeat(*width),
        }
    }

    /// Returns the text of `depth` indentation levels.
    #[must_use]
    pub fn repeat(&self, depth: usize) -> String {
        self.unit().repeat(depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

/// Immutable configuration of one generation run.
#[derive(Clone)]
pub struct Config {
    package_prefix: PackagePrefixFn,
    indent: Indent,
    anonymous_package: String,
}

impl Config {
    /// Returns a builder with default settings.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Applies the package prefix function.
    #[must_use]
    pub fn package_prefix(&self, package: &str) -> String {
        (self.package_prefix)(package)
    }

    /// Returns the indentation unit.
    #[must_use]
    pub const fn indent(&self) -> Indent {
        self.indent
    }

    /// Returns the package identity used for named records declared outside
    /// any package.
    #[must_use]
    pub fn anonymous_package(&self) -> &str {
        &self.anonymous_package
    }
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("indent", &self.indent)
            .field("anonymous_package", &self.anonymous_package)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Config`].
pub struct ConfigBuilder {
    package_prefix: Option<PackagePrefixFn>,
    indent: Indent,
    anonymous_package: String,
}

impl ConfigBuilder {
    /// Creates a builder with default settings: the default package prefix,
    /// four-space indentation and an empty anonymous package.
    #[must_use]
    pub fn new() -> Self {
        Self {
            package_prefix: None,
            indent: Indent::default(),
            anonymous_package: String::new(),
        }
    }

    /// Sets the package prefix function.
    #[must_use]
    pub fn package_prefix<F>(mut self, prefix: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.package_prefix = Some(Arc::new(prefix));
        self
    }

    /// Indents with tabs.
    #[must_use]
    pub fn indent_with_tabs(mut self) -> Self {
        self.indent = Indent::Tabs;
        self
    }

    /// Indents with `width` spaces per level.
    #[must_use]
    pub fn indent_with_spaces(mut self, width: usize) -> Self {
        self.indent = Indent::Spaces(width);
        self
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the package identity substituted for named records without one.
    #[must_use]
    pub fn anonymous_package(mut self, package: impl Into<String>) -> Self {
        self.anonymous_package = package.into();
        self
    }

    /// Builds the configuration, filling in defaults.
    #[must_use]
    pub fn build(self) -> Config {
        Config {
            package_prefix: self
                .package_prefix
                .unwrap_or_else(|| Arc::new(default_package_prefix) as PackagePrefixFn),
            indent: self.indent,
            anonymous_package: self.anonymous_package,
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
