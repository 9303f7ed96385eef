//! Generated names and traversal paths.

use crate::config::Config;
use std::fmt;

/// Default package prefix.
///
/// An empty package has no prefix. Otherwise path separators become
/// underscores, the first character is upper-cased and an underscore is
/// appended: `models/user` becomes `Models_user_`.
#[must_use]
pub fn default_package_prefix(package: &str) -> String {
    if package.is_empty() {
        return String::new();
    }

    let replaced = package.replace('/', "_");
    let mut chars = replaced.chars();
    let mut prefix: String = chars
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_default();
    prefix.push_str(chars.as_str());
    prefix.push('_');
    prefix
}

/// Returns the emitted name of a named record.
///
/// Records without a package are named under the configured anonymous
/// package.
#[must_use]
pub fn generated_name(config: &Config, package: &str, local_name: &str) -> String {
    let package = if package.is_empty() {
        config.anonymous_package()
    } else {
        package
    };
    format!("{}{}", config.package_prefix(package), local_name)
}

/// Position of a type in the traversal, from the root's generated name down
/// through field names and `Elem` labels.
///
/// Reported in trace logs only; generated names never depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePath(Vec<String>);

impl NamePath {
    /// Label used for anonymous element types.
    pub const ELEM: &'static str = "Elem";

    /// Starts a path at a root label.
    #[must_use]
    pub fn root(label: impl Into<String>) -> Self {
        Self(vec![label.into()])
    }

    /// Returns a copy of this path extended by `label`.
    #[must_use]
    pub fn child(&self, label: impl Into<String>) -> Self {
        let mut labels = self.0.clone();
        labels.push(label.into());
        Self(labels)
    }

    /// Returns the labels of this path.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for NamePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}
