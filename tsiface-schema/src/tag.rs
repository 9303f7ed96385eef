//! Per-field annotation strings.
//!
//! Annotations use the struct-tag grammar: space separated `key:"value"`
//! pairs, values quoted with backslash escapes. Two keys are meaningful to the
//! generator:
//!
//! - [`NAME_KEY`] (`json`): comma separated, the first segment is the
//!   external field name (empty keeps the source name, `-` excludes the
//!   field), the rest are options such as `omitempty`.
//! - [`TYPE_KEY`] (`tstype`): a TypeScript type expression emitted verbatim.
//!
//! Malformed input ends the scan; pairs before the malformed part still
//! resolve.

use std::fmt;

/// Annotation key carrying the external field name and options.
pub const NAME_KEY: &str = "json";

/// Annotation key carrying a custom TypeScript type.
pub const TYPE_KEY: &str = "tstype";

/// Sentinel external name that excludes a field.
pub const EXCLUDED: &str = "-";

/// Raw annotation string attached to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StructTag(String);

impl StructTag {
    /// Wraps a raw annotation string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Builds an annotation from key/value pairs, quoting each value.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let raw = pairs
            .into_iter()
            .map(|(key, value)| format!("{key}:{}", quote(value)))
            .collect::<Vec<_>>()
            .join(" ");
        Self(raw)
    }

    /// Returns the raw annotation string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the annotation is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let mut rest = self.0.as_bytes();

        loop {
            while let [b' ', tail @ ..] = rest {
                rest = tail;
            }
            if rest.is_empty() {
                return None;
            }

            let name_len = rest
                .iter()
                .position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
                .unwrap_or(rest.len());
            if name_len == 0 || name_len + 1 >= rest.len() || &rest[name_len..name_len + 2] != b":\""
            {
                return None;
            }
            let name = &rest[..name_len];
            rest = &rest[name_len + 1..];

            // rest starts at the opening quote
            let mut end = 1;
            while end < rest.len() && rest[end] != b'"' {
                if rest[end] == b'\\' {
                    end += 1;
                }
                end += 1;
            }
            if end >= rest.len() {
                return None;
            }
            let quoted = &rest[1..end];
            rest = &rest[end + 1..];

            if name == key.as_bytes() {
                return unquote(quoted);
            }
        }
    }

    /// Parses the [`NAME_KEY`] value, if present and non-empty.
    #[must_use]
    pub fn name_annotation(&self) -> Option<NameAnnotation> {
        self.get(NAME_KEY)
            .filter(|value| !value.is_empty())
            .map(|value| NameAnnotation::parse(&value))
    }

    /// Returns the [`TYPE_KEY`] override, if present and non-empty.
    #[must_use]
    pub fn type_override(&self) -> Option<String> {
        self.get(TYPE_KEY).filter(|value| !value.is_empty())
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StructTag {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for StructTag {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Parsed external-name annotation.
///
/// `omit_empty` is recorded but does not make a field optional; optionality
/// is decided by the field's structural shape alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAnnotation {
    /// External name; empty keeps the source field name.
    pub name: String,
    /// Options following the name.
    pub options: Vec<String>,
}

impl NameAnnotation {
    /// Parses a comma separated annotation value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut segments = value.split(',');
        let name = segments.next().unwrap_or_default().to_string();
        let options = segments.map(str::to_string).collect();
        Self { name, options }
    }

    /// Returns true if the annotation excludes the field.
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        self.name == EXCLUDED
    }

    /// Returns true if the `omitempty` option is present.
    #[must_use]
    pub fn omit_empty(&self) -> bool {
        self.options.iter().any(|option| option == "omitempty")
    }
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn unquote(quoted: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(quoted).ok()?;
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            other => out.push(other),
        }
    }
    Some(out)
}
