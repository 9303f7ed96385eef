//! `#[tsiface(...)]` attribute parsing.

use syn::{Attribute, LitStr};

const ATTR: &str = "tsiface";

/// Container options.
#[derive(Default)]
pub struct ContainerAttrs {
    /// Emitted local name instead of the type identifier.
    pub rename: Option<LitStr>,
    /// Package identity instead of the module path.
    pub package: Option<LitStr>,
    /// Describe the type as an anonymous record, inlined at each use.
    pub inline: bool,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    out.rename = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("package") {
                    out.package = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("inline") {
                    out.inline = true;
                } else {
                    return Err(meta.error("unsupported tsiface container attribute"));
                }
                Ok(())
            })?;
        }
        Ok(out)
    }
}

/// Field options.
#[derive(Default)]
pub struct FieldAttrs {
    /// External name.
    pub rename: Option<LitStr>,
    /// TypeScript type emitted verbatim.
    pub type_override: Option<LitStr>,
    /// Leave the field out of the declaration.
    pub skip: bool,
    /// Record the `omitempty` option.
    pub omit_empty: bool,
    /// Splice the fields of the field's record into the parent.
    pub flatten: bool,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    out.rename = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("type") {
                    out.type_override = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                } else if meta.path.is_ident("omit_empty") {
                    out.omit_empty = true;
                } else if meta.path.is_ident("flatten") {
                    out.flatten = true;
                } else {
                    return Err(meta.error("unsupported tsiface field attribute"));
                }
                Ok(())
            })?;
        }
        Ok(out)
    }

    /// Returns the name annotation value, if the field needs one.
    pub fn name_annotation(&self) -> Option<String> {
        if self.skip {
            return Some("-".to_string());
        }
        let name = self.rename.as_ref().map(LitStr::value);
        match (name, self.omit_empty) {
            (name, true) => Some(format!("{},omitempty", name.unwrap_or_default())),
            (Some(name), false) => Some(name),
            (None, false) => None,
        }
    }

    /// Returns true if the field's Rust type is not described.
    pub fn is_opaque(&self) -> bool {
        self.skip || self.type_override.is_some()
    }
}
