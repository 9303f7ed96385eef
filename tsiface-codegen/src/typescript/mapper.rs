//! Type expression mapping.

use crate::collect::{map_key_class, record_fields};
use crate::context::Context;
use crate::error::CodegenError;
use crate::record::FieldInfo;
use tsiface_schema::{Kind, MapKeyClass, TypeDescriptor};

/// Expression emitted for types with no TypeScript counterpart.
pub const ANY: &str = "any";

/// A mapped TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsType {
    /// The type expression.
    pub expr: String,
    /// Whether a field of this type is emitted with `?`.
    pub optional: bool,
}

impl TsType {
    /// Creates a mapped type.
    #[must_use]
    pub fn new(expr: impl Into<String>, optional: bool) -> Self {
        Self {
            expr: expr.into(),
            optional,
        }
    }
}

/// Maps `ty` to a TypeScript expression.
///
/// `from_pointer` is true when `ty` was reached through a pointer, which makes
/// the result optional. `depth` is the indentation level of the field being
/// mapped; inline record literals indent their fields one level deeper and
/// close at `depth`.
///
/// Named records map to their registered name, or `any` when they were never
/// collected.
///
/// # Errors
/// Returns `CodegenError::UnsupportedMapKey` for maps keyed by anything other
/// than numbers or strings.
pub fn map_type<D: TypeDescriptor>(
    ctx: &Context<D>,
    ty: &D,
    from_pointer: bool,
    depth: usize,
) -> Result<TsType, CodegenError> {
    Mapper::new(ctx).map(ty, from_pointer, depth)
}

/// Returns the TypeScript index signature key type for a map key.
///
/// # Errors
/// Returns `CodegenError::UnsupportedMapKey` for unsupported key kinds.
pub fn map_key<D: TypeDescriptor>(key: &D) -> Result<&'static str, CodegenError> {
    Ok(match map_key_class(key)? {
        MapKeyClass::Numeric => "number",
        MapKeyClass::Text => "string",
    })
}

/// Maps a collected field, honouring its type override.
///
/// # Errors
/// Propagates mapping errors.
pub fn map_field<D: TypeDescriptor>(
    ctx: &Context<D>,
    field: &FieldInfo<D>,
    depth: usize,
) -> Result<TsType, CodegenError> {
    Mapper::new(ctx).field(field, depth)
}

/// Renders one field line of an interface body or record literal.
pub(crate) fn field_line(indent: &str, name: &str, ty: &TsType) -> String {
    let marker = if ty.optional { "?" } else { "" };
    format!("{indent}{name}{marker}: {};\n", ty.expr)
}

struct Mapper<'a, D: TypeDescriptor> {
    ctx: &'a Context<D>,
    inlining: Vec<D>,
}

impl<'a, D: TypeDescriptor> Mapper<'a, D> {
    fn new(ctx: &'a Context<D>) -> Self {
        Self {
            ctx,
            inlining: Vec::new(),
        }
    }

    fn field(&mut self, field: &FieldInfo<D>, depth: usize) -> Result<TsType, CodegenError> {
        match &field.type_override {
            Some(expr) => Ok(TsType::new(expr.as_str(), false)),
            None => self.map(&field.ty, false, depth),
        }
    }

    fn map(&mut self, ty: &D, from_pointer: bool, depth: usize) -> Result<TsType, CodegenError> {
        let kind = ty.kind();
        let expr = match kind {
            Kind::Bool => "boolean".to_string(),
            Kind::String => "string".to_string(),
            _ if kind.is_wide_integer() => "bigint".to_string(),
            _ if kind.is_number() => "number".to_string(),
            Kind::Pointer => {
                return match ty.elem() {
                    Some(elem) => self.map(&elem, true, depth),
                    None => Ok(TsType::new(ANY, true)),
                };
            }
            Kind::Slice | Kind::Array => {
                let elem = match ty.elem() {
                    Some(elem) => self.map(&elem, false, depth)?.expr,
                    None => ANY.to_string(),
                };
                return Ok(TsType::new(format!("{elem}[]"), true));
            }
            Kind::Map => self.map_expr(ty, depth)?,
            Kind::Struct if ty.is_anonymous_record() => self.record_literal(ty, depth)?,
            Kind::Struct => match self.ctx.type_name(ty) {
                Some(name) => name.to_string(),
                None => {
                    tracing::debug!(ty = %ty, "record was not collected, emitting any");
                    ANY.to_string()
                }
            },
            _ => {
                tracing::warn!(ty = %ty, %kind, "no TypeScript counterpart, emitting any");
                ANY.to_string()
            }
        };
        Ok(TsType::new(expr, from_pointer))
    }

    fn map_expr(&mut self, ty: &D, depth: usize) -> Result<String, CodegenError> {
        let key = match ty.key() {
            Some(key) => map_key(&key)?,
            None => "string",
        };
        let value = match ty.elem() {
            Some(elem) => self.map(&elem, false, depth)?,
            None => TsType::new(ANY, false),
        };
        Ok(if value.optional {
            format!("{{ [key: {key}]: ({} | undefined) }}", value.expr)
        } else {
            format!("{{ [key: {key}]: {} }}", value.expr)
        })
    }

    fn record_literal(&mut self, ty: &D, depth: usize) -> Result<String, CodegenError> {
        if self.inlining.contains(ty) {
            tracing::debug!(ty = %ty, "record literal refers to itself, emitting any");
            return Ok(ANY.to_string());
        }

        self.inlining.push(ty.clone());
        let indent = self.ctx.config().indent();
        let inner = indent.repeat(depth + 1);
        let mut out = String::from("{\n");
        for field in record_fields(ty) {
            let mapped = self.field(&field, depth + 1)?;
            out.push_str(&field_line(&inner, field.output_name(), &mapped));
        }
        out.push_str(&indent.repeat(depth));
        out.push('}');
        self.inlining.pop();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::json;
    use tsiface_schema::{FieldDef, SchemaError, TypeGraph, TypeGraphBuilder, TypeIndex};

    fn mapped(graph: &TypeGraph, index: TypeIndex, from_pointer: bool) -> TsType {
        let ctx = Context::default();
        let ty = graph.resolve(index).expect("resolve");
        map_type(&ctx, &ty, from_pointer, 1).expect("map")
    }

    #[test]
    fn test_primitive_table() -> Result<(), SchemaError> {
        let cases = [
            (Kind::Bool, "boolean"),
            (Kind::Int, "number"),
            (Kind::Int8, "number"),
            (Kind::Int16, "number"),
            (Kind::Int32, "number"),
            (Kind::Int64, "bigint"),
            (Kind::Uint, "number"),
            (Kind::Uint8, "number"),
            (Kind::Uint16, "number"),
            (Kind::Uint32, "number"),
            (Kind::Uint64, "bigint"),
            (Kind::Float32, "number"),
            (Kind::Float64, "number"),
            (Kind::String, "string"),
            (Kind::Interface, "any"),
            (Kind::Func, "any"),
            (Kind::Chan, "any"),
        ];

        let mut builder = TypeGraphBuilder::new();
        let indices = cases
            .iter()
            .map(|(kind, _)| builder.basic(*kind))
            .collect::<Result<Vec<_>, _>>()?;
        let graph = builder.build();

        for ((kind, expected), index) in cases.iter().zip(indices) {
            let ty = mapped(&graph, index, false);
            assert_eq!(ty.expr, *expected, "kind {kind}");
            assert!(!ty.optional, "kind {kind}");
            assert!(mapped(&graph, index, true).optional, "kind {kind}");
        }
        Ok(())
    }

    #[test]
    fn test_containers() -> Result<(), SchemaError> {
        let mut builder = TypeGraphBuilder::new();
        let uint8 = builder.basic(Kind::Uint8)?;
        let string = builder.basic(Kind::String)?;
        let int64 = builder.basic(Kind::Int64)?;
        let bytes = builder.slice(uint8)?;
        let fixed = builder.array(string, 3)?;
        let string_ptr = builder.pointer(string)?;
        let by_wide = builder.map(int64, string_ptr)?;
        let nested = builder.slice(bytes)?;
        let graph = builder.build();

        assert_eq!(mapped(&graph, bytes, false), TsType::new("number[]", true));
        assert_eq!(mapped(&graph, fixed, false), TsType::new("string[]", true));
        assert_eq!(mapped(&graph, nested, false), TsType::new("number[][]", true));
        assert_eq!(mapped(&graph, string_ptr, false), TsType::new("string", true));
        assert_eq!(
            mapped(&graph, by_wide, false),
            TsType::new("{ [key: string]: (string | undefined) }", false)
        );
        Ok(())
    }

    #[test]
    fn test_map_keys() -> Result<(), SchemaError> {
        let mut builder = TypeGraphBuilder::new();
        let int = builder.basic(Kind::Int)?;
        let uint64 = builder.basic(Kind::Uint64)?;
        let float32 = builder.basic(Kind::Float32)?;
        let string = builder.basic(Kind::String)?;
        let int_ptr = builder.pointer(int)?;
        let graph = builder.build();

        assert_eq!(map_key(&graph.resolve(int)?).expect("key"), "number");
        assert_eq!(map_key(&graph.resolve(float32)?).expect("key"), "number");
        assert_eq!(map_key(&graph.resolve(uint64)?).expect("key"), "string");
        assert_eq!(map_key(&graph.resolve(string)?).expect("key"), "string");
        assert!(matches!(
            map_key(&graph.resolve(int_ptr)?),
            Err(CodegenError::UnsupportedMapKey { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_uncollected_record_is_any() -> Result<(), SchemaError> {
        let mut builder = TypeGraphBuilder::new();
        let record = builder.declare_record("models", "Orphan");
        builder.define_fields(record, vec![])?;
        let graph = builder.build();

        assert_eq!(mapped(&graph, record, false), TsType::new("any", false));
        Ok(())
    }

    #[test]
    fn test_record_literal_indentation() -> Result<(), SchemaError> {
        let mut builder = TypeGraphBuilder::new();
        let int = builder.basic(Kind::Int)?;
        let inner = builder.declare_anonymous_record();
        builder.define_fields(inner, vec![FieldDef::new("Z", int).with_tag(json("z"))])?;
        let outer = builder.declare_anonymous_record();
        builder.define_fields(
            outer,
            vec![
                FieldDef::new("X", int).with_tag(json("x")),
                FieldDef::new("Inner", inner).with_tag(json("inner")),
            ],
        )?;
        let graph = builder.build();

        let ctx = Context::new(crate::Config::builder().indent_with_spaces(2).build());
        let ty = map_type(&ctx, &graph.resolve(outer)?, false, 1).expect("map");
        assert_eq!(
            ty.expr,
            "{\n    x: number;\n    inner: {\n      z: number;\n    };\n  }"
        );
        Ok(())
    }

    #[test]
    fn test_override_is_required() -> Result<(), SchemaError> {
        let mut builder = TypeGraphBuilder::new();
        let int = builder.basic(Kind::Int)?;
        let int_ptr = builder.pointer(int)?;
        let graph = builder.build();

        let field = FieldInfo {
            source_name: "Count".to_string(),
            ty: graph.resolve(int_ptr)?,
            type_override: Some("Counter".to_string()),
            external_name: None,
        };
        let ctx = Context::default();
        assert_eq!(
            map_field(&ctx, &field, 1).expect("map"),
            TsType::new("Counter", false)
        );
        Ok(())
    }

    #[test]
    fn test_self_referencing_literal_terminates() -> Result<(), SchemaError> {
        let mut builder = TypeGraphBuilder::new();
        let anon = builder.declare_anonymous_record();
        let anon_ptr = builder.pointer(anon)?;
        builder.define_fields(anon, vec![FieldDef::new("Next", anon_ptr)])?;
        let graph = builder.build();

        let ty = mapped(&graph, anon, false);
        assert_eq!(ty.expr, "{\n        Next?: any;\n    }");
        Ok(())
    }
}
