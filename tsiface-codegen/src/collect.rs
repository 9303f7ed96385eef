//! Type graph and field collection.
//!
//! Collection walks the graph depth-first from the roots. A type is marked
//! visited before anything reachable from it is walked; that ordering is what
//! makes self-referential and mutually-referential records terminate. Named
//! records receive their generated name before their fields are walked and
//! are appended to the context once their fields are complete.

use crate::context::Context;
use crate::error::CodegenError;
use crate::naming::{NamePath, generated_name};
use crate::record::{FieldInfo, RecordInfo};
use tsiface_schema::{Kind, MapKeyClass, TypeDescriptor};

/// Collects every record reachable from `roots`, in the order given.
///
/// A pointer root is dereferenced once.
///
/// # Errors
/// Returns `CodegenError::AnonymousRoot` if a root has no declaring package,
/// and propagates any error raised while collecting.
pub fn collect_roots<D, I>(ctx: &mut Context<D>, roots: I) -> Result<(), CodegenError>
where
    D: TypeDescriptor,
    I: IntoIterator<Item = D>,
{
    for root in roots {
        let ty = match (root.kind(), root.elem()) {
            (Kind::Pointer, Some(elem)) => elem,
            _ => root,
        };
        if ty.package().is_empty() {
            return Err(CodegenError::AnonymousRoot {
                type_name: ty.to_string(),
            });
        }

        let path = NamePath::root(generated_name(ctx.config(), ty.package(), ty.name()));
        tracing::debug!(root = %ty, "collecting root");
        collect_type(ctx, &ty, &path)?;
    }
    Ok(())
}

/// Collects `ty` and everything reachable from it.
///
/// # Errors
/// Returns `CodegenError::UnsupportedMapKey` when a map with an unsupported
/// key kind is reached.
pub fn collect_type<D: TypeDescriptor>(
    ctx: &mut Context<D>,
    ty: &D,
    path: &NamePath,
) -> Result<(), CodegenError> {
    if !ctx.mark_visited(ty) {
        tracing::trace!(ty = %ty, path = %path, "already visited");
        return Ok(());
    }

    match ty.kind() {
        Kind::Pointer | Kind::Slice | Kind::Array => {
            if let Some(elem) = ty.elem() {
                collect_type(ctx, &elem, &elem_path(path, &elem))?;
            }
        }
        Kind::Map => {
            if let Some(key) = ty.key() {
                map_key_class(&key)?;
                collect_type(ctx, &key, path)?;
            }
            if let Some(elem) = ty.elem() {
                collect_type(ctx, &elem, &elem_path(path, &elem))?;
            }
        }
        Kind::Struct if ty.name().is_empty() => {
            // Inlined at the use site; only its field types are collected.
            for field in record_fields(ty) {
                collect_field(ctx, &field, path)?;
            }
        }
        Kind::Struct => {
            let name = generated_name(ctx.config(), ty.package(), ty.name());
            ctx.register_name(ty, name.clone());

            let mut record = RecordInfo::new(ty.clone(), name);
            collect_fields(ctx, &mut record, ty, path)?;
            tracing::debug!(
                name = %record.generated_name,
                fields = record.fields.len(),
                path = %path,
                "collected record"
            );
            ctx.push_record(record);
        }
        _ => {}
    }
    Ok(())
}

/// Collects the flattened fields of `ty` into `record`, collecting each
/// field's type on the way.
///
/// Fields with a type override are recorded but their types are not walked.
///
/// # Errors
/// Propagates errors from collecting field types.
pub fn collect_fields<D: TypeDescriptor>(
    ctx: &mut Context<D>,
    record: &mut RecordInfo<D>,
    ty: &D,
    path: &NamePath,
) -> Result<(), CodegenError> {
    for field in record_fields(ty) {
        collect_field(ctx, &field, path)?;
        record.fields.push(field);
    }
    Ok(())
}

/// Returns the emitted fields of a record in declaration order.
///
/// Embedded records (and pointers to records) without a name annotation are
/// spliced in place. An embedded field with a non-empty name annotation is an
/// ordinary field. Fields named `-` are dropped. A record already being
/// flattened further up is not flattened again.
#[must_use]
pub fn record_fields<D: TypeDescriptor>(ty: &D) -> Vec<FieldInfo<D>> {
    let mut fields = Vec::new();
    let mut flattening = vec![ty.clone()];
    flatten_into(&mut fields, ty, &mut flattening);
    fields
}

/// Classifies a map key type.
///
/// # Errors
/// Returns `CodegenError::UnsupportedMapKey` for keys outside the number and
/// string families.
pub fn map_key_class<D: TypeDescriptor>(key: &D) -> Result<MapKeyClass, CodegenError> {
    key.kind()
        .map_key_class()
        .ok_or_else(|| CodegenError::UnsupportedMapKey {
            key: key.to_string(),
        })
}

fn flatten_into<D: TypeDescriptor>(out: &mut Vec<FieldInfo<D>>, ty: &D, flattening: &mut Vec<D>) {
    for field in ty.fields() {
        let annotation = field.tag.name_annotation();

        if field.embedded && annotation.is_none() {
            if let Some(target) = embedded_record(&field.ty) {
                if !flattening.contains(&target) {
                    flattening.push(target.clone());
                    flatten_into(out, &target, flattening);
                    flattening.pop();
                    continue;
                }
            }
        }

        if annotation.as_ref().is_some_and(|a| a.is_excluded()) {
            continue;
        }

        out.push(FieldInfo {
            source_name: field.name,
            type_override: field.tag.type_override(),
            external_name: annotation.map(|a| a.name),
            ty: field.ty,
        });
    }
}

fn embedded_record<D: TypeDescriptor>(ty: &D) -> Option<D> {
    match ty.kind() {
        Kind::Struct => Some(ty.clone()),
        Kind::Pointer => ty.elem().filter(|elem| elem.kind() == Kind::Struct),
        _ => None,
    }
}

fn collect_field<D: TypeDescriptor>(
    ctx: &mut Context<D>,
    field: &FieldInfo<D>,
    path: &NamePath,
) -> Result<(), CodegenError> {
    if field.type_override.is_some() {
        return Ok(());
    }
    collect_type(ctx, &field.ty, &field_path(path, field))
}

fn field_path<D: TypeDescriptor>(path: &NamePath, field: &FieldInfo<D>) -> NamePath {
    let inline = match field.ty.kind() {
        Kind::Struct => field.ty.is_anonymous_record(),
        Kind::Pointer | Kind::Slice | Kind::Array | Kind::Map => field
            .ty
            .elem()
            .is_some_and(|elem| elem.is_anonymous_record()),
        _ => false,
    };
    if inline {
        path.child(field.source_name.as_str())
    } else {
        path.clone()
    }
}

fn elem_path<D: TypeDescriptor>(path: &NamePath, elem: &D) -> NamePath {
    if elem.is_anonymous_record() {
        path.child(NamePath::ELEM)
    } else {
        path.clone()
    }
}
