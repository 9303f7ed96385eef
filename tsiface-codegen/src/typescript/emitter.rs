//! Interface declaration emission.

use super::mapper::{field_line, map_field};
use crate::context::Context;
use crate::error::CodegenError;
use crate::record::RecordInfo;
use std::io::Write;
use tsiface_schema::TypeDescriptor;

/// Renders the custom headers followed by one interface declaration per
/// collected record, in discovery order.
///
/// When headers are present a blank line separates them from the first
/// declaration. Each declaration is followed by a blank line.
///
/// # Errors
/// Propagates mapping errors; nothing is returned on failure.
pub fn emit<D: TypeDescriptor>(ctx: &Context<D>) -> Result<String, CodegenError> {
    let mut out = String::new();
    for header in ctx.custom_headers() {
        out.push_str(header);
        out.push('\n');
    }
    if !ctx.custom_headers().is_empty() {
        out.push('\n');
    }

    for record in ctx.records() {
        out.push_str(&describe_record(ctx, record)?);
        out.push('\n');
    }

    tracing::debug!(
        records = ctx.records().len(),
        bytes = out.len(),
        "emitted declarations"
    );
    Ok(out)
}

/// Renders one `export interface` declaration.
///
/// # Errors
/// Propagates mapping errors.
pub fn describe_record<D: TypeDescriptor>(
    ctx: &Context<D>,
    record: &RecordInfo<D>,
) -> Result<String, CodegenError> {
    let indent = ctx.config().indent().unit();
    let mut out = format!("export interface {} {{\n", record.generated_name);
    for field in &record.fields {
        let ty = map_field(ctx, field, 1)?;
        out.push_str(&field_line(&indent, field.output_name(), &ty));
    }
    out.push_str("}\n");
    Ok(out)
}

/// Emits into `writer`.
///
/// The whole output is rendered before anything is written, so a mapping
/// error leaves the writer untouched.
///
/// # Errors
/// Propagates mapping errors and I/O errors from the writer.
pub fn write_to<D: TypeDescriptor, W: Write>(
    ctx: &Context<D>,
    writer: &mut W,
) -> Result<(), CodegenError> {
    let text = emit(ctx)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::collect_roots;
    use crate::config::Config;
    use crate::fixtures::{self, json};
    use tsiface_schema::{FieldDef, Kind, SchemaError, TypeGraphBuilder};

    const COMPANY: &str = "\
export interface Company_Employee {
\tid: bigint;
\tname: string;
\tposition: string;
\tprojects?: string[];
\taddress: {
\t\tstreet: string;
\t\tcity: string;
\t\tcountry_code: string;
\t\tgeo_location: {
\t\t\tlatitude: number;
\t\t\tlongitude: number;
\t\t};
\t};
\tdepartments?: Company_Department[];
\tskills: { [key: string]: {
\t\tlevel: number;
\t\tcertified: boolean;
\t\tcert_details?: {
\t\t\tcert_name: string;
\t\t\tissue_date: string;
\t\t};
\t} };
\tmetadata: { [key: number]: ({
\t\tdescription: string;
\t\timportant: boolean;
\t}[] | undefined) };
\tcustom: CustomType;
\tdata?: number[];
}

export interface Company_Department {
\tname: string;
\tmanager?: Company_Employee;
\tsub_teams?: {
\t\tteam_name: string;
\t\tteam_lead?: Company_Employee;
\t\tmembers?: Company_Employee[];
\t\tresponsibilities: { [key: string]: {
\t\t\tdescription: string;
\t\t\trequired: boolean;
\t\t} };
\t}[];
}

";

    #[test]
    fn test_company_model() {
        let fixture = fixtures::company();
        let mut ctx = Context::new(Config::builder().indent_with_tabs().build());
        collect_roots(&mut ctx, [fixture.department()]).expect("collect");

        assert_eq!(emit(&ctx).expect("emit"), COMPANY);
    }

    #[test]
    fn test_multiple_roots() -> Result<(), SchemaError> {
        let mut builder = TypeGraphBuilder::new();
        let int = builder.basic(Kind::Int)?;
        let string = builder.basic(Kind::String)?;
        let user = builder.declare_record("models", "User");
        let post = builder.declare_record("models", "Post");
        builder.define_fields(
            user,
            vec![
                FieldDef::new("ID", int).with_tag(json("id")),
                FieldDef::new("Name", string).with_tag(json("name")),
            ],
        )?;
        builder.define_fields(
            post,
            vec![
                FieldDef::new("Title", string).with_tag(json("title")),
                FieldDef::new("Author", user).with_tag(json("author")),
            ],
        )?;
        let graph = builder.build();

        let mut ctx = Context::default();
        collect_roots(&mut ctx, [graph.resolve(user)?, graph.resolve(post)?]).expect("collect");

        let expected = "\
export interface Models_User {
    id: number;
    name: string;
}

export interface Models_Post {
    title: string;
    author: Models_User;
}

";
        assert_eq!(emit(&ctx).expect("emit"), expected);
        Ok(())
    }

    #[test]
    fn test_headers_and_naming_rules() -> Result<(), SchemaError> {
        let mut builder = TypeGraphBuilder::new();
        let int = builder.basic(Kind::Int)?;
        let string = builder.basic(Kind::String)?;
        let string_ptr = builder.pointer(string)?;
        let record = builder.declare_record("models", "Item");
        builder.define_fields(
            record,
            vec![
                FieldDef::new("Untagged", int),
                FieldDef::new("OnlyOptions", int).with_tag(json(",omitempty")),
                FieldDef::new("Hidden", string).with_tag(json("-")),
                FieldDef::new("Nick", string_ptr).with_tag(json("nick")),
                FieldDef::new("Raw", string_ptr).with_tag(r#"json:"raw" tstype:"RawText""#),
            ],
        )?;
        let graph = builder.build();

        let mut ctx = Context::new(Config::builder().indent_with_spaces(2).build());
        ctx.add_custom_header("// generated");
        ctx.add_custom_header("import { RawText } from './raw';");
        collect_roots(&mut ctx, [graph.resolve(record)?]).expect("collect");

        let expected = "\
// generated
import { RawText } from './raw';

export interface Models_Item {
  Untagged: number;
  OnlyOptions: number;
  nick?: string;
  raw: RawText;
}

";
        assert_eq!(emit(&ctx).expect("emit"), expected);
        Ok(())
    }

    #[test]
    fn test_empty_context() {
        let mut ctx = Context::<tsiface_schema::TypeRef<'static>>::default();
        assert_eq!(emit(&ctx).expect("emit"), "");

        ctx.add_custom_header("// nothing");
        assert_eq!(emit(&ctx).expect("emit"), "// nothing\n\n");
    }

    #[test]
    fn test_custom_prefix() -> Result<(), SchemaError> {
        let mut builder = TypeGraphBuilder::new();
        let record = builder.declare_record("models/v1", "Empty");
        builder.define_fields(record, vec![])?;
        let graph = builder.build();

        let config = Config::builder()
            .package_prefix(|pkg| pkg.rsplit('/').next().unwrap_or(pkg).to_uppercase())
            .build();
        let mut ctx = Context::new(config);
        collect_roots(&mut ctx, [graph.resolve(record)?]).expect("collect");

        assert_eq!(
            emit(&ctx).expect("emit"),
            "export interface V1Empty {\n}\n\n"
        );
        Ok(())
    }

    #[test]
    fn test_write_to_buffer() {
        let fixture = fixtures::company();
        let mut ctx = Context::new(Config::builder().indent_with_tabs().build());
        collect_roots(&mut ctx, [fixture.department()]).expect("collect");

        let mut buffer = Vec::new();
        write_to(&ctx, &mut buffer).expect("write");
        assert_eq!(String::from_utf8(buffer).expect("utf8"), COMPANY);
    }
}
