//! # tsiface Derive
//!
//! Derive macro describing Rust structs to the tsiface type graph.
//!
//! The generated `Reflect` implementation declares the struct as a record,
//! memoizes it before describing its fields (so recursive types terminate),
//! and translates field attributes into name and type annotations.

mod attr;

use attr::{ContainerAttrs, FieldAttrs};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derives `tsiface::schema::Reflect` for a struct with named fields.
///
/// # Example
/// ```ignore
/// #[derive(Reflect)]
/// #[tsiface(rename = "Account", package = "billing")]
/// struct User {
///     #[tsiface(rename = "id")]
///     id: u64,
///     #[tsiface(rename = "nick", omit_empty)]
///     nickname: Option<String>,
///     #[tsiface(type = "Date")]
///     created_at: String,
///     #[tsiface(skip)]
///     password_hash: String,
///     #[tsiface(flatten)]
///     audit: Audit,
/// }
/// ```
///
/// Container attributes: `rename`, `package` (defaults to the module path
/// with `::` replaced by `/`) and `inline` (describe as an anonymous record).
///
/// Field attributes: `rename`, `type`, `skip`, `omit_empty` and `flatten`.
#[proc_macro_derive(Reflect, attributes(tsiface))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Reflect cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Reflect can only be derived for structs",
            ));
        }
    };

    let field_defs = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(field_def)
            .collect::<syn::Result<Vec<_>>>()?,
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                fields,
                "Reflect requires named fields",
            ));
        }
    };

    let container = ContainerAttrs::parse(&input.attrs)?;
    let declare = if container.inline {
        quote! { graph.declare_anonymous_record() }
    } else {
        let local = match &container.rename {
            Some(rename) => quote! { #rename },
            None => {
                let ident = name.unraw().to_string();
                quote! { #ident }
            }
        };
        let package = match &container.package {
            Some(package) => quote! { #package },
            None => quote! { ::core::module_path!().replace("::", "/") },
        };
        quote! { graph.declare_record(#package, #local) }
    };

    Ok(quote! {
        impl ::tsiface::schema::Reflect for #name {
            fn reflect(
                graph: &mut ::tsiface::schema::TypeGraphBuilder,
            ) -> ::core::result::Result<::tsiface::schema::TypeIndex, ::tsiface::schema::SchemaError> {
                let index = #declare;
                graph.memoize::<Self>(index);
                let fields = ::std::vec![#(#field_defs),*];
                graph.define_fields(index, fields)?;
                ::core::result::Result::Ok(index)
            }
        }
    })
}

fn field_def(field: &syn::Field) -> syn::Result<TokenStream2> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;
    let attrs = FieldAttrs::parse(&field.attrs)?;
    let source_name = ident.unraw().to_string();

    // Skipped and overridden fields never reach the mapper, so their Rust
    // type need not implement Reflect.
    let ty = if attrs.is_opaque() {
        quote! { graph.basic(::tsiface::schema::Kind::Interface)? }
    } else {
        let ty = &field.ty;
        quote! { graph.reflect::<#ty>()? }
    };

    let mut pairs = Vec::new();
    if let Some(annotation) = attrs.name_annotation() {
        pairs.push(quote! { (::tsiface::schema::NAME_KEY, #annotation) });
    }
    if let Some(type_override) = &attrs.type_override {
        pairs.push(quote! { (::tsiface::schema::TYPE_KEY, #type_override) });
    }
    let tag = if pairs.is_empty() {
        quote! { ::tsiface::schema::StructTag::default() }
    } else {
        quote! { ::tsiface::schema::StructTag::from_pairs([#(#pairs),*]) }
    };

    let embed = if attrs.flatten {
        quote! { .embed() }
    } else {
        quote! {}
    };

    Ok(quote! {
        ::tsiface::schema::FieldDef::new(#source_name, #ty)#embed.with_tag(#tag)
    })
}
