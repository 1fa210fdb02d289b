// image-feed-core-client/image-feed-proc-macros
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, FieldsNamed};

/// Implements `From<&AppDependencies>` for an app service. Fields marked with `#[inject]` are
/// cloned from the field of the same name in `AppDependencies`, all others are initialized
/// with `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_deps(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);
    let fields = named_fields(&input);

    let field_initialization = fields
        .named
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;

            if has_attribute(field, "inject") {
                Some(quote! { #ident: deps.#ident.clone() })
            } else {
                Some(quote! { #ident: Default::default() })
            }
        })
        .collect::<Vec<_>>();

    let name = &input.ident;
    let expanded = quote! {
        impl From<&crate::app::deps::AppDependencies> for #name {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#field_initialization,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Generates a `{Name}Dependencies` struct containing every field of the annotated struct
/// that is not marked with `#[state]`, together with a `From<{Name}Dependencies>`
/// implementation. `#[state]` fields are initialized with `Default::default()`.
#[proc_macro_derive(DependenciesStruct, attributes(state))]
pub fn dependencies_struct(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);
    let fields = named_fields(&input);

    let name = &input.ident;
    let dependencies_struct_name = format_ident!("{}Dependencies", name);

    let struct_fields = fields
        .named
        .iter()
        .filter(|field| !has_attribute(field, "state"))
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            let field_type = &field.ty;
            Some(quote! { pub #ident: #field_type })
        })
        .collect::<Vec<_>>();

    let field_initialization = fields
        .named
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;

            if has_attribute(field, "state") {
                Some(quote! { #ident: Default::default() })
            } else {
                Some(quote! { #ident: deps.#ident })
            }
        })
        .collect::<Vec<_>>();

    let expanded = quote! {
        pub struct #dependencies_struct_name {
            #(#struct_fields,)*
        }

        impl From<#dependencies_struct_name> for #name {
            fn from(deps: #dependencies_struct_name) -> Self {
                Self {
                    #(#field_initialization,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

fn named_fields(input: &DeriveInput) -> &FieldsNamed {
    let Data::Struct(struct_data) = &input.data else {
        panic!("This macro only supports structs.")
    };

    let Fields::Named(fields) = &struct_data.fields else {
        panic!("This macro only supports structs with named fields.")
    };

    fields
}

fn has_attribute(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}
