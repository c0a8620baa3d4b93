use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields};

use crate::common::{enum_repr, report_mode, ReportMode};

/// #[derive(Report)] picks a rendering and implements `Report` with it.
///
/// | input                         | default rendering |
/// |-------------------------------|-------------------|
/// | field-less enum               | integer           |
/// | enum with fields              | must be chosen    |
/// | struct / union                | `Display`         |
pub fn expand_derive_report(input: DeriveInput) -> TokenStream2 {
    match try_expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let explicit = report_mode(&input.attrs)?;
    let field_less = match &input.data {
        Data::Enum(data) => Some(data.variants.iter().all(|v| matches!(v.fields, Fields::Unit))),
        _ => None,
    };

    let mode = match (explicit, field_less) {
        (Some(ReportMode::Integer), Some(true)) => ReportMode::Integer,
        (Some(ReportMode::Integer), _) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[report(integer)] requires an enum whose variants have no fields",
            ));
        }
        (Some(mode), _) => mode,
        (None, Some(true)) => ReportMode::Integer,
        (None, Some(false)) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "enum with fields: add #[report(display)] or #[report(debug)]",
            ));
        }
        (None, None) => ReportMode::Display,
    };

    let body = match mode {
        ReportMode::Integer => integer_body(&input)?,
        ReportMode::Display => {
            input
                .generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(Self: ::core::fmt::Display));
            quote! { ::core::fmt::Display::fmt(self, f) }
        }
        ReportMode::Debug => {
            input
                .generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(Self: ::core::fmt::Debug));
            quote! { ::core::fmt::Debug::fmt(self, f) }
        }
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tola_result::probe::Report for #ident #ty_generics #where_clause {
            fn report(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #body
            }
        }
    })
}

/// Render the variant's underlying integer, never its name.
fn integer_body(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "expected an enum"));
    };
    let repr = enum_repr(&input.attrs)?;

    if data.variants.is_empty() {
        return Ok(quote! { match *self {} });
    }

    let arms = data.variants.iter().map(|variant| {
        let name = &variant.ident;
        quote! { Self::#name => Self::#name as #repr }
    });

    Ok(quote! {
        let value: #repr = match self {
            #(#arms,)*
        };
        ::core::fmt::Display::fmt(&value, f)
    })
}
