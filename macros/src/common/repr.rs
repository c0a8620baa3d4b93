//! Attribute helpers for `#[derive(Report)]`.

use syn::{Attribute, Ident};

/// Integer types accepted inside `#[repr(..)]`.
const INT_REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize",
    "i8", "i16", "i32", "i64", "i128", "isize",
];

/// The integer type of a field-less enum: its `#[repr(..)]`, or `isize`.
pub fn enum_repr(attrs: &[Attribute]) -> syn::Result<Ident> {
    let mut found = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if INT_REPRS.contains(&ident.to_string().as_str()) {
                    found = Some(ident.clone());
                }
            }
            // `align(N)` / `packed(N)`
            if meta.input.peek(syn::token::Paren) {
                let args;
                syn::parenthesized!(args in meta.input);
                args.parse::<proc_macro2::TokenStream>()?;
            }
            Ok(())
        })?;
    }
    Ok(found.unwrap_or_else(|| Ident::new("isize", proc_macro2::Span::call_site())))
}

/// Rendering selected by `#[report(..)]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportMode {
    /// Underlying integer of a field-less enum.
    Integer,
    /// `core::fmt::Display`.
    Display,
    /// `core::fmt::Debug`.
    Debug,
}

/// Read the container-level `#[report(integer | display | debug)]`.
pub fn report_mode(attrs: &[Attribute]) -> syn::Result<Option<ReportMode>> {
    let mut mode = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("report")) {
        attr.parse_nested_meta(|meta| {
            let selected = if meta.path.is_ident("integer") {
                ReportMode::Integer
            } else if meta.path.is_ident("display") {
                ReportMode::Display
            } else if meta.path.is_ident("debug") {
                ReportMode::Debug
            } else {
                return Err(meta.error("expected `integer`, `display` or `debug`"));
            };
            if mode.replace(selected).is_some() {
                return Err(meta.error("conflicting #[report] modes"));
            }
            Ok(())
        })?;
    }
    Ok(mode)
}
