// Boolean capability expressions: `Clone & !Copy`, `(Debug | Display) & PartialEq<str>`

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    GenericArgument, PathArguments, Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Cap(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        // Parse a type (Capability)
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Cap(ty))
    }
}

// =============================================================================
// Capability Routing
// =============================================================================

/// Single-type capabilities with a `Detect<T>::IS_*` const.
const DETECT_CAPS: &[&str] = &[
    "Clone", "Copy", "Debug", "Display", "Default", "PartialEq", "Eq", "Hash", "Send", "Sync",
    "Report",
];

/// Two-type relationships with a `DetectPair<A, B>::IS_*` const.
const PAIR_CAPS: &[(&str, &str)] = &[
    ("PartialEq", "PARTIAL_EQ_WITH"),
    ("From", "FROM"),
    ("Into", "INTO"),
];

/// How one capability of an expression is answered.
enum Route<'a> {
    /// `Detect::<T>::IS_X`
    Detect(String),
    /// `DetectPair::<T, U>::IS_X`
    Pair(&'a Type, &'static str),
    /// Local probe for any other trait
    Custom,
}

fn route(cap: &Type) -> Route<'_> {
    let Type::Path(path) = cap else {
        return Route::Custom;
    };
    let Some(last) = path.path.segments.last() else {
        return Route::Custom;
    };
    let name = last.ident.to_string();

    match &last.arguments {
        PathArguments::None if DETECT_CAPS.contains(&name.as_str()) => {
            Route::Detect(to_screaming_snake_case(&name))
        }
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => {
            let pair = PAIR_CAPS.iter().find(|(trait_name, _)| *trait_name == name);
            match (pair, args.args.first()) {
                (Some((_, konst)), Some(GenericArgument::Type(other))) => Route::Pair(other, konst),
                _ => Route::Custom,
            }
        }
        _ => Route::Custom,
    }
}

/// Convert trait name to SCREAMING_SNAKE_CASE for IS_* constant.
/// e.g., "Clone" -> "CLONE", "PartialEq" -> "PARTIAL_EQ"
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_uppercase());
    }
    result
}

// =============================================================================
// Code Generation
// =============================================================================

/// Generate the boolean check for `ty: expr`.
///
/// NOT is applied after the capability is answered: a concrete type either
/// has the capability or it does not.
pub fn generate_check(expr: &BoolExpr, ty: &Type) -> TokenStream {
    match expr {
        BoolExpr::Cap(cap) => generate_single(cap, ty),
        BoolExpr::And(lhs, rhs) => {
            let l = generate_check(lhs, ty);
            let r = generate_check(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_check(lhs, ty);
            let r = generate_check(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_check(operand, ty);
            quote! { (!#o) }
        }
    }
}

fn generate_single(cap: &Type, ty: &Type) -> TokenStream {
    match route(cap) {
        Route::Detect(name) => {
            let konst = format_ident!("IS_{}", name);
            quote! { ::tola_result::probe::detect::Detect::<#ty>::#konst }
        }
        Route::Pair(other, name) => {
            let konst = format_ident!("IS_{}", name);
            quote! { ::tola_result::probe::detect::DetectPair::<#ty, #other>::#konst }
        }
        Route::Custom => generate_custom_probe(cap, ty),
    }
}

/// Generate a local probe for a trait the detection table does not cover.
fn generate_custom_probe(trait_ty: &Type, ty: &Type) -> TokenStream {
    quote! {
        {
            trait __ProbeFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __ProbeFallback for __Probe<X> {}
            impl<X: ?Sized + #trait_ty> __Probe<X> { const VAL: bool = true; }
            __Probe::<#ty>::VAL
        }
    }
}
