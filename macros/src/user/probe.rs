//! `probe!`: boolean capability expressions over concrete types.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

use crate::common::{generate_check, BoolExpr};

/// Single type check: `Type: Expr`
pub struct TypeCheck {
    ty: Type,
    expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

/// One or more checks, comma separated. All must hold.
pub struct ProbeInput {
    checks: Vec<TypeCheck>,
}

impl Parse for ProbeInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut checks = vec![input.parse()?];

        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            checks.push(input.parse()?);
        }

        Ok(ProbeInput { checks })
    }
}

pub fn expand_probe(input: ProbeInput) -> TokenStream2 {
    // Reference the user's types before the glob import so their own
    // imports are never reported unused.
    let type_refs = input.checks.iter().map(|c| {
        let ty = &c.ty;
        quote! { __use_type::<#ty>(::core::marker::PhantomData); }
    });
    let check_exprs = input.checks.iter().map(|c| generate_check(&c.expr, &c.ty));

    quote! {
        {
            fn __use_type<__T: ?Sized>(_: ::core::marker::PhantomData<__T>) {}
            #(#type_refs)*
            #[allow(unused_imports)]
            use ::tola_result::probe::detect::*;
            (true #(&& #check_exprs)*)
        }
    }
}
