// Common utilities shared between the macros
//
// This module contains:
// - bool_expr: capability expression parsing and code generation
// - repr: reading `#[repr(..)]` and `#[report(..)]` attributes

mod bool_expr;
mod repr;

pub use bool_expr::*;
pub use repr::*;
