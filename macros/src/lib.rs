//! Procedural macros for tola-result
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `probe!` | - | Evaluate a capability expression for concrete types |
//! | `#[derive(Report)]` | struct/enum | Render a payload for the fatal path |
//!
//! ## Example
//!
//! ```ignore
//! use tola_result::{probe, Report};
//!
//! #[derive(Clone, Copy, Report)]
//! #[repr(u8)]
//! enum Code { Empty = 1, Overflow = 2 }
//!
//! assert!(probe!(Code: Copy & Report & !Default));
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// probe!
// =============================================================================

/// Unified capability probe for concrete types.
///
/// Supports boolean expressions (`&`, `|`, `!`, parentheses) and multiple
/// comma-separated checks, all of which must pass.
///
/// ```ignore
/// use tola_result::probe;
///
/// assert!(probe!(String: Clone & !Copy));
/// assert!(probe!(i32: (Clone | Debug) & Copy));
/// assert!(probe!(String: PartialEq<str>));
/// assert!(probe!(u64: From<u8>, u8: Into<u64>));
///
/// // Traits outside the detection table are probed locally
/// trait Tagged {}
/// impl Tagged for String {}
/// assert!(probe!(String: Tagged));
/// ```
///
/// Generic parameters always take the negative branch; generic code states
/// its requirements as bounds instead.
///
/// A trait named only inside `probe!` is still reported by the `dead_code`
/// lint: the bound in the expansion does not count as a use. Mark such a
/// trait `#[allow(dead_code)]`.
#[proc_macro]
pub fn probe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::ProbeInput);
    user::expand_probe(input).into()
}

// =============================================================================
// #[derive(Report)]
// =============================================================================

/// Implement `tola_result::probe::Report`.
///
/// - Field-less enums render their underlying integer (`#[repr(..)]` or `isize`).
/// - Structs render through `Display` unless `#[report(debug)]` is given.
/// - Enums with fields must choose: `#[report(display)]` or `#[report(debug)]`.
///
/// ```ignore
/// #[derive(Report)]
/// #[repr(u16)]
/// enum Errc { NotFound = 404 }
/// // Errc::NotFound renders as "404"
///
/// #[derive(Debug, Report)]
/// #[report(debug)]
/// struct Span { start: usize, end: usize }
/// ```
#[proc_macro_derive(Report, attributes(report))]
pub fn derive_report(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_report(input).into()
}
