//! # Layer 0: Capability Probe
//!
//! Compile-time answers to "does type X support operation Y".
//!
//! Two faces, both resolved entirely at build time:
//!
//! - **Generic gating**: the combinator surface states its requirements as
//!   trait bounds (`T: Default` for `unwrap_or_default`, `T: PartialEq<U>` for
//!   `contains`, `E: Report` for `unwrap`, ...). A missing capability is a
//!   build failure at the call site, never a runtime branch.
//! - **Concrete probing**: [`Detect`] / [`DetectPair`] and the `probe!` macro
//!   evaluate boolean capability expressions for concrete types:
//!
//! ```ignore
//! use tola_result::probe;
//!
//! assert!(probe!(String: Clone & !Copy));
//! assert!(probe!(String: PartialEq<str>));
//! assert!(!probe!(tola_result::Result<NoDefault, String>: Default));
//! ```
//!
//! [`Report`] lives here as well: it is the capability a payload needs to be
//! rendered by the fatal extraction path, and it carries the build-time gate
//! that keeps `()` out of the error position.

mod report;

pub use report::{assert_error_payload, Debugged, Displayed, Rendered, Report};

#[cfg(feature = "detect")]
pub mod detect;

// Placeholder module when detect is disabled
#[cfg(not(feature = "detect"))]
pub mod detect {
    use core::marker::PhantomData;

    #[doc(hidden)]
    pub struct Detect<T: ?Sized>(PhantomData<T>);
    #[doc(hidden)]
    pub struct DetectPair<A: ?Sized, B: ?Sized>(PhantomData<A>, PhantomData<B>);
}

pub use detect::{Detect, DetectPair};
