//! Payload rendering for fatal diagnostics.
//!
//! `Report` is the capability the extraction operations require of the
//! *other* state's payload: `unwrap` needs `E: Report`, `unwrap_err` needs
//! `T: Report`. It doubles as the error-payload gate, since the unit type is
//! the only implementor with `HAS_PAYLOAD = false`.
//!
//! Field-less enums are rendered as their underlying integer, not by name.
//! Use `#[derive(Report)]` to get that behavior for your own enums.
//!
//! Foreign types without an impl here go through [`Displayed`] or
//! [`Debugged`].

use core::fmt;

/// Rendering of a payload inside a fatal diagnostic line.
pub trait Report {
    /// Whether the type carries information worth rendering.
    ///
    /// Only `()` sets this to `false`; such a payload is reported as the bare
    /// message, and it is refused as an error type.
    const HAS_PAYLOAD: bool = true;

    /// Write the payload in its diagnostic form.
    fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// `Display` adapter over any [`Report`] value.
pub struct Rendered<'a, R: ?Sized>(pub &'a R);

impl<R: Report + ?Sized> fmt::Display for Rendered<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.report(f)
    }
}

/// Build-time gate: an error payload must carry information.
///
/// Evaluated in a `const` block by every path that introduces a new error
/// type into a `Result`, so `Result<T, ()>` can be named but never holds `Err`.
///
/// ```compile_fail
/// use tola_result::{Err, Result};
///
/// let r: Result<u32, ()> = Err(()).into();
/// assert!(r.is_err());
/// ```
///
/// The same rejection applies when an error is mapped into `()`:
///
/// ```compile_fail
/// use tola_result::{Err, Result};
///
/// let r: Result<u32, u8> = Err(1u8).into();
/// let _unit: Result<u32, ()> = r.map_err(|_| ());
/// ```
#[inline(always)]
pub const fn assert_error_payload<E: Report + ?Sized>() {
    const {
        assert!(E::HAS_PAYLOAD, "unit as error type is not allowed");
    }
}

// =============================================================================
// Std Type Implementations
// =============================================================================

/// Implement `Report` by forwarding to `Display`.
macro_rules! impl_report_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Report for $ty {
                #[inline]
                fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_report_display!(
    bool, char, str,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    core::num::NonZeroU8, core::num::NonZeroU16, core::num::NonZeroU32,
    core::num::NonZeroU64, core::num::NonZeroU128, core::num::NonZeroUsize,
    core::num::NonZeroI8, core::num::NonZeroI16, core::num::NonZeroI32,
    core::num::NonZeroI64, core::num::NonZeroI128, core::num::NonZeroIsize,
    core::fmt::Error,
    core::num::ParseIntError, core::num::ParseFloatError, core::num::TryFromIntError,
    core::str::Utf8Error, core::str::ParseBoolError,
    core::char::ParseCharError, core::char::CharTryFromError,
    core::char::TryFromCharError, core::char::DecodeUtf16Error,
    core::array::TryFromSliceError,
    core::cell::BorrowError, core::cell::BorrowMutError,
    core::alloc::LayoutError,
    core::time::TryFromFloatSecsError,
    core::convert::Infallible,
);

impl Report for () {
    const HAS_PAYLOAD: bool = false;

    #[inline]
    fn report(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Result::Ok(())
    }
}

/// Implement `Report` for pointer-like wrappers by forwarding to the pointee.
macro_rules! impl_report_forward {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<R: Report + ?Sized> Report for $ty {
                const HAS_PAYLOAD: bool = R::HAS_PAYLOAD;

                #[inline]
                fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).report(f)
                }
            }
        )*
    };
}

impl_report_forward!(&R, &mut R);

#[cfg(feature = "alloc")]
impl_report_forward!(
    alloc::boxed::Box<R>,
    alloc::rc::Rc<R>,
    alloc::sync::Arc<R>,
);

#[cfg(feature = "alloc")]
impl_report_display!(
    alloc::string::String,
    alloc::string::FromUtf8Error,
    alloc::string::FromUtf16Error,
    alloc::collections::TryReserveError,
);

#[cfg(feature = "alloc")]
impl Report for alloc::borrow::Cow<'_, str> {
    #[inline]
    fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl<R: Report> Report for [R] {
    fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.report(f)?;
        }
        f.write_str("]")
    }
}

impl<R: Report, const N: usize> Report for [R; N] {
    #[inline]
    fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().report(f)
    }
}

#[cfg(feature = "alloc")]
impl<R: Report> Report for alloc::vec::Vec<R> {
    #[inline]
    fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().report(f)
    }
}

impl<R: Report> Report for Option<R> {
    fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => {
                f.write_str("Some(")?;
                value.report(f)?;
                f.write_str(")")
            }
            None => f.write_str("None"),
        }
    }
}

/// Tuples render like their `Debug` form: `(a, b)`.
macro_rules! impl_report_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: Report),+> Report for ($($name,)+) {
                #[allow(non_snake_case)]
                fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let ($($name,)+) = self;
                    f.write_str("(")?;
                    let mut first = true;
                    $(
                        if !core::mem::take(&mut first) {
                            f.write_str(", ")?;
                        }
                        $name.report(f)?;
                    )+
                    f.write_str(")")
                }
            }
        )*
    };
}

impl_report_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

// Error trait objects, as carried by `Box<dyn Error>`.
#[cfg(feature = "std")]
impl_report_display!(
    dyn std::error::Error,
    dyn std::error::Error + Send,
    dyn std::error::Error + Send + Sync,
    std::io::Error,
    std::io::ErrorKind,
    std::net::AddrParseError,
    std::env::VarError,
    std::env::JoinPathsError,
    std::ffi::NulError,
    std::ffi::IntoStringError,
    std::path::StripPrefixError,
    std::time::SystemTimeError,
    std::sync::mpsc::RecvError,
    std::sync::mpsc::TryRecvError,
    std::sync::mpsc::RecvTimeoutError,
);

// =============================================================================
// Adapters
// =============================================================================

/// Hold any `Display` type as a reportable payload.
///
/// `Report` cannot be implemented for another crate's type from a third
/// crate; wrap the value instead:
///
/// ```
/// use tola_result::{Displayed, Result};
///
/// let parsed = "yes".parse::<bool>().map_err(Displayed);
/// let r: Result<bool, Displayed<std::str::ParseBoolError>> = parsed.into();
/// assert!(r.is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Displayed<E>(pub E);

/// Hold any `Debug` type as a reportable payload, rendered with `{:?}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Debugged<E>(pub E);

impl<E> Displayed<E> {
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E> Debugged<E> {
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E: fmt::Display> Report for Displayed<E> {
    #[inline]
    fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<E: fmt::Debug> Report for Debugged<E> {
    #[inline]
    fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<E> From<E> for Displayed<E> {
    #[inline]
    fn from(value: E) -> Self {
        Self(value)
    }
}

impl<E> From<E> for Debugged<E> {
    #[inline]
    fn from(value: E) -> Self {
        Self(value)
    }
}
