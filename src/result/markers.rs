//! Construction-intent markers.
//!
//! `Ok(v)` and `Err(e)` say which state to build. That matters whenever `T`
//! and `E` are the same type, or convert into one another: the payload type
//! alone cannot pick the variant.
//!
//! ```ignore
//! use tola_result::{Err, Ok, Result};
//!
//! let good: Result<u32, u32> = Ok(2).into();
//! let bad: Result<u32, u32> = Err(2).into();
//! assert!(good != bad);
//! ```

/// Success value wrapper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ok<T>(pub T);

/// Failure value wrapper.
///
/// The payload must carry information: a `Result` built from `Err(())` fails
/// to compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Err<E>(pub E);

impl<T> Ok<T> {
    /// Unwrap the marker.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Build the `Result` this marker describes.
    #[inline]
    pub fn into_result<E>(self) -> super::Result<T, E> {
        super::Result::from(self)
    }
}

impl Ok<()> {
    /// The success marker of a unit payload.
    pub const UNIT: Self = Ok(());
}

impl<E> Err<E> {
    /// Unwrap the marker.
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }

    /// Build the `Result` this marker describes.
    #[inline]
    pub fn into_result<T>(self) -> super::Result<T, E>
    where
        E: crate::probe::Report,
    {
        super::Result::from(self)
    }
}
