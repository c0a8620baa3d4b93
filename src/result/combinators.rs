//! Transformations over `Result`.
//!
//! Every combinator consumes `self` and returns a fresh value; none of them
//! can fail or terminate the process. A unit success payload is matched with
//! a `|()|` closure:
//!
//! ```ignore
//! let done: Result<(), Code> = Ok(()).into();
//! assert_eq!(done.map(|()| 5u32), Ok(5u32));
//! ```

use core::ops::{BitAnd, BitOr};

use super::{Ok, Result};
use crate::probe::{assert_error_payload, Report};
use crate::storage::Held;

impl<T, E> Result<T, E> {
    /// Transform the success payload; the error passes through unchanged.
    pub fn map<U, O>(self, op: O) -> Result<U, E>
    where
        O: FnOnce(T) -> U,
    {
        match self.into_held() {
            Held::Ok(value) => Result::from_held(Held::Ok(op(value))),
            Held::Err(error) => Result::from_held(Held::Err(error)),
        }
    }

    /// Transform the failure payload; the success passes through unchanged.
    pub fn map_err<F, O>(self, op: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
        F: Report,
    {
        assert_error_payload::<F>();
        match self.into_held() {
            Held::Ok(value) => Result::from_held(Held::Ok(value)),
            Held::Err(error) => Result::from_held(Held::Err(op(error))),
        }
    }

    /// `op(value)` in the `Ok` state, `default` otherwise.
    ///
    /// `default` is evaluated eagerly by the caller whether or not it is used;
    /// use [`Result::map_or_else`] to defer it.
    pub fn map_or<U, O>(self, default: U, op: O) -> U
    where
        O: FnOnce(T) -> U,
    {
        match self.into_held() {
            Held::Ok(value) => op(value),
            Held::Err(_) => default,
        }
    }

    /// `op(value)` in the `Ok` state, `default_op(error)` otherwise.
    ///
    /// Exactly one of the two callables runs.
    pub fn map_or_else<U, D, O>(self, default_op: D, op: O) -> U
    where
        D: FnOnce(E) -> U,
        O: FnOnce(T) -> U,
    {
        match self.into_held() {
            Held::Ok(value) => op(value),
            Held::Err(error) => default_op(error),
        }
    }

    /// Chain a fallible step.
    ///
    /// In the `Err` state `op` is never called and the original error is
    /// returned untouched.
    pub fn and_then<U, O>(self, op: O) -> Result<U, E>
    where
        O: FnOnce(T) -> Result<U, E>,
    {
        match self.into_held() {
            Held::Ok(value) => op(value),
            Held::Err(error) => Result::from_held(Held::Err(error)),
        }
    }

    /// Recover from a failure.
    ///
    /// In the `Ok` state `op` is never called and the success is returned
    /// untouched.
    pub fn or_else<F, O>(self, op: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        match self.into_held() {
            Held::Ok(value) => Result::from_held(Held::Ok(value)),
            Held::Err(error) => op(error),
        }
    }

    /// `res` if `self` is `Ok`, otherwise `self`'s error.
    ///
    /// Both operands are already evaluated; this is pure selection.
    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self.into_held() {
            Held::Ok(_) => res,
            Held::Err(error) => Result::from_held(Held::Err(error)),
        }
    }

    /// `self` if it is `Ok`, otherwise `res`.
    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self.into_held() {
            Held::Ok(value) => Result::from_held(Held::Ok(value)),
            Held::Err(_) => res,
        }
    }

    /// The success payload, or `default`.
    ///
    /// Never touches the error's type beyond dropping it.
    pub fn unwrap_or(self, default: T) -> T {
        match self.into_held() {
            Held::Ok(value) => value,
            Held::Err(_) => default,
        }
    }

    /// The success payload, or `T::default()`.
    ///
    /// Offered only when `T: Default`:
    ///
    /// ```compile_fail
    /// use tola_result::{Ok, Result};
    ///
    /// struct NoDefault;
    ///
    /// let r: Result<NoDefault, String> = Ok(NoDefault).into();
    /// let _value = r.unwrap_or_default();
    /// ```
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self.into_held() {
            Held::Ok(value) => value,
            Held::Err(_) => T::default(),
        }
    }

    /// The success payload, or a value computed from the error.
    pub fn unwrap_or_else<O>(self, op: O) -> T
    where
        O: FnOnce(E) -> T,
    {
        match self.into_held() {
            Held::Ok(value) => value,
            Held::Err(error) => op(error),
        }
    }

    /// `true` if the result is `Ok` and its payload equals `value`.
    ///
    /// Never compares across states. Offered only when `T: PartialEq<U>`:
    ///
    /// ```compile_fail
    /// use tola_result::{Ok, Result};
    ///
    /// struct Opaque(u8);
    ///
    /// let r: Result<Opaque, String> = Ok(Opaque(1)).into();
    /// let _found = r.contains(&Opaque(1));
    /// ```
    pub fn contains<U>(&self, value: &U) -> bool
    where
        U: ?Sized,
        T: PartialEq<U>,
    {
        match self.held() {
            Held::Ok(held) => held == value,
            Held::Err(_) => false,
        }
    }

    /// `true` if the result is `Err` and its payload equals `value`.
    pub fn contains_err<F>(&self, value: &F) -> bool
    where
        F: ?Sized,
        E: PartialEq<F>,
    {
        match self.held() {
            Held::Ok(_) => false,
            Held::Err(held) => held == value,
        }
    }
}

impl<T, E> Result<Option<T>, E> {
    /// Turn a result of an option into an option of a result.
    ///
    /// - `Ok(None)` becomes `None`
    /// - `Ok(Some(v))` becomes `Some(Ok(v))`
    /// - `Err(e)` becomes `Some(Err(e))`
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self.into_held() {
            Held::Ok(Some(value)) => Some(Result::from(Ok(value))),
            Held::Ok(None) => None,
            Held::Err(error) => Some(Result::from_held(Held::Err(error))),
        }
    }
}

// =============================================================================
// Operators
// =============================================================================

/// `a & b` is [`Result::and`].
impl<T, U, E> BitAnd<Result<U, E>> for Result<T, E> {
    type Output = Result<U, E>;

    #[inline]
    fn bitand(self, rhs: Result<U, E>) -> Self::Output {
        self.and(rhs)
    }
}

/// `a | b` is [`Result::or`].
impl<T, E, F> BitOr<Result<T, F>> for Result<T, E> {
    type Output = Result<T, F>;

    #[inline]
    fn bitor(self, rhs: Result<T, F>) -> Self::Output {
        self.or(rhs)
    }
}
