//! # Layer 2: Result Value
//!
//! `Result<T, E>` holds either a success value or a failure value.
//!
//! ## States
//!
//! ```text
//!          From<Ok<T>> / Default            From<Err<E>>
//!                 |                              |
//!                 v                              v
//!              +----+   assign / clone_from   +-----+
//!              | Ok | <---------------------> | Err |
//!              +----+                         +-----+
//! ```
//!
//! Neither state transitions on its own. Every assignment is a full replace
//! through the storage transfer protocol, and every combinator consumes
//! `self` and returns a new value.
//!
//! ## Two kinds of failure
//!
//! - The `Err` state is ordinary data. Nothing here reports or logs it.
//! - Calling a state-specific extractor (`unwrap`, `expect`, ...) on the
//!   wrong state is a bug in the caller. The process is terminated through
//!   [`crate::fatal`]; there is no way to catch it.

mod cmp;
mod combinators;
mod markers;

use core::fmt;
use core::hash::{Hash, Hasher};

pub use markers::{Err, Ok};

use crate::fatal;
use crate::probe::{assert_error_payload, Report};
use crate::storage::{Held, Slot, Tag};

/// Message used by [`Result::unwrap`].
pub const UNWRAP_ERR_MESSAGE: &str = "Attempting to unwrap an Err Result";

/// Message used by [`Result::unwrap_err`].
pub const UNWRAP_OK_MESSAGE: &str = "Attempting to unwrap_err an Ok Result";

/// Either success (`Ok`) or failure (`Err`).
///
/// - `T` may be `()`: a success that carries no data.
/// - `E` must not be `()`: building an `Err` state of a unit error type fails
///   to compile.
/// - `E` must implement [`Report`] to enter the `Err` state. Foreign types
///   without an impl are wrapped in [`crate::Displayed`] or [`crate::Debugged`].
///
/// # Borrowed payloads
///
/// A `Result<&X, E>` is borrow-checked like any other value and cannot
/// outlive `X`. Because the storage runs its own `Drop`, the borrow must also
/// outlive the `Result` itself, which is stricter than `core::result::Result`:
/// declare the referent first.
///
/// ```compile_fail
/// use tola_result::{Ok, Result};
///
/// let r: Result<&String, u32>;
/// let s = String::from("x");
/// r = Ok(&s).into();
/// assert!(r.is_ok());
/// ```
pub struct Result<T, E> {
    slot: Slot<T, E>,
}

// =============================================================================
// Construction
// =============================================================================

impl<T, E> Result<T, E> {
    /// Wrap a payload already known to be valid for its position.
    ///
    /// Errors reaching this point were admitted by [`assert_error_payload`]
    /// when they first entered a `Result`.
    #[inline]
    pub(crate) fn from_held(held: Held<T, E>) -> Self {
        Self {
            slot: Slot::from_held(held),
        }
    }

    #[inline]
    pub(crate) fn into_held(self) -> Held<T, E> {
        self.slot.into_held()
    }

    #[inline]
    pub(crate) fn held(&self) -> Held<&T, &E> {
        self.slot.view()
    }
}

impl<T, E> From<Ok<T>> for Result<T, E> {
    #[inline]
    fn from(ok: Ok<T>) -> Self {
        Self {
            slot: Slot::with_ok(ok.0),
        }
    }
}

impl<T, E: Report> From<Err<E>> for Result<T, E> {
    #[inline]
    fn from(err: Err<E>) -> Self {
        assert_error_payload::<E>();
        Self {
            slot: Slot::with_err(err.0),
        }
    }
}

/// Default-constructs to `Ok(T::default())`; with `T = ()` that is `Ok(())`.
impl<T: Default, E> Default for Result<T, E> {
    #[inline]
    fn default() -> Self {
        Self::from(Ok(T::default()))
    }
}

impl<T, E: Report> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            core::result::Result::Ok(v) => Self::from(Ok(v)),
            core::result::Result::Err(e) => Self::from(Err(e)),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        value.into_std()
    }
}

// =============================================================================
// Queries
// =============================================================================

impl<T, E> Result<T, E> {
    /// `true` when the success payload is live.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.slot.tag() == Some(Tag::Ok)
    }

    /// `true` when the failure payload is live.
    #[inline]
    pub fn is_err(&self) -> bool {
        self.slot.tag() == Some(Tag::Err)
    }

    /// Copy of the success payload, or `None` in the `Err` state.
    pub fn ok(&self) -> Option<T>
    where
        T: Clone,
    {
        match self.held() {
            Held::Ok(value) => Some(value.clone()),
            Held::Err(_) => None,
        }
    }

    /// Copy of the failure payload, or `None` in the `Ok` state.
    pub fn err(&self) -> Option<E>
    where
        E: Clone,
    {
        match self.held() {
            Held::Ok(_) => None,
            Held::Err(value) => Some(value.clone()),
        }
    }

    /// Consuming [`Result::ok`]: moves the payload out instead of copying it.
    pub fn into_ok(self) -> Option<T> {
        match self.into_held() {
            Held::Ok(value) => Some(value),
            Held::Err(_) => None,
        }
    }

    /// Consuming [`Result::err`].
    pub fn into_err(self) -> Option<E> {
        match self.into_held() {
            Held::Ok(_) => None,
            Held::Err(value) => Some(value),
        }
    }

    /// Borrow both payload positions.
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self.held() {
            Held::Ok(value) => Result::from_held(Held::Ok(value)),
            Held::Err(value) => Result::from_held(Held::Err(value)),
        }
    }

    /// Mutably borrow both payload positions.
    ///
    /// The state itself cannot be changed through this view; only the live
    /// payload can.
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self.slot.view_mut() {
            Held::Ok(value) => Result::from_held(Held::Ok(value)),
            Held::Err(value) => Result::from_held(Held::Err(value)),
        }
    }

    /// Convert into `core::result::Result`, e.g. to use `?` at an API edge.
    pub fn into_std(self) -> core::result::Result<T, E> {
        match self.into_held() {
            Held::Ok(value) => core::result::Result::Ok(value),
            Held::Err(value) => core::result::Result::Err(value),
        }
    }

    /// Convert both payloads into related types.
    pub fn convert<U, F>(self) -> Result<U, F>
    where
        T: Into<U>,
        E: Into<F>,
        F: Report,
    {
        assert_error_payload::<F>();
        match self.into_held() {
            Held::Ok(value) => Result::from_held(Held::Ok(value.into())),
            Held::Err(value) => Result::from_held(Held::Err(value.into())),
        }
    }
}

// =============================================================================
// Assignment
// =============================================================================

impl<T, E> Result<T, E> {
    /// Move-assign: replace the held state with `other`'s.
    ///
    /// The old payload is released exactly once, before (or as) the new one
    /// moves into the same storage.
    pub fn assign(&mut self, mut other: Self) {
        self.slot.move_assign(&mut other.slot);
    }
}

impl<T: Clone, E: Clone> Clone for Result<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }

    /// Copy-assign through the staging protocol: a panicking payload `clone`
    /// leaves `self` unchanged.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.slot.copy_assign(&source.slot);
    }
}

// =============================================================================
// Extraction
// =============================================================================

impl<T, E> Result<T, E> {
    /// The success payload.
    ///
    /// In the `Err` state this writes `"{msg}: {error}"` to the process error
    /// channel and terminates the process.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: Report,
    {
        match self.into_held() {
            Held::Ok(value) => value,
            Held::Err(error) => fatal::contract_violation(msg, &error),
        }
    }

    /// The success payload; terminates the process in the `Err` state.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Report,
    {
        self.expect(UNWRAP_ERR_MESSAGE)
    }

    /// The failure payload.
    ///
    /// In the `Ok` state this writes `"{msg}: {value}"` (or just `"{msg}"` for a
    /// unit success) to the process error channel and terminates the process.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: Report,
    {
        match self.into_held() {
            Held::Ok(value) => fatal::contract_violation(msg, &value),
            Held::Err(error) => error,
        }
    }

    /// The failure payload; terminates the process in the `Ok` state.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Report,
    {
        self.expect_err(UNWRAP_OK_MESSAGE)
    }
}

// =============================================================================
// Formatting / Hashing
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.held() {
            Held::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Held::Err(value) => f.debug_tuple("Err").field(value).finish(),
        }
    }
}

impl<T: Hash, E: Hash> Hash for Result<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.held() {
            Held::Ok(value) => {
                Tag::Ok.hash(state);
                value.hash(state);
            }
            Held::Err(value) => {
                Tag::Err.hash(state);
                value.hash(state);
            }
        }
    }
}

/// Renders the live payload, so nested results can appear in diagnostics.
impl<T: Report, E: Report> Report for Result<T, E> {
    fn report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.held() {
            Held::Ok(value) => {
                f.write_str("Ok(")?;
                value.report(f)?;
                f.write_str(")")
            }
            Held::Err(value) => {
                f.write_str("Err(")?;
                value.report(f)?;
                f.write_str(")")
            }
        }
    }
}
