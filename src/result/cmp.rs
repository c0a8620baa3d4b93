//! Equality across related instantiations.
//!
//! Two results are equal iff they are in the same state and their live
//! payloads compare equal. Payload types may differ as long as they are
//! comparable (`Result<String, String> == Result<&str, &str>` works). A
//! result also compares against a bare `Ok(..)` / `Err(..)` marker.

use super::{Err, Ok, Result};
use crate::storage::Held;

impl<T1, E1, T2, E2> PartialEq<Result<T2, E2>> for Result<T1, E1>
where
    T1: PartialEq<T2>,
    E1: PartialEq<E2>,
{
    fn eq(&self, other: &Result<T2, E2>) -> bool {
        match (self.held(), other.held()) {
            (Held::Ok(lhs), Held::Ok(rhs)) => lhs == rhs,
            (Held::Err(lhs), Held::Err(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for Result<T, E> {}

impl<T, E, U> PartialEq<Ok<U>> for Result<T, E>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Ok<U>) -> bool {
        match self.held() {
            Held::Ok(value) => *value == other.0,
            Held::Err(_) => false,
        }
    }
}

impl<T, E, F> PartialEq<Err<F>> for Result<T, E>
where
    E: PartialEq<F>,
{
    fn eq(&self, other: &Err<F>) -> bool {
        match self.held() {
            Held::Ok(_) => false,
            Held::Err(value) => *value == other.0,
        }
    }
}

impl<T, E, U> PartialEq<Result<T, E>> for Ok<U>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Result<T, E>) -> bool {
        other == self
    }
}

impl<T, E, F> PartialEq<Result<T, E>> for Err<F>
where
    E: PartialEq<F>,
{
    #[inline]
    fn eq(&self, other: &Result<T, E>) -> bool {
        other == self
    }
}
