//! Autoref-based capability detection for concrete types.
//!
//! This module implements the "Inherent Const Fallback" pattern:
//! 1. A fallback trait declares `const IS_X: bool = false`
//! 2. The fallback is implemented for `Detect<T>` for all T
//! 3. An inherent `const IS_X: bool = true` exists on `Detect<T>` where `T: X`
//!
//! Resolving `Detect::<Concrete>::IS_X` picks the inherent const when the
//! bound holds and the trait const otherwise.
//!
//! ## Limitation
//!
//! Only **concrete types** known at the call site can be probed. In generic
//! code (`fn foo<T>()`) the answer is always the fallback; generic code
//! states its requirements as trait bounds instead, which is how the
//! combinator surface gates itself.

use core::marker::PhantomData;

use super::Report;

/// Detection wrapper for single-type capabilities.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Detection wrapper for relationships between two types.
#[doc(hidden)]
pub struct DetectPair<A: ?Sized, B: ?Sized>(PhantomData<A>, PhantomData<B>);

/// Generate fallback trait + inherent const for a single-type capability.
macro_rules! impl_detect {
    ($Trait:ident => $bound:path) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const [<IS_ $Trait:snake:upper>]: bool = false; }
            impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
            impl<T: ?Sized + $bound> Detect<T> { pub const [<IS_ $Trait:snake:upper>]: bool = true; }
        }
    };
    ($Trait:ident) => {
        impl_detect!($Trait => $Trait);
    };
}

/// Generate fallback trait + inherent const for a two-type relationship.
macro_rules! impl_detect_pair {
    ($Name:ident, $A:ident, $B:ident => $($bound:tt)+) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Name Fallback>] { const [<IS_ $Name:snake:upper>]: bool = false; }
            impl<A: ?Sized, B: ?Sized> [<$Name Fallback>] for DetectPair<A, B> {}
            impl<$A: ?Sized, $B: ?Sized> DetectPair<$A, $B>
            where
                $($bound)+
            {
                pub const [<IS_ $Name:snake:upper>]: bool = true;
            }
        }
    };
}

impl_detect!(Clone);
impl_detect!(Copy);
impl_detect!(Debug => core::fmt::Debug);
impl_detect!(Display => core::fmt::Display);
impl_detect!(Default);
impl_detect!(PartialEq);
impl_detect!(Eq);
impl_detect!(Hash => core::hash::Hash);
impl_detect!(Send);
impl_detect!(Sync);
impl_detect!(Report);

impl_detect_pair!(PartialEqWith, A, B => A: PartialEq<B>);
impl_detect_pair!(From, A, B => A: From<B>, B: Sized);
impl_detect_pair!(Into, A, B => A: Into<B> + Sized, B: Sized);
