//! Whole-value assignment between slots.
//!
//! Source variant × destination variant × {copy, move} gives eight cases.
//! T and E need not be related in any way, so every case is spelled out:
//!
//! | source | destination | copy (`copy_assign`)            | move (`move_assign`)        |
//! |--------|-------------|---------------------------------|-----------------------------|
//! | Ok     | Ok          | `T::clone_from` in place        | assign `T` in place         |
//! | Ok     | Err         | stage clone, destroy, construct | destroy, construct          |
//! | Err    | Ok          | stage clone, destroy, construct | destroy, construct          |
//! | Err    | Err         | `E::clone_from` in place        | assign `E` in place         |
//!
//! Cross-variant copies clone into a staging value *before* touching the
//! destination: if the payload's `clone` panics, the destination still holds
//! its old payload. Moves cannot fail, so they destroy and construct directly.

use super::{Held, Live, Slot, Tag};

impl<T, E> Slot<T, E> {
    /// Move-assign: replace `self` with `src`'s payload, leaving `src` vacant.
    pub(crate) fn move_assign(&mut self, src: &mut Self) {
        match (src.live, self.live) {
            (Live::Ok, Live::Ok) => Self::move_ok_over_ok(src, self),
            (Live::Ok, Live::Err) => Self::move_ok_over_err(src, self),
            (Live::Err, Live::Ok) => Self::move_err_over_ok(src, self),
            (Live::Err, Live::Err) => Self::move_err_over_err(src, self),
            (Live::Ok | Live::Err, Live::Vacant) => self.move_construct(src),
            (Live::Vacant, _) => self.vacate(),
        }
    }

    /// Move-construct into a vacant slot.
    fn move_construct(&mut self, src: &mut Self) {
        match src.take() {
            Some(held) => {
                *self = Self::from_held(held);
            }
            None => self.vacate(),
        }
    }

    fn move_ok_over_ok(src: &mut Self, dst: &mut Self) {
        if let Some(Held::Ok(value)) = src.take() {
            // SAFETY: both sides were checked to hold `Ok`.
            unsafe { *dst.get_ok_mut() = value }
        }
    }

    fn move_ok_over_err(src: &mut Self, dst: &mut Self) {
        if let Some(Held::Ok(value)) = src.take() {
            dst.destroy(Tag::Err);
            dst.construct_ok(value);
        }
    }

    fn move_err_over_ok(src: &mut Self, dst: &mut Self) {
        if let Some(Held::Err(value)) = src.take() {
            dst.destroy(Tag::Ok);
            dst.construct_err(value);
        }
    }

    fn move_err_over_err(src: &mut Self, dst: &mut Self) {
        if let Some(Held::Err(value)) = src.take() {
            // SAFETY: both sides were checked to hold `Err`.
            unsafe { *dst.get_err_mut() = value }
        }
    }
}

impl<T: Clone, E: Clone> Slot<T, E> {
    /// Copy-assign: give `self` an independent copy of `src`'s payload.
    pub(crate) fn copy_assign(&mut self, src: &Self) {
        match (src.live, self.live) {
            (Live::Ok, Live::Ok) => Self::copy_ok_over_ok(src, self),
            (Live::Ok, Live::Err) => Self::copy_ok_over_err(src, self),
            (Live::Err, Live::Ok) => Self::copy_err_over_ok(src, self),
            (Live::Err, Live::Err) => Self::copy_err_over_err(src, self),
            (Live::Ok | Live::Err, Live::Vacant) => *self = src.clone(),
            (Live::Vacant, _) => self.vacate(),
        }
    }

    fn copy_ok_over_ok(src: &Self, dst: &mut Self) {
        // SAFETY: both sides were checked to hold `Ok`.
        unsafe { dst.get_ok_mut().clone_from(src.get_ok()) }
    }

    fn copy_ok_over_err(src: &Self, dst: &mut Self) {
        // SAFETY: `src` was checked to hold `Ok`.
        let staged = unsafe { src.get_ok() }.clone();
        dst.destroy(Tag::Err);
        dst.construct_ok(staged);
    }

    fn copy_err_over_ok(src: &Self, dst: &mut Self) {
        // SAFETY: `src` was checked to hold `Err`.
        let staged = unsafe { src.get_err() }.clone();
        dst.destroy(Tag::Ok);
        dst.construct_err(staged);
    }

    fn copy_err_over_err(src: &Self, dst: &mut Self) {
        // SAFETY: both sides were checked to hold `Err`.
        unsafe { dst.get_err_mut().clone_from(src.get_err()) }
    }
}
