//! # Layer 1: Tagged Storage
//!
//! One storage region, sized and aligned for either payload, plus the
//! discriminant saying which one (if any) is live.
//!
//! ```text
//! Slot<T, E>
//!   live: Vacant | Ok | Err      <- discriminant
//!   cell: union {                <- shared bytes
//!       ok:  ManuallyDrop<T>,
//!       err: ManuallyDrop<E>,
//!   }
//! ```
//!
//! Invariants:
//! - `live == Ok`  ⇔ `cell.ok` holds a live `T`
//! - `live == Err` ⇔ `cell.err` holds a live `E`
//! - `live == Vacant` ⇔ nothing is live
//!
//! `live` is flipped to `Vacant` *before* a payload is dropped and set to the
//! new state only *after* the payload is written, so a panic inside a payload's
//! `drop` or `clone` can never leave the discriminant describing bytes that
//! are not there.
//!
//! A `Result` only observes `Vacant` transiently, inside a transfer.
//!
//! With `T = ()` the `ok` arm is zero-sized: the slot costs exactly `E`, and
//! construct/destroy on the success side write and drop nothing.

mod transfer;

use core::mem::ManuallyDrop;

/// Which payload a storage operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Tag {
    Ok,
    Err,
}

/// Discriminant of a [`Slot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Live {
    Vacant,
    Ok,
    Err,
}

/// Either payload, by value or by reference.
#[derive(Debug)]
pub(crate) enum Held<T, E> {
    Ok(T),
    Err(E),
}

union Cell<T, E> {
    vacant: (),
    ok: ManuallyDrop<T>,
    err: ManuallyDrop<E>,
}

/// Tagged storage holding at most one live payload.
pub(crate) struct Slot<T, E> {
    live: Live,
    cell: Cell<T, E>,
}

impl<T, E> Slot<T, E> {
    /// Storage with nothing constructed.
    #[inline]
    pub(crate) const fn vacant() -> Self {
        Self {
            live: Live::Vacant,
            cell: Cell { vacant: () },
        }
    }

    #[inline]
    pub(crate) fn with_ok(value: T) -> Self {
        let mut slot = Self::vacant();
        slot.construct_ok(value);
        slot
    }

    #[inline]
    pub(crate) fn with_err(value: E) -> Self {
        let mut slot = Self::vacant();
        slot.construct_err(value);
        slot
    }

    #[inline]
    pub(crate) fn from_held(held: Held<T, E>) -> Self {
        match held {
            Held::Ok(value) => Self::with_ok(value),
            Held::Err(value) => Self::with_err(value),
        }
    }

    /// Tag of the live payload, `None` while vacant.
    #[inline]
    pub(crate) fn tag(&self) -> Option<Tag> {
        match self.live {
            Live::Vacant => None,
            Live::Ok => Some(Tag::Ok),
            Live::Err => Some(Tag::Err),
        }
    }

    #[inline]
    pub(crate) fn is_vacant(&self) -> bool {
        self.live == Live::Vacant
    }

    /// Build a `T` in place.
    ///
    /// The slot must be vacant: constructing over a live payload would leak it.
    #[inline]
    pub(crate) fn construct_ok(&mut self, value: T) {
        debug_assert!(self.is_vacant(), "construct_ok into an occupied slot");
        self.cell = Cell {
            ok: ManuallyDrop::new(value),
        };
        self.live = Live::Ok;
    }

    /// Build an `E` in place. Same precondition as [`Slot::construct_ok`].
    #[inline]
    pub(crate) fn construct_err(&mut self, value: E) {
        debug_assert!(self.is_vacant(), "construct_err into an occupied slot");
        self.cell = Cell {
            err: ManuallyDrop::new(value),
        };
        self.live = Live::Err;
    }

    /// # Safety
    /// The live payload must be a `T` (`tag() == Some(Tag::Ok)`).
    #[inline]
    pub(crate) unsafe fn get_ok(&self) -> &T {
        // SAFETY: caller guarantees `ok` is the live field.
        unsafe { &self.cell.ok }
    }

    /// # Safety
    /// The live payload must be a `T`.
    #[inline]
    pub(crate) unsafe fn get_ok_mut(&mut self) -> &mut T {
        // SAFETY: caller guarantees `ok` is the live field.
        unsafe { &mut self.cell.ok }
    }

    /// # Safety
    /// The live payload must be an `E` (`tag() == Some(Tag::Err)`).
    #[inline]
    pub(crate) unsafe fn get_err(&self) -> &E {
        // SAFETY: caller guarantees `err` is the live field.
        unsafe { &self.cell.err }
    }

    /// # Safety
    /// The live payload must be an `E`.
    #[inline]
    pub(crate) unsafe fn get_err_mut(&mut self) -> &mut E {
        // SAFETY: caller guarantees `err` is the live field.
        unsafe { &mut self.cell.err }
    }

    /// Borrow whichever payload is live.
    ///
    /// A vacant slot has no view; `Result` never exposes one.
    #[inline]
    pub(crate) fn view(&self) -> Held<&T, &E> {
        match self.live {
            // SAFETY: discriminant checked.
            Live::Ok => Held::Ok(unsafe { self.get_ok() }),
            Live::Err => Held::Err(unsafe { self.get_err() }),
            Live::Vacant => unreachable!("view of a vacant slot"),
        }
    }

    #[inline]
    pub(crate) fn view_mut(&mut self) -> Held<&mut T, &mut E> {
        match self.live {
            // SAFETY: discriminant checked.
            Live::Ok => Held::Ok(unsafe { self.get_ok_mut() }),
            Live::Err => Held::Err(unsafe { self.get_err_mut() }),
            Live::Vacant => unreachable!("view of a vacant slot"),
        }
    }

    /// Release the payload selected by `tag` if it is the live one.
    ///
    /// Idempotent: destroying twice, or destroying the other tag, is a no-op.
    pub(crate) fn destroy(&mut self, tag: Tag) {
        match (self.live, tag) {
            (Live::Ok, Tag::Ok) => {
                self.live = Live::Vacant;
                // SAFETY: `ok` was live and is now unreachable through `live`.
                unsafe { ManuallyDrop::drop(&mut self.cell.ok) }
            }
            (Live::Err, Tag::Err) => {
                self.live = Live::Vacant;
                // SAFETY: `err` was live and is now unreachable through `live`.
                unsafe { ManuallyDrop::drop(&mut self.cell.err) }
            }
            _ => {}
        }
    }

    /// Release whatever is live.
    #[inline]
    pub(crate) fn vacate(&mut self) {
        if let Some(tag) = self.tag() {
            self.destroy(tag);
        }
    }

    /// Move the live payload out, leaving the slot vacant.
    pub(crate) fn take(&mut self) -> Option<Held<T, E>> {
        match core::mem::replace(&mut self.live, Live::Vacant) {
            // SAFETY: the field was live; `live` no longer points at it, so it
            // is read exactly once.
            Live::Ok => Some(Held::Ok(unsafe { ManuallyDrop::take(&mut self.cell.ok) })),
            Live::Err => Some(Held::Err(unsafe { ManuallyDrop::take(&mut self.cell.err) })),
            Live::Vacant => None,
        }
    }

    /// Consume the slot, yielding its payload by value.
    #[inline]
    pub(crate) fn into_held(mut self) -> Held<T, E> {
        match self.take() {
            Some(held) => held,
            None => unreachable!("into_held of a vacant slot"),
        }
    }
}

impl<T, E> Drop for Slot<T, E> {
    fn drop(&mut self) {
        self.vacate();
    }
}

/// Copy construction: the new slot gets an independent copy of the live payload.
impl<T: Clone, E: Clone> Clone for Slot<T, E> {
    fn clone(&self) -> Self {
        match self.live {
            // SAFETY: discriminant checked.
            Live::Ok => Self::with_ok(unsafe { self.get_ok() }.clone()),
            Live::Err => Self::with_err(unsafe { self.get_err() }.clone()),
            Live::Vacant => Self::vacant(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.copy_assign(source);
    }
}
