//! Discriminant-driven lifecycle routines.
//!
//! Each routine takes a runtime position and walks the list until it reaches
//! that alternative, then runs the alternative's own destructor, clone or
//! assignment against the raw storage. The position always comes from a live
//! discriminant, so an out-of-range position is a bug in the caller.

use crate::list::TypeList;
use std::mem;
use std::ptr;

/// Destroy, move-assign and swap for every alternative of a list.
///
/// Implemented for every [`TypeList`]; not meant to be implemented elsewhere.
pub trait Lifecycle: TypeList {
    /// Drops the alternative at `index` in place.
    ///
    /// # Safety
    ///
    /// `storage` must hold a live value of alternative `index`. It holds no
    /// live value afterwards, even if the destructor panics.
    #[doc(hidden)]
    unsafe fn destroy(storage: *mut Self::Repr, index: usize);

    /// Moves the alternative at `index` out of `source` and assigns it over
    /// the one in `target`.
    ///
    /// # Safety
    ///
    /// Both cells must hold a live value of alternative `index`; `source` holds
    /// none afterwards.
    #[doc(hidden)]
    unsafe fn move_assign(target: *mut Self::Repr, source: *const Self::Repr, index: usize);

    /// Exchanges the two live values of alternative `index`.
    ///
    /// # Safety
    ///
    /// Both cells must hold a live value of alternative `index` and must not overlap.
    #[doc(hidden)]
    unsafe fn swap(a: *mut Self::Repr, b: *mut Self::Repr, index: usize);
}

/// Copy construction and copy assignment, available when every alternative is `Clone`.
pub trait CloneLifecycle: Lifecycle {
    /// Clones the alternative at `index` of `source` into the empty `target`.
    ///
    /// # Safety
    ///
    /// `source` must hold a live value of alternative `index` and `target`
    /// must hold no live value.
    #[doc(hidden)]
    unsafe fn copy_construct(source: *const Self::Repr, target: *mut Self::Repr, index: usize);

    /// Copy-assigns with `Clone::clone_from` between two live values of alternative `index`.
    ///
    /// # Safety
    ///
    /// Both cells must hold a live value of alternative `index`.
    #[doc(hidden)]
    unsafe fn clone_assign(target: *mut Self::Repr, source: *const Self::Repr, index: usize);
}

fn out_of_range(index: usize) -> ! {
    unreachable!("alternative {} is out of range for this list", index)
}

impl Lifecycle for () {
    unsafe fn destroy(_: *mut Self::Repr, index: usize) {
        out_of_range(index)
    }

    unsafe fn move_assign(_: *mut Self::Repr, _: *const Self::Repr, index: usize) {
        out_of_range(index)
    }

    unsafe fn swap(_: *mut Self::Repr, _: *mut Self::Repr, index: usize) {
        out_of_range(index)
    }
}

impl CloneLifecycle for () {
    unsafe fn copy_construct(_: *const Self::Repr, _: *mut Self::Repr, index: usize) {
        out_of_range(index)
    }

    unsafe fn clone_assign(_: *mut Self::Repr, _: *const Self::Repr, index: usize) {
        out_of_range(index)
    }
}

impl<H, T: Lifecycle> Lifecycle for (H, T) {
    unsafe fn destroy(storage: *mut Self::Repr, index: usize) {
        match index {
            0 => ptr::drop_in_place(storage.cast::<H>()),
            _ => T::destroy(storage.cast(), index - 1),
        }
    }

    unsafe fn move_assign(target: *mut Self::Repr, source: *const Self::Repr, index: usize) {
        match index {
            0 => *target.cast::<H>() = ptr::read(source.cast::<H>()),
            _ => T::move_assign(target.cast(), source.cast(), index - 1),
        }
    }

    unsafe fn swap(a: *mut Self::Repr, b: *mut Self::Repr, index: usize) {
        match index {
            0 => mem::swap(&mut *a.cast::<H>(), &mut *b.cast::<H>()),
            _ => T::swap(a.cast(), b.cast(), index - 1),
        }
    }
}

impl<H: Clone, T: CloneLifecycle> CloneLifecycle for (H, T) {
    unsafe fn copy_construct(source: *const Self::Repr, target: *mut Self::Repr, index: usize) {
        match index {
            0 => ptr::write(target.cast::<H>(), (*source.cast::<H>()).clone()),
            _ => T::copy_construct(source.cast(), target.cast(), index - 1),
        }
    }

    unsafe fn clone_assign(target: *mut Self::Repr, source: *const Self::Repr, index: usize) {
        match index {
            0 => (*target.cast::<H>()).clone_from(&*source.cast::<H>()),
            _ => T::clone_assign(target.cast(), source.cast(), index - 1),
        }
    }
}
