use crate::list::TypeList;
use std::mem::{self, MaybeUninit};
use std::ptr;

/// One block of raw memory that can hold any single alternative of `L`.
///
/// The cell keeps no record of what it holds. Every typed access is `unsafe`
/// and relies on the owner's discriminant to name the live alternative.
pub(crate) struct Storage<L: TypeList> {
    cell: MaybeUninit<L::Repr>,
}

impl<L: TypeList> Storage<L> {
    pub(crate) const fn uninit() -> Self {
        Self {
            cell: MaybeUninit::uninit(),
        }
    }

    pub(crate) fn as_ptr(&self) -> *const L::Repr {
        self.cell.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut L::Repr {
        self.cell.as_mut_ptr()
    }

    /// Views the cell as a `T`.
    ///
    /// # Safety
    ///
    /// The cell must hold a live `T`.
    pub(crate) unsafe fn as_ref<T>(&self) -> &T {
        Self::check_fits::<T>();
        &*self.as_ptr().cast::<T>()
    }

    /// # Safety
    ///
    /// The cell must hold a live `T`.
    pub(crate) unsafe fn as_mut<T>(&mut self) -> &mut T {
        Self::check_fits::<T>();
        &mut *self.as_mut_ptr().cast::<T>()
    }

    /// Places `value` into the cell, overwriting without dropping.
    ///
    /// # Safety
    ///
    /// `T` must be an alternative of `L` and the cell must not hold a live value.
    pub(crate) unsafe fn write<T>(&mut self, value: T) -> &mut T {
        Self::check_fits::<T>();
        let slot = self.as_mut_ptr().cast::<T>();
        ptr::write(slot, value);
        &mut *slot
    }

    /// Moves the `T` out of the cell, leaving it logically empty.
    ///
    /// # Safety
    ///
    /// The cell must hold a live `T`, and must be treated as empty afterwards.
    pub(crate) unsafe fn read<T>(&self) -> T {
        Self::check_fits::<T>();
        ptr::read(self.as_ptr().cast::<T>())
    }

    fn check_fits<T>() {
        debug_assert!(mem::size_of::<T>() <= L::MAX_SIZE);
        debug_assert!(mem::align_of::<T>() <= L::MAX_ALIGN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let mut storage = Storage::<crate::Alts![u8, String]>::uninit();

        unsafe {
            storage.write(String::from("hello"));
            assert_eq!(storage.as_ref::<String>(), "hello");

            storage.as_mut::<String>().push_str(", world");
            let value = storage.read::<String>();
            assert_eq!(value, "hello, world");
        }
    }

    #[test]
    fn test_alignment_covers_strictest() {
        let mut storage = Storage::<crate::Alts![u8, u64, u16]>::uninit();

        let addr = storage.as_mut_ptr() as usize;
        assert_eq!(addr % mem::align_of::<u64>(), 0);

        unsafe {
            *storage.write(7u64) += 1;
            assert_eq!(*storage.as_ref::<u64>(), 8);
        }
    }
}
