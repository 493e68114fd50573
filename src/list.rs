//! Compile-time alternative lists.
//!
//! A list of alternatives is a right-nested tuple: `(A, (B, (C, ())))`. The
//! [`Alts!`](crate::Alts) macro spells it out. Each list carries a storage
//! representation ([`TypeList::Repr`]) made of nested `#[repr(C)]` unions, so
//! every alternative sits at offset zero of a block sized and aligned for the
//! largest and strictest member.

use std::convert::Infallible;
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop};

/// Storage terminator for the empty list. Never constructed.
pub struct Nil(#[allow(dead_code)] Infallible);

/// Storage for a non-empty list: the head alternative overlapping the rest.
#[repr(C)]
pub union Cons<H, T> {
    // Read only through pointer casts from the list root.
    #[allow(dead_code)]
    head: ManuallyDrop<H>,
    #[allow(dead_code)]
    tail: ManuallyDrop<T>,
}

/// Type-level position of the first element of a list.
pub struct Here;

/// Type-level position one past `I`.
pub struct There<I>(PhantomData<I>);

// Unnameable supertraits: the list traits below drive unchecked storage
// casts, so only the impls in this crate may exist.
pub(crate) mod sealed {
    use super::{Here, There};

    pub trait Sealed {}

    impl Sealed for () {}
    impl<H, T: Sealed> Sealed for (H, T) {}

    pub trait SealedContains<T, I> {}

    impl<T, Tail> SealedContains<T, Here> for (T, Tail) {}
    impl<H, T, Tail: SealedContains<T, I>, I> SealedContains<T, There<I>> for (H, Tail) {}

    pub trait SealedAt<const N: usize> {}

    pub trait SealedResolve<V, I> {}
}

const fn max(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

/// An ordered, fixed list of alternative types.
///
/// Implemented for `()` and `(H, T)` where `T` is itself a list.
pub trait TypeList: sealed::Sealed + Sized {
    /// Raw storage able to hold any single alternative of the list
    type Repr;

    /// Number of alternatives
    const LEN: usize;

    /// Largest `size_of` across the alternatives
    const MAX_SIZE: usize;

    /// Strictest `align_of` across the alternatives
    const MAX_ALIGN: usize;
}

impl TypeList for () {
    type Repr = Nil;

    const LEN: usize = 0;
    const MAX_SIZE: usize = 0;
    const MAX_ALIGN: usize = 1;
}

impl<H, T: TypeList> TypeList for (H, T) {
    type Repr = Cons<H, T::Repr>;

    const LEN: usize = T::LEN + 1;
    const MAX_SIZE: usize = max(mem::size_of::<H>(), T::MAX_SIZE);
    const MAX_ALIGN: usize = max(mem::align_of::<H>(), T::MAX_ALIGN);
}

/// `T` is one of the alternatives of the list, at the position named by `I`.
///
/// `I` is left for the compiler to infer. When `T` appears more than once the
/// position is ambiguous and inference fails; address such alternatives by
/// position instead.
pub trait Contains<T, I>: TypeList + sealed::SealedContains<T, I> {
    /// Position of `T` in the list
    const INDEX: usize;
}

impl<T, Tail: TypeList> Contains<T, Here> for (T, Tail) {
    const INDEX: usize = 0;
}

impl<H, T, Tail, I> Contains<T, There<I>> for (H, Tail)
where
    Tail: Contains<T, I>,
{
    const INDEX: usize = Tail::INDEX + 1;
}

/// The alternative at position `N`.
pub trait At<const N: usize>: TypeList + sealed::SealedAt<N> {
    type Output;
}

impl<H, T> sealed::SealedAt<0> for (H, T) {}

impl<H, T: TypeList> At<0> for (H, T) {
    type Output = H;
}

macro_rules! impl_at {
    ($($n:literal => $prev:literal),* $(,)?) => {
        $(
            impl<H, T: sealed::SealedAt<$prev>> sealed::SealedAt<$n> for (H, T) {}

            impl<H, T: At<$prev>> At<$n> for (H, T) {
                type Output = <T as At<$prev>>::Output;
            }
        )*
    };
}

impl_at!(
    1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7,
    9 => 8, 10 => 9, 11 => 10, 12 => 11, 13 => 12, 14 => 13, 15 => 14, 16 => 15,
    17 => 16, 18 => 17, 19 => 18, 20 => 19, 21 => 20, 22 => 21, 23 => 22, 24 => 23,
    25 => 24, 26 => 25, 27 => 26, 28 => 27, 29 => 28, 30 => 29, 31 => 30,
);

/// The alternative type at position `N` of list `L`.
pub type Alternative<L, const N: usize> = <L as At<N>>::Output;
