//! Picks the one alternative a foreign value converts into.
//!
//! An alternative `To` accepts a value of type `V` when `To: From<V>`. The
//! standard library only provides `From` for lossless conversions, so a float
//! never lands in an integer alternative and a wide integer never lands in a
//! narrow one. Resolution happens through inference of the position `I`: with
//! exactly one accepting alternative the compiler fills `I` in, with none the
//! `Resolve` bound is unsatisfied, and with several it is ambiguous. All three
//! outcomes are decided at the call site, at compile time.

use crate::list::sealed::SealedResolve;
use crate::list::{Here, There, TypeList};

/// Exactly one alternative of the list is constructible from `V`.
pub trait Resolve<V, I>: TypeList + SealedResolve<V, I> {
    /// The selected alternative
    type Target;

    /// Position of [`Self::Target`] in the list
    const INDEX: usize;

    /// Builds the selected alternative from `value`.
    fn convert(value: V) -> Self::Target;
}

impl<V, H: From<V>, T> SealedResolve<V, Here> for (H, T) {}

impl<V, H, T: SealedResolve<V, I>, I> SealedResolve<V, There<I>> for (H, T) {}

impl<V, H, T> Resolve<V, Here> for (H, T)
where
    H: From<V>,
    T: TypeList,
{
    type Target = H;

    const INDEX: usize = 0;

    fn convert(value: V) -> H {
        H::from(value)
    }
}

impl<V, H, T, I> Resolve<V, There<I>> for (H, T)
where
    T: Resolve<V, I>,
{
    type Target = T::Target;

    const INDEX: usize = T::INDEX + 1;

    fn convert(value: V) -> Self::Target {
        T::convert(value)
    }
}
