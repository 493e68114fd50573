//! Checked access to the live alternative.
//!
//! Every accessor compares the requested position against the discriminant
//! before touching storage. The `get*` family reports a mismatch as
//! [`VariantError::AlternativeMismatch`], the `get_if*` family as `None`.

use crate::error::VariantError;
use crate::lifecycle::Lifecycle;
use crate::list::{At, Contains};
use crate::variant::Variant;

impl<L: Lifecycle> Variant<L> {
    fn held(&self) -> Option<usize> {
        if self.valueless_by_exception() {
            None
        } else {
            Some(self.index())
        }
    }

    fn check(&self, requested: usize) -> Result<(), VariantError> {
        if self.index() == requested {
            Ok(())
        } else {
            Err(VariantError::AlternativeMismatch {
                requested,
                held: self.held(),
            })
        }
    }

    /// True when the live alternative is a `T`.
    pub fn holds_alternative<T, I>(&self) -> bool
    where
        L: Contains<T, I>,
    {
        self.index() == L::INDEX
    }

    /// Returns a reference to the live `T`.
    ///
    /// # Errors
    ///
    /// Returns `VariantError::AlternativeMismatch` if another alternative is
    /// live or the variant is valueless.
    ///
    /// A type outside the list is rejected at compile time:
    ///
    /// ```compile_fail
    /// use sovran_variant::Variant;
    ///
    /// let value: Variant![i32, char] = Variant::new(1i32);
    /// let _ = value.get::<String, _>();
    /// ```
    ///
    /// So is a type the list names twice; use [`get_at`](Self::get_at):
    ///
    /// ```compile_fail
    /// use sovran_variant::Variant;
    ///
    /// let value = <Variant![i32, i32]>::in_place_index::<0>(|| 1);
    /// let _ = value.get::<i32, _>();
    /// ```
    pub fn get<T, I>(&self) -> Result<&T, VariantError>
    where
        L: Contains<T, I>,
    {
        self.check(L::INDEX)?;
        Ok(unsafe { self.storage().as_ref::<T>() })
    }

    /// Returns a mutable reference to the live `T`.
    ///
    /// # Errors
    ///
    /// Returns `VariantError::AlternativeMismatch` if another alternative is
    /// live or the variant is valueless.
    pub fn get_mut<T, I>(&mut self) -> Result<&mut T, VariantError>
    where
        L: Contains<T, I>,
    {
        self.check(L::INDEX)?;
        Ok(unsafe { self.storage_mut().as_mut::<T>() })
    }

    /// Returns a reference to the live `T`, or `None`.
    pub fn get_if<T, I>(&self) -> Option<&T>
    where
        L: Contains<T, I>,
    {
        self.get::<T, I>().ok()
    }

    /// Returns a mutable reference to the live `T`, or `None`.
    pub fn get_if_mut<T, I>(&mut self) -> Option<&mut T>
    where
        L: Contains<T, I>,
    {
        self.get_mut::<T, I>().ok()
    }

    /// Moves the live `T` out of the variant.
    ///
    /// Gives the variant back untouched if `T` is not live.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_variant::Variant;
    ///
    /// let value: Variant![u8, String] = Variant::new(String::from("owned"));
    /// let value = value.into_inner::<u8, _>().unwrap_err();
    /// assert_eq!(value.into_inner::<String, _>().unwrap(), "owned");
    /// ```
    pub fn into_inner<T, I>(self) -> Result<T, Self>
    where
        L: Contains<T, I>,
    {
        if self.index() != L::INDEX {
            return Err(self);
        }
        Ok(unsafe { self.into_value::<T>() })
    }

    /// Returns a reference to alternative `N`.
    ///
    /// # Errors
    ///
    /// Returns `VariantError::AlternativeMismatch` if another alternative is
    /// live or the variant is valueless.
    pub fn get_at<const N: usize>(&self) -> Result<&<L as At<N>>::Output, VariantError>
    where
        L: At<N>,
    {
        self.check(N)?;
        Ok(unsafe { self.storage().as_ref() })
    }

    /// Returns a mutable reference to alternative `N`.
    ///
    /// # Errors
    ///
    /// Returns `VariantError::AlternativeMismatch` if another alternative is
    /// live or the variant is valueless.
    pub fn get_at_mut<const N: usize>(
        &mut self,
    ) -> Result<&mut <L as At<N>>::Output, VariantError>
    where
        L: At<N>,
    {
        self.check(N)?;
        Ok(unsafe { self.storage_mut().as_mut() })
    }

    /// Returns a reference to alternative `N`, or `None`.
    pub fn get_if_at<const N: usize>(&self) -> Option<&<L as At<N>>::Output>
    where
        L: At<N>,
    {
        self.get_at::<N>().ok()
    }

    /// Returns a mutable reference to alternative `N`, or `None`.
    pub fn get_if_at_mut<const N: usize>(&mut self) -> Option<&mut <L as At<N>>::Output>
    where
        L: At<N>,
    {
        self.get_at_mut::<N>().ok()
    }

    /// Moves alternative `N` out of the variant, or gives the variant back.
    pub fn into_inner_at<const N: usize>(self) -> Result<<L as At<N>>::Output, Self>
    where
        L: At<N>,
    {
        if self.index() != N {
            return Err(self);
        }
        Ok(unsafe { self.into_value() })
    }
}

/// Returns a reference to the live `T` of `variant`.
///
/// # Errors
///
/// Returns `VariantError::AlternativeMismatch` if `T` is not live.
pub fn get<T, I, L>(variant: &Variant<L>) -> Result<&T, VariantError>
where
    L: Lifecycle + Contains<T, I>,
{
    variant.get::<T, I>()
}

/// Returns a mutable reference to the live `T` of `variant`.
///
/// # Errors
///
/// Returns `VariantError::AlternativeMismatch` if `T` is not live.
pub fn get_mut<T, I, L>(variant: &mut Variant<L>) -> Result<&mut T, VariantError>
where
    L: Lifecycle + Contains<T, I>,
{
    variant.get_mut::<T, I>()
}

/// Returns the live `T`, or `None` if there is no variant or `T` is not live.
///
/// # Examples
///
/// ```
/// use sovran_variant::{get_if, Variant};
///
/// let value: Variant![i32, char] = Variant::new('z');
/// assert_eq!(get_if::<char, _, _>(Some(&value)), Some(&'z'));
/// assert_eq!(get_if::<i32, _, _>(Some(&value)), None);
/// assert_eq!(get_if::<char, _, _>(None::<&Variant![i32, char]>), None);
/// ```
pub fn get_if<T, I, L>(variant: Option<&Variant<L>>) -> Option<&T>
where
    L: Lifecycle + Contains<T, I>,
{
    variant?.get_if::<T, I>()
}

/// Mutable counterpart of [`get_if`].
pub fn get_if_mut<T, I, L>(variant: Option<&mut Variant<L>>) -> Option<&mut T>
where
    L: Lifecycle + Contains<T, I>,
{
    variant?.get_if_mut::<T, I>()
}

/// True when the live alternative of `variant` is a `T`.
pub fn holds_alternative<T, I, L>(variant: &Variant<L>) -> bool
where
    L: Lifecycle + Contains<T, I>,
{
    variant.holds_alternative::<T, I>()
}

/// Exchanges the contents of two variants. See [`Variant::swap`].
pub fn swap<L: Lifecycle>(a: &mut Variant<L>, b: &mut Variant<L>) {
    a.swap(b)
}
