use crate::lifecycle::{CloneLifecycle, Lifecycle};
use crate::list::{At, Contains};
use crate::resolve::Resolve;
use crate::storage::Storage;
use std::fmt;
use std::mem;

/// The discriminant reported by a valueless variant
pub const VARIANT_NPOS: usize = usize::MAX;

/// A tagged union over the alternatives of `L`.
///
/// Exactly one alternative is live at a time, identified by [`index`](Self::index).
/// The only exception is the valueless state, reachable only when a mutating
/// operation panics after it already destroyed the previous value.
///
/// # Examples
///
/// ```
/// use sovran_variant::{Variant, VariantError};
///
/// let mut value: Variant![i32, String] = Variant::new(42i32);
/// assert_eq!(value.index(), 0);
/// assert_eq!(value.get::<i32, _>(), Ok(&42));
///
/// value.emplace::<String, _>(|| "hello".to_string());
/// assert!(value.holds_alternative::<String, _>());
/// assert!(matches!(
///     value.get::<i32, _>(),
///     Err(VariantError::AlternativeMismatch { requested: 0, held: Some(1) })
/// ));
/// ```
pub struct Variant<L: Lifecycle> {
    index: usize,
    storage: Storage<L>,
}

/// Logs the transition into the valueless state if a rebuild unwinds.
///
/// Armed right before the old value is destroyed and disarmed once the new
/// value is in place.
struct ValuelessOnUnwind {
    operation: &'static str,
}

impl ValuelessOnUnwind {
    fn arm(operation: &'static str) -> Self {
        Self { operation }
    }

    fn disarm(self) {
        mem::forget(self);
    }
}

impl Drop for ValuelessOnUnwind {
    fn drop(&mut self) {
        log::debug!(
            "variant left valueless: {} unwound after destroying the old value",
            self.operation
        );
    }
}

impl<L: Lifecycle> Variant<L> {
    /// Number of alternatives
    pub const COUNT: usize = L::LEN;

    /// Creates a variant holding `value`, whose type is one of the alternatives.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_variant::Variant;
    ///
    /// let value: Variant![char, u64] = Variant::new(5u64);
    /// assert_eq!(value.index(), 1);
    /// ```
    pub fn new<T, I>(value: T) -> Self
    where
        L: Contains<T, I>,
    {
        unsafe { Self::from_parts(L::INDEX, value) }
    }

    /// Creates a variant from a value of a foreign type.
    ///
    /// The alternative is the single one that implements `From<V>`. A value
    /// that no alternative accepts, or that several accept, does not compile.
    /// Every type converts from itself, so a value that already is an
    /// alternative goes through [`new`](Self::new) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_variant::Variant;
    ///
    /// let value = <Variant![i32, String]>::convert("text");
    /// assert_eq!(value.get::<String, _>().map(String::as_str), Ok("text"));
    /// ```
    ///
    /// A float never narrows into an integer alternative:
    ///
    /// ```compile_fail
    /// use sovran_variant::Variant;
    ///
    /// let value = <Variant![i32, char]>::convert(1.5f64);
    /// ```
    ///
    /// Two accepting alternatives are rejected rather than guessed between:
    ///
    /// ```compile_fail
    /// use sovran_variant::Variant;
    ///
    /// let value = <Variant![i64, f64]>::convert(1i32);
    /// ```
    pub fn convert<V, I>(value: V) -> Self
    where
        L: Resolve<V, I>,
    {
        let target = L::convert(value);
        unsafe { Self::from_parts(<L as Resolve<V, I>>::INDEX, target) }
    }

    /// Creates a variant holding the alternative of type `T` built by `make`.
    pub fn in_place_type<T, I>(make: impl FnOnce() -> T) -> Self
    where
        L: Contains<T, I>,
    {
        unsafe { Self::from_parts(L::INDEX, make()) }
    }

    /// Creates a variant holding alternative `N`, built by `make`.
    ///
    /// Use this for lists that repeat a type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_variant::Variant;
    ///
    /// let value = <Variant![i32, i32]>::in_place_index::<1>(|| 3);
    /// assert_eq!(value.index(), 1);
    /// assert_eq!(value.get_at::<1>(), Ok(&3));
    /// ```
    pub fn in_place_index<const N: usize>(make: impl FnOnce() -> <L as At<N>>::Output) -> Self
    where
        L: At<N>,
    {
        unsafe { Self::from_parts(N, make()) }
    }

    /// Position of the live alternative, or [`VARIANT_NPOS`] when valueless.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True when no alternative is live.
    pub fn valueless_by_exception(&self) -> bool {
        self.index == VARIANT_NPOS
    }

    /// Destroys the current value and builds a `T` in its place.
    ///
    /// The old value is gone before `make` runs. If `make` panics the variant
    /// is left valueless.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_variant::Variant;
    ///
    /// let mut value: Variant![i32, Vec<u8>] = Variant::new(1i32);
    /// value.emplace::<Vec<u8>, _>(|| vec![1, 2, 3]).push(4);
    /// assert_eq!(value.get::<Vec<u8>, _>().map(Vec::len), Ok(4));
    /// ```
    pub fn emplace<T, I>(&mut self, make: impl FnOnce() -> T) -> &mut T
    where
        L: Contains<T, I>,
    {
        self.emplace_index(L::INDEX, make)
    }

    /// Destroys the current value and builds alternative `N` in its place.
    ///
    /// Same failure behavior as [`emplace`](Self::emplace).
    pub fn emplace_at<const N: usize>(
        &mut self,
        make: impl FnOnce() -> <L as At<N>>::Output,
    ) -> &mut <L as At<N>>::Output
    where
        L: At<N>,
    {
        self.emplace_index(N, make)
    }

    /// Move assignment.
    ///
    /// With equal discriminants the live value is assigned over in place.
    /// Otherwise the current value is destroyed and `source` moved in; a
    /// panicking destructor leaves `self` valueless. A valueless `source`
    /// makes `self` valueless.
    pub fn assign(&mut self, source: Self) {
        if source.valueless_by_exception() {
            self.reset();
            return;
        }

        if self.index == source.index {
            let source = mem::ManuallyDrop::new(source);
            unsafe {
                L::move_assign(self.storage.as_mut_ptr(), source.storage.as_ptr(), self.index);
            }
            return;
        }

        let guard = ValuelessOnUnwind::arm("move assignment");
        self.reset();
        guard.disarm();
        // `self` is valueless, so this assignment drops nothing.
        *self = source;
    }

    /// Converting assignment.
    ///
    /// The target alternative is resolved as for [`convert`](Self::convert)
    /// and the value is converted first, so a panicking conversion leaves the
    /// variant untouched. If the target is already live it is assigned over;
    /// otherwise the current value is destroyed and the converted one moved
    /// in, and a panicking destructor leaves the variant valueless. A value
    /// whose type is itself an alternative goes through [`set`](Self::set).
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_variant::Variant;
    ///
    /// let mut value: Variant![char, i64] = Variant::new('x');
    /// value.assign_from(12i32);
    /// assert_eq!(value.get::<i64, _>(), Ok(&12));
    /// ```
    ///
    /// Narrowing is rejected at compile time:
    ///
    /// ```compile_fail
    /// use sovran_variant::Variant;
    ///
    /// let mut value: Variant![i32, char] = Variant::new('x');
    /// value.assign_from(1.5f64);
    /// ```
    ///
    /// So is a value more than one alternative accepts:
    ///
    /// ```compile_fail
    /// use sovran_variant::Variant;
    ///
    /// let mut value: Variant![i64, f64] = Variant::new(0i64);
    /// value.assign_from(1i32);
    /// ```
    pub fn assign_from<V, I>(&mut self, value: V)
    where
        L: Resolve<V, I>,
    {
        let index = <L as Resolve<V, I>>::INDEX;
        let target = L::convert(value);

        if self.index == index {
            unsafe { self.assign_live(target) }
            return;
        }

        self.rebuild(index, target, "converting assignment");
    }

    /// Stores `value`, whose type is one of the alternatives.
    ///
    /// If that alternative is live it is assigned over in place. Otherwise the
    /// current value is destroyed and `value` moved in; a panicking destructor
    /// leaves the variant valueless.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_variant::Variant;
    ///
    /// // i64 also converts from i32, so `assign_from(2i32)` would be ambiguous.
    /// let mut value: Variant![i32, i64] = Variant::new(1i32);
    /// value.set(2i32);
    /// assert_eq!(value.get::<i32, _>(), Ok(&2));
    ///
    /// value.set(3i64);
    /// assert_eq!(value.index(), 1);
    /// ```
    pub fn set<T, I>(&mut self, value: T)
    where
        L: Contains<T, I>,
    {
        if self.index == L::INDEX {
            unsafe { self.assign_live(value) }
            return;
        }

        self.rebuild(L::INDEX, value, "assignment");
    }

    /// Exchanges the contents of two variants.
    ///
    /// Equal discriminants swap the live values in place; differing ones
    /// rotate the whole variants through a temporary. Both steps are plain
    /// moves, so neither side can end up valueless.
    pub fn swap(&mut self, other: &mut Self) {
        if self.valueless_by_exception() && other.valueless_by_exception() {
            return;
        }

        if self.index == other.index {
            unsafe {
                L::swap(self.storage.as_mut_ptr(), other.storage.as_mut_ptr(), self.index);
            }
        } else {
            mem::swap(self, other);
        }
    }

    /// Builds a variant around `value`.
    ///
    /// # Safety
    ///
    /// `T` must be alternative `index` of `L`.
    unsafe fn from_parts<T>(index: usize, value: T) -> Self {
        let mut storage = Storage::uninit();
        storage.write(value);
        Self { index, storage }
    }

    /// Destroys the live value, if any. The discriminant reads as valueless
    /// before the destructor runs.
    fn reset(&mut self) {
        if self.valueless_by_exception() {
            return;
        }

        let index = mem::replace(&mut self.index, VARIANT_NPOS);
        unsafe { L::destroy(self.storage.as_mut_ptr(), index) }
    }

    /// Places `value` into a valueless variant.
    ///
    /// # Safety
    ///
    /// `T` must be alternative `index` of `L`.
    unsafe fn install<T>(&mut self, index: usize, value: T) -> &mut T {
        debug_assert!(self.valueless_by_exception());
        let slot = self.storage.write(value);
        self.index = index;
        slot
    }

    /// Assigns over the live value.
    ///
    /// # Safety
    ///
    /// The live alternative must be a `T`.
    unsafe fn assign_live<T>(&mut self, value: T) {
        *self.storage.as_mut::<T>() = value;
    }

    fn emplace_index<T>(&mut self, index: usize, make: impl FnOnce() -> T) -> &mut T {
        let guard = ValuelessOnUnwind::arm("emplace");
        self.reset();
        let value = make();
        guard.disarm();
        unsafe { self.install(index, value) }
    }

    /// Destroys the current value and moves the already-built `value` in.
    fn rebuild<T>(&mut self, index: usize, value: T, operation: &'static str) {
        let guard = ValuelessOnUnwind::arm(operation);
        self.reset();
        guard.disarm();
        unsafe {
            self.install(index, value);
        }
    }

    pub(crate) fn storage(&self) -> &Storage<L> {
        &self.storage
    }

    pub(crate) fn storage_mut(&mut self) -> &mut Storage<L> {
        &mut self.storage
    }

    /// Moves alternative `T` out, consuming the variant.
    ///
    /// # Safety
    ///
    /// The live alternative must be a `T`.
    pub(crate) unsafe fn into_value<T>(self) -> T {
        let this = mem::ManuallyDrop::new(self);
        this.storage.read::<T>()
    }
}

impl<L: Lifecycle> Drop for Variant<L> {
    fn drop(&mut self) {
        self.reset();
    }
}

/// The first alternative, default constructed.
///
/// A list whose first alternative is not `Default` gives a variant that is not
/// `Default` either:
///
/// ```compile_fail
/// use sovran_variant::Variant;
///
/// struct NoDefault;
/// let value: Variant![NoDefault, i32] = Default::default();
/// ```
impl<H: Default, T: Lifecycle> Default for Variant<(H, T)> {
    fn default() -> Self {
        unsafe { Self::from_parts(0, H::default()) }
    }
}

impl<L: CloneLifecycle> Clone for Variant<L> {
    /// Copy construction. A valueless variant clones to a valueless one.
    fn clone(&self) -> Self {
        let mut storage = Storage::uninit();
        if !self.valueless_by_exception() {
            unsafe { L::copy_construct(self.storage.as_ptr(), storage.as_mut_ptr(), self.index) }
        }
        Self {
            index: self.index,
            storage,
        }
    }

    /// Copy assignment.
    ///
    /// Equal discriminants use the alternative's own `clone_from`. Otherwise
    /// the source is cloned into a temporary before anything is destroyed, so
    /// a panicking clone leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        if source.valueless_by_exception() {
            self.reset();
            return;
        }

        if self.index == source.index {
            unsafe {
                L::clone_assign(self.storage.as_mut_ptr(), source.storage.as_ptr(), self.index);
            }
            return;
        }

        let temp = source.clone();
        let guard = ValuelessOnUnwind::arm("copy assignment");
        self.reset();
        guard.disarm();
        *self = temp;
    }
}

impl<L: Lifecycle> fmt::Debug for Variant<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Variant");
        if self.valueless_by_exception() {
            out.field("index", &"valueless");
        } else {
            out.field("index", &self.index);
        }
        out.finish_non_exhaustive()
    }
}
