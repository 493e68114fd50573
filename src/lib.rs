//! # sovran-variant
//!
//! A type-safe tagged union over a fixed, compile-time list of alternatives.
//!
//! `sovran-variant` provides [`Variant`], a container that holds exactly one value
//! out of a list of types chosen when the variant type is named. The live
//! alternative is tracked by a discriminant and every access is checked against it.
//! All mutating operations spell out what happens when an alternative's clone,
//! conversion, constructor or destructor panics.
//!
//! ## Key Features
//!
//! - **Type-safe**: Accessing an alternative that is not live is an error, never a reinterpretation
//! - **Compile-time alternative lists**: Membership, position and conversions are resolved by the compiler
//! - **Panic-aware**: A panic never leaves a half-built value behind; at worst the variant is valueless
//! - **No boxing**: Values live inline, in storage sized for the largest alternative
//! - **No visitor machinery**: Plain `get`/`get_if`/`holds_alternative` access
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_variant::{Variant, VariantError};
//!
//! fn main() -> Result<(), VariantError> {
//!     // A variant that holds either a number, some text or a flag
//!     let mut value: Variant![i64, String, bool] = Variant::new(42i64);
//!
//!     // Read it back by type or by position
//!     assert_eq!(*value.get::<i64, _>()?, 42);
//!     assert_eq!(*value.get_at::<0>()?, 42);
//!
//!     // Replace it with another alternative
//!     value.emplace::<String, _>(|| "Hello, world!".to_string());
//!     println!("Text: {}", value.get::<String, _>()?);
//!
//!     // Handle errors properly
//!     match value.get::<bool, _>() {
//!         Ok(flag) => println!("Flag: {}", flag),
//!         Err(VariantError::AlternativeMismatch { held, .. }) => {
//!             println!("Not a flag, holds alternative {:?}", held)
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Converting Values
//!
//! A value whose type is not itself an alternative goes to the single alternative
//! that converts from it without loss (`From`).
//!
//! ```rust
//! use sovran_variant::Variant;
//!
//! let mut value = <Variant![char, i64, String]>::convert("text");
//! assert!(value.holds_alternative::<String, _>());
//!
//! // i32 widens into i64; char does not accept it
//! value.assign_from(7i32);
//! assert_eq!(value.get::<i64, _>(), Ok(&7));
//!
//! // A value that already is an alternative is stored with `set`
//! value.set(9i64);
//! assert_eq!(value.get::<i64, _>(), Ok(&9));
//! ```
//!
//! ### Copy, Move and Swap
//!
//! ```rust
//! use sovran_variant::Variant;
//! use std::rc::Rc;
//!
//! let shared = Rc::new(1);
//! let original: Variant![Rc<i32>, char] = Variant::new(Rc::clone(&shared));
//!
//! // Cloning the variant clones the live alternative
//! let copy = original.clone();
//! assert_eq!(Rc::strong_count(&shared), 3);
//! drop(copy);
//! assert_eq!(Rc::strong_count(&shared), 2);
//!
//! let mut a: Variant![char, i32] = Variant::new('a');
//! let mut b: Variant![char, i32] = Variant::new(1i32);
//! a.swap(&mut b);
//! assert_eq!(a.get::<i32, _>(), Ok(&1));
//! assert_eq!(b.get::<char, _>(), Ok(&'a'));
//! ```
//!
//! ### Panics and the Valueless State
//!
//! `emplace` destroys the old value before building the new one, so a panicking
//! constructor leaves the variant without a value. Such a variant reports
//! [`VARIANT_NPOS`] from `index()` and fails every checked access until it is
//! assigned or emplaced again.
//!
//! ```rust
//! use sovran_variant::{Variant, VARIANT_NPOS};
//! use std::panic::{self, AssertUnwindSafe};
//!
//! let mut value: Variant![i32, String] = Variant::new(1i32);
//!
//! let result = panic::catch_unwind(AssertUnwindSafe(|| {
//!     value.emplace::<String, _>(|| panic!("constructor failed"));
//! }));
//! assert!(result.is_err());
//! assert!(value.valueless_by_exception());
//! assert_eq!(value.index(), VARIANT_NPOS);
//!
//! value.emplace::<i32, _>(|| 2);
//! assert_eq!(value.get::<i32, _>(), Ok(&2));
//! ```

/// Spells an alternative list: `Alts![A, B, C]` is `(A, (B, (C, ())))`.
#[macro_export]
macro_rules! Alts {
    () => { () };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        ($head, $crate::Alts!($($tail),*))
    };
}

/// Names a variant type: `Variant![A, B]` is `Variant<Alts![A, B]>`.
#[macro_export]
macro_rules! Variant {
    ($($alt:ty),* $(,)?) => {
        $crate::Variant<$crate::Alts!($($alt),*)>
    };
}

mod access;
mod error;
mod lifecycle;
mod list;
mod resolve;
mod storage;
mod variant;

pub use access::{get, get_if, get_if_mut, get_mut, holds_alternative, swap};
pub use error::VariantError;
pub use lifecycle::{CloneLifecycle, Lifecycle};
pub use list::{Alternative, At, Cons, Contains, Here, Nil, There, TypeList};
pub use resolve::Resolve;
pub use variant::{Variant, VARIANT_NPOS};
