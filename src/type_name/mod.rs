//! Human-readable names of types.
//!
//! [`type_name`] is the primary path: it forwards to
//! [`core::any::type_name`]. [`probe`] reaches the same names through a
//! calibrated probe type and can verify at runtime that the compiler's
//! format is the one it expects. [`ShortTypeName`] displays either with
//! module paths removed.
//!
//! # Examples
//!
//! ```
//! use function_traits::type_name::{short_type_name, type_name};
//!
//! assert_eq!(type_name::<i32>(), "i32");
//! assert_eq!(short_type_name::<Option<String>>().to_string(), "Option<String>");
//! ```

mod calibration_lock;
pub mod probe;
mod short;

pub use self::short::ShortTypeName;

/// The name of `T`, as provided by the compiler.
#[inline]
#[must_use]
pub fn type_name<T: ?Sized>() -> &'static str {
    core::any::type_name::<T>()
}

/// The name of `T` without module paths.
#[inline]
#[must_use]
pub fn short_type_name<T: ?Sized>() -> ShortTypeName<'static> {
    ShortTypeName::new(type_name::<T>())
}
