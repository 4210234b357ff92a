//! References and raw pointers around canonical descriptors.
//!
//! A descriptor may be wrapped in exactly one level of `&`, `&mut`,
//! `*const` or `*mut`. The wrapper is transparent for decomposition: every
//! associated item of [`FunctionTraits`] comes from the wrapped canonical
//! form, and [`FunctionTraits::WRAPPING`] records which wrapper it was.
//!
//! When a mutator rewrites a wrapped descriptor, [`Rewrap`] puts the same
//! wrapper back around the result, so `AddNoexcept<&fn()>` is a reference
//! again:
//!
//! ```
//! use function_traits::prelude::*;
//!
//! fn assert_same<A: 'static, B: 'static>() {
//!     assert_eq!(core::any::TypeId::of::<A>(), core::any::TypeId::of::<B>());
//! }
//!
//! assert_same::<AddNoexcept<&'static extern "C-unwind" fn()>, &'static extern "C" fn()>();
//! assert_same::<RemoveVariadic<*mut extern "C" fn(i32, ...)>, *mut extern "C" fn(i32)>();
//! ```
//!
//! Only one level is accepted:
//!
//! ```compile_fail
//! use function_traits::prelude::*;
//!
//! let _ = <&&fn() as FunctionTraits>::ARITY;
//! ```

use core::fmt;

use crate::bundle::{Canonical, FunctionTraits, sealed_function_traits};

/// The reference or raw pointer around a descriptor's canonical form.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub enum Wrapping {
    /// Not wrapped.
    #[default]
    None,
    /// `&F`.
    Ref,
    /// `&mut F`.
    MutRef,
    /// `*const F`.
    ConstPtr,
    /// `*mut F`.
    MutPtr,
}

impl Wrapping {
    /// Whether the canonical form is wrapped at all.
    #[must_use]
    pub const fn is_wrapped(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether the wrapper is a raw pointer.
    #[must_use]
    pub const fn is_pointer(self) -> bool {
        matches!(self, Self::ConstPtr | Self::MutPtr)
    }

    /// The wrapper as a type prefix (`"&"`, `"*const "`, ...).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ref => "&",
            Self::MutRef => "&mut ",
            Self::ConstPtr => "*const ",
            Self::MutPtr => "*mut ",
        }
    }
}

impl fmt::Display for Wrapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Ref => f.write_str("reference"),
            Self::MutRef => f.write_str("mutable reference"),
            Self::ConstPtr => f.write_str("const pointer"),
            Self::MutPtr => f.write_str("mut pointer"),
        }
    }
}

/// Re-applies this descriptor's wrapper to a new canonical form `G`.
///
/// Canonical descriptors and functors have no wrapper to migrate, so for
/// them the output is `G` itself.
pub trait Rewrap<G> {
    /// `G` inside this descriptor's wrapper.
    type Output;
}

macro_rules! impl_wrapper {
    ($($wrapping:ident: [$($lt:lifetime)?] [$($wrapper:tt)+];)*) => {$(
        impl<$($lt,)? F: Canonical $(+ $lt)?> sealed_function_traits::Sealed for $($wrapper)+ F {}

        impl<$($lt,)? F: Canonical $(+ $lt)?> FunctionTraits for $($wrapper)+ F {
            type Canonical = F;
            type Return = F::Return;
            type Args = F::Args;
            type Class = F::Class;

            const WRAPPING: Wrapping = Wrapping::$wrapping;
            const IS_FUNCTOR: bool = false;
        }

        impl<$($lt,)? F: Canonical $(+ $lt)?, G $(: $lt)?> Rewrap<G> for $($wrapper)+ F {
            type Output = $($wrapper)+ G;
        }
    )*};
}

impl_wrapper! {
    Ref: ['a] [&'a];
    MutRef: ['a] [&'a mut];
    ConstPtr: [] [*const];
    MutPtr: [] [*mut];
}
