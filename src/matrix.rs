//! The decomposition engine for function pointer types.
//!
//! Every function pointer type this crate understands gets one row in the
//! tables below: its syntax, its convention marker, and whether it unwinds,
//! is `unsafe` and is variadic. [`for_each_arity!`] expands each row into
//! impls for 0 through 12 parameters. Three impls come out of each row and
//! arity:
//!
//! - [`Signature`], the decomposition of the pointer type;
//! - [`Assemble`], the inverse: [`Shape`] plus parameters plus return type
//!   back to the pointer type;
//! - for every row except `thiscall`, the descriptor impls [`Canonical`],
//!   [`FunctionTraits`] and [`Rewrap`].
//!
//! `thiscall` pointers are signatures only. They are valid as the `Sig` of a
//! [`MemberFn`](crate::member::MemberFn) but are not descriptors on their
//! own.
//!
//! Rows whose convention is demoted on the current target are compiled out,
//! so no impl ever names an ABI the compiler would reject.
//!
//! [`Normalize`] maps an arbitrary requested [`Shape`] onto one that has a
//! row. It is where the mutators learn what the compiler actually supports.

use function_traits_internals::for_each_arity;

use crate::{
    bundle::{Canonical, FunctionTraits, Signature, sealed_canonical, sealed_function_traits},
    markers::{
        Cdecl, Fastcall, Free, NoClass, Quals, Regcall, Rust, Shape, Stdcall, Thiscall, Vectorcall,
    },
    wrapping::{Rewrap, Wrapping},
};

/// Maps a requested [`Shape`] onto the shape the compiler actually uses.
///
/// - A variadic shape becomes [`Cdecl`], the only variadic convention.
/// - A [`Rust`] shape always unwinds.
/// - A convention demoted on the current target becomes [`Cdecl`] (see
///   [`CallingConvention::is_demoted_to_default`]).
///
/// [`CallingConvention::is_demoted_to_default`]: crate::markers::CallingConvention::is_demoted_to_default
pub trait Normalize {
    /// The normalized shape.
    type Output;
}

impl<M, const NOUNWIND: bool, const UNSAFE: bool> Normalize for Shape<M, NOUNWIND, UNSAFE, true> {
    type Output = Shape<Cdecl, NOUNWIND, UNSAFE, true>;
}

impl<const NOUNWIND: bool, const UNSAFE: bool> Normalize for Shape<Rust, NOUNWIND, UNSAFE, false> {
    type Output = Shape<Rust, false, UNSAFE, false>;
}

impl<const NOUNWIND: bool, const UNSAFE: bool> Normalize for Shape<Cdecl, NOUNWIND, UNSAFE, false> {
    type Output = Self;
}

impl<const NOUNWIND: bool, const UNSAFE: bool> Normalize
    for Shape<Regcall, NOUNWIND, UNSAFE, false>
{
    type Output = Shape<Cdecl, NOUNWIND, UNSAFE, false>;
}

macro_rules! normalize_x86_only {
    ($cfg:meta; $($M:ident)*) => {$(
        #[cfg($cfg)]
        impl<const NOUNWIND: bool, const UNSAFE: bool> Normalize for Shape<$M, NOUNWIND, UNSAFE, false> {
            type Output = Self;
        }

        #[cfg(not($cfg))]
        impl<const NOUNWIND: bool, const UNSAFE: bool> Normalize for Shape<$M, NOUNWIND, UNSAFE, false> {
            type Output = Shape<Cdecl, NOUNWIND, UNSAFE, false>;
        }
    )*};
}

normalize_x86_only!(target_arch = "x86"; Stdcall Fastcall Thiscall);
normalize_x86_only!(
    all(feature = "vectorcall", any(target_arch = "x86", target_arch = "x86_64"));
    Vectorcall
);

/// Builds the function pointer type with this shape, parameters `Args` and
/// return type `R`.
///
/// Only implemented for normalized shapes.
#[diagnostic::on_unimplemented(
    message = "no function pointer type has the shape `{Self}`",
    label = "this combination of attributes cannot be expressed",
    note = "run the shape through `Normalize` first; parameter lists are limited to 12 types"
)]
pub trait Assemble<Args, R> {
    /// The function pointer type.
    type Output;
}

/// The normalized function pointer type for shape `S`, parameters `A` and
/// return type `R`.
pub type Assembled<S, A, R> = <<S as Normalize>::Output as Assemble<A, R>>::Output;

macro_rules! impl_signature {
    ([$(#[$cfg:meta])* [$($q:tt)*] $M:ident $nounwind:tt $unsafe_:tt fixed] $($A:ident)*) => {
        $(#[$cfg])*
        impl<R, $($A,)*> sealed_canonical::Sealed for $($q)* fn($($A),*) -> R {}

        $(#[$cfg])*
        impl<R, $($A,)*> Signature for $($q)* fn($($A),*) -> R {
            type Shape = Shape<$M, $nounwind, $unsafe_, false>;
            type Return = R;
            type Args = ($($A,)*);
        }

        $(#[$cfg])*
        impl<R, $($A,)*> Assemble<($($A,)*), R> for Shape<$M, $nounwind, $unsafe_, false> {
            type Output = $($q)* fn($($A),*) -> R;
        }
    };
    ([$(#[$cfg:meta])* [$($q:tt)*] $M:ident $nounwind:tt $unsafe_:tt variadic] $($A:ident)*) => {
        $(#[$cfg])*
        impl<R, $($A,)*> sealed_canonical::Sealed for $($q)* fn($($A,)* ...) -> R {}

        $(#[$cfg])*
        impl<R, $($A,)*> Signature for $($q)* fn($($A,)* ...) -> R {
            type Shape = Shape<$M, $nounwind, $unsafe_, true>;
            type Return = R;
            type Args = ($($A,)*);
        }

        $(#[$cfg])*
        impl<R, $($A,)*> Assemble<($($A,)*), R> for Shape<$M, $nounwind, $unsafe_, true> {
            type Output = $($q)* fn($($A,)* ...) -> R;
        }
    };
}

macro_rules! impl_descriptor {
    ([$(#[$cfg:meta])* [$($q:tt)*] $M:ident $nounwind:tt $unsafe_:tt $variadic:ident] $($A:ident)*) => {
        impl_signature!([$(#[$cfg])* [$($q)*] $M $nounwind $unsafe_ $variadic] $($A)*);
        impl_descriptor!(@canonical [$(#[$cfg])*] [impl_descriptor!(@ty [$($q)*] $variadic; $($A)*)] $($A)*);
    };
    (@ty [$($q:tt)*] fixed; $($A:ident)*) => { $($q)* fn($($A),*) -> R };
    (@ty [$($q:tt)*] variadic; $($A:ident)*) => { $($q)* fn($($A,)* ...) -> R };
    (@canonical [$(#[$cfg:meta])*] [$ty:ty] $($A:ident)*) => {
        $(#[$cfg])*
        impl<R, $($A,)*> sealed_function_traits::Sealed for $ty {}

        $(#[$cfg])*
        impl<R, $($A,)*> Canonical for $ty {
            type Kind = Free;
            type Shape = <Self as Signature>::Shape;
            type Return = R;
            type Args = ($($A,)*);
            type Class = NoClass;
            type Qualifiers = Quals;
        }

        $(#[$cfg])*
        impl<R, $($A,)*> FunctionTraits for $ty {
            type Canonical = Self;
            type Return = R;
            type Args = ($($A,)*);
            type Class = NoClass;

            const WRAPPING: Wrapping = Wrapping::None;
            const IS_FUNCTOR: bool = false;
        }

        $(#[$cfg])*
        impl<R, $($A,)* G> Rewrap<G> for $ty {
            type Output = G;
        }
    };
}

macro_rules! descriptor_table {
    ($($(#[$cfg:meta])* [$($q:tt)*] => $M:ident, $nounwind:tt, $unsafe_:tt, $variadic:ident;)*) => {$(
        for_each_arity!(impl_descriptor; $(#[$cfg])* [$($q)*] $M $nounwind $unsafe_ $variadic);
    )*};
}

macro_rules! signature_table {
    ($($(#[$cfg:meta])* [$($q:tt)*] => $M:ident, $nounwind:tt, $unsafe_:tt, $variadic:ident;)*) => {$(
        for_each_arity!(impl_signature; $(#[$cfg])* [$($q)*] $M $nounwind $unsafe_ $variadic);
    )*};
}

descriptor_table! {
    [] => Rust, false, false, fixed;
    [unsafe] => Rust, false, true, fixed;

    [extern "C"] => Cdecl, true, false, fixed;
    [extern "C-unwind"] => Cdecl, false, false, fixed;
    [unsafe extern "C"] => Cdecl, true, true, fixed;
    [unsafe extern "C-unwind"] => Cdecl, false, true, fixed;

    [extern "C"] => Cdecl, true, false, variadic;
    [extern "C-unwind"] => Cdecl, false, false, variadic;
    [unsafe extern "C"] => Cdecl, true, true, variadic;
    [unsafe extern "C-unwind"] => Cdecl, false, true, variadic;

    #[cfg(target_arch = "x86")] [extern "stdcall"] => Stdcall, true, false, fixed;
    #[cfg(target_arch = "x86")] [extern "stdcall-unwind"] => Stdcall, false, false, fixed;
    #[cfg(target_arch = "x86")] [unsafe extern "stdcall"] => Stdcall, true, true, fixed;
    #[cfg(target_arch = "x86")] [unsafe extern "stdcall-unwind"] => Stdcall, false, true, fixed;

    #[cfg(target_arch = "x86")] [extern "fastcall"] => Fastcall, true, false, fixed;
    #[cfg(target_arch = "x86")] [extern "fastcall-unwind"] => Fastcall, false, false, fixed;
    #[cfg(target_arch = "x86")] [unsafe extern "fastcall"] => Fastcall, true, true, fixed;
    #[cfg(target_arch = "x86")] [unsafe extern "fastcall-unwind"] => Fastcall, false, true, fixed;

    #[cfg(all(feature = "vectorcall", any(target_arch = "x86", target_arch = "x86_64")))]
    [extern "vectorcall"] => Vectorcall, true, false, fixed;
    #[cfg(all(feature = "vectorcall", any(target_arch = "x86", target_arch = "x86_64")))]
    [extern "vectorcall-unwind"] => Vectorcall, false, false, fixed;
    #[cfg(all(feature = "vectorcall", any(target_arch = "x86", target_arch = "x86_64")))]
    [unsafe extern "vectorcall"] => Vectorcall, true, true, fixed;
    #[cfg(all(feature = "vectorcall", any(target_arch = "x86", target_arch = "x86_64")))]
    [unsafe extern "vectorcall-unwind"] => Vectorcall, false, true, fixed;
}

signature_table! {
    #[cfg(target_arch = "x86")] [extern "thiscall"] => Thiscall, true, false, fixed;
    #[cfg(target_arch = "x86")] [extern "thiscall-unwind"] => Thiscall, false, false, fixed;
    #[cfg(target_arch = "x86")] [unsafe extern "thiscall"] => Thiscall, true, true, fixed;
    #[cfg(target_arch = "x86")] [unsafe extern "thiscall-unwind"] => Thiscall, false, true, fixed;
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all, const_assert};

    use super::*;
    use crate::markers::CallingConvention;

    assert_type_eq_all!(Assembled<Shape<Rust, true, false, false>, (i32,), u8>, fn(i32) -> u8);
    assert_type_eq_all!(Assembled<Shape<Rust, false, false, true>, (i32,), u8>, extern "C-unwind" fn(i32, ...) -> u8);
    assert_type_eq_all!(Assembled<Shape<Cdecl, true, true, true>, (), ()>, unsafe extern "C" fn(...));
    assert_type_eq_all!(Assembled<Shape<Regcall, true, false, false>, (), ()>, extern "C" fn());

    #[cfg(not(target_arch = "x86"))]
    assert_type_eq_all!(Assembled<Shape<Stdcall, true, false, false>, (u8,), ()>, extern "C" fn(u8));

    #[cfg(target_arch = "x86")]
    assert_type_eq_all!(Assembled<Shape<Stdcall, true, false, false>, (u8,), ()>, extern "stdcall" fn(u8));

    // A bare `fn(..)` type does not parse in front of `:`, hence the aliases.
    type Nullary = fn();
    type Widest = unsafe extern "C-unwind" fn(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8);
    type WidestVariadic = extern "C" fn(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, ...);
    type TooWide = fn(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8);

    assert_impl_all!(Nullary: FunctionTraits, Canonical);
    assert_impl_all!(Widest: FunctionTraits);
    assert_impl_all!(WidestVariadic: FunctionTraits);
    assert_not_impl_any!(TooWide: FunctionTraits);

    const_assert!(matches!(
        <extern "C-unwind" fn(i32) as FunctionTraits>::CALLING_CONVENTION,
        CallingConvention::Cdecl
    ));
    const_assert!(!<extern "C-unwind" fn(i32) as FunctionTraits>::IS_NOEXCEPT);
    const_assert!(<unsafe fn(i32) as FunctionTraits>::IS_UNSAFE);
    const_assert!(!<fn(i32) as FunctionTraits>::IS_UNSAFE);

    #[cfg(target_arch = "x86")]
    type FreeThiscall = extern "thiscall" fn(*mut u8);
    #[cfg(target_arch = "x86")]
    assert_not_impl_any!(FreeThiscall: FunctionTraits);

    #[test]
    fn widest_descriptors_decompose() {
        assert_eq!(<Nullary as FunctionTraits>::ARITY, 0);
        assert_eq!(<Widest as FunctionTraits>::ARITY, 12);
        assert!(<Widest as FunctionTraits>::IS_UNSAFE);
        assert_eq!(<WidestVariadic as FunctionTraits>::ARITY, 12);
        assert!(<WidestVariadic as FunctionTraits>::IS_VARIADIC);
    }
}
