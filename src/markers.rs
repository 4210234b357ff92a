//! Marker types that spell out the parts of a function type.
//!
//! A function pointer type such as `unsafe extern "C" fn(i32, ...) -> u8`
//! carries its attributes in its syntax. To rewrite one attribute while
//! keeping the others, this crate needs those attributes as separate type
//! parameters. The markers in this module are those parameters:
//!
//! - **Calling conventions**: [`Rust`], [`Cdecl`], [`Stdcall`], [`Fastcall`],
//!   [`Vectorcall`], [`Thiscall`], [`Regcall`], all implementing
//!   [`Convention`].
//! - **Qualifiers** of member functions: [`Quals`], parameterized by
//!   `CONST`, `VOLATILE` and one of the reference markers [`Unqualified`],
//!   [`LvalueRef`] or [`RvalueRef`].
//! - **Function kinds**: [`Free`] and [`Member`], implementing
//!   [`FunctionKind`].
//! - **The shape key** [`Shape`]: convention, unwinding, `unsafe` and
//!   variadic status in one type, which is what the pattern-matching impls in
//!   [`matrix`](crate::matrix) are keyed on.
//! - [`NoClass`]: the class of a free function.
//!
//! None of these types are ever instantiated by this crate. They only exist to
//! be named.
//!
//! # Examples
//!
//! ```
//! use function_traits::prelude::*;
//!
//! type Getter = MemberFn<String, extern "C" fn() -> usize, Quals<true>>;
//!
//! assert!(<Getter as FunctionTraits>::IS_CONST);
//! assert!(!<Getter as FunctionTraits>::IS_VOLATILE);
//! assert_eq!(<Getter as FunctionTraits>::REF_QUALIFIER, RefQualifier::None);
//! ```
//!
//! The marker traits are sealed:
//!
//! ```compile_fail
//! use function_traits::markers::{CallingConvention, Convention};
//!
//! #[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
//! struct Syscall;
//!
//! impl Convention for Syscall {
//!     const VALUE: CallingConvention = CallingConvention::Cdecl;
//! }
//! ```

use core::{fmt, marker::PhantomData};

pub use crate::convention::CallingConvention;
use crate::member::MemberFn;

mod sealed_convention {
    pub trait Sealed: 'static {}

    impl Sealed for super::Rust {}
    impl Sealed for super::Cdecl {}
    impl Sealed for super::Stdcall {}
    impl Sealed for super::Fastcall {}
    impl Sealed for super::Vectorcall {}
    impl Sealed for super::Thiscall {}
    impl Sealed for super::Regcall {}
}

/// A calling-convention marker.
///
/// This trait is sealed and implemented for exactly the seven convention
/// markers in this module.
pub trait Convention:
    sealed_convention::Sealed + Copy + Default + fmt::Debug + Eq + Ord + core::hash::Hash
{
    /// The runtime value of this convention.
    const VALUE: CallingConvention;
}

macro_rules! convention_marker {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
        pub struct $name;

        impl Convention for $name {
            const VALUE: CallingConvention = CallingConvention::$name;
        }
    };
}

convention_marker!(
    /// Marker for the Rust ABI: plain `fn(..)` and `unsafe fn(..)`.
    ///
    /// Rust-ABI functions may always unwind and cannot be variadic.
    Rust
);
convention_marker!(
    /// Marker for the C ABI, `extern "C"` (and `extern "C-unwind"`).
    ///
    /// This is the default C-family convention and the only one that
    /// supports variadic functions.
    Cdecl
);
convention_marker!(
    /// Marker for `extern "stdcall"`. Distinct only on 32-bit x86.
    Stdcall
);
convention_marker!(
    /// Marker for `extern "fastcall"`. Distinct only on 32-bit x86.
    Fastcall
);
convention_marker!(
    /// Marker for `extern "vectorcall"`.
    ///
    /// Only available with the `vectorcall` feature on x86 and x86_64, since
    /// the ABI is still unstable.
    Vectorcall
);
convention_marker!(
    /// Marker for `extern "thiscall"`. Distinct only on 32-bit x86 and only
    /// valid for member functions.
    Thiscall
);
convention_marker!(
    /// Marker for the Intel `regcall` convention.
    ///
    /// Rust has no ABI string for it, so it is always demoted to [`Cdecl`].
    Regcall
);

/// A calling convention that is valid for functions of kind `K`.
///
/// [`Thiscall`] only implements `ConventionFor<Member>`: a free function
/// cannot be given the `thiscall` convention.
///
/// ```compile_fail
/// use function_traits::prelude::*;
///
/// type Bad = ReplaceCallingConvention<extern "C" fn(i32), Thiscall>;
/// let _: Option<Bad> = None;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid calling convention for this kind of function",
    label = "`thiscall` requires a member function",
    note = "free functions accept `Rust`, `Cdecl`, `Stdcall`, `Fastcall`, `Vectorcall` and `Regcall`"
)]
pub trait ConventionFor<K: FunctionKind>: Convention {
    /// `Self`, once accepted for `K`.
    type Accepted: Convention;
}

macro_rules! convention_for {
    ($($kind:ident: $($M:ident)*;)*) => {$($(
        impl ConventionFor<$kind> for $M {
            type Accepted = Self;
        }
    )*)*};
}

convention_for! {
    Free: Rust Cdecl Stdcall Fastcall Vectorcall Regcall;
    Member: Rust Cdecl Stdcall Fastcall Vectorcall Thiscall Regcall;
}

/// The reference qualifier of a member function.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub enum RefQualifier {
    /// No reference qualifier.
    #[default]
    None,
    /// `&`: callable on lvalues only.
    Lvalue,
    /// `&&`: callable on rvalues only.
    Rvalue,
}

impl RefQualifier {
    /// The qualifier as it is written after a parameter list.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Lvalue => "&",
            Self::Rvalue => "&&",
        }
    }
}

impl fmt::Display for RefQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Lvalue => f.write_str("&"),
            Self::Rvalue => f.write_str("&&"),
        }
    }
}

mod sealed_ref_marker {
    pub trait Sealed: 'static {}

    impl Sealed for super::Unqualified {}
    impl Sealed for super::LvalueRef {}
    impl Sealed for super::RvalueRef {}
}

/// A reference-qualifier marker, used as the `Ref` parameter of [`Quals`].
pub trait RefMarker: sealed_ref_marker::Sealed {
    /// The runtime value of this qualifier.
    const VALUE: RefQualifier;
}

/// Marker for a member function without a reference qualifier.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Unqualified;

/// Marker for an `&`-qualified member function.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct LvalueRef;

/// Marker for an `&&`-qualified member function.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct RvalueRef;

impl RefMarker for Unqualified {
    const VALUE: RefQualifier = RefQualifier::None;
}

impl RefMarker for LvalueRef {
    const VALUE: RefQualifier = RefQualifier::Lvalue;
}

impl RefMarker for RvalueRef {
    const VALUE: RefQualifier = RefQualifier::Rvalue;
}

/// The cv- and reference-qualifiers of a member function.
///
/// `Quals` on its own is the unqualified form. `Quals<true>` is `const`,
/// `Quals<true, true, LvalueRef>` is `const volatile &`, and so on.
pub struct Quals<const CONST: bool = false, const VOLATILE: bool = false, Ref = Unqualified>(
    PhantomData<Ref>,
);

mod sealed_qualifiers {
    pub trait Sealed: 'static {}

    impl<const CONST: bool, const VOLATILE: bool, Ref: super::RefMarker> Sealed
        for super::Quals<CONST, VOLATILE, Ref>
    {
    }
}

/// Read and rewrite access to the qualifiers encoded by a [`Quals`].
pub trait Qualifiers: sealed_qualifiers::Sealed {
    /// Whether the function is `const`.
    const IS_CONST: bool;
    /// Whether the function is `volatile`.
    const IS_VOLATILE: bool;
    /// The reference qualifier.
    const REF: RefQualifier;

    /// These qualifiers with `const` added.
    type AddConst: Qualifiers;
    /// These qualifiers with `const` removed.
    type RemoveConst: Qualifiers;
    /// These qualifiers with `volatile` added.
    type AddVolatile: Qualifiers;
    /// These qualifiers with `volatile` removed.
    type RemoveVolatile: Qualifiers;
    /// These qualifiers with the reference qualifier replaced by `R`.
    type WithRef<R: RefMarker>: Qualifiers;

    /// The pointer through which a member function with these qualifiers
    /// receives its object: `*const C` when `const`, `*mut C` otherwise.
    type Receiver<C>;
}

impl<const VOLATILE: bool, Ref: RefMarker> Qualifiers for Quals<true, VOLATILE, Ref> {
    const IS_CONST: bool = true;
    const IS_VOLATILE: bool = VOLATILE;
    const REF: RefQualifier = Ref::VALUE;

    type AddConst = Self;
    type RemoveConst = Quals<false, VOLATILE, Ref>;
    type AddVolatile = Quals<true, true, Ref>;
    type RemoveVolatile = Quals<true, false, Ref>;
    type WithRef<R: RefMarker> = Quals<true, VOLATILE, R>;

    type Receiver<C> = *const C;
}

impl<const VOLATILE: bool, Ref: RefMarker> Qualifiers for Quals<false, VOLATILE, Ref> {
    const IS_CONST: bool = false;
    const IS_VOLATILE: bool = VOLATILE;
    const REF: RefQualifier = Ref::VALUE;

    type AddConst = Quals<true, VOLATILE, Ref>;
    type RemoveConst = Self;
    type AddVolatile = Quals<false, true, Ref>;
    type RemoveVolatile = Quals<false, false, Ref>;
    type WithRef<R: RefMarker> = Quals<false, VOLATILE, R>;

    type Receiver<C> = *mut C;
}

/// Marker for free (non-member) functions.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Free;

/// Marker for member functions.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Member;

mod sealed_function_kind {
    pub trait Sealed: 'static {}

    impl Sealed for super::Free {}
    impl Sealed for super::Member {}
}

/// Whether a canonical descriptor is a free function or a member function.
///
/// The kind decides how a rewritten signature is packaged back into a
/// descriptor: free functions are the signature itself and ignore class and
/// qualifiers, member functions wrap it in a [`MemberFn`].
pub trait FunctionKind: sealed_function_kind::Sealed {
    /// Whether this is [`Member`].
    const IS_MEMBER: bool;

    /// The descriptor for signature `Sig` with class `C` and qualifiers `Q`.
    type Build<C, Sig, Q>;

    /// The parameter list of the equivalent free function: the receiver
    /// pointer followed by `A` for members, `A` unchanged for free functions.
    type FlatArgs<C, Q: Qualifiers, A: function_traits_internals::ArgList>;
}

impl FunctionKind for Free {
    const IS_MEMBER: bool = false;

    type Build<C, Sig, Q> = Sig;

    type FlatArgs<C, Q: Qualifiers, A: function_traits_internals::ArgList> = A;
}

impl FunctionKind for Member {
    const IS_MEMBER: bool = true;

    type Build<C, Sig, Q> = MemberFn<C, Sig, Q>;

    type FlatArgs<C, Q: Qualifiers, A: function_traits_internals::ArgList> =
        A::Prepend<Q::Receiver<C>>;
}

/// The class of a free function.
///
/// Uninhabited; it only ever appears as [`FunctionTraits::Class`].
///
/// [`FunctionTraits::Class`]: crate::FunctionTraits::Class
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum NoClass {}

/// The shape of a function signature: convention, unwinding, `unsafe` and
/// variadic status.
///
/// A `NOUNWIND` function uses the non-unwinding form of its ABI
/// (`extern "C"` rather than `extern "C-unwind"`); this is how the `noexcept`
/// attribute is spelled in Rust.
pub struct Shape<M, const NOUNWIND: bool, const UNSAFE: bool, const VARIADIC: bool>(
    PhantomData<M>,
);

/// The attributes encoded by a [`Shape`], as constants.
pub trait ShapeInfo {
    /// The calling convention.
    const CONVENTION: CallingConvention;
    /// Whether the function cannot unwind.
    const NOUNWIND: bool;
    /// Whether the function is `unsafe`.
    const UNSAFE: bool;
    /// Whether the function is C-variadic.
    const VARIADIC: bool;
}

impl<M: Convention, const NOUNWIND: bool, const UNSAFE: bool, const VARIADIC: bool> ShapeInfo
    for Shape<M, NOUNWIND, UNSAFE, VARIADIC>
{
    const CONVENTION: CallingConvention = M::VALUE;
    const NOUNWIND: bool = NOUNWIND;
    const UNSAFE: bool = UNSAFE;
    const VARIADIC: bool = VARIADIC;
}

/// Single-attribute rewrites of a [`Shape`].
///
/// The results are requests, not function types: whether the compiler can
/// express them is decided when they are [normalized](crate::matrix::Normalize).
pub trait ShapeOps: ShapeInfo {
    /// This shape without unwinding.
    type Nounwind: ShapeOps;
    /// This shape with unwinding.
    type Unwind: ShapeOps;
    /// This shape marked `unsafe`.
    type Unsafe: ShapeOps;
    /// This shape without `unsafe`.
    type Safe: ShapeOps;
    /// This shape made variadic, which forces [`Cdecl`].
    type Variadic: ShapeOps;
    /// This shape without the variadic marker.
    type NonVariadic: ShapeOps;
    /// This shape with its convention replaced by `M`.
    type WithConvention<M: Convention>: ShapeOps;
}

impl<M: Convention, const NOUNWIND: bool, const UNSAFE: bool, const VARIADIC: bool> ShapeOps
    for Shape<M, NOUNWIND, UNSAFE, VARIADIC>
{
    type Nounwind = Shape<M, true, UNSAFE, VARIADIC>;
    type Unwind = Shape<M, false, UNSAFE, VARIADIC>;
    type Unsafe = Shape<M, NOUNWIND, true, VARIADIC>;
    type Safe = Shape<M, NOUNWIND, false, VARIADIC>;
    type Variadic = Shape<Cdecl, NOUNWIND, UNSAFE, true>;
    type NonVariadic = Shape<M, NOUNWIND, UNSAFE, false>;
    type WithConvention<M2: Convention> = Shape<M2, NOUNWIND, UNSAFE, VARIADIC>;
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};

    use super::*;

    const_assert!(<Quals<true> as Qualifiers>::IS_CONST);
    const_assert!(!<Quals as Qualifiers>::IS_VOLATILE);
    const_assert!(matches!(<Quals<false, true, RvalueRef> as Qualifiers>::REF, RefQualifier::Rvalue));

    assert_type_eq_all!(<Quals as Qualifiers>::AddConst, Quals<true>);
    assert_type_eq_all!(<Quals<true, true, LvalueRef> as Qualifiers>::RemoveConst, Quals<false, true, LvalueRef>);
    assert_type_eq_all!(<Quals<true> as Qualifiers>::AddConst, Quals<true>);
    assert_type_eq_all!(<Quals<true> as Qualifiers>::WithRef<RvalueRef>, Quals<true, false, RvalueRef>);
    assert_type_eq_all!(<Quals<true> as Qualifiers>::Receiver<u8>, *const u8);
    assert_type_eq_all!(<Quals<false, true> as Qualifiers>::Receiver<u8>, *mut u8);

    assert_type_eq_all!(<Shape<Stdcall, false, true, false> as ShapeOps>::Variadic, Shape<Cdecl, false, true, true>);
    assert_type_eq_all!(
        <Shape<Cdecl, true, false, true> as ShapeOps>::WithConvention<Fastcall>,
        Shape<Fastcall, true, false, true>
    );

    const_assert_eq!(<Shape<Rust, false, true, false> as ShapeInfo>::UNSAFE, true);
    const_assert!(<Member as FunctionKind>::IS_MEMBER);
    const_assert!(!<Free as FunctionKind>::IS_MEMBER);

    assert_type_eq_all!(<Free as FunctionKind>::FlatArgs<u8, Quals<true>, (i32,)>, (i32,));
    assert_type_eq_all!(<Member as FunctionKind>::FlatArgs<u8, Quals<true>, (i32,)>, (*const u8, i32));

    #[test]
    fn ref_qualifier_spelling() {
        assert_eq!(RefQualifier::None.as_str(), "");
        assert_eq!(RefQualifier::Rvalue.as_str(), "&&");
        assert_eq!(RefQualifier::default(), RefQualifier::None);
    }
}
