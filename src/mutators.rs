//! Type aliases that rewrite one part of a descriptor.
//!
//! Each alias takes a descriptor and produces a new descriptor that differs
//! in exactly the named part. Everything else is preserved, including the
//! reference or raw pointer around the canonical form:
//!
//! ```
//! use function_traits::prelude::*;
//!
//! fn assert_same<A: 'static, B: 'static>() {
//!     assert_eq!(core::any::TypeId::of::<A>(), core::any::TypeId::of::<B>());
//! }
//!
//! type F = extern "C" fn(i32, f32, f64) -> i32;
//!
//! assert_same::<ReplaceNthArg<F, 1, u8>, extern "C" fn(i32, u8, f64) -> i32>();
//! assert_same::<ReplaceReturn<&'static F, ()>, &'static extern "C" fn(i32, f32, f64)>();
//! assert_same::<RemoveNoexcept<F>, extern "C-unwind" fn(i32, f32, f64) -> i32>();
//! assert_same::<AddUnsafe<F>, unsafe extern "C" fn(i32, f32, f64) -> i32>();
//! ```
//!
//! # What the compiler can express
//!
//! A rewrite can request something that has no function pointer type. The
//! result is then the closest type that does exist:
//!
//! - making a function variadic switches it to the C ABI, the only variadic
//!   convention ([`AddVariadic`]);
//! - Rust-ABI functions always unwind, so [`AddNoexcept`] leaves them alone;
//! - a convention demoted on the current target becomes
//!   [`Cdecl`](crate::markers::Cdecl) ([`ReplaceCallingConvention`]);
//! - class and qualifier rewrites ([`AddConst`], [`ReplaceClass`], ...) leave
//!   free functions unchanged.
//!
//! Rewriting a [`Functor`](crate::functor::Functor) or
//! [`Closure`](crate::functor::Closure) yields the rewritten call operator,
//! a [`MemberFn`](crate::member::MemberFn).
//!
//! Two requests are rejected at compile time: giving a free function the
//! `thiscall` convention, and [`ReplaceNthArg`] with an index past the end.
//!
//! ```compile_fail
//! use function_traits::prelude::*;
//!
//! type F = extern "C" fn(i32, f32, f64) -> i32;
//! let _: Option<ReplaceNthArg<F, 5, u8>> = None;
//! ```

use function_traits_internals::ReplaceAt;

use crate::{
    bundle::{ArgsOf, Canonical, CanonicalOf, ClassOf, ReturnType},
    markers::{ConventionFor, FunctionKind, LvalueRef, Qualifiers, RvalueRef, ShapeOps, Unqualified},
    matrix::Assembled,
    wrapping::Rewrap,
};

/// The [`FunctionKind`] of `F`.
pub type KindOf<F> = <CanonicalOf<F> as Canonical>::Kind;

/// The [`Shape`](crate::markers::Shape) of `F`.
pub type ShapeOf<F> = <CanonicalOf<F> as Canonical>::Shape;

/// The [`Quals`](crate::markers::Quals) of `F`.
pub type QualifiersOf<F> = <CanonicalOf<F> as Canonical>::Qualifiers;

/// `F` rebuilt from the given shape `S`, return type `R`, parameters `A`,
/// class `C` and qualifiers `Q`, inside `F`'s wrapper.
///
/// Every other alias in this module is this one with all but one part taken
/// from `F`.
pub type Rebuilt<F, S, R, A, C, Q> =
    <F as Rewrap<<KindOf<F> as FunctionKind>::Build<C, Assembled<S, A, R>, Q>>>::Output;

/// `F` with shape `S` and every other part unchanged.
type WithShape<F, S> = Rebuilt<F, S, ReturnType<F>, ArgsOf<F>, ClassOf<F>, QualifiersOf<F>>;

/// `F` with qualifiers `Q` and every other part unchanged.
type WithQualifiers<F, Q> = Rebuilt<F, ShapeOf<F>, ReturnType<F>, ArgsOf<F>, ClassOf<F>, Q>;

/// `F` as a non-unwinding function (`noexcept`).
pub type AddNoexcept<F> = WithShape<F, <ShapeOf<F> as ShapeOps>::Nounwind>;

/// `F` as a function that may unwind.
pub type RemoveNoexcept<F> = WithShape<F, <ShapeOf<F> as ShapeOps>::Unwind>;

/// `F` with a trailing `...`. Switches the convention to the C ABI.
pub type AddVariadic<F> = WithShape<F, <ShapeOf<F> as ShapeOps>::Variadic>;

/// `F` without a trailing `...`.
pub type RemoveVariadic<F> = WithShape<F, <ShapeOf<F> as ShapeOps>::NonVariadic>;

/// `F` as an `unsafe` function.
pub type AddUnsafe<F> = WithShape<F, <ShapeOf<F> as ShapeOps>::Unsafe>;

/// `F` as a safe function.
pub type RemoveUnsafe<F> = WithShape<F, <ShapeOf<F> as ShapeOps>::Safe>;

/// `F` with calling convention `M`.
///
/// `M` must be valid for `F`'s kind (see
/// [`ConventionFor`]); demoted conventions become
/// [`Cdecl`](crate::markers::Cdecl), as does any convention on a variadic
/// function.
pub type ReplaceCallingConvention<F, M> = WithShape<
    F,
    <ShapeOf<F> as ShapeOps>::WithConvention<<M as ConventionFor<KindOf<F>>>::Accepted>,
>;

/// `F` as a `const` member function. Unchanged for free functions.
pub type AddConst<F> = WithQualifiers<F, <QualifiersOf<F> as Qualifiers>::AddConst>;

/// `F` as a non-`const` member function. Unchanged for free functions.
pub type RemoveConst<F> = WithQualifiers<F, <QualifiersOf<F> as Qualifiers>::RemoveConst>;

/// `F` as a `volatile` member function. Unchanged for free functions.
pub type AddVolatile<F> = WithQualifiers<F, <QualifiersOf<F> as Qualifiers>::AddVolatile>;

/// `F` as a non-`volatile` member function. Unchanged for free functions.
pub type RemoveVolatile<F> = WithQualifiers<F, <QualifiersOf<F> as Qualifiers>::RemoveVolatile>;

/// `F` as a `const volatile` member function. Unchanged for free functions.
pub type AddCv<F> = WithQualifiers<
    F,
    <<QualifiersOf<F> as Qualifiers>::AddConst as Qualifiers>::AddVolatile,
>;

/// `F` without `const` and `volatile`. Unchanged for free functions.
pub type RemoveCv<F> = WithQualifiers<
    F,
    <<QualifiersOf<F> as Qualifiers>::RemoveConst as Qualifiers>::RemoveVolatile,
>;

/// `F` as an `&`-qualified member function. Unchanged for free functions.
pub type AddLvalueRef<F> = WithQualifiers<F, <QualifiersOf<F> as Qualifiers>::WithRef<LvalueRef>>;

/// `F` as an `&&`-qualified member function. Unchanged for free functions.
pub type AddRvalueRef<F> = WithQualifiers<F, <QualifiersOf<F> as Qualifiers>::WithRef<RvalueRef>>;

/// `F` without a reference qualifier.
pub type RemoveRefQualifier<F> =
    WithQualifiers<F, <QualifiersOf<F> as Qualifiers>::WithRef<Unqualified>>;

/// `F` as a member of class `C`. Unchanged for free functions.
pub type ReplaceClass<F, C> = Rebuilt<F, ShapeOf<F>, ReturnType<F>, ArgsOf<F>, C, QualifiersOf<F>>;

/// `F` returning `R`.
pub type ReplaceReturn<F, R> = Rebuilt<F, ShapeOf<F>, R, ArgsOf<F>, ClassOf<F>, QualifiersOf<F>>;

/// `F` with parameter list `A`, a tuple of at most 12 types.
pub type ReplaceArgs<F, A> = Rebuilt<F, ShapeOf<F>, ReturnType<F>, A, ClassOf<F>, QualifiersOf<F>>;

/// `F` with the parameter at index `N` replaced by `T`.
pub type ReplaceNthArg<F, const N: usize, T> =
    ReplaceArgs<F, <ArgsOf<F> as ReplaceAt<N, T>>::Output>;

/// The free function pointer equivalent to `F`.
///
/// For a member function the receiver becomes an explicit first parameter,
/// `*const Class` for `const` members and `*mut Class` otherwise. Free
/// functions lose their wrapper and are otherwise unchanged.
///
/// ```
/// use function_traits::prelude::*;
///
/// struct Widget;
/// type Area = MemberFn<Widget, extern "C" fn(u32) -> u64, Quals<true>>;
///
/// assert_eq!(
///     core::any::TypeId::of::<AsFreeFunction<Area>>(),
///     core::any::TypeId::of::<extern "C" fn(*const Widget, u32) -> u64>(),
/// );
/// ```
pub type AsFreeFunction<F> = Assembled<
    ShapeOf<F>,
    <KindOf<F> as FunctionKind>::FlatArgs<ClassOf<F>, QualifiersOf<F>, ArgsOf<F>>,
    ReturnType<F>,
>;
