//! Functor and closure descriptors.
//!
//! A functor is a type with exactly one call operator. For a named type,
//! implement [`CallOperator`] and use [`Functor<T>`] as the descriptor:
//!
//! ```
//! use function_traits::prelude::*;
//!
//! struct Scale(f32);
//!
//! impl CallOperator for Scale {
//!     type Operator = MemberFn<Self, fn(f32) -> i32, Quals<true>>;
//! }
//!
//! type F = Functor<Scale>;
//!
//! assert!(<F as FunctionTraits>::IS_FUNCTOR);
//! assert!(<F as FunctionTraits>::IS_CONST);
//! assert_eq!(type_name::<ReturnType<F>>(), "i32");
//! assert_eq!(type_name::<ArgsOf<F>>(), "(f32,)");
//! ```
//!
//! Closure types cannot be named, so [`Closure<F, Args, K>`] describes them
//! by the call trait they implement, and [`of_closure`] infers `F` from a
//! value:
//!
//! ```
//! use function_traits::prelude::*;
//!
//! let offset = 3;
//! let add = move |x: i32, y: i32| x + y + offset;
//!
//! let traits = of_closure::<(i32, i32), _>(&add);
//! assert_eq!(traits.arity(), 2);
//! assert!(traits.is_functor());
//! assert!(traits.is_const());
//! ```
//!
//! A type has at most one call operator, so an overloaded functor cannot be
//! expressed:
//!
//! ```compile_fail
//! use function_traits::prelude::*;
//!
//! struct Overloaded;
//!
//! impl CallOperator for Overloaded {
//!     type Operator = MemberFn<Self, fn(i32)>;
//! }
//!
//! impl CallOperator for Overloaded {
//!     type Operator = MemberFn<Self, fn(f64)>;
//! }
//! ```
//!
//! and a closure whose parameter types cannot be inferred is rejected:
//!
//! ```compile_fail
//! use function_traits::prelude::*;
//!
//! let identity = |x| x;
//! let _ = of_closure::<_, _>(&identity);
//! ```

use core::marker::PhantomData;

use function_traits_internals::for_each_arity;

use crate::{
    bundle::{Canonical, FunctionTraits, sealed_function_traits},
    display::Traits,
    markers::{Member, Quals, RvalueRef},
    member::MemberFn,
    wrapping::{Rewrap, Wrapping},
};

/// The single call operator of a functor type.
///
/// `Operator` must be a [`MemberFn`] whose class is `Self`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no call operator",
    label = "`{Self}` does not implement `CallOperator`",
    note = "implement `CallOperator` with `type Operator = MemberFn<Self, fn(..) -> R, Quals<..>>`, \
            or describe closures with `Closure<F, (Args..)>`"
)]
pub trait CallOperator {
    /// The call operator, as a member function of `Self`.
    type Operator: Canonical<Kind = Member, Class = Self>;
}

/// Descriptor for a type with a [`CallOperator`].
///
/// Decomposes exactly like its call operator, except that
/// [`IS_FUNCTOR`](FunctionTraits::IS_FUNCTOR) is `true`.
pub struct Functor<T>(PhantomData<fn() -> T>);

impl<T: CallOperator> sealed_function_traits::Sealed for Functor<T> {}

impl<T: CallOperator> FunctionTraits for Functor<T> {
    type Canonical = T::Operator;
    type Return = <T::Operator as Canonical>::Return;
    type Args = <T::Operator as Canonical>::Args;
    type Class = T;

    const WRAPPING: Wrapping = Wrapping::None;
    const IS_FUNCTOR: bool = true;
}

impl<T: CallOperator, G> Rewrap<G> for Functor<T> {
    type Output = G;
}

/// Closure kind: called through [`Fn`], a `const` call operator.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct SharedCall;

/// Closure kind: called through [`FnMut`], a non-`const` call operator.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct MutCall;

/// Closure kind: called through [`FnOnce`], an `&&`-qualified call operator
/// that consumes the closure.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct OnceCall;

/// Descriptor for a closure (or any other callable) `F` called with the
/// parameter tuple `Args`, through the call trait selected by `K`.
///
/// | `K`            | bound on `F` | call operator qualifiers |
/// |----------------|--------------|--------------------------|
/// | [`SharedCall`] | `Fn`         | `const`                  |
/// | [`MutCall`]    | `FnMut`      | none                     |
/// | [`OnceCall`]   | `FnOnce`     | `&&`                     |
///
/// The call operator always uses the Rust ABI.
///
/// ```
/// use function_traits::{functor::MutCall, prelude::*};
///
/// type Counter = Closure<Box<dyn FnMut(u8) -> u32>, (u8,), MutCall>;
///
/// assert_eq!(classify!(Counter), Classification::Functor);
/// assert!(!<Counter as FunctionTraits>::IS_CONST);
/// ```
pub struct Closure<F, Args, K = SharedCall>(PhantomData<(fn() -> F, fn() -> Args, K)>);

macro_rules! impl_closure {
    ([$kind:ident $call:ident $quals:ty] $($A:ident)*) => {
        impl<F, R, $($A,)*> sealed_function_traits::Sealed for Closure<F, ($($A,)*), $kind>
        where
            F: $call($($A),*) -> R,
        {
        }

        impl<F, R, $($A,)*> FunctionTraits for Closure<F, ($($A,)*), $kind>
        where
            F: $call($($A),*) -> R,
        {
            type Canonical = MemberFn<F, fn($($A),*) -> R, $quals>;
            type Return = R;
            type Args = ($($A,)*);
            type Class = F;

            const WRAPPING: Wrapping = Wrapping::None;
            const IS_FUNCTOR: bool = true;
        }

        impl<F, R, $($A,)* G> Rewrap<G> for Closure<F, ($($A,)*), $kind>
        where
            F: $call($($A),*) -> R,
        {
            type Output = G;
        }
    };
}

for_each_arity!(impl_closure; SharedCall Fn Quals<true>);
for_each_arity!(impl_closure; MutCall FnMut Quals);
for_each_arity!(impl_closure; OnceCall FnOnce Quals<false, false, RvalueRef>);

/// The [`Traits`] of the closure `closure` called with parameters `Args`
/// through [`Fn`].
///
/// `Args` is the parameter tuple and usually has to be spelled out;
/// `F` is inferred from the argument.
#[must_use]
pub const fn of_closure<Args, F>(closure: &F) -> Traits<Closure<F, Args>>
where
    Closure<F, Args>: FunctionTraits,
{
    let _ = closure;
    Traits::new()
}

/// Like [`of_closure`], for closures that are only [`FnMut`].
///
/// ```
/// use function_traits::prelude::*;
///
/// let mut total = 0;
/// let add = |x: i32| total += x;
///
/// let traits = of_closure_mut::<(i32,), _>(&add);
/// assert!(traits.is_functor());
/// assert!(!traits.is_const());
/// ```
#[must_use]
pub const fn of_closure_mut<Args, F>(closure: &F) -> Traits<Closure<F, Args, MutCall>>
where
    Closure<F, Args, MutCall>: FunctionTraits,
{
    let _ = closure;
    Traits::new()
}

/// Like [`of_closure`], for closures that are only [`FnOnce`].
#[must_use]
pub const fn of_closure_once<Args, F>(closure: &F) -> Traits<Closure<F, Args, OnceCall>>
where
    Closure<F, Args, OnceCall>: FunctionTraits,
{
    let _ = closure;
    Traits::new()
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_type_eq_all, const_assert};

    use super::*;
    use crate::{
        bundle::CanonicalOf,
        classify::Classification,
        markers::{LvalueRef, RefQualifier},
    };

    assert_type_eq_all!(
        CanonicalOf<Closure<fn(u8) -> u16, (u8,), MutCall>>,
        MemberFn<fn(u8) -> u16, fn(u8) -> u16>
    );
    assert_type_eq_all!(
        CanonicalOf<Closure<fn(u8) -> u16, (u8,), OnceCall>>,
        MemberFn<fn(u8) -> u16, fn(u8) -> u16, Quals<false, false, RvalueRef>>
    );

    struct Counter;

    impl CallOperator for Counter {
        type Operator = MemberFn<Self, extern "C" fn(u32, u64) -> bool, Quals<false, false, LvalueRef>>;
    }

    assert_type_eq_all!(<Functor<Counter> as FunctionTraits>::Class, Counter);
    assert_type_eq_all!(<Functor<Counter> as FunctionTraits>::Args, (u32, u64));
    assert_type_eq_all!(
        CanonicalOf<Functor<Counter>>,
        MemberFn<Counter, extern "C" fn(u32, u64) -> bool, Quals<false, false, LvalueRef>>
    );

    const_assert!(<Functor<Counter> as FunctionTraits>::IS_FUNCTOR);
    const_assert!(<Functor<Counter> as FunctionTraits>::IS_MEMBER_FUNCTION);
    const_assert!(<Functor<Counter> as FunctionTraits>::IS_NOEXCEPT);

    #[test]
    fn closure_decomposition() {
        let flag = true;
        let pick = move |a: u8, b: u8| if flag { a } else { b };

        let traits = of_closure::<(u8, u8), _>(&pick);
        assert_eq!(traits.arity(), 2);
        assert!(traits.is_functor());
        assert!(traits.is_member_function());
        assert!(traits.is_const());
        assert!(!traits.is_noexcept());
    }

    #[test]
    fn closure_kinds() {
        let mut calls = 0_u32;
        let mut count = |step: u32| {
            calls += step;
            calls
        };
        let traits = of_closure_mut::<(u32,), _>(&count);
        assert!(traits.is_functor());
        assert!(!traits.is_const());
        assert_eq!(traits.ref_qualifier(), RefQualifier::None);
        assert_eq!(traits.return_type_name(), "u32");
        assert_eq!(count(2), 2);

        let owned = String::from("consumed");
        let consume = move |suffix: &'static str| owned + suffix;
        let traits = of_closure_once::<(&'static str,), _>(&consume);
        assert!(!traits.is_const());
        assert_eq!(traits.ref_qualifier(), RefQualifier::Rvalue);
        assert_eq!(consume("!"), "consumed!");
    }

    #[test]
    fn fn_mut_only_is_a_functor() {
        type Boxed = Box<dyn FnMut(u8) -> u8>;

        assert_eq!(classify!(Closure<Boxed, (u8,)>), Classification::Unsupported);
        assert_eq!(classify!(Closure<Boxed, (u8,), MutCall>), Classification::Functor);
        assert_eq!(classify!(Closure<Boxed, (u8,), OnceCall>), Classification::Functor);
        assert_eq!(classify!(Closure<fn(u8) -> u8, (u8,), MutCall>), Classification::Functor);
    }

    #[test]
    fn closure_with_no_parameters() {
        let answer = || 42_u64;
        let traits = of_closure::<(), _>(&answer);
        assert!(traits.is_empty_parameter_list());
    }
}
