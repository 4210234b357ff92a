//! The trait bundle: everything known about a callable descriptor.
//!
//! [`FunctionTraits`] is the single entry point for reading a descriptor. It
//! is implemented for every supported descriptor shape (see the trait docs
//! for the list) and exposes the decomposed parts as associated types and
//! constants. Nothing is ever instantiated; all of it is resolved during
//! type checking.
//!
//! Internally every descriptor is first reduced to its [`Canonical`] form,
//! which strips references, raw pointers and the [`Functor`] /
//! [`Closure`] wrappers. The canonical form is what the mutators in
//! [`mutators`](crate::mutators) rewrite.
//!
//! [`Functor`]: crate::functor::Functor
//! [`Closure`]: crate::functor::Closure

use function_traits_internals::ArgList;

use crate::{
    classify::Classification,
    markers::{CallingConvention, FunctionKind, Qualifiers, RefQualifier, ShapeInfo, ShapeOps},
    wrapping::Wrapping,
};

pub(crate) mod sealed_canonical {
    pub trait Sealed {}
}

/// A bare function signature: any function pointer type this crate can
/// spell, including `extern "thiscall"` pointers that are only valid as the
/// signature of a [`MemberFn`](crate::member::MemberFn).
pub trait Signature: sealed_canonical::Sealed {
    /// The attributes of the signature.
    type Shape: ShapeOps;
    /// The return type.
    type Return;
    /// The parameter types, excluding any variadic marker.
    type Args: ArgList;
}

/// A descriptor with all wrapping removed: a free function pointer or a
/// [`MemberFn`](crate::member::MemberFn).
///
/// This trait is sealed.
pub trait Canonical: sealed_canonical::Sealed {
    /// [`Free`](crate::markers::Free) or [`Member`](crate::markers::Member).
    type Kind: FunctionKind;
    /// The attributes of the signature.
    type Shape: ShapeOps;
    /// The return type.
    type Return;
    /// The parameter types, excluding any variadic marker.
    type Args: ArgList;
    /// The owning class, [`NoClass`](crate::markers::NoClass) for free
    /// functions.
    type Class;
    /// The member qualifiers, always `Quals` (unqualified) for free
    /// functions.
    type Qualifiers: Qualifiers;
}

pub(crate) mod sealed_function_traits {
    pub trait Sealed {}
}

/// The decomposition of a callable descriptor.
///
/// A descriptor is one of:
///
/// - a function pointer type, `[unsafe] [extern "ABI"] fn(A0, .., An[, ...]) -> R`
///   with up to 12 parameters;
/// - exactly one reference or raw pointer around one: `&F`, `&mut F`,
///   `*const F`, `*mut F`;
/// - a [`MemberFn`](crate::member::MemberFn), bare or behind one reference
///   or raw pointer;
/// - a [`Functor`](crate::functor::Functor) or
///   [`Closure`](crate::functor::Closure).
///
/// Everything other than [`Canonical`](Self::Canonical),
/// [`WRAPPING`](Self::WRAPPING) and [`IS_FUNCTOR`](Self::IS_FUNCTOR) is
/// derived from the canonical form.
///
/// This trait is sealed.
///
/// # Examples
///
/// ```
/// use function_traits::prelude::*;
///
/// type F = unsafe extern "C" fn(*const u8, ...) -> i32;
///
/// assert_eq!(<F as FunctionTraits>::ARITY, 1);
/// assert!(<F as FunctionTraits>::IS_VARIADIC);
/// assert!(<F as FunctionTraits>::IS_NOEXCEPT);
/// assert!(<F as FunctionTraits>::IS_UNSAFE);
/// assert_eq!(<F as FunctionTraits>::CALLING_CONVENTION, CallingConvention::Cdecl);
/// assert_eq!(type_name::<ArgType<F, 0>>(), "*const u8");
/// ```
///
/// Unsupported types fail to compile:
///
/// ```compile_fail
/// use function_traits::prelude::*;
///
/// let _ = <String as FunctionTraits>::ARITY;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported callable descriptor",
    label = "not a function pointer, member function, functor or closure",
    note = "accepted: `[unsafe] extern \"ABI\" fn(..) -> R` with up to 12 parameters, \
            one `&`/`&mut`/`*const`/`*mut` around such a pointer or a `MemberFn`, \
            `MemberFn<Class, Sig, Quals>`, `Functor<T>` and `Closure<F, Args>`"
)]
pub trait FunctionTraits: sealed_function_traits::Sealed {
    /// The descriptor with all wrapping removed.
    type Canonical: Canonical;
    /// The return type.
    type Return;
    /// The parameter types as a tuple.
    type Args: ArgList;
    /// The owning class, [`NoClass`](crate::markers::NoClass) for free
    /// functions.
    type Class;

    /// The reference or pointer wrapped around the canonical form.
    const WRAPPING: Wrapping;
    /// Whether the descriptor is a functor or closure.
    const IS_FUNCTOR: bool;

    /// The calling convention.
    const CALLING_CONVENTION: CallingConvention =
        <<Self::Canonical as Canonical>::Shape as ShapeInfo>::CONVENTION;
    /// Whether the function is C-variadic.
    const IS_VARIADIC: bool = <<Self::Canonical as Canonical>::Shape as ShapeInfo>::VARIADIC;
    /// Whether the function cannot unwind.
    const IS_NOEXCEPT: bool = <<Self::Canonical as Canonical>::Shape as ShapeInfo>::NOUNWIND;
    /// Whether the function is `unsafe` to call.
    const IS_UNSAFE: bool = <<Self::Canonical as Canonical>::Shape as ShapeInfo>::UNSAFE;
    /// Whether the member function is `const`.
    const IS_CONST: bool = <<Self::Canonical as Canonical>::Qualifiers as Qualifiers>::IS_CONST;
    /// Whether the member function is `volatile`.
    const IS_VOLATILE: bool =
        <<Self::Canonical as Canonical>::Qualifiers as Qualifiers>::IS_VOLATILE;
    /// The member function's reference qualifier.
    const REF_QUALIFIER: RefQualifier =
        <<Self::Canonical as Canonical>::Qualifiers as Qualifiers>::REF;
    /// Whether the canonical form is a member function (functors included).
    const IS_MEMBER_FUNCTION: bool = <<Self::Canonical as Canonical>::Kind as FunctionKind>::IS_MEMBER;
    /// Whether the canonical form is a free function.
    const IS_FREE_FUNCTION: bool = !Self::IS_MEMBER_FUNCTION;
    /// The number of parameters, not counting the variadic marker.
    const ARITY: usize = <Self::Args as ArgList>::LEN;
    /// Whether the parameter list is `()` exactly: no parameters and not
    /// variadic.
    const IS_EMPTY_PARAMETER_LIST: bool = Self::ARITY == 0 && !Self::IS_VARIADIC;
    /// Which of the mutually exclusive descriptor categories this is.
    const CLASSIFICATION: Classification = if Self::IS_FUNCTOR {
        Classification::Functor
    } else if Self::IS_MEMBER_FUNCTION {
        Classification::MemberFunctionPointer
    } else {
        Classification::FreeFunction
    };
}

/// The canonical form of `F`.
pub type CanonicalOf<F> = <F as FunctionTraits>::Canonical;

/// The return type of `F`.
pub type ReturnType<F> = <F as FunctionTraits>::Return;

/// The parameter types of `F`, as a tuple.
pub type ArgsOf<F> = <F as FunctionTraits>::Args;

/// The class of `F`.
pub type ClassOf<F> = <F as FunctionTraits>::Class;

/// The type of the parameter of `F` at index `N`.
///
/// An out-of-bounds index fails to compile:
///
/// ```compile_fail
/// use function_traits::prelude::*;
///
/// let _: Option<ArgType<fn(i32, f32), 2>> = None;
/// ```
pub type ArgType<F, const N: usize> =
    <<F as FunctionTraits>::Args as function_traits_internals::TypeAt<N>>::Output;

#[cfg(test)]
mod tests {
    use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};

    use super::*;
    use crate::markers::{NoClass, Quals};

    type Plain = fn(i32, f32) -> u8;
    type Variadic = unsafe extern "C" fn(...) -> i32;

    const_assert_eq!(<Plain as FunctionTraits>::ARITY, 2);
    const_assert!(<Plain as FunctionTraits>::IS_FREE_FUNCTION);
    const_assert!(!<Plain as FunctionTraits>::IS_NOEXCEPT);
    const_assert!(!<Plain as FunctionTraits>::IS_EMPTY_PARAMETER_LIST);
    const_assert!(<fn() as FunctionTraits>::IS_EMPTY_PARAMETER_LIST);

    const_assert_eq!(<Variadic as FunctionTraits>::ARITY, 0);
    const_assert!(<Variadic as FunctionTraits>::IS_VARIADIC);
    const_assert!(!<Variadic as FunctionTraits>::IS_EMPTY_PARAMETER_LIST);

    assert_type_eq_all!(ReturnType<Plain>, u8);
    assert_type_eq_all!(ArgsOf<Plain>, (i32, f32));
    assert_type_eq_all!(ArgType<Plain, 1>, f32);
    assert_type_eq_all!(ClassOf<Plain>, NoClass);
    assert_type_eq_all!(<CanonicalOf<&Plain> as Canonical>::Qualifiers, Quals);

    #[test]
    fn free_functions_carry_no_qualifiers() {
        assert!(!<Plain as FunctionTraits>::IS_CONST);
        assert!(!<Plain as FunctionTraits>::IS_VOLATILE);
        assert_eq!(<Plain as FunctionTraits>::REF_QUALIFIER, RefQualifier::None);
        assert_eq!(<Plain as FunctionTraits>::CLASSIFICATION, Classification::FreeFunction);
    }
}
