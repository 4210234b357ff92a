//! Member function descriptors.
//!
//! Rust has no pointer-to-member type, so a member function is described by
//! its parts: [`MemberFn<C, Sig, Q>`] is a member of class `C` whose
//! signature, as seen from the outside, is the function pointer type `Sig`
//! and whose qualifiers are `Q` (a [`Quals`]).
//!
//! The receiver is implicit. `Sig` lists only the explicit parameters; use
//! [`AsFreeFunction`](crate::mutators::AsFreeFunction) for the signature with
//! the receiver pointer spelled out.
//!
//! ```
//! use function_traits::prelude::*;
//!
//! struct Widget;
//!
//! type Resize = MemberFn<Widget, extern "C" fn(u32, u32) -> bool, Quals<false, true, LvalueRef>>;
//!
//! assert_eq!(<Resize as FunctionTraits>::ARITY, 2);
//! assert!(<Resize as FunctionTraits>::IS_MEMBER_FUNCTION);
//! assert!(<Resize as FunctionTraits>::IS_VOLATILE);
//! assert_eq!(<Resize as FunctionTraits>::REF_QUALIFIER, RefQualifier::Lvalue);
//! assert_eq!(type_name::<ClassOf<Resize>>(), type_name::<Widget>());
//! ```
//!
//! The signature must itself be a function pointer type:
//!
//! ```compile_fail
//! use function_traits::prelude::*;
//!
//! let _ = <MemberFn<u8, u8> as FunctionTraits>::ARITY;
//! ```

use core::marker::PhantomData;

use crate::{
    bundle::{Canonical, FunctionTraits, Signature, sealed_canonical, sealed_function_traits},
    markers::{Member, Qualifiers, Quals},
    wrapping::{Rewrap, Wrapping},
};

/// A member function of class `C` with signature `Sig` and qualifiers `Q`.
///
/// `Sig` is any function pointer type this crate understands, including
/// `extern "thiscall"` pointers on 32-bit x86. `Q` defaults to the
/// unqualified [`Quals`].
pub struct MemberFn<C, Sig, Q = Quals>(PhantomData<(fn() -> C, Sig, Q)>);

impl<C, Sig: Signature, Q: Qualifiers> sealed_canonical::Sealed for MemberFn<C, Sig, Q> {}

impl<C, Sig: Signature, Q: Qualifiers> Canonical for MemberFn<C, Sig, Q> {
    type Kind = Member;
    type Shape = Sig::Shape;
    type Return = Sig::Return;
    type Args = Sig::Args;
    type Class = C;
    type Qualifiers = Q;
}

impl<C, Sig: Signature, Q: Qualifiers> sealed_function_traits::Sealed for MemberFn<C, Sig, Q> {}

impl<C, Sig: Signature, Q: Qualifiers> FunctionTraits for MemberFn<C, Sig, Q> {
    type Canonical = Self;
    type Return = Sig::Return;
    type Args = Sig::Args;
    type Class = C;

    const WRAPPING: Wrapping = Wrapping::None;
    const IS_FUNCTOR: bool = false;
}

impl<C, Sig: Signature, Q: Qualifiers, G> Rewrap<G> for MemberFn<C, Sig, Q> {
    type Output = G;
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};

    use super::*;
    use crate::markers::{CallingConvention, RefQualifier, RvalueRef};

    struct Widget;

    type Plain = MemberFn<Widget, fn(i32) -> u8>;
    type Qualified = MemberFn<Widget, unsafe extern "C" fn(i32, ...), Quals<true, true, RvalueRef>>;

    assert_type_eq_all!(<Plain as FunctionTraits>::Class, Widget);
    assert_type_eq_all!(<Plain as FunctionTraits>::Return, u8);
    assert_type_eq_all!(<Qualified as FunctionTraits>::Args, (i32,));

    const_assert_eq!(<Plain as FunctionTraits>::ARITY, 1);
    const_assert!(!<Plain as FunctionTraits>::IS_CONST);
    const_assert!(<Qualified as FunctionTraits>::IS_CONST);
    const_assert!(<Qualified as FunctionTraits>::IS_VOLATILE);
    const_assert!(<Qualified as FunctionTraits>::IS_VARIADIC);
    const_assert!(<Qualified as FunctionTraits>::IS_UNSAFE);
    const_assert!(!<Qualified as FunctionTraits>::IS_FREE_FUNCTION);
    const_assert!(!<Qualified as FunctionTraits>::IS_FUNCTOR);

    #[test]
    fn qualifiers_and_convention() {
        assert_eq!(<Qualified as FunctionTraits>::REF_QUALIFIER, RefQualifier::Rvalue);
        assert_eq!(<Plain as FunctionTraits>::CALLING_CONVENTION, CallingConvention::Rust);
        assert_eq!(<Qualified as FunctionTraits>::CALLING_CONVENTION, CallingConvention::Cdecl);
    }

    #[cfg(target_arch = "x86")]
    const_assert!(matches!(
        <MemberFn<Widget, extern "thiscall" fn()> as FunctionTraits>::CALLING_CONVENTION,
        CallingConvention::Thiscall
    ));
}
