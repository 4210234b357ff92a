//! Commonly used items for convenient importing.
//!
//! The prelude re-exports the trait bundle, the descriptor building blocks,
//! every mutator and the inspection helpers, so that a single `use`
//! statement is enough for most code.
//!
//! # Usage
//!
//! ```rust
//! use function_traits::prelude::*;
//!
//! type Callback = extern "C-unwind" fn(i32, *const u8) -> bool;
//!
//! assert_eq!(<Callback as FunctionTraits>::ARITY, 2);
//! assert!(!<Callback as FunctionTraits>::IS_NOEXCEPT);
//!
//! let _: AddNoexcept<Callback> = {
//!     extern "C" fn never(_: i32, _: *const u8) -> bool {
//!         false
//!     }
//!     never
//! };
//! ```
//!
//! # What's Included
//!
//! - **[`FunctionTraits`]** and **[`Canonical`]**, with the aliases
//!   [`ReturnType`], [`ArgsOf`], [`ArgType`], [`ClassOf`] and
//!   [`CanonicalOf`]
//! - **Descriptors**: [`MemberFn`], [`Quals`], [`Functor`], [`Closure`] with
//!   its kinds, and [`CallOperator`]
//! - **[`markers`]**: conventions, reference qualifiers and [`NoClass`]
//! - **Mutators**: every alias from [`mutators`](crate::mutators)
//! - **Inspection**: [`Traits`], [`classify!`], [`for_each_parameter`],
//!   [`type_name`] and friends
//!
//! Less common items, such as [`Shape`](crate::markers::Shape) or the
//! [`probe`](crate::type_name::probe) module, are imported from their own
//! modules.

pub use crate::{
    bundle::{
        ArgType, ArgsOf, Canonical, CanonicalOf, ClassOf, FunctionTraits, ReturnType, Signature,
    },
    classify,
    classify::Classification,
    convention::{CallingConvention, ParseCallingConventionError},
    display::Traits,
    functor::{
        CallOperator, Closure, Functor, MutCall, OnceCall, SharedCall, of_closure, of_closure_mut,
        of_closure_once,
    },
    iterate::{
        ArgVisitor, IndexVisitor, for_each_index, for_each_parameter, for_each_parameter_index,
    },
    markers::{
        self, Cdecl, Fastcall, LvalueRef, NoClass, Quals, RefQualifier, Regcall, Rust, RvalueRef,
        Stdcall, Thiscall, Unqualified, Vectorcall,
    },
    member::MemberFn,
    mutators::{
        AddConst, AddCv, AddLvalueRef, AddNoexcept, AddRvalueRef, AddUnsafe, AddVariadic,
        AddVolatile, AsFreeFunction, RemoveConst, RemoveCv, RemoveNoexcept, RemoveRefQualifier,
        RemoveUnsafe, RemoveVariadic, RemoveVolatile, ReplaceArgs, ReplaceCallingConvention,
        ReplaceClass, ReplaceNthArg, ReplaceReturn,
    },
    type_name::{ShortTypeName, short_type_name, type_name},
    wrapping::Wrapping,
};
