#![cfg_attr(not(any(doc, test, feature = "std")), no_std)]
#![cfg_attr(feature = "vectorcall", feature(abi_vectorcall))]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(nightly_extra_checks, forbid(rustdoc::missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Compile-time introspection and transformation of function types.
//!
//! ## Overview
//!
//! Given a callable *descriptor* type, this crate answers questions about it
//! while the program is being type checked: what does it return, which
//! parameters does it take, which calling convention does it use, can it
//! unwind, is it a member function and how is that member qualified. It can
//! also produce a new descriptor with exactly one of those attributes
//! changed.
//!
//! Nothing here has a runtime cost. Everything is an associated type or an
//! associated constant, apart from a few display helpers that format what
//! the compiler already knows.
//!
//! ## Quick Example
//!
//! ```
//! use function_traits::prelude::*;
//!
//! type Callback = extern "C-unwind" fn(i32, *const u8) -> bool;
//!
//! assert_eq!(<Callback as FunctionTraits>::ARITY, 2);
//! assert_eq!(type_name::<ArgType<Callback, 1>>(), "*const u8");
//! assert!(!<Callback as FunctionTraits>::IS_NOEXCEPT);
//!
//! // Change one attribute, keep the rest.
//! type Strict = AddNoexcept<ReplaceReturn<Callback, i32>>;
//! assert_eq!(type_name::<Strict>(), "extern \"C\" fn(i32, *const u8) -> i32");
//! ```
//!
//! ## Core Concepts
//!
//! A descriptor is one of:
//!
//! - a **free function**: a function pointer type such as
//!   `unsafe extern "C" fn(i32, ...) -> u8`;
//! - a **member function**: a [`MemberFn<Class, Sig, Quals>`](MemberFn),
//!   which adds a class and `const`/`volatile`/reference qualifiers to a
//!   signature;
//! - a **functor**: a type with one call operator, described by
//!   [`Functor<T>`](functor::Functor) or, for closures,
//!   [`Closure<F, Args, K>`](functor::Closure), where `K` picks `Fn`,
//!   `FnMut` or `FnOnce`;
//! - any of the first two behind exactly one `&`, `&mut`, `*const` or
//!   `*mut`.
//!
//! [`FunctionTraits`] decomposes a descriptor. The aliases in [`mutators`]
//! rebuild one with a single attribute changed, keeping the reference or
//! pointer around it. [`classify!`] tells descriptors apart from every
//! other type without failing to compile.
//!
//! Function attributes map onto Rust as follows:
//!
//! | attribute          | Rust spelling                                    |
//! |--------------------|--------------------------------------------------|
//! | calling convention | `extern "ABI"`                                   |
//! | noexcept           | the non-unwinding ABI: `"C"` rather than `"C-unwind"` |
//! | variadic           | a trailing `...` (C ABIs only)                   |
//! | unsafe             | `unsafe`                                         |
//! | cv / ref qualifiers | [`Quals<CONST, VOLATILE, Ref>`](markers::Quals) |
//!
//! Conventions the target cannot express are folded onto
//! [`CallingConvention::DEFAULT`]; see
//! [`CallingConvention::is_demoted_to_default`].
//!
//! For the macro-generated building blocks, see the
//! [`function-traits-internals`] crate.
//!
//! [`function-traits-internals`]: function_traits_internals
//!
//! ## Ecosystem
//!
//! - **`function-traits-tracing`** - Emits the decomposition of a
//!   descriptor as a structured `tracing` event.
//!
//! ## Features
//!
//! - `std`: caches the type-name calibration in a `std::sync::OnceLock`
//!   instead of a spin lock.
//! - `vectorcall`: enables `extern "vectorcall"` descriptors. Requires a
//!   nightly compiler.
//!
//! ## Limitations
//!
//! Function pointers with higher-ranked lifetimes, such as `fn(&str)`, are
//! not descriptors: spell the lifetime out (`fn(&'static str)`) instead.
//! Descriptors take at most 12 parameters.

#[macro_use]
mod macros;

pub mod bundle;
pub mod classify;
pub mod convention;
pub mod display;
pub mod functor;
pub mod iterate;
pub mod markers;
pub mod matrix;
pub mod member;
pub mod mutators;
pub mod prelude;
pub mod type_name;
pub mod wrapping;

pub use self::{
    bundle::{ArgType, ArgsOf, Canonical, CanonicalOf, ClassOf, FunctionTraits, ReturnType},
    classify::Classification,
    convention::CallingConvention,
    display::Traits,
    member::MemberFn,
};

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub mod kind {
        use core::marker::PhantomData;

        use crate::{bundle::FunctionTraits, classify::Classification};

        #[doc(hidden)]
        pub struct Wrap<T: ?Sized>(PhantomData<fn() -> *const T>);

        impl<T: ?Sized> Wrap<T> {
            #[doc(hidden)]
            #[inline(always)]
            #[must_use]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        #[doc(hidden)]
        pub trait SupportedKind {
            #[doc(hidden)]
            fn classification(&self) -> Classification;
        }

        impl<T: FunctionTraits> SupportedKind for &Wrap<T> {
            #[inline(always)]
            fn classification(&self) -> Classification {
                T::CLASSIFICATION
            }
        }

        #[doc(hidden)]
        pub trait UnsupportedKind {
            #[doc(hidden)]
            #[inline(always)]
            fn classification(&self) -> Classification {
                Classification::Unsupported
            }
        }

        impl<T: ?Sized> UnsupportedKind for Wrap<T> {}
    }
}
