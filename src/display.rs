//! A value-level view of a descriptor.
//!
//! [`Traits<F>`] is a zero-sized value carrying the descriptor `F` in its
//! type. It exposes every constant of [`FunctionTraits`] as a `const fn`, so
//! code holding a value (such as the result of
//! [`of_closure`](crate::functor::of_closure)) does not need to spell out
//! `F`, and it implements [`Display`](fmt::Display) as a full report.
//!
//! # Examples
//!
//! ```
//! use function_traits::prelude::*;
//!
//! let traits = Traits::<unsafe extern "C" fn(i32, ...) -> u8>::new();
//! assert_eq!(traits.signature().to_string(), "unsafe extern \"C\" fn(i32, ...) -> u8");
//!
//! let report = traits.to_string();
//! assert!(report.contains(" 2. calling convention: cdecl"));
//! assert!(report.contains("    [0] i32"));
//! ```

use core::{fmt, marker::PhantomData};

use function_traits_internals::ArgVisitor;

use crate::{
    bundle::FunctionTraits,
    classify::Classification,
    convention::CallingConvention,
    iterate::for_each_parameter,
    markers::RefQualifier,
    type_name::{ShortTypeName, type_name},
    wrapping::Wrapping,
};

/// The traits of the descriptor `F`, as a value.
pub struct Traits<F>(PhantomData<fn() -> F>);

impl<F> Traits<F> {
    /// Creates the view.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<F> Clone for Traits<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Traits<F> {}

impl<F> Default for Traits<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for Traits<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Traits<{}>", type_name::<F>())
    }
}

impl<F: FunctionTraits> Traits<F> {
    /// See [`FunctionTraits::ARITY`].
    #[must_use]
    pub const fn arity(self) -> usize {
        F::ARITY
    }

    /// See [`FunctionTraits::IS_FUNCTOR`].
    #[must_use]
    pub const fn is_functor(self) -> bool {
        F::IS_FUNCTOR
    }

    /// See [`FunctionTraits::IS_MEMBER_FUNCTION`].
    #[must_use]
    pub const fn is_member_function(self) -> bool {
        F::IS_MEMBER_FUNCTION
    }

    /// See [`FunctionTraits::IS_FREE_FUNCTION`].
    #[must_use]
    pub const fn is_free_function(self) -> bool {
        F::IS_FREE_FUNCTION
    }

    /// See [`FunctionTraits::IS_CONST`].
    #[must_use]
    pub const fn is_const(self) -> bool {
        F::IS_CONST
    }

    /// See [`FunctionTraits::IS_VOLATILE`].
    #[must_use]
    pub const fn is_volatile(self) -> bool {
        F::IS_VOLATILE
    }

    /// See [`FunctionTraits::IS_NOEXCEPT`].
    #[must_use]
    pub const fn is_noexcept(self) -> bool {
        F::IS_NOEXCEPT
    }

    /// See [`FunctionTraits::IS_UNSAFE`].
    #[must_use]
    pub const fn is_unsafe(self) -> bool {
        F::IS_UNSAFE
    }

    /// See [`FunctionTraits::IS_VARIADIC`].
    #[must_use]
    pub const fn is_variadic(self) -> bool {
        F::IS_VARIADIC
    }

    /// See [`FunctionTraits::IS_EMPTY_PARAMETER_LIST`].
    #[must_use]
    pub const fn is_empty_parameter_list(self) -> bool {
        F::IS_EMPTY_PARAMETER_LIST
    }

    /// See [`FunctionTraits::CALLING_CONVENTION`].
    #[must_use]
    pub const fn calling_convention(self) -> CallingConvention {
        F::CALLING_CONVENTION
    }

    /// See [`FunctionTraits::REF_QUALIFIER`].
    #[must_use]
    pub const fn ref_qualifier(self) -> RefQualifier {
        F::REF_QUALIFIER
    }

    /// See [`FunctionTraits::WRAPPING`].
    #[must_use]
    pub const fn wrapping(self) -> Wrapping {
        F::WRAPPING
    }

    /// See [`FunctionTraits::CLASSIFICATION`].
    #[must_use]
    pub const fn classification(self) -> Classification {
        F::CLASSIFICATION
    }

    /// The name of the descriptor itself.
    #[must_use]
    pub fn name(self) -> &'static str {
        type_name::<F>()
    }

    /// The name of the return type.
    #[must_use]
    pub fn return_type_name(self) -> &'static str {
        type_name::<F::Return>()
    }

    /// The name of the class, `NoClass` for free functions.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        type_name::<F::Class>()
    }

    /// A compact signature, such as `unsafe extern "C" fn(i32, ...) -> u8`.
    ///
    /// Member functions are written as a free function taking the receiver
    /// first, followed by their qualifiers: `fn(&Widget, u8) const &`. Type
    /// names are shortened with [`ShortTypeName`].
    #[must_use]
    pub const fn signature(self) -> SignatureDisplay<F> {
        SignatureDisplay(PhantomData)
    }
}

impl<F: FunctionTraits> fmt::Display for Traits<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let traits = *self;

        writeln!(f, "function traits of `{}`", ShortTypeName::new(traits.name()))?;
        writeln!(f, " 1. classification: {}", traits.classification())?;
        writeln!(f, " 2. calling convention: {}", traits.calling_convention())?;
        writeln!(f, " 3. return type: {}", ShortTypeName::new(traits.return_type_name()))?;
        writeln!(f, " 4. parameters: {}", traits.arity())?;

        let mut lines = ParameterLines {
            f: &mut *f,
            result: Ok(()),
        };
        for_each_parameter::<F, _>(&mut lines);
        lines.result?;

        writeln!(f, " 5. variadic: {}", traits.is_variadic())?;
        write!(f, " 6. qualifiers:")?;
        if traits.is_const() {
            write!(f, " const")?;
        }
        if traits.is_volatile() {
            write!(f, " volatile")?;
        }
        if traits.ref_qualifier() != RefQualifier::None {
            write!(f, " {}", traits.ref_qualifier())?;
        }
        if !traits.is_const() && !traits.is_volatile() && traits.ref_qualifier() == RefQualifier::None {
            write!(f, " none")?;
        }
        writeln!(f)?;
        writeln!(f, " 7. noexcept: {}", traits.is_noexcept())?;
        writeln!(f, " 8. unsafe: {}", traits.is_unsafe())?;
        writeln!(f, " 9. class: {}", ShortTypeName::new(traits.class_name()))?;
        write!(f, "10. wrapping: {}", traits.wrapping())
    }
}

struct ParameterLines<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
}

impl ArgVisitor for ParameterLines<'_, '_> {
    fn visit<const INDEX: usize, T>(&mut self) -> bool {
        self.result = writeln!(self.f, "    [{INDEX}] {}", ShortTypeName::new(type_name::<T>()));
        self.result.is_ok()
    }
}

/// The compact signature of `F`, returned by [`Traits::signature`].
pub struct SignatureDisplay<F>(PhantomData<fn() -> F>);

impl<F> Clone for SignatureDisplay<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for SignatureDisplay<F> {}

impl<F> fmt::Debug for SignatureDisplay<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature<{}>", type_name::<F>())
    }
}

impl<F: FunctionTraits> fmt::Display for SignatureDisplay<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if F::IS_UNSAFE {
            f.write_str("unsafe ")?;
        }

        match F::CALLING_CONVENTION.abi_str() {
            Some("Rust") => {}
            Some(abi) if F::IS_NOEXCEPT => write!(f, "extern \"{abi}\" ")?,
            Some(abi) => write!(f, "extern \"{abi}-unwind\" ")?,
            None => write!(f, "extern \"{}\" ", F::CALLING_CONVENTION)?,
        }

        f.write_str("fn(")?;

        let mut params = SignatureParams {
            f: &mut *f,
            first: true,
            result: Ok(()),
        };
        if F::IS_MEMBER_FUNCTION {
            params.push(format_args!(
                "{}{}",
                if F::IS_CONST { "&" } else { "&mut " },
                ShortTypeName::new(type_name::<F::Class>())
            ));
        }
        for_each_parameter::<F, _>(&mut params);
        if F::IS_VARIADIC {
            params.push(format_args!("..."));
        }
        params.result?;

        f.write_str(")")?;

        let ret = type_name::<F::Return>();
        if ret != "()" {
            write!(f, " -> {}", ShortTypeName::new(ret))?;
        }

        if F::IS_CONST {
            f.write_str(" const")?;
        }
        if F::IS_VOLATILE {
            f.write_str(" volatile")?;
        }
        if F::REF_QUALIFIER != RefQualifier::None {
            write!(f, " {}", F::REF_QUALIFIER.as_str())?;
        }

        Ok(())
    }
}

struct SignatureParams<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
    result: fmt::Result,
}

impl SignatureParams<'_, '_> {
    fn push(&mut self, item: fmt::Arguments<'_>) -> bool {
        if self.result.is_ok() {
            let separator = if self.first { "" } else { ", " };
            self.first = false;
            self.result = write!(self.f, "{separator}{item}");
        }
        self.result.is_ok()
    }
}

impl ArgVisitor for SignatureParams<'_, '_> {
    fn visit<const INDEX: usize, T>(&mut self) -> bool {
        self.push(format_args!("{}", ShortTypeName::new(type_name::<T>())))
    }
}
