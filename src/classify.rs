//! Classification of arbitrary types into descriptor categories.
//!
//! Every descriptor falls into exactly one [`Classification`], available as
//! [`FunctionTraits::CLASSIFICATION`]. Using that constant requires the type
//! to be a descriptor. The [`classify!`](crate::classify!) macro answers the
//! same question for *any* type and reports
//! [`Unsupported`](Classification::Unsupported) instead of failing to
//! compile.
//!
//! [`FunctionTraits::CLASSIFICATION`]: crate::FunctionTraits::CLASSIFICATION

use core::fmt;

/// The category of a type with respect to this crate.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Classification {
    /// A free function pointer, possibly behind one reference or raw pointer.
    FreeFunction,
    /// A [`MemberFn`](crate::member::MemberFn), possibly behind one
    /// reference or raw pointer.
    MemberFunctionPointer,
    /// A [`Functor`](crate::functor::Functor) or
    /// [`Closure`](crate::functor::Closure).
    Functor,
    /// Not a callable descriptor.
    Unsupported,
}

impl Classification {
    /// Whether this is [`FreeFunction`](Self::FreeFunction).
    #[must_use]
    pub const fn is_free_function(self) -> bool {
        matches!(self, Self::FreeFunction)
    }

    /// Whether this is [`MemberFunctionPointer`](Self::MemberFunctionPointer).
    #[must_use]
    pub const fn is_member_function_pointer(self) -> bool {
        matches!(self, Self::MemberFunctionPointer)
    }

    /// Whether this is [`Functor`](Self::Functor).
    #[must_use]
    pub const fn is_functor(self) -> bool {
        matches!(self, Self::Functor)
    }

    /// Whether this is anything but [`Unsupported`](Self::Unsupported).
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FreeFunction => "free function",
            Self::MemberFunctionPointer => "member function",
            Self::Functor => "functor",
            Self::Unsupported => "unsupported",
        })
    }
}
