//! The runtime view of calling conventions and the demotion model.
//!
//! Compilers targeting anything but 32-bit x86 silently rewrite most C-family
//! calling conventions to the platform default. Rust does not rewrite: it
//! rejects an unsupported ABI string outright. This crate therefore decides
//! per compilation target which conventions exist as distinct function
//! types, and [`CallingConvention::is_demoted_to_default`] reports that
//! decision. A demoted convention has no function pointer impls, and the
//! mutators substitute [`Cdecl`](crate::markers::Cdecl) for it.

use core::{fmt, str::FromStr};

/// A calling convention.
///
/// Each variant has a marker type of the same name in
/// [`markers`](crate::markers).
///
/// # Examples
///
/// ```
/// use function_traits::prelude::*;
///
/// let convention: CallingConvention = "stdcall".parse()?;
/// assert_eq!(convention, CallingConvention::Stdcall);
/// assert_eq!(convention.to_string(), "stdcall");
///
/// // Only 32-bit x86 keeps stdcall distinct.
/// assert_eq!(
///     convention.is_demoted_to_default(true),
///     !cfg!(target_arch = "x86")
/// );
/// # Ok::<(), function_traits::convention::ParseCallingConventionError>(())
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum CallingConvention {
    /// The Rust ABI.
    Rust,
    /// The C ABI (`cdecl`).
    Cdecl,
    /// `stdcall`.
    Stdcall,
    /// `fastcall`.
    Fastcall,
    /// `vectorcall`.
    Vectorcall,
    /// `thiscall`.
    Thiscall,
    /// `regcall`.
    Regcall,
}

impl CallingConvention {
    /// The convention C-family functions get when none is specified.
    pub const DEFAULT: Self = Self::Cdecl;

    /// The only convention a variadic function can have.
    pub const VARIADIC: Self = Self::Cdecl;

    /// Every convention, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Rust,
        Self::Cdecl,
        Self::Stdcall,
        Self::Fastcall,
        Self::Vectorcall,
        Self::Thiscall,
        Self::Regcall,
    ];

    /// The conventional lowercase name (`"cdecl"`, `"stdcall"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rust => "Rust",
            Self::Cdecl => "cdecl",
            Self::Stdcall => "stdcall",
            Self::Fastcall => "fastcall",
            Self::Vectorcall => "vectorcall",
            Self::Thiscall => "thiscall",
            Self::Regcall => "regcall",
        }
    }

    /// The ABI string used in `extern "..."` for the non-unwinding form, or
    /// [`None`] when Rust has no ABI string for this convention.
    #[must_use]
    pub const fn abi_str(self) -> Option<&'static str> {
        match self {
            Self::Rust => Some("Rust"),
            Self::Cdecl => Some("C"),
            Self::Stdcall => Some("stdcall"),
            Self::Fastcall => Some("fastcall"),
            Self::Vectorcall => Some("vectorcall"),
            Self::Thiscall => Some("thiscall"),
            Self::Regcall => None,
        }
    }

    /// Whether the current compilation target rewrites this convention to
    /// [`DEFAULT`](Self::DEFAULT).
    ///
    /// `is_free` selects between free functions and member functions. The
    /// two only differ for [`Thiscall`](Self::Thiscall), which is never a
    /// distinct convention for a free function.
    ///
    /// | convention   | distinct when                                        |
    /// |--------------|------------------------------------------------------|
    /// | `Rust`       | always                                               |
    /// | `Cdecl`      | always                                               |
    /// | `Stdcall`    | `target_arch = "x86"`                                |
    /// | `Fastcall`   | `target_arch = "x86"`                                |
    /// | `Thiscall`   | `target_arch = "x86"`, member functions only         |
    /// | `Vectorcall` | feature `vectorcall`, `target_arch` x86 or x86_64    |
    /// | `Regcall`    | never                                                |
    #[must_use]
    pub const fn is_demoted_to_default(self, is_free: bool) -> bool {
        const X86: bool = cfg!(target_arch = "x86");
        const VECTORCALL: bool = cfg!(all(
            feature = "vectorcall",
            any(target_arch = "x86", target_arch = "x86_64")
        ));

        match self {
            Self::Rust | Self::Cdecl => false,
            Self::Stdcall | Self::Fastcall => !X86,
            Self::Thiscall => is_free || !X86,
            Self::Vectorcall => !VECTORCALL,
            Self::Regcall => true,
        }
    }

    /// The convention a function declared with `self` actually ends up with
    /// on the current target.
    #[must_use]
    pub const fn effective(self, is_free: bool) -> Self {
        if self.is_demoted_to_default(is_free) {
            Self::DEFAULT
        } else {
            self
        }
    }
}

impl fmt::Display for CallingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when parsing a [`CallingConvention`] fails.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct ParseCallingConventionError {
    _private: (),
}

impl fmt::Display for ParseCallingConventionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "unknown calling convention, expected one of: Rust, C, cdecl, stdcall, fastcall, \
             vectorcall, thiscall, regcall",
        )
    }
}

impl core::error::Error for ParseCallingConventionError {}

impl FromStr for CallingConvention {
    type Err = ParseCallingConventionError;

    /// Parses a convention name, case-insensitively.
    ///
    /// Both `"C"` and `"cdecl"` name [`Cdecl`](Self::Cdecl). A leading `__`
    /// (as in `__stdcall`) is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("__").unwrap_or(s);

        if s.eq_ignore_ascii_case("C") || s.eq_ignore_ascii_case("cdecl") {
            return Ok(Self::Cdecl);
        }

        Self::ALL
            .into_iter()
            .find(|convention| convention.name().eq_ignore_ascii_case(s))
            .ok_or(ParseCallingConventionError { _private: () })
    }
}
