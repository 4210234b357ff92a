//! Type-name extraction through a calibrated probe.
//!
//! [`core::any::type_name`] makes no promises about its output format. This
//! module does not assume one either: it asks for the name of
//! [`Probe<T>`], a generic type whose own name the crate controls, and
//! learns where `T`'s name sits inside that string by first probing a type
//! whose name is known ([`Calibration`]). The calibration runs once per
//! process and is cached.
//!
//! If the compiler ever renders names in a way the calibration does not
//! recognize, extraction fails with a [`NameFormatError`] instead of
//! returning a wrong substring. [`self_test`] checks this up front.
//!
//! # Examples
//!
//! ```
//! use function_traits::type_name::probe;
//!
//! probe::self_test()?;
//! assert_eq!(probe::extract::<Option<u8>>()?, "core::option::Option<u8>");
//! assert_eq!(probe::extract::<fn(i32) -> u8>()?, "fn(i32) -> u8");
//! # Ok::<(), probe::NameFormatError>(())
//! ```

use core::{any, fmt, marker::PhantomData};

use super::calibration_lock::CalibrationLock;

/// The generic type whose name carries the name of `T`.
pub struct Probe<T: ?Sized>(PhantomData<T>);

/// The type the probe is calibrated against.
pub type Calibration = f64;

/// The name of [`Calibration`], fixed by the language.
const CALIBRATION_NAME: &str = "f64";

/// Where the argument's name sits inside a probe's name.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
struct Layout {
    prefix_len: usize,
    suffix_len: usize,
}

static LAYOUT: CalibrationLock<Result<Layout, NameFormatError>> = CalibrationLock::new();

/// The error returned when a type name cannot be extracted.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum NameFormatError {
    /// The calibration probe's name has an unrecognized format.
    UnrecognizedFormat,
    /// A probe's name does not match the calibrated layout.
    LayoutMismatch,
    /// Extraction round-tripped to the wrong name during the self-test.
    SelfTestFailed,
}

impl fmt::Display for NameFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedFormat => {
                f.write_str("the compiler's type name format was not recognized")
            }
            Self::LayoutMismatch => {
                f.write_str("the type name does not match the calibrated probe layout")
            }
            Self::SelfTestFailed => f.write_str("type name extraction failed its self-test"),
        }
    }
}

impl core::error::Error for NameFormatError {}

fn calibrate() -> Result<Layout, NameFormatError> {
    let probe = any::type_name::<Probe<Calibration>>();

    let prefix_len = probe
        .rfind(CALIBRATION_NAME)
        .ok_or(NameFormatError::UnrecognizedFormat)?;
    let suffix = probe
        .get(prefix_len + CALIBRATION_NAME.len()..)
        .ok_or(NameFormatError::UnrecognizedFormat)?;

    // Generic arguments are closed by a single `>`.
    if suffix != ">" {
        return Err(NameFormatError::UnrecognizedFormat);
    }

    Ok(Layout {
        prefix_len,
        suffix_len: suffix.len(),
    })
}

/// Extracts the name of `T` from the name of [`Probe<T>`].
///
/// The result borrows from the compiler-provided `'static` string; nothing
/// is copied.
///
/// # Errors
///
/// Returns a [`NameFormatError`] if the calibration failed or the probe's
/// name does not fit the calibrated layout.
pub fn extract<T: ?Sized>() -> Result<&'static str, NameFormatError> {
    let layout = *LAYOUT.get_or_init(calibrate);
    let layout = layout?;

    let calibration = any::type_name::<Probe<Calibration>>();
    let full = any::type_name::<Probe<T>>();

    let prefix = calibration
        .get(..layout.prefix_len)
        .ok_or(NameFormatError::LayoutMismatch)?;
    let suffix = calibration
        .get(calibration.len() - layout.suffix_len..)
        .ok_or(NameFormatError::LayoutMismatch)?;
    if !full.starts_with(prefix) || !full.ends_with(suffix) {
        return Err(NameFormatError::LayoutMismatch);
    }

    // The name's length is the probe's length minus the fixed overhead.
    let overhead = layout.prefix_len + layout.suffix_len;
    let len = full
        .len()
        .checked_sub(overhead)
        .ok_or(NameFormatError::LayoutMismatch)?;

    full.get(layout.prefix_len..layout.prefix_len + len)
        .ok_or(NameFormatError::LayoutMismatch)
}

/// Verifies that extraction works with the current compiler.
///
/// Recovers the calibration type's own name, and the name of a probe
/// nested in a probe, and compares both against the known answers.
///
/// # Errors
///
/// Returns the first [`NameFormatError`] encountered.
pub fn self_test() -> Result<(), NameFormatError> {
    if extract::<Calibration>()? != CALIBRATION_NAME {
        return Err(NameFormatError::SelfTestFailed);
    }

    if extract::<Probe<Calibration>>()? != any::type_name::<Probe<Calibration>>() {
        return Err(NameFormatError::SelfTestFailed);
    }

    Ok(())
}
