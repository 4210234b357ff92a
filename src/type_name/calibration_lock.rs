#[cfg(feature = "std")]
use std::sync::OnceLock as Once;

#[cfg(not(feature = "std"))]
use spin::Once;

/// A value computed at most once per process.
///
/// Backed by [`std::sync::OnceLock`] with the `std` feature and by
/// [`spin::Once`] otherwise.
#[repr(transparent)]
pub(crate) struct CalibrationLock<T: 'static + Send + Sync>(Once<T>);

impl<T: 'static + Send + Sync> CalibrationLock<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(Once::new())
    }

    /// Returns the value, running `init` first if no thread has yet.
    #[inline]
    pub(crate) fn get_or_init(&'static self, init: impl FnOnce() -> T) -> &'static T {
        #[cfg(feature = "std")]
        let value = self.0.get_or_init(init);

        #[cfg(not(feature = "std"))]
        let value = self.0.call_once(init);

        value
    }
}
