/// Classifies any type as a free function, member function pointer, functor
/// or unsupported type.
///
/// Unlike [`FunctionTraits::CLASSIFICATION`], which only exists for callable
/// descriptors, this macro accepts every type and evaluates to a
/// [`Classification`]. It dispatches on whether the type implements
/// [`FunctionTraits`], so it only works on concrete types, not on generic
/// parameters.
///
/// [`FunctionTraits`]: crate::FunctionTraits
/// [`FunctionTraits::CLASSIFICATION`]: crate::FunctionTraits::CLASSIFICATION
/// [`Classification`]: crate::classify::Classification
///
/// # Examples
///
/// ```
/// use function_traits::{classify, prelude::*};
///
/// struct Widget;
///
/// assert!(classify!(extern "C" fn(i32) -> i32).is_free_function());
/// assert!(classify!(&'static MemberFn<Widget, fn()>).is_member_function_pointer());
/// assert!(classify!(Closure<fn(u8), (u8,)>).is_functor());
/// assert!(!classify!(Widget).is_supported());
/// assert!(!classify!(Vec<fn()>).is_supported());
/// ```
#[macro_export]
macro_rules! classify {
    ($ty:ty $(,)?) => {{
        use $crate::__private::kind::{SupportedKind as _, UnsupportedKind as _};
        (&&$crate::__private::kind::Wrap::<$ty>::new()).classification()
    }};
}
