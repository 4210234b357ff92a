/// Invokes a callback macro once per supported arity.
///
/// The callback is invoked as `callback!([extra tokens] A0 A1 .. An)` for
/// every `n` from `0` through [`MAX_ARITY`](crate::MAX_ARITY), in ascending
/// order. The extra tokens are forwarded verbatim, which lets the caller pass
/// along whatever describes the impl being generated (for example an ABI
/// string and its marker types).
///
/// # Examples
///
/// ```
/// use function_traits_internals::for_each_arity;
///
/// trait Arity {
///     const ARITY: usize;
/// }
///
/// macro_rules! impl_arity {
///     ([$trait_:ident] $($A:ident)*) => {
///         impl<$($A,)*> $trait_ for ($($A,)*) {
///             const ARITY: usize = <[&str]>::len(&[$(stringify!($A)),*]);
///         }
///     };
/// }
///
/// for_each_arity!(impl_arity; Arity);
///
/// assert_eq!(<(u8, u16, u32) as Arity>::ARITY, 3);
/// assert_eq!(<() as Arity>::ARITY, 0);
/// ```
#[macro_export]
macro_rules! for_each_arity {
    ($callback:ident; $($extra:tt)*) => {
        $crate::for_each_arity!(
            @step $callback;
            [$($extra)*];
            [];
            [A0 A1 A2 A3 A4 A5 A6 A7 A8 A9 A10 A11]
        );
    };
    (@step $callback:ident; [$($extra:tt)*]; [$($done:ident)*]; []) => {
        $callback!([$($extra)*] $($done)*);
    };
    (@step $callback:ident; [$($extra:tt)*]; [$($done:ident)*]; [$next:ident $($rest:ident)*]) => {
        $callback!([$($extra)*] $($done)*);
        $crate::for_each_arity!(@step $callback; [$($extra)*]; [$($done)* $next]; [$($rest)*]);
    };
}

/// Pairs every type parameter of a tuple with its index literal, emitting
/// a short-circuiting chain of `visitor.visit::<I, T>()` calls.
macro_rules! visit_chain {
    ($visitor:ident; [] [$($index:tt)*]) => {
        true
    };
    ($visitor:ident; [$A:ident $($rest:ident)*] [$index:tt $($indices:tt)*]) => {
        $visitor.visit::<$index, $A>() && visit_chain!($visitor; [$($rest)*] [$($indices)*])
    };
}

/// Emits a short-circuiting chain of `visitor.visit::<I>()` calls, one per
/// type parameter, pairing each with its index literal.
macro_rules! index_chain {
    ($visitor:ident; [] [$($index:tt)*]) => {
        true
    };
    ($visitor:ident; [$A:ident $($rest:ident)*] [$index:tt $($indices:tt)*]) => {
        $visitor.visit::<$index>() && index_chain!($visitor; [$($rest)*] [$($indices)*])
    };
}
