//! Indexed operations on parameter tuples.
//!
//! The index is a const generic, so an out-of-range index is a missing impl
//! and therefore a compile error rather than a runtime condition:
//!
//! ```compile_fail
//! use function_traits_internals::TypeAt;
//!
//! let _: Option<<(u8, u16) as TypeAt<2>>::Output> = None;
//! ```
//!
//! The same holds for replacement:
//!
//! ```compile_fail
//! use function_traits_internals::ReplaceAt;
//!
//! let _: Option<<(u8, u16) as ReplaceAt<2, char>>::Output> = None;
//! ```
//!
//! while an index in range is accepted:
//!
//! ```
//! use function_traits_internals::{ReplaceAt, TypeAt};
//!
//! let _: Option<<(u8, u16) as TypeAt<1>>::Output> = None;
//! let _: Option<<(u8, u16) as ReplaceAt<1, char>>::Output> = None;
//! ```

/// The element type at position `N`.
///
/// # Examples
///
/// ```
/// use function_traits_internals::TypeAt;
///
/// let x: <(u8, &str, f64) as TypeAt<1>>::Output = "second";
/// assert_eq!(x, "second");
/// ```
#[diagnostic::on_unimplemented(
    message = "index {N} is out of bounds for the parameter list `{Self}`",
    label = "no parameter at index {N}",
    note = "parameter indices are zero-based"
)]
pub trait TypeAt<const N: usize> {
    /// The element at position `N`.
    type Output;
}

/// The tuple with the element at position `N` replaced by `New`.
///
/// # Examples
///
/// ```
/// use function_traits_internals::ReplaceAt;
///
/// let x: <(u8, u16, u32) as ReplaceAt<1, char>>::Output = (1, 'x', 3);
/// assert_eq!(x.1, 'x');
/// ```
#[diagnostic::on_unimplemented(
    message = "index {N} is out of bounds for the parameter list `{Self}`",
    label = "no parameter at index {N} to replace",
    note = "parameter indices are zero-based"
)]
pub trait ReplaceAt<const N: usize, New> {
    /// The resulting tuple.
    type Output;
}

macro_rules! impl_indexed {
    ([] $($A:ident)*) => {
        impl_indexed!(@walk [] [$($A)*] [0 1 2 3 4 5 6 7 8 9 10 11]);
    };
    (@walk [$($pre:ident)*] [] [$($index:tt)*]) => {};
    (@walk [$($pre:ident)*] [$cur:ident $($post:ident)*] [$index:tt $($indices:tt)*]) => {
        impl<$($pre,)* $cur, $($post,)*> TypeAt<$index> for ($($pre,)* $cur, $($post,)*) {
            type Output = $cur;
        }

        impl<$($pre,)* $cur, $($post,)* New> ReplaceAt<$index, New> for ($($pre,)* $cur, $($post,)*) {
            type Output = ($($pre,)* New, $($post,)*);
        }

        impl_indexed!(@walk [$($pre)* $cur] [$($post)*] [$($indices)*]);
    };
}

for_each_arity!(impl_indexed;);

/// Visitor invoked once per index by [`for_each_index`] and
/// [`ArgList::visit_indices`](crate::ArgList::visit_indices).
///
/// The index is a const generic, so it can be used where a constant is
/// required, such as the index of a [`TypeAt`] projection. Every closure
/// taking a `usize` and returning `bool` is an `IndexVisitor`.
///
/// # Examples
///
/// ```
/// use function_traits_internals::{IndexVisitor, for_each_index};
///
/// struct Seen<'a>(&'a mut Vec<usize>);
///
/// impl IndexVisitor for Seen<'_> {
///     fn visit<const INDEX: usize>(&mut self) -> bool {
///         self.0.push(INDEX);
///         true
///     }
/// }
///
/// let mut seen = Vec::new();
/// assert!(for_each_index::<3>(Seen(&mut seen)));
/// assert_eq!(seen, [0, 1, 2]);
/// ```
pub trait IndexVisitor {
    /// Called for the index `INDEX`. Returning `false` stops the walk.
    fn visit<const INDEX: usize>(&mut self) -> bool;
}

impl<F: FnMut(usize) -> bool + ?Sized> IndexVisitor for F {
    #[inline]
    fn visit<const INDEX: usize>(&mut self) -> bool {
        self(INDEX)
    }
}

/// The index range `0..N`, as a type.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Indices<const N: usize>;

/// An index range with a generated, unrolled walk.
///
/// Implemented for [`Indices<N>`] with `N` from 0 through
/// [`MAX_ARITY`](crate::MAX_ARITY).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported index range",
    label = "index ranges are generated up to the largest parameter count",
    note = "use a length of at most 12"
)]
pub trait IndexList {
    /// Visits every index in ascending order, stopping at the first `false`.
    ///
    /// Returns `true` when every index was visited.
    fn visit_all<V: IndexVisitor + ?Sized>(visitor: &mut V) -> bool;
}

macro_rules! impl_index_list {
    ([] $($A:ident)*) => {
        impl IndexList for Indices<{ <[&str]>::len(&[$(stringify!($A)),*]) }> {
            #[inline]
            #[allow(unused_variables)]
            fn visit_all<V: IndexVisitor + ?Sized>(visitor: &mut V) -> bool {
                index_chain!(visitor; [$($A)*] [0 1 2 3 4 5 6 7 8 9 10 11])
            }
        }
    };
}

for_each_arity!(impl_index_list;);

/// Calls `visitor` with every index in `0..N`, in order, until it returns
/// `false`.
///
/// The calls are unrolled at compile time and each index reaches the visitor
/// as a const generic. Returns `true` when every index was visited. `N == 0`
/// visits nothing and returns `true`.
///
/// # Examples
///
/// ```
/// use function_traits_internals::for_each_index;
///
/// let mut seen = Vec::new();
/// let finished = for_each_index::<5>(|i: usize| {
///     seen.push(i);
///     i < 2
/// });
/// assert!(!finished);
/// assert_eq!(seen, [0, 1, 2]);
/// ```
#[inline]
pub fn for_each_index<const N: usize>(mut visitor: impl IndexVisitor) -> bool
where
    Indices<N>: IndexList,
{
    <Indices<N> as IndexList>::visit_all(&mut visitor)
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_type_eq_all;

    use super::*;

    assert_type_eq_all!(<(i32,) as TypeAt<0>>::Output, i32);
    assert_type_eq_all!(<(i32, f32, f64) as TypeAt<2>>::Output, f64);
    assert_type_eq_all!(
        <(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, char) as TypeAt<11>>::Output,
        char
    );

    assert_type_eq_all!(<(i32, f32, f64) as ReplaceAt<1, u8>>::Output, (i32, u8, f64));
    assert_type_eq_all!(<(i32,) as ReplaceAt<0, ()>>::Output, ((),));
    assert_type_eq_all!(<(i32, f32) as ReplaceAt<1, f32>>::Output, (i32, f32));

    #[test]
    fn for_each_index_zero_is_vacuous() {
        let mut calls = 0;
        assert!(for_each_index::<0>(|_: usize| {
            calls += 1;
            false
        }));
        assert_eq!(calls, 0);
    }

    /// Stores a value computed in a const block for every visited index.
    struct Doubled([usize; 4]);

    impl IndexVisitor for Doubled {
        fn visit<const INDEX: usize>(&mut self) -> bool {
            self.0[INDEX] = const { INDEX * 2 };
            true
        }
    }

    #[test]
    fn index_reaches_the_visitor_as_a_constant() {
        let mut doubled = Doubled([usize::MAX; 4]);
        assert!(<Indices<3> as IndexList>::visit_all(&mut doubled));
        assert_eq!(doubled.0, [0, 2, 4, usize::MAX]);
    }

    #[test]
    fn largest_range() {
        let mut last = None;
        assert!(for_each_index::<12>(|i: usize| {
            last = Some(i);
            true
        }));
        assert_eq!(last, Some(11));
    }

    #[test]
    fn for_each_index_visits_all() {
        let mut sum = 0;
        assert!(for_each_index::<4>(|i: usize| {
            sum += i;
            true
        }));
        assert_eq!(sum, 6);
    }
}
