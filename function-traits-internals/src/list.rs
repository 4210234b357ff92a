//! Whole-list operations on parameter tuples.
//!
//! A parameter list is a tuple `(A0, .., An)`. [`ArgList`] exposes its length,
//! lets a new head be prepended (used to turn a member function's receiver
//! into an explicit first parameter), and walks its elements with a
//! caller-supplied [`ArgVisitor`].

use crate::index::IndexVisitor;

/// Visitor invoked once per element of an [`ArgList`].
///
/// The element's position is passed as the const generic `INDEX` and its
/// type as `T`, so the visitor can compute anything that is expressible
/// from the type alone (its name, its size, whether it matches another type).
///
/// Returning `false` stops the walk; the remaining elements are not visited.
///
/// # Examples
///
/// ```
/// use core::mem::size_of;
/// use function_traits_internals::{ArgList, ArgVisitor};
///
/// struct Sizes(Vec<(usize, usize)>);
///
/// impl ArgVisitor for Sizes {
///     fn visit<const INDEX: usize, T>(&mut self) -> bool {
///         self.0.push((INDEX, size_of::<T>()));
///         true
///     }
/// }
///
/// let mut sizes = Sizes(Vec::new());
/// assert!(<(u8, u64) as ArgList>::visit_all(&mut sizes));
/// assert_eq!(sizes.0, [(0, 1), (1, 8)]);
/// ```
pub trait ArgVisitor {
    /// Called for the element at position `INDEX`, whose type is `T`.
    fn visit<const INDEX: usize, T>(&mut self) -> bool;
}

/// The result of growing a list past [`MAX_ARITY`](crate::MAX_ARITY).
///
/// Uninhabited and deliberately not an [`ArgList`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum ArityOverflow {}

/// A tuple of parameter types.
///
/// Implemented for tuples of arity 0 through [`MAX_ARITY`](crate::MAX_ARITY).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported parameter list",
    label = "expected a tuple of at most 12 types",
    note = "parameter lists are written as tuples: `()`, `(A,)`, `(A, B)`, .."
)]
pub trait ArgList {
    /// The number of elements.
    const LEN: usize;

    /// This list with `H` inserted at position 0.
    ///
    /// For a list that is already [`MAX_ARITY`](crate::MAX_ARITY) long the
    /// projection resolves to [`ArityOverflow`], which is not an [`ArgList`],
    /// so anything built from it fails to compile.
    type Prepend<H>;

    /// Whether [`ArgList::Prepend`] produces a real list.
    const CAN_PREPEND: bool = Self::LEN < crate::MAX_ARITY;

    /// Visits every element in order, stopping at the first `false`.
    ///
    /// Returns `true` when every element was visited.
    fn visit_all<V: ArgVisitor + ?Sized>(visitor: &mut V) -> bool;

    /// Visits every index `0..LEN` in order, stopping at the first `false`.
    ///
    /// Returns `true` when every index was visited.
    fn visit_indices<V: IndexVisitor + ?Sized>(visitor: &mut V) -> bool;
}

macro_rules! impl_arg_list {
    ([] $($A:ident)*) => {
        impl<$($A,)*> ArgList for ($($A,)*) {
            const LEN: usize = <[&str]>::len(&[$(stringify!($A)),*]);

            type Prepend<H> = impl_arg_list!(@prepend H; $($A)*);

            #[inline]
            #[allow(unused_variables)]
            fn visit_all<V: ArgVisitor + ?Sized>(visitor: &mut V) -> bool {
                visit_chain!(visitor; [$($A)*] [0 1 2 3 4 5 6 7 8 9 10 11])
            }

            #[inline]
            #[allow(unused_variables)]
            fn visit_indices<V: IndexVisitor + ?Sized>(visitor: &mut V) -> bool {
                index_chain!(visitor; [$($A)*] [0 1 2 3 4 5 6 7 8 9 10 11])
            }
        }
    };
    (@prepend $H:ident; A0 A1 A2 A3 A4 A5 A6 A7 A8 A9 A10 A11) => { ArityOverflow };
    (@prepend $H:ident; $($A:ident)*) => { ($H, $($A,)*) };
}

for_each_arity!(impl_arg_list;);
