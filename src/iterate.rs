//! Iteration over parameter indices and parameter types.
//!
//! Parameter types cannot be stored in an array, so iterating over them
//! means calling a generic visitor once per parameter. [`for_each_parameter`]
//! does that with an [`ArgVisitor`], which receives each parameter's index
//! as a const generic and its type as a type parameter.
//!
//! [`for_each_index`] and [`for_each_parameter_index`] walk positions only.
//! They hand each index to an [`IndexVisitor`] as a const generic; any
//! `FnMut(usize) -> bool` closure is one.

pub use function_traits_internals::{ArgVisitor, IndexVisitor, for_each_index};
use function_traits_internals::ArgList;

use crate::bundle::FunctionTraits;

/// Calls `visitor.visit::<I, T>()` for every parameter of `F`, in order,
/// until the visitor returns `false`.
///
/// Returns `true` when every parameter was visited. A function without
/// parameters returns `true` without calling the visitor. The variadic
/// marker is not a parameter and is never visited.
///
/// # Examples
///
/// ```
/// use function_traits::prelude::*;
///
/// struct Names(Vec<String>);
///
/// impl ArgVisitor for Names {
///     fn visit<const INDEX: usize, T>(&mut self) -> bool {
///         self.0.push(format!("{INDEX}: {}", type_name::<T>()));
///         true
///     }
/// }
///
/// let mut names = Names(Vec::new());
/// assert!(for_each_parameter::<unsafe extern "C" fn(i32, *const u8, ...), _>(&mut names));
/// assert_eq!(names.0, ["0: i32", "1: *const u8"]);
/// ```
#[inline]
pub fn for_each_parameter<F, V>(visitor: &mut V) -> bool
where
    F: FunctionTraits,
    V: ArgVisitor + ?Sized,
{
    <F::Args as ArgList>::visit_all(visitor)
}

/// Calls `visitor` with the index of every parameter of `F`, in order,
/// until it returns `false`.
///
/// Equivalent to [`for_each_index`] with `N` set to `F`'s arity. The calls
/// are unrolled at compile time.
///
/// # Examples
///
/// ```
/// use function_traits::prelude::*;
///
/// let mut indices = Vec::new();
/// for_each_parameter_index::<fn(u8, u16, u32)>(|i: usize| {
///     indices.push(i);
///     true
/// });
/// assert_eq!(indices, [0, 1, 2]);
/// ```
#[inline]
pub fn for_each_parameter_index<F: FunctionTraits>(mut visitor: impl IndexVisitor) -> bool {
    <F::Args as ArgList>::visit_indices(&mut visitor)
}

#[cfg(test)]
mod tests {
    use core::mem::size_of;

    use super::*;
    use crate::{markers::Quals, member::MemberFn};

    /// Sums the sizes of the visited parameter types.
    struct SizeSum {
        total: usize,
        visited: usize,
        stop_at: Option<usize>,
    }

    impl ArgVisitor for SizeSum {
        fn visit<const INDEX: usize, T>(&mut self) -> bool {
            self.total += size_of::<T>();
            self.visited += 1;
            self.stop_at != Some(INDEX)
        }
    }

    fn sum<F: FunctionTraits>(stop_at: Option<usize>) -> (bool, SizeSum) {
        let mut visitor = SizeSum {
            total: 0,
            visited: 0,
            stop_at,
        };
        let finished = for_each_parameter::<F, _>(&mut visitor);
        (finished, visitor)
    }

    #[test]
    fn visits_every_parameter() {
        let (finished, visitor) = sum::<extern "C" fn(u8, u16, u32, u64)>(None);
        assert!(finished);
        assert_eq!(visitor.visited, 4);
        assert_eq!(visitor.total, 15);
    }

    #[test]
    fn empty_parameter_list_is_vacuous() {
        let (finished, visitor) = sum::<unsafe extern "C" fn(...)>(Some(0));
        assert!(finished);
        assert_eq!(visitor.visited, 0);
    }

    #[test]
    fn stops_when_the_visitor_says_so() {
        let (finished, visitor) = sum::<*const MemberFn<u8, fn(u8, u16, u32), Quals<true>>>(Some(1));
        assert!(!finished);
        assert_eq!(visitor.visited, 2);
        assert_eq!(visitor.total, 3);
    }

    #[test]
    fn index_iteration() {
        let mut last = None;
        assert!(for_each_parameter_index::<fn(u8, u8)>(|i: usize| {
            last = Some(i);
            true
        }));
        assert_eq!(last, Some(1));
        assert!(for_each_index::<0>(|_: usize| false));
        assert!(for_each_parameter_index::<unsafe extern "C" fn(...)>(|_: usize| false));
    }

    /// Counts visited indices, stopping after the second one.
    struct FirstTwo<'a>(&'a mut [usize; 3]);

    impl IndexVisitor for FirstTwo<'_> {
        fn visit<const INDEX: usize>(&mut self) -> bool {
            self.0[INDEX] += 1;
            INDEX < 1
        }
    }

    #[test]
    fn index_visitor_stops_early() {
        let mut counts = [0; 3];
        assert!(!for_each_parameter_index::<fn(u8, u32, u16)>(FirstTwo(&mut counts)));
        assert_eq!(counts, [1, 1, 0]);
    }
}
