#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_docs_in_private_items,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for `function-traits`.
//!
//! # Overview
//!
//! This crate contains the type-list machinery that the `function-traits`
//! decomposition engine and mutator algebra are built on. A parameter list
//! is represented as a plain tuple, `(A0, A1, .., An)`, and every operation
//! in this crate is a trait implemented for tuples of arity 0 through
//! [`MAX_ARITY`].
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the `function-traits`
//! crate, not this one.
//!
//! # Architecture
//!
//! - **[`list`]**: Whole-list operations
//!   - [`ArgList`]: Length, prepending, per-element and per-index visitation
//!   - [`ArgVisitor`]: Visitor invoked once per element with its const index
//!
//! - **[`index`]**: Indexed operations
//!   - [`TypeAt`]: The element type at a const index
//!   - [`ReplaceAt`]: The tuple with one element replaced
//!   - [`for_each_index`]: Short-circuiting iteration over `0..N`, unrolled
//!     for every [`Indices<N>`] up to [`MAX_ARITY`] and handing each index
//!     to an [`IndexVisitor`] as a const generic
//!
//! Out-of-bounds indices are not an error value: the corresponding impl
//! simply does not exist, so using one fails to compile with the message
//! attached to [`TypeAt`] or [`ReplaceAt`].
//!
//! # Generating per-arity code
//!
//! [`for_each_arity!`] invokes a callback macro once for every supported
//! arity, passing the type parameter names for that arity. Both this crate
//! and `function-traits` use it to emit their per-arity impls.

#[macro_use]
mod macros;

pub mod index;
pub mod list;

pub use index::{IndexList, IndexVisitor, Indices, ReplaceAt, TypeAt, for_each_index};
pub use list::{ArgList, ArgVisitor, ArityOverflow};

/// The largest parameter count supported by the tuple impls in this crate.
pub const MAX_ARITY: usize = 12;
