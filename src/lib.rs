//! Ordered collections backed by a splay tree.
//!
//! The ordering is supplied by the caller as a `less` predicate, so the same element type can be
//! kept in sets with different orderings.

pub mod splay_tree;

pub use crate::splay_tree::SplaySet;
