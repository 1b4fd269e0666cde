//! A fixed-capacity, array-backed binary heap with collapsed-duplicate
//! multiset semantics.
//!
//! [`CountedHeap`] keeps each distinct value in at most one slot of a
//! 1-based array (parent at `i/2`, children at `2i` and `2i+1`) and tracks
//! repeated insertions of equal values in an occurrence-count table instead
//! of extra slots. Extraction drains a value's count before its slot is
//! recycled, so a full drain still returns the complete multiset in sorted
//! order.
//!
//! One deliberate oddity to be aware of: because duplicates share a slot,
//! [`CountedHeap::size`] reports *occupied slots*, not live elements. See
//! the type docs for details before relying on it as an element count.

pub mod error;
pub mod heap;
mod print;

#[cfg(test)]
mod testing;

pub use crate::error::Error;
pub use crate::heap::{CountedHeap, Order};
