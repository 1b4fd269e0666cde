use crate::error::Error;
use core::fmt::Display;
use core::hash::Hash;
use log::debug;
use std::collections::HashMap;

/// The root of the tree lives at index 1; slot 0 is never used. Keeping the
/// tree 1-based is what makes the parent/child arithmetic below hold.
pub(crate) const ROOT_INDEX: usize = 1;

fn parent(child: usize) -> usize { child / 2 }
fn left(parent: usize) -> usize { parent * 2 }
fn right(parent: usize) -> usize { parent * 2 + 1 }

/// Whether the heap keeps its greatest or its least value at the root.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    Max,
    Min,
}

/// A fixed-capacity binary heap that stores each distinct value in at most
/// one array slot and tracks repeated insertions in a per-value occurrence
/// count.
///
/// The first insertion of a value occupies a slot and participates in heap
/// ordering; later insertions of an equal value only bump its count, and
/// extractions drain the count back down before the slot itself is removed.
/// As a consequence `size()` reports occupied slots, which is *less than*
/// the number of live elements whenever duplicates are present. This is not
/// a textbook multiset heap; callers that need the logical element count
/// must track it themselves.
///
/// Capacity is `2^level` slots (one of which is the unused slot 0) and is
/// fixed at construction. All operations are O(log n) and single-threaded;
/// wrap the whole structure in a mutex if it must be shared.
pub struct CountedHeap<T> {
    /// Occupied slots are 1..=last. Slot 0 stays `None` forever.
    tree: Vec<Option<T>>,
    order: Order,
    level: u32,
    last: usize,
    /// Live multiplicity of each value. Entries are removed when they reach
    /// zero, so presence in the map means at least one live occurrence.
    counts: HashMap<T, usize>,
}

impl<T: Ord + Hash + Clone> CountedHeap<T> {
    /// Creates an empty heap with capacity `2^level` slots.
    pub fn new(level: u32, order: Order) -> Self {
        let capacity = 1usize << level;
        let mut tree = Vec::new();
        tree.resize_with(capacity, || None);
        Self {
            tree,
            order,
            level,
            last: ROOT_INDEX - 1,
            counts: HashMap::new(),
        }
    }

    /// Inserts one occurrence of `value`.
    ///
    /// Fails with `Error::CapacityExceeded` when the heap is already full,
    /// even if `value` is a duplicate that would not have needed a slot. A
    /// value with no live occurrences takes the next free slot and sifts up;
    /// a value that is already present only has its count incremented.
    pub fn insert(&mut self, value: T) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::CapacityExceeded);
        }
        if !self.has_one_or_more(&value) {
            self.last += 1;
            let index = self.last;
            self.tree[index] = Some(value.clone());
            self.sift_up(index);
        } else {
            debug!("insert: duplicate collapsed into its existing slot");
        }
        *self.counts.entry(value).or_insert(0) += 1;
        Ok(())
    }

    /// Removes and returns the value at the root.
    ///
    /// Fails with `Error::EmptyHeap` when no slots are occupied. If the root
    /// value has further live occurrences, only its count is decremented and
    /// the array is left untouched; otherwise the last slot replaces the
    /// root and sifts down.
    pub fn extract_top(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let top = self.slot(ROOT_INDEX).clone();
        if !self.has_two_or_more(&top) {
            let moved = self.tree[self.last].take();
            self.last -= 1;
            if self.last >= ROOT_INDEX {
                self.tree[ROOT_INDEX] = moved;
                self.sift_down(ROOT_INDEX);
            }
        } else {
            debug!("extract: root still has duplicates, slot kept");
        }
        self.decrement_count(&top);
        Ok(top)
    }

    /// Number of occupied slots. Duplicates share a slot, so this is not
    /// the live element count; see the type-level docs.
    pub fn size(&self) -> usize {
        self.last
    }

    /// The capacity level set at construction; capacity is `2^level`.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn is_full(&self) -> bool {
        self.size() >= self.tree.len() - 1
    }

    /// Renders the occupied slots as an indented tree diagram, one
    /// `value(count)` label per node. Diagnostic only; the layout is not a
    /// stable format.
    pub fn render_as_tree(&self) -> String
    where
        T: Display,
    {
        crate::print::render(&self.tree, self.last, &self.counts)
    }

    fn slot(&self, index: usize) -> &T {
        // slots 1..=last are always occupied
        self.tree[index].as_ref().unwrap()
    }

    /// True if `a` may sit at or above `b`. Equal values dominate each
    /// other in both orders, so a swap is only triggered by a strict
    /// comparison.
    fn dominates(&self, a: &T, b: &T) -> bool {
        match self.order {
            Order::Max => a >= b,
            Order::Min => a <= b,
        }
    }

    fn sift_up(&mut self, index: usize) {
        let mut i = index;
        // A value equal to the root can stop immediately. The duplicate
        // collapse in insert means such a value never reaches here, but the
        // short-circuit is kept as part of the sift contract.
        while i > ROOT_INDEX && self.slot(i) != self.slot(ROOT_INDEX) {
            let p = parent(i);
            if self.dominates(self.slot(p), self.slot(i)) {
                break;
            }
            self.tree.swap(p, i);
            i = p;
        }
    }

    fn sift_down(&mut self, index: usize) {
        let left = left(index);
        let right = right(index);
        let mut best = index;
        if left <= self.last && !self.dominates(self.slot(best), self.slot(left)) {
            best = left;
        }
        if right <= self.last && !self.dominates(self.slot(best), self.slot(right)) {
            best = right;
        }
        if best != index {
            self.tree.swap(index, best);
            self.sift_down(best);
        }
    }

    fn live_count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    fn has_one_or_more(&self, value: &T) -> bool {
        self.live_count(value) > 0
    }

    fn has_two_or_more(&self, value: &T) -> bool {
        self.live_count(value) > 1
    }

    fn decrement_count(&mut self, value: &T) {
        if let Some(n) = self.counts.get_mut(value) {
            *n -= 1;
            if *n == 0 {
                self.counts.remove(value);
            }
        }
    }

    #[cfg(test)]
    fn check(&self) {
        for i in ROOT_INDEX + 1..=self.last {
            assert!(
                self.dominates(self.slot(parent(i)), self.slot(i)),
                "heap property violated between slots {} and {}",
                parent(i),
                i
            );
        }
    }
}
