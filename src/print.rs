//! Diagnostic tree rendering.
//!
//! The heap's flattened array is turned back into an explicit linked tree
//! purely for layout. That view is built fresh on every call and thrown
//! away; the array stays the primary representation.

use crate::heap::ROOT_INDEX;
use core::fmt::Display;
use core::hash::Hash;
use std::collections::HashMap;

/// One node of the disposable render view. Children are indices into the
/// arena, not references, so building the view never fights the borrow
/// checker over the slot array.
struct Node {
    label: String,
    left: Option<usize>,
    right: Option<usize>,
}

/// Lays out slots 1..=last as a centered tree diagram, one `value(count)`
/// label per node with `/` and `\` edge lines between rows. An empty heap
/// renders as the empty string.
pub(crate) fn render<T>(tree: &[Option<T>], last: usize, counts: &HashMap<T, usize>) -> String
where
    T: Display + Eq + Hash,
{
    if last < ROOT_INDEX {
        return String::new();
    }

    // Arena of label nodes; slot i maps to arena index i - ROOT_INDEX.
    let mut nodes: Vec<Node> = Vec::with_capacity(last + 1 - ROOT_INDEX);
    for i in ROOT_INDEX..=last {
        // slots 1..=last are occupied; arena ids depend on there being no gaps
        let value = tree[i].as_ref().unwrap();
        let count = counts.get(value).copied().unwrap_or(0);
        nodes.push(Node {
            label: format!("{}({})", value, count),
            left: child_id(i * 2, last),
            right: child_id(i * 2 + 1, last),
        });
    }

    let max_level = depth(&nodes, Some(0));
    let mut out = String::new();

    // Row-by-row with an explicit work list, widest spacing at the top.
    let mut row: Vec<Option<usize>> = vec![Some(0)];
    for level in 1..=max_level {
        let floor = max_level - level;
        let edge_lines = 1usize << floor.saturating_sub(1);
        let first_spaces = (1usize << floor) - 1;
        let between_spaces = (1usize << (floor + 1)) - 1;

        pad(&mut out, first_spaces);
        let mut next: Vec<Option<usize>> = Vec::with_capacity(row.len() * 2);
        for node in &row {
            match node {
                Some(id) => {
                    out.push_str(&nodes[*id].label);
                    next.push(nodes[*id].left);
                    next.push(nodes[*id].right);
                }
                None => {
                    out.push(' ');
                    next.push(None);
                    next.push(None);
                }
            }
            pad(&mut out, between_spaces);
        }
        out.push('\n');

        for i in 1..=edge_lines {
            for node in &row {
                pad(&mut out, first_spaces.saturating_sub(i));
                let id = match node {
                    Some(id) => *id,
                    None => {
                        pad(&mut out, edge_lines * 2 + i + 1);
                        continue;
                    }
                };
                if nodes[id].left.is_some() {
                    out.push('/');
                } else {
                    pad(&mut out, 1);
                }
                pad(&mut out, i + i - 1);
                if nodes[id].right.is_some() {
                    out.push('\\');
                } else {
                    pad(&mut out, 1);
                }
                pad(&mut out, edge_lines * 2 - i);
            }
            out.push('\n');
        }

        row = next;
        if row.iter().all(|node| node.is_none()) {
            break;
        }
    }

    out
}

fn child_id(slot: usize, last: usize) -> Option<usize> {
    if slot <= last {
        Some(slot - ROOT_INDEX)
    } else {
        None
    }
}

fn depth(nodes: &[Node], node: Option<usize>) -> usize {
    match node {
        None => 0,
        Some(id) => 1 + depth(nodes, nodes[id].left).max(depth(nodes, nodes[id].right)),
    }
}

fn pad(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use crate::heap::{CountedHeap, Order};

    #[test]
    fn empty_heap_renders_blank() {
        let heap: CountedHeap<i32> = CountedHeap::new(3, Order::Max);
        assert_eq!(heap.render_as_tree(), "");
    }

    #[test]
    fn labels_carry_occurrence_counts() {
        let mut heap = CountedHeap::new(3, Order::Max);
        heap.insert(2).unwrap();
        heap.insert(1).unwrap();
        heap.insert(1).unwrap();
        let out = heap.render_as_tree();
        assert!(out.contains("2(1)"), "missing root label: {:?}", out);
        assert!(out.contains("1(2)"), "missing child label: {:?}", out);
        // root has a left child, so an edge line is drawn
        assert!(out.contains('/'), "missing edge line: {:?}", out);
    }

    #[test]
    fn single_node_renders_one_label() {
        let mut heap = CountedHeap::new(2, Order::Min);
        heap.insert(42).unwrap();
        let out = heap.render_as_tree();
        assert!(out.starts_with("42(1)"));
        assert!(!out.contains('/') && !out.contains('\\'));
    }
}
