//! Priority queue used while merging nodes into a tree.
//!
//! Lowest weight comes out first. Among equal weights, the node inserted
//! first comes out first, which makes tree construction deterministic for a
//! given frequency table.

use crate::tree::Node;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queued node with its weight and insertion sequence number.
#[derive(Debug)]
struct QueueEntry {
    weight: u64,
    sequence: u64,
    node: Node,
}

impl QueueEntry {
    fn key(&self) -> (u64, u64) {
        (self.weight, self.sequence)
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other.key().cmp(&self.key())
    }
}

/// Min-queue of weighted nodes with stable tie-breaking.
#[derive(Debug, Default)]
pub(crate) struct NodeQueue {
    heap: BinaryHeap<QueueEntry>,
    next_sequence: u64,
}

impl NodeQueue {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub(crate) fn push(&mut self, node: Node, weight: u64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueueEntry {
            weight,
            sequence,
            node,
        });
    }

    /// Remove the lowest-weight, earliest-inserted node.
    pub(crate) fn pop(&mut self) -> Option<(Node, u64)> {
        self.heap.pop().map(|entry| (entry.node, entry.weight))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
