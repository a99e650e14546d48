use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{Distance, Node, Path};

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapElement {
    /// Distance of the candidate path when it was pushed.
    distance: Distance,
    /// Insertion order of the candidate, used to detect replaced entries.
    sequence: u64,
    /// End node of the candidate path.
    node: Node,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // ties are extracted in insertion order
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone)]
struct Entry {
    sequence: u64,
    path: Path,
}

/// Candidate paths that still need to be visited, ordered by distance.
///
/// The frontier holds at most one path for each end node, no matter where the path starts.
/// Inserting a path whose end node is already known only replaces the existing path if the new
/// one is strictly shorter.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    entries: FxHashMap<Node, Entry>,
    // May contain elements of replaced entries, the top element is never one of them.
    heap: BinaryHeap<HeapElement>,
    sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the candidate path, keeping the best estimate for its end node.
    /// Returns false if the candidate was discarded.
    pub fn insert(&mut self, path: Path) -> bool {
        if let Some(existing) = self.entries.get(path.end())
            && path.distance() >= existing.path.distance()
        {
            trace!(
                "Discarding {path:?}: already reachable at distance {}",
                existing.path.distance()
            );
            return false;
        }

        let sequence = self.sequence;
        self.sequence += 1;

        self.heap.push(HeapElement {
            distance: path.distance(),
            sequence,
            node: path.end().clone(),
        });
        self.entries
            .insert(path.end().clone(), Entry { sequence, path });

        self.discard_replaced();
        true
    }

    /// Removes and returns the shortest path, None if the frontier is empty.
    pub fn pop(&mut self) -> Option<Path> {
        let element = self.heap.pop()?;
        let entry = self.entries.remove(&element.node);
        debug_assert_eq!(entry.as_ref().map(|e| e.sequence), Some(element.sequence));

        self.discard_replaced();
        entry.map(|e| e.path)
    }

    /// Returns the shortest path without removing it, None if the frontier is empty.
    pub fn peek(&self) -> Option<&Path> {
        let element = self.heap.peek()?;
        self.entries.get(&element.node).map(|e| &e.path)
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.entries.contains_key(node)
    }

    /// Gets the path currently kept for the given end node.
    pub fn get(&self, node: &Node) -> Option<&Path> {
        self.entries.get(node).map(|e| &e.path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets all the paths in the order they would be extracted.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Path> {
        let mut entries: Vec<&Entry> = self.entries.values().collect();
        entries.sort_unstable_by(|e1, e2| {
            e1.path
                .cmp_distance(&e2.path)
                .then_with(|| e1.sequence.cmp(&e2.sequence))
        });
        entries.into_iter().map(|e| &e.path)
    }

    fn is_live(&self, element: &HeapElement) -> bool {
        self.entries
            .get(&element.node)
            .is_some_and(|e| e.sequence == element.sequence)
    }

    fn discard_replaced(&mut self) {
        while let Some(element) = self.heap.peek() {
            if self.is_live(element) {
                break;
            }
            self.heap.pop();
        }
    }
}
