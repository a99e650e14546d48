use rustc_hash::FxHashMap;

use crate::{DirectedGraph, Node, Path};

/// Edges grouped by their start node.
///
/// Building the index costs one pass over the edges, after that finding the edges exiting a node
/// no longer depends on the size of the graph. Within a group the edges keep their input order,
/// so searching the index or the plain edge list gives the same results.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    exiting: FxHashMap<Node, Vec<Path>>,
    len: usize,
}

impl EdgeIndex {
    pub fn new(edges: impl IntoIterator<Item = Path>) -> Self {
        let mut index = Self::default();
        for edge in edges {
            index.insert(edge);
        }
        index
    }

    pub fn insert(&mut self, edge: Path) {
        self.exiting
            .entry(edge.start().clone())
            .or_default()
            .push(edge);
        self.len += 1;
    }

    /// Total number of edges in the index.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets an iterator over all the nodes that have at least one exiting edge.
    pub fn start_nodes(&self) -> impl Iterator<Item = &Node> {
        self.exiting.keys()
    }
}

impl FromIterator<Path> for EdgeIndex {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl DirectedGraph for EdgeIndex {
    fn exiting_paths(&self, node: &Node) -> impl Iterator<Item = &Path> {
        self.exiting.get(node).into_iter().flatten()
    }
}
