use crate::{Node, Path};

/// Directed graph.
/// Exposes the edges the search runs on, each edge being a path without intermediates.
pub trait DirectedGraph {
    /// Gets an iterator over all the edges exiting from the given node.
    /// Edges are returned in the order they were given to the graph.
    /// Returns an empty iterator if the node doesn't belong to the graph.
    fn exiting_paths(&self, node: &Node) -> impl Iterator<Item = &Path>;
}

/// A plain list of edges: every lookup scans the whole list.
impl DirectedGraph for [Path] {
    fn exiting_paths(&self, node: &Node) -> impl Iterator<Item = &Path> {
        self.iter().filter(move |edge| edge.start() == node)
    }
}

pub mod index;
pub mod path;

#[cfg(test)]
pub mod tests {
    mod network;

    pub use network::{NETWORK, edge, node};
}
