use crate::{DirectedGraph, Distance, Node};

/// Gets the distance of the cheapest edge going from the first node to the second one.
/// Returns None if the graph has no such edge.
pub fn connecting_distance<G: DirectedGraph + ?Sized>(
    graph: &G,
    from: &Node,
    to: &Node,
) -> Option<Distance> {
    graph
        .exiting_paths(from)
        .filter(|edge| edge.end() == to)
        .map(|edge| edge.distance())
        .min()
}

/// Returns true only if all the nodes are sequentially connected by edges of the given graph.
pub fn is_path_connected<G: DirectedGraph + ?Sized>(graph: &G, nodes: &[Node]) -> bool {
    nodes
        .windows(2)
        .all(|window| connecting_distance(graph, &window[0], &window[1]).is_some())
}
