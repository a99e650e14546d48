use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::{DirectedGraph, Distance, Frontier, Node, Path};

#[derive(Debug, Clone, Copy)]
pub struct ShortestPathConfig {
    /// Candidate paths longer than this distance are never explored.
    pub max_distance: Distance,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            max_distance: Distance::MAX,
        }
    }
}

/// Computes the shortest path from one node to another over the given list of edges.
///
/// The returned path carries the total distance and the nodes strictly between the two nodes, in
/// traversal order. If the nodes are the same, or if the destination cannot be reached, the
/// returned path has zero distance and no intermediates.
pub fn shortest_path(from: &Node, to: &Node, edges: &[Path]) -> Path {
    shortest_path_with(&ShortestPathConfig::default(), edges, from, to)
}

/// Computes the shortest path from one node to another over any directed graph.
///
/// The search settles one node at a time, always picking the closest candidate of the frontier.
/// Only the edges exiting the node that was just settled are relaxed, and edges leading back to
/// an already settled node (or to the origin) are never considered.
pub fn shortest_path_with<G: DirectedGraph + ?Sized>(
    config: &ShortestPathConfig,
    graph: &G,
    from: &Node,
    to: &Node,
) -> Path {
    debug!("Computing shortest path {from} -> {to} with {config:?}");

    if from == to {
        return Path::zero(from.clone(), to.clone());
    }

    // settled paths, in extraction order
    let mut visited: Vec<Path> = vec![];
    // end nodes of the settled paths
    let mut settled = FxHashSet::from_iter([from.clone()]);
    let mut frontier = Frontier::new();

    for edge in graph.exiting_paths(from) {
        if edge.end() != from && edge.distance() <= config.max_distance {
            frontier.insert(edge.clone());
        }
    }

    while let Some(best) = frontier.pop() {
        let previous = best.end().clone();
        let distance = best.distance();
        trace!("Settled {previous} at distance {distance}");

        settled.insert(previous.clone());
        visited.push(best);

        if previous == *to {
            let path = unpack_path(&visited, from, to, distance);
            debug!("Found shortest path {path:?}");
            return path;
        }

        for edge in graph.exiting_paths(&previous) {
            if edge.end() == &previous || settled.contains(edge.end()) {
                continue;
            }

            let candidate = edge.lengthened_by(distance);
            if candidate.distance() > config.max_distance {
                continue;
            }

            if frontier.insert(candidate) {
                trace!("Relaxed {} via {previous}", edge.end());
            }
        }
    }

    debug!("Cannot find path {from} -> {to}");
    Path::zero(from.clone(), to.clone())
}

/// Unpacks the shortest path from destination back to origin.
/// The settled paths are scanned once, from the last extracted to the first one.
fn unpack_path(visited: &[Path], from: &Node, to: &Node, distance: Distance) -> Path {
    let mut intermediates = vec![];
    let mut last = to;

    for path in visited.iter().rev() {
        if last == from {
            break;
        }

        if path.end() == last {
            if last != to {
                intermediates.push(last.clone());
            }
            last = path.start();
        }
    }

    intermediates.reverse();
    Path::with_intermediates(from.clone(), to.clone(), distance, intermediates)
}

pub mod frontier;
pub mod route;
