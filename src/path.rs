use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::{Distance, Node};

/// Directed path from a start node to an end node.
///
/// A path is either an edge of the graph (no intermediates) or a route composed by the search,
/// in which case the intermediates are the nodes strictly between start and end, in traversal
/// order.
///
/// Two paths are equal when they connect the same start and end nodes, regardless of their
/// distance and intermediates.
#[derive(Debug, Clone)]
pub struct Path {
    start: Node,
    end: Node,
    distance: Distance,
    intermediates: Vec<Node>,
}

impl Path {
    pub fn new(start: Node, end: Node, distance: Distance) -> Self {
        Self::with_intermediates(start, end, distance, vec![])
    }

    pub fn with_intermediates(
        start: Node,
        end: Node,
        distance: Distance,
        intermediates: Vec<Node>,
    ) -> Self {
        Self {
            start,
            end,
            distance,
            intermediates,
        }
    }

    /// Zero distance path without intermediates.
    /// This is the result of a search from a node to itself, or of a search that cannot reach
    /// its destination.
    pub fn zero(start: Node, end: Node) -> Self {
        Self::new(start, end, Distance::ZERO)
    }

    pub const fn start(&self) -> &Node {
        &self.start
    }

    pub const fn end(&self) -> &Node {
        &self.end
    }

    pub const fn distance(&self) -> Distance {
        self.distance
    }

    pub fn intermediates(&self) -> &[Node] {
        &self.intermediates
    }

    /// Appends a node at the end of the intermediates.
    pub fn through(mut self, node: Node) -> Self {
        self.intermediates.push(node);
        self
    }

    /// Returns a copy of this path whose distance is increased by the given amount.
    pub fn lengthened_by(&self, delta: Distance) -> Self {
        Self {
            distance: self.distance + delta,
            ..self.clone()
        }
    }

    /// Compares the distances of the two paths (ascending order).
    pub fn cmp_distance(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }

    /// Gets an iterator over all the nodes of the path: start, intermediates and end.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        std::iter::once(&self.start)
            .chain(&self.intermediates)
            .chain(std::iter::once(&self.end))
    }

    /// Returns true if the path starts and ends at the same node.
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;
    use test_log::test;

    use super::*;

    #[test]
    fn path_equality_001() {
        let p1 = Path::new("A".into(), "B".into(), Distance::new(5));
        let p2 = Path::new("A".into(), "B".into(), Distance::new(7)).through("C".into());
        let p3 = Path::new("B".into(), "A".into(), Distance::new(5));

        assert_eq!(p1, p2, "equality ignores distance and intermediates");
        assert_ne!(p1, p3);

        let set = FxHashSet::from_iter([p1, p2, p3]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn path_cmp_distance_001() {
        let short = Path::new("A".into(), "B".into(), Distance::new(1));
        let long = Path::new("C".into(), "D".into(), Distance::new(10));

        assert_eq!(short.cmp_distance(&long), Ordering::Less);
        assert_eq!(long.cmp_distance(&short), Ordering::Greater);
        assert_eq!(short.cmp_distance(&short.clone()), Ordering::Equal);
    }

    #[test]
    fn path_lengthened_by_001() {
        let edge = Path::new("A".into(), "B".into(), Distance::new(2));
        let lengthened = edge.lengthened_by(Distance::new(3));

        assert_eq!(lengthened.distance(), Distance::new(5));
        assert_eq!(edge.distance(), Distance::new(2), "original is left untouched");
        assert_eq!(lengthened, edge);
    }

    #[test]
    fn path_clone_is_independent_001() {
        let path = Path::new("A".into(), "D".into(), Distance::new(3)).through("B".into());
        let copy = path.clone().through("C".into());

        assert_eq!(path.intermediates(), [Node::from("B")]);
        assert_eq!(copy.intermediates(), [Node::from("B"), Node::from("C")]);
    }

    #[test]
    fn path_nodes_001() {
        let path = Path::new("A".into(), "D".into(), Distance::new(3))
            .through("B".into())
            .through("C".into());

        let nodes: Vec<_> = path.nodes().map(Node::id).collect();
        assert_eq!(nodes, ["A", "B", "C", "D"]);
        assert!(!path.is_loop());
        assert!(Path::zero("A".into(), "A".into()).is_loop());
    }
}
