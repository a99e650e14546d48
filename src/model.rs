use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::sync::Arc;

/// Vertex of the graph, identified solely by its string key.
///
/// Cloning a node is cheap: all the clones share the same identifier allocation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node(Arc<str>);

impl Node {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Node {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Node {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// Weight of an edge, or total weight of a route.
/// Any integer value is accepted, arithmetic saturates at the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(i64);

impl Distance {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Distance {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Distance {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, distance| total + distance)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn model_node_equality_001() {
        let a1 = Node::new("A");
        let a2 = Node::from(String::from("A"));

        assert_eq!(a1, a2);
        assert_ne!(a1, Node::from("B"));
        assert_eq!(a1.id(), "A");
        assert_eq!(a1.to_string(), "A");
    }

    #[test]
    fn model_distance_arithmetic_001() {
        assert_eq!(Distance::new(3) + Distance::new(4), Distance::new(7));
        assert_eq!(Distance::new(3) - Distance::new(4), Distance::new(-1));
        assert_eq!(Distance::MAX + Distance::new(1), Distance::MAX);

        let mut distance = Distance::ZERO;
        distance += Distance::new(-2);
        assert_eq!(distance.value(), -2);

        let total: Distance = [1, 2, 3].into_iter().map(Distance::new).sum();
        assert_eq!(total, Distance::new(6));
        assert!(Distance::ZERO.is_zero());
    }
}
