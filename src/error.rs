use thiserror::Error;

use crate::{Distance, Node};

#[derive(Error, Debug, PartialEq, Clone)]
pub enum RouteError {
    #[error("Route is not connected: no edge {from} -> {to}")]
    NotConnected { from: Node, to: Node },
    #[error("Route distance {actual} does not match the distance of its edges {expected}")]
    DistanceMismatch { expected: Distance, actual: Distance },
}
