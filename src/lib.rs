#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod path;
mod routing;

pub use error::RouteError;
pub use graph::index::EdgeIndex;
pub use graph::path::{connecting_distance, is_path_connected};
pub use graph::DirectedGraph;
pub use model::{Distance, Node};
pub use path::Path;
pub use routing::frontier::Frontier;
pub use routing::route::ensure_route_is_valid;
pub use routing::{ShortestPathConfig, shortest_path, shortest_path_with};
