mod network;

pub use network::{NETWORK, edge, node};
