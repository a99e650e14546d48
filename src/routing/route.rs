use tracing::debug;

use crate::graph::path::connecting_distance;
use crate::{DirectedGraph, Distance, Path, RouteError};

/// Checks that the route can be followed on the given graph.
///
/// The route is valid if:
/// - Each pair of consecutive nodes (start, intermediates, end) is connected by an edge.
/// - The route distance is the sum of the cheapest edges between those pairs.
///
/// A zero distance route from a node to itself is always valid, while the zero distance route
/// returned when the destination cannot be reached is only valid if start and end happen to be
/// directly connected by a zero distance edge.
pub fn ensure_route_is_valid<G: DirectedGraph + ?Sized>(
    graph: &G,
    route: &Path,
) -> Result<(), RouteError> {
    if route.is_loop() && route.intermediates().is_empty() && route.distance().is_zero() {
        return Ok(());
    }

    let nodes: Vec<_> = route.nodes().collect();
    let mut expected = Distance::ZERO;

    for window in nodes.windows(2) {
        let [from, to] = [window[0], window[1]];

        let Some(distance) = connecting_distance(graph, from, to) else {
            debug!("Route {route:?} is not connected at {from} -> {to}");
            return Err(RouteError::NotConnected {
                from: from.clone(),
                to: to.clone(),
            });
        };

        expected += distance;
    }

    if expected != route.distance() {
        return Err(RouteError::DistanceMismatch {
            expected,
            actual: route.distance(),
        });
    }

    Ok(())
}
