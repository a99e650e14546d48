use std::sync::LazyLock;

use dijkstra_route::{Distance, Node, Path};

/// Road network between a handful of towns, distances in kilometers.
/// The two one-way roads (Hove -> Lewes, Seaford -> Newhaven) make some routes asymmetric.
pub static NETWORK: LazyLock<Vec<Path>> = LazyLock::new(|| {
    let two_way = [
        ("Brighton", "Hove", 3),
        ("Brighton", "Lewes", 14),
        ("Brighton", "Falmer", 7),
        ("Falmer", "Lewes", 6),
        ("Lewes", "Newhaven", 11),
        ("Newhaven", "Peacehaven", 4),
        ("Peacehaven", "Brighton", 12),
        ("Lewes", "Ringmer", 5),
        ("Ringmer", "Uckfield", 13),
    ];

    let one_way = [("Hove", "Lewes", 9), ("Seaford", "Newhaven", 3)];

    two_way
        .into_iter()
        .flat_map(|(a, b, d)| [edge(a, b, d), edge(b, a, d)])
        .chain(one_way.into_iter().map(|(a, b, d)| edge(a, b, d)))
        .collect()
});

pub fn node(id: &str) -> Node {
    Node::new(id)
}

pub fn edge(start: &str, end: &str, distance: i64) -> Path {
    Path::new(node(start), node(end), Distance::new(distance))
}
