//! Built-in sample graph

use super::Graph;

/// Ten vertices `A`..`J` with a mix of neighbour links and long spans
///
/// Used by the CLI `--dummy` source and by tests.
pub fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    for vertex in 'A'..='J' {
        graph.create_vertex(vertex);
    }

    let links = [
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 3),
        (1, 4),
        (3, 4),
        (3, 7),
        (5, 7),
        (6, 7),
    ];
    for (a, b) in links {
        // indices are within the ten vertices created above
        let _ = graph.link(a, b);
    }
    graph
}
