//! Breadth-first shortest path search
//!
//! Distances are edge counts. Neighbours are expanded in ascending index
//! order, so among several shortest routes the result is always the same one
//! for a given graph.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, span, trace, Level};

use super::{Graph, VertexIndex};

/// Result of a labelled shortest-path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Vertex labels from source to goal, both included
    Found(Vec<char>),
    /// The label does not name a vertex of the graph
    UnknownVertex(char),
    /// Both vertices exist but no route connects them
    Unreachable { from: char, to: char },
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    /// The path, if one was found
    pub fn vertices(&self) -> Option<&[char]> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Number of edges on the path, if one was found
    pub fn hops(&self) -> Option<usize> {
        self.vertices().map(|path| path.len().saturating_sub(1))
    }
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOutcome::Found(path) => {
                for (i, vertex) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, "->")?;
                    }
                    write!(f, "{}", vertex)?;
                }
                Ok(())
            }
            PathOutcome::UnknownVertex(vertex) => write!(f, "unknown vertex '{}'", vertex),
            PathOutcome::Unreachable { from, to } => write!(f, "no path from {} to {}", from, to),
        }
    }
}

/// Shortest path search over a borrowed graph
pub struct PathFinder<'g> {
    graph: &'g Graph,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Index path from `start` to `goal`, or `None` if there is none
    ///
    /// `start == goal` yields the single-vertex path. Indices that are not
    /// vertices yield `None`.
    pub fn search(&self, start: VertexIndex, goal: VertexIndex) -> Option<Vec<VertexIndex>> {
        let vertex_count = self.graph.vertex_count();
        if start >= vertex_count || goal >= vertex_count {
            return None;
        }
        if start == goal {
            return Some(vec![start]);
        }

        let search_span = span!(Level::DEBUG, "breadth_first_search", start, goal);
        let _enter = search_span.enter();

        // predecessor[v] is the vertex v was first discovered from
        let mut predecessor: Vec<Option<VertexIndex>> = vec![None; vertex_count];
        let mut visited = vec![false; vertex_count];
        let mut frontier = VecDeque::from([start]);
        visited[start] = true;

        while let Some(&current) = frontier.front() {
            if current == goal {
                break;
            }
            frontier.pop_front();
            for next in self.graph.adjacent(current) {
                if visited[next] {
                    continue;
                }
                visited[next] = true;
                predecessor[next] = Some(current);
                frontier.push_back(next);
            }
            trace!(current, frontier_len = frontier.len(), "Expanded vertex");
        }

        if !visited[goal] {
            debug!("Goal not reachable");
            return None;
        }

        let mut path = vec![goal];
        let mut cursor = goal;
        while let Some(previous) = predecessor[cursor] {
            path.push(previous);
            cursor = previous;
        }
        path.reverse();

        debug!(path_len = path.len(), "Found shortest path");
        Some(path)
    }

    /// Resolve labels, search, and map the index path back to labels
    ///
    /// Labels resolve to the first vertex carrying them.
    pub fn shortest_path(&self, from: char, to: char) -> PathOutcome {
        let Some(start) = self.graph.index_of(from) else {
            return PathOutcome::UnknownVertex(from);
        };
        let Some(goal) = self.graph.index_of(to) else {
            return PathOutcome::UnknownVertex(to);
        };

        match self.search(start, goal) {
            Some(path) => PathOutcome::Found(
                path.into_iter()
                    .filter_map(|index| self.graph.vertex(index))
                    .collect(),
            ),
            None => PathOutcome::Unreachable { from, to },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A..F with A-B, A-C, B-D, C-D, C-F, D-E
    fn six_vertices() -> Graph {
        let mut graph = Graph::new();
        for c in ['A', 'B', 'C', 'D', 'E', 'F'] {
            graph.create_vertex(c);
        }
        for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 3), (2, 5), (3, 4)] {
            graph.link(a, b).unwrap();
        }
        graph
    }

    #[test]
    fn test_path_to_self() {
        let graph = six_vertices();
        assert_eq!(graph.shortest_path('A', 'A'), PathOutcome::Found(vec!['A']));
        assert_eq!(PathFinder::new(&graph).search(4, 4), Some(vec![4]));
    }

    #[test]
    fn test_known_shortest_paths() {
        let graph = six_vertices();
        assert_eq!(
            graph.shortest_path('A', 'E'),
            PathOutcome::Found(vec!['A', 'B', 'D', 'E'])
        );
        assert_eq!(
            graph.shortest_path('A', 'F'),
            PathOutcome::Found(vec!['A', 'C', 'F'])
        );
        assert_eq!(
            graph.shortest_path('E', 'F'),
            PathOutcome::Found(vec!['E', 'D', 'C', 'F'])
        );
    }

    #[test]
    fn test_unknown_label() {
        let graph = six_vertices();
        assert_eq!(graph.shortest_path('A', 'Z'), PathOutcome::UnknownVertex('Z'));
        assert_eq!(graph.shortest_path('Q', 'A'), PathOutcome::UnknownVertex('Q'));
    }

    #[test]
    fn test_unreachable_goal() {
        let mut graph = six_vertices();
        graph.create_vertex('G');
        let outcome = graph.shortest_path('A', 'G');
        assert_eq!(outcome, PathOutcome::Unreachable { from: 'A', to: 'G' });
        assert!(!outcome.is_found());
        assert_eq!(outcome.vertices(), None);
        assert_eq!(PathFinder::new(&graph).search(0, 6), None);
    }

    #[test]
    fn test_out_of_range_indices() {
        let graph = six_vertices();
        let finder = PathFinder::new(&graph);
        assert_eq!(finder.search(0, 6), None);
        assert_eq!(finder.search(6, 6), None);
    }

    #[test]
    fn test_ties_break_on_lowest_index() {
        // A-B-D and A-C-D are both two hops; B has the lower index
        let mut graph = Graph::new();
        for c in ['A', 'B', 'C', 'D'] {
            graph.create_vertex(c);
        }
        for (a, b) in [(0, 2), (2, 3), (0, 1), (1, 3)] {
            graph.link(a, b).unwrap();
        }
        assert_eq!(
            graph.shortest_path('A', 'D'),
            PathOutcome::Found(vec!['A', 'B', 'D'])
        );
    }

    #[test]
    fn test_outcome_display() {
        let graph = six_vertices();
        let found = graph.shortest_path('A', 'E');
        assert_eq!(found.to_string(), "A->B->D->E");
        assert_eq!(found.hops(), Some(3));
        assert_eq!(
            PathOutcome::UnknownVertex('x').to_string(),
            "unknown vertex 'x'"
        );
        assert_eq!(
            PathOutcome::Unreachable { from: 'A', to: 'B' }.to_string(),
            "no path from A to B"
        );
    }
}
