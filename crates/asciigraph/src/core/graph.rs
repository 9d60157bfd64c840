//! Graph store
//!
//! Owns the ordered vertex list and the square, symmetric adjacency matrix.
//! A vertex is identified by its index; the character is display metadata.

use tracing::{debug, trace};

use super::{Edge, GraphError, PathFinder, PathOutcome, VertexIndex};

/// Undirected graph on a dense adjacency matrix
///
/// The matrix always has `vertex_count()` rows of `vertex_count()` columns,
/// and `matrix[i][j] == matrix[j][i]` for every pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<char>,
    matrix: Vec<Vec<bool>>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and grow the matrix by one zeroed row and column
    pub fn create_vertex(&mut self, value: char) -> VertexIndex {
        self.vertices.push(value);
        let size = self.vertices.len();
        for row in &mut self.matrix {
            row.resize(size, false);
        }
        self.matrix.push(vec![false; size]);

        let index = size - 1;
        trace!(vertex = %value, index, "Created vertex");
        index
    }

    /// Link two vertices in both directions
    ///
    /// Fails without touching the matrix if either index is not a vertex.
    pub fn link(&mut self, a: VertexIndex, b: VertexIndex) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        for index in [a, b] {
            if index >= vertex_count {
                return Err(GraphError::index_out_of_range(index, vertex_count));
            }
        }

        self.matrix[a][b] = true;
        self.matrix[b][a] = true;
        debug!(a, b, "Linked vertices");
        Ok(())
    }

    /// Indices linked to `vertex`, ascending, never including `vertex` itself
    pub fn adjacent(&self, vertex: VertexIndex) -> Vec<VertexIndex> {
        match self.matrix.get(vertex) {
            Some(row) => row
                .iter()
                .enumerate()
                .filter(|&(index, &linked)| linked && index != vertex)
                .map(|(index, _)| index)
                .collect(),
            None => Vec::new(),
        }
    }

    /// True if `a` and `b` are linked; false for unknown indices
    pub fn is_linked(&self, a: VertexIndex, b: VertexIndex) -> bool {
        self.matrix
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex characters in insertion order
    pub fn vertices(&self) -> &[char] {
        &self.vertices
    }

    /// Character of the vertex at `index`
    pub fn vertex(&self, index: VertexIndex) -> Option<char> {
        self.vertices.get(index).copied()
    }

    /// First index carrying `value`
    pub fn index_of(&self, value: char) -> Option<VertexIndex> {
        self.vertices.iter().position(|&v| v == value)
    }

    /// Read-only view of the adjacency matrix
    pub fn matrix(&self) -> &[Vec<bool>] {
        &self.matrix
    }

    /// Every linked pair `(i, j)` with `i < j`, in row-major order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.matrix.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .skip(i + 1)
                .filter(|&(_, &linked)| linked)
                .map(move |(j, _)| Edge::new(i, j))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Shortest path between two labelled vertices
    pub fn shortest_path(&self, from: char, to: char) -> PathOutcome {
        PathFinder::new(self).shortest_path(from, to)
    }

    /// Remove all vertices and links
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.matrix.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        for c in ['A', 'B', 'C'] {
            graph.create_vertex(c);
        }
        graph.link(0, 1).unwrap();
        graph.link(2, 0).unwrap();
        graph
    }

    #[test]
    fn test_create_vertex_grows_matrix() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.create_vertex('A'), 0);
        assert_eq!(graph.create_vertex('B'), 1);
        assert_eq!(graph.create_vertex('C'), 2);

        assert!(!graph.is_empty());
        assert_eq!(graph.matrix().len(), 3);
        assert!(graph.matrix().iter().all(|row| row.len() == 3));
        assert!(graph.matrix().iter().flatten().all(|&linked| !linked));
    }

    #[test]
    fn test_link_is_symmetric() {
        let graph = triangle();
        assert!(graph.is_linked(0, 1));
        assert!(graph.is_linked(1, 0));
        assert!(graph.is_linked(0, 2));
        assert!(graph.is_linked(2, 0));
        assert!(!graph.is_linked(1, 2));
        assert_eq!(graph.adjacent(0), vec![1, 2]);
        assert_eq!(graph.adjacent(1), vec![0]);
    }

    #[test]
    fn test_link_out_of_range_leaves_graph_untouched() {
        let mut graph = triangle();
        let before = graph.clone();

        let err = graph.link(1, 3).unwrap_err();
        assert!(matches!(
            err,
            GraphError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            }
        ));
        assert!(graph.link(5, 0).is_err());
        assert_eq!(graph, before);
    }

    #[test]
    fn test_link_survives_growth() {
        let mut graph = triangle();
        graph.create_vertex('D');
        assert!(graph.is_linked(0, 1));
        assert!(!graph.is_linked(3, 0));
        graph.link(3, 1).unwrap();
        assert_eq!(graph.adjacent(1), vec![0, 3]);
    }

    #[test]
    fn test_adjacent_skips_self_and_unknown() {
        let mut graph = triangle();
        graph.link(1, 1).unwrap();
        assert_eq!(graph.adjacent(1), vec![0]);
        assert!(graph.adjacent(42).is_empty());
    }

    #[test]
    fn test_edges_are_ordered_pairs() {
        let graph = triangle();
        let edges: Vec<Edge> = graph.edges().collect();
        assert_eq!(edges, vec![Edge::new(0, 1), Edge::new(0, 2)]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_index_of_first_match() {
        let mut graph = triangle();
        graph.create_vertex('A');
        assert_eq!(graph.index_of('A'), Some(0));
        assert_eq!(graph.index_of('Z'), None);
        assert_eq!(graph.vertex(2), Some('C'));
        assert_eq!(graph.vertex(9), None);
    }

    #[test]
    fn test_clear() {
        let mut graph = triangle();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
