//! Dense adjacency matrix view of a graph.

use crate::graph::Graph;

/// Symmetric 0/1 matrix with a zero diagonal; `get(i, j) == 1` iff `i` and
/// `j` share an edge.
///
/// Stored row-major in a flat buffer.
///
/// # Examples
/// ```
/// use edgewise_core::{Graph, adjacency_matrix};
///
/// let graph = Graph::from_edges(3, [(0, 2)])?;
/// let matrix = adjacency_matrix(&graph);
/// assert_eq!(matrix.row(0), Some(&[0, 0, 1][..]));
/// assert_eq!(matrix.get(2, 0), Some(1));
/// assert!(matrix.is_symmetric());
/// # Ok::<(), edgewise_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<u8>,
}

/// Materialises the adjacency matrix of `graph`.
#[must_use]
pub fn adjacency_matrix(graph: &Graph) -> AdjacencyMatrix {
    let size = graph.node_count();
    let mut cells = vec![0_u8; size * size];
    for edge in graph.edges() {
        let (i, j) = (edge.source(), edge.target());
        for slot in [i * size + j, j * size + i] {
            if let Some(cell) = cells.get_mut(slot) {
                *cell = 1;
            }
        }
    }
    AdjacencyMatrix { size, cells }
}

impl AdjacencyMatrix {
    /// Number of rows (and columns).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at row `i`, column `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<u8> {
        if i >= self.size || j >= self.size {
            return None;
        }
        self.cells.get(i * self.size + j).copied()
    }

    /// Returns row `i`.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[u8]> {
        if i >= self.size {
            return None;
        }
        self.cells.get(i * self.size..(i + 1) * self.size)
    }

    /// Iterates the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // `max(1)` keeps `chunks` valid for the empty matrix, whose buffer is
        // empty anyway.
        self.cells.chunks(self.size.max(1))
    }

    /// Sum of every cell; twice the edge count.
    #[must_use]
    pub fn sum(&self) -> usize {
        self.cells.iter().map(|&cell| usize::from(cell)).sum()
    }

    /// Reports whether the matrix equals its transpose.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Reports whether every diagonal cell is zero.
    #[must_use]
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| self.get(i, i) == Some(0))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AdjacencyMatrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
