//! Per-node degree table.

use crate::graph::Graph;

/// Returns the display label for `node`, e.g. `V3`.
///
/// # Examples
/// ```
/// use edgewise_core::node_label;
///
/// assert_eq!(node_label(3), "V3");
/// ```
#[must_use]
pub fn node_label(node: usize) -> String {
    format!("V{node}")
}

/// Degree of every node in a graph, indexed by node.
///
/// Always holds exactly one entry per node, isolated nodes included.
///
/// # Examples
/// ```
/// use edgewise_core::{Graph, degrees};
///
/// let graph = Graph::from_edges(4, [(0, 1), (0, 2)])?;
/// let table = degrees(&graph);
/// assert_eq!(table.get(0), Some(2));
/// assert_eq!(table.get(3), Some(0));
/// assert_eq!(table.total(), 4);
/// # Ok::<(), edgewise_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DegreeTable {
    degrees: Vec<usize>,
}

/// Counts the edges incident to each node in `O(nodes + edges)`.
#[must_use]
pub fn degrees(graph: &Graph) -> DegreeTable {
    let mut degrees = vec![0_usize; graph.node_count()];
    for edge in graph.edges() {
        for node in [edge.source(), edge.target()] {
            if let Some(slot) = degrees.get_mut(node) {
                *slot += 1;
            }
        }
    }
    DegreeTable { degrees }
}

impl DegreeTable {
    /// Number of nodes covered by the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Reports whether the table covers no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Returns the degree of `node`.
    #[must_use]
    pub fn get(&self, node: usize) -> Option<usize> {
        self.degrees.get(node).copied()
    }

    /// Returns the degrees as a slice indexed by node.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.degrees
    }

    /// Iterates `(node, degree)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.degrees.iter().copied().enumerate()
    }

    /// Iterates `(label, degree)` pairs in node order.
    pub fn labelled(&self) -> impl Iterator<Item = (String, usize)> + '_ {
        self.iter().map(|(node, degree)| (node_label(node), degree))
    }

    /// Sum of all degrees; twice the edge count.
    #[must_use]
    pub fn total(&self) -> usize {
        self.degrees.iter().sum()
    }

    /// Smallest degree, or `None` for an empty table.
    #[must_use]
    pub fn min(&self) -> Option<usize> {
        self.degrees.iter().copied().min()
    }

    /// Largest degree, or `None` for an empty table.
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.degrees.iter().copied().max()
    }

    /// Rescales each degree into `[0, 1]` relative to the table's range.
    ///
    /// When every node has the same degree all entries are `0.0`.
    ///
    /// # Examples
    /// ```
    /// use edgewise_core::{Graph, degrees};
    ///
    /// let star = Graph::from_edges(3, [(0, 1), (0, 2)])?;
    /// assert_eq!(degrees(&star).normalised(), vec![1.0, 0.0, 0.0]);
    /// # Ok::<(), edgewise_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn normalised(&self) -> Vec<f64> {
        let (Some(low), Some(high)) = (self.min(), self.max()) else {
            return Vec::new();
        };
        let span = high - low;
        if span == 0 {
            return vec![0.0; self.degrees.len()];
        }
        self.degrees
            .iter()
            .map(|&degree| to_f64(degree - low) / to_f64(span))
            .collect()
    }
}

// Counts and degrees stay far inside f64's exact integer range.
pub(crate) fn to_f64(value: usize) -> f64 {
    value as f64
}
