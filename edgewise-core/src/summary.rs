//! Summary statistics for a generated graph.

use tracing::{debug, instrument};

use crate::{degree::to_f64, graph::Graph, union_find::DisjointSet};

/// Headline numbers for a graph.
///
/// # Examples
/// ```
/// use edgewise_core::{Graph, summary};
///
/// let stats = summary(&Graph::from_edges(4, [(0, 1), (2, 3), (1, 3)])?);
/// assert_eq!(stats.node_count(), 4);
/// assert_eq!(stats.edge_count(), 3);
/// assert_eq!(stats.average_degree(), 1.5);
/// assert_eq!(stats.component_count(), 1);
/// # Ok::<(), edgewise_core::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryStats {
    node_count: usize,
    edge_count: usize,
    average_degree: f64,
    component_count: usize,
}

/// Computes the summary statistics of `graph`.
///
/// The average degree is `2 * edges / nodes` rounded to two decimal places,
/// and `0.0` for a graph without nodes.
#[must_use]
#[instrument(
    name = "core.summary",
    skip_all,
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn summary(graph: &Graph) -> SummaryStats {
    let stats = SummaryStats {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        average_degree: average_degree(graph.node_count(), graph.edge_count()),
        component_count: component_count(graph),
    };
    debug!(
        components = stats.component_count,
        average_degree = stats.average_degree,
        "summary computed"
    );
    stats
}

impl SummaryStats {
    /// Number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Mean degree rounded to two decimal places.
    #[must_use]
    pub const fn average_degree(&self) -> f64 {
        self.average_degree
    }

    /// Number of connected components; isolated nodes count individually.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.component_count
    }
}

fn average_degree(node_count: usize, edge_count: usize) -> f64 {
    if node_count == 0 {
        return 0.0;
    }
    round_to_hundredths(to_f64(2 * edge_count) / to_f64(node_count))
}

// `{:.2}` rounds the exact binary value, ties to even.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

fn component_count(graph: &Graph) -> usize {
    let mut forest = DisjointSet::new(graph.node_count());
    for edge in graph.edges() {
        forest.union(edge.source(), edge.target());
    }
    forest.components()
}
