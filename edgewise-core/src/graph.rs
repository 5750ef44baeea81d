//! Undirected simple graph over contiguous node indices.
//!
//! Edges are stored canonically (`source < target`) in ascending order, so two
//! graphs with the same edge set compare equal regardless of how they were
//! built.

use std::collections::BTreeSet;

use tracing::{Span, field, instrument};

use crate::{
    Result,
    error::GraphError,
    layout::{Layout, LayoutProvider},
};

/// Unordered pair of distinct nodes.
///
/// # Examples
/// ```
/// use edgewise_core::Edge;
///
/// let edge = Edge::new(4, 1).expect("distinct endpoints");
/// assert_eq!((edge.source(), edge.target()), (1, 4));
/// assert!(edge.touches(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge, ordering the endpoints so `source < target`.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when both endpoints are equal.
    pub const fn new(a: usize, b: usize) -> Result<Self> {
        if a == b {
            return Err(GraphError::SelfLoop { node: a });
        }
        Ok(Self::ordered(a, b))
    }

    /// Builds an edge from endpoints already known to differ.
    pub(crate) const fn ordered(a: usize, b: usize) -> Self {
        if a < b {
            Self {
                source: a,
                target: b,
            }
        } else {
            Self {
                source: b,
                target: a,
            }
        }
    }

    /// Returns the lower endpoint.
    #[rustfmt::skip]
    #[must_use]
    pub const fn source(self) -> usize { self.source }

    /// Returns the higher endpoint.
    #[rustfmt::skip]
    #[must_use]
    pub const fn target(self) -> usize { self.target }

    /// Reports whether `node` is one of the endpoints.
    #[must_use]
    pub const fn touches(self, node: usize) -> bool {
        self.source == node || self.target == node
    }
}

/// Undirected simple graph with `node_count` nodes labelled `0..node_count`.
///
/// Isolated nodes are part of the graph even though no edge mentions them.
///
/// # Examples
/// ```
/// use edgewise_core::Graph;
///
/// let graph = Graph::from_edges(3, [(0, 1), (2, 1)])?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.contains(1, 2));
/// # Ok::<(), edgewise_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `node_count` isolated nodes.
    #[must_use]
    pub const fn empty(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    /// Builds a graph from explicit node pairs.
    ///
    /// Pair orientation is irrelevant: `(2, 0)` and `(0, 2)` denote the same
    /// edge.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] when an endpoint is not below
    /// `node_count`, [`GraphError::SelfLoop`] for a pair joining a node to
    /// itself, and [`GraphError::DuplicateEdge`] when a pair repeats.
    ///
    /// # Examples
    /// ```
    /// use edgewise_core::{Graph, GraphError};
    ///
    /// let err = Graph::from_edges(3, [(0, 1), (1, 0)]).unwrap_err();
    /// assert_eq!(err, GraphError::DuplicateEdge { left: 0, right: 1 });
    /// ```
    pub fn from_edges<I>(node_count: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut seen = BTreeSet::new();
        for (a, b) in pairs {
            for node in [a, b] {
                if node >= node_count {
                    return Err(GraphError::NodeOutOfRange { node, node_count });
                }
            }
            let edge = Edge::new(a, b)?;
            if !seen.insert(edge) {
                return Err(GraphError::DuplicateEdge {
                    left: edge.source,
                    right: edge.target,
                });
            }
        }
        Ok(Self {
            node_count,
            edges: seen.into_iter().collect(),
        })
    }

    /// Builds the complete graph on `node_count` nodes.
    ///
    /// # Examples
    /// ```
    /// use edgewise_core::Graph;
    ///
    /// assert_eq!(Graph::complete(5).edge_count(), 10);
    /// ```
    #[must_use]
    pub fn complete(node_count: usize) -> Self {
        Self {
            node_count,
            edges: candidate_edges(node_count).collect(),
        }
    }

    /// Wraps edges that are already canonical, distinct and in range.
    pub(crate) fn from_sampled(node_count: usize, mut edges: Vec<Edge>) -> Self {
        edges.sort_unstable();
        debug_assert!(edges.windows(2).all(|pair| pair[0] < pair[1]));
        debug_assert!(edges.iter().all(|edge| edge.target < node_count));
        Self { node_count, edges }
    }

    /// Returns the number of nodes, isolated ones included.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in ascending `(source, target)` order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates the node indices.
    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.node_count
    }

    /// Reports whether `a` and `b` are joined by an edge.
    #[must_use]
    pub fn contains(&self, a: usize, b: usize) -> bool {
        a != b && self.edges.binary_search(&Edge::ordered(a, b)).is_ok()
    }

    /// Asks `provider` to position every node and validates the answer.
    ///
    /// The provider is treated as opaque; this method only checks that each
    /// node received exactly one finite coordinate.
    ///
    /// # Errors
    /// Returns [`GraphError::LayoutIncomplete`] when the coordinate count does
    /// not match the node count and [`GraphError::NonFiniteCoordinate`] when a
    /// coordinate is NaN or infinite.
    #[instrument(
        name = "core.layout",
        err,
        skip(self, provider),
        fields(kind = %provider.kind(), nodes = self.node_count, placed = field::Empty),
    )]
    pub fn layout_with<P>(&self, provider: &P) -> Result<Layout>
    where
        P: LayoutProvider + ?Sized,
    {
        let layout = provider.layout(self.node_count, &self.edges);
        Span::current().record("placed", layout.len());
        layout.validate(provider.kind(), self.node_count)?;
        Ok(layout)
    }
}

/// Enumerates every unordered pair `(i, j)` with `i < j < node_count` in
/// lexicographic order.
pub(crate) fn candidate_edges(node_count: usize) -> impl Iterator<Item = Edge> {
    (0..node_count).flat_map(move |source| {
        (source + 1..node_count).map(move |target| Edge { source, target })
    })
}
