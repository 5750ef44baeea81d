//! Builder for generation requests.
//!
//! Collects the node count, requested edge count and optional seed, validates
//! them once, and exposes the effective parameters before any sampling runs.

use crate::{
    Result,
    generate::{check_node_count, generate_seeded, max_edges},
    graph::Graph,
};

/// Node count used when the caller does not choose one.
pub const DEFAULT_NODE_COUNT: usize = 6;
/// Requested edge count used when the caller does not choose one.
pub const DEFAULT_EDGE_COUNT: usize = 6;

/// Configures a graph generation request.
///
/// # Examples
/// ```
/// use edgewise_core::GraphRequest;
///
/// let request = GraphRequest::new()
///     .with_node_count(5)
///     .with_edge_count(40)
///     .with_seed(11)
///     .build()
///     .expect("five nodes is a valid request");
/// assert_eq!(request.max_edges(), 10);
/// assert_eq!(request.effective_edge_count(), 10);
/// assert_eq!(request.generate().edge_count(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRequest {
    node_count: usize,
    edge_count: usize,
    seed: Option<u64>,
}

impl Default for GraphRequest {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            edge_count: DEFAULT_EDGE_COUNT,
            seed: None,
        }
    }
}

impl GraphRequest {
    /// Creates a request populated with the defaults.
    ///
    /// # Examples
    /// ```
    /// use edgewise_core::GraphRequest;
    ///
    /// let request = GraphRequest::new();
    /// assert_eq!(request.node_count(), 6);
    /// assert_eq!(request.edge_count(), 6);
    /// assert_eq!(request.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of nodes.
    #[must_use]
    pub const fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Returns the configured number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Overrides the requested number of edges.
    #[must_use]
    pub const fn with_edge_count(mut self, edge_count: usize) -> Self {
        self.edge_count = edge_count;
        self
    }

    /// Returns the requested number of edges before clamping.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Fixes the sampler seed so repeated generations agree.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the sampler seed.
    #[must_use]
    pub const fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the request.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidNodeCount`] when the node count is
    /// zero or exceeds [`crate::MAX_NODE_COUNT`].
    ///
    /// # Examples
    /// ```
    /// use edgewise_core::{GraphError, GraphRequest};
    ///
    /// let err = GraphRequest::new().with_node_count(0).build().unwrap_err();
    /// assert!(matches!(err, GraphError::InvalidNodeCount { got: 0, .. }));
    /// ```
    pub fn build(self) -> Result<ValidatedRequest> {
        check_node_count(self.node_count)?;
        Ok(ValidatedRequest { request: self })
    }
}

/// Request whose node count has been checked; generation cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    request: GraphRequest,
}

impl ValidatedRequest {
    /// Returns the number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.request.node_count
    }

    /// Returns the requested number of edges before clamping.
    #[must_use]
    pub const fn requested_edge_count(&self) -> usize {
        self.request.edge_count
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.request.seed
    }

    /// Largest edge count possible for this node count.
    #[must_use]
    pub const fn max_edges(&self) -> usize {
        max_edges(self.request.node_count)
    }

    /// Edge count after clamping to [`Self::max_edges`].
    #[must_use]
    pub const fn effective_edge_count(&self) -> usize {
        let max = self.max_edges();
        if self.request.edge_count < max {
            self.request.edge_count
        } else {
            max
        }
    }

    /// Reports whether the requested edge count had to be clamped.
    #[must_use]
    pub const fn is_clamped(&self) -> bool {
        self.request.edge_count > self.max_edges()
    }

    /// Draws a graph for this request.
    #[must_use]
    pub fn generate(&self) -> Graph {
        generate_seeded(
            self.request.node_count,
            self.request.edge_count,
            self.request.seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphError, MAX_NODE_COUNT};
    use rstest::rstest;

    #[rstest]
    fn builder_defaults_are_six_nodes_and_six_edges() {
        let request = GraphRequest::new().build().expect("defaults are valid");
        assert_eq!(request.node_count(), DEFAULT_NODE_COUNT);
        assert_eq!(request.effective_edge_count(), DEFAULT_EDGE_COUNT);
        assert_eq!(request.max_edges(), 15);
        assert!(!request.is_clamped());
    }

    #[rstest]
    #[case(0)]
    #[case(MAX_NODE_COUNT + 1)]
    fn build_rejects_invalid_node_counts(#[case] nodes: usize) {
        let err = GraphRequest::new()
            .with_node_count(nodes)
            .build()
            .expect_err("node count must be rejected");
        assert_eq!(
            err,
            GraphError::InvalidNodeCount {
                got: nodes,
                max: MAX_NODE_COUNT,
            }
        );
    }

    #[rstest]
    #[case(4, 0, 0, false)]
    #[case(4, 6, 6, false)]
    #[case(4, 7, 6, true)]
    #[case(1, 3, 0, true)]
    fn effective_edge_count_clamps(
        #[case] nodes: usize,
        #[case] requested: usize,
        #[case] expected: usize,
        #[case] clamped: bool,
    ) {
        let request = GraphRequest::new()
            .with_node_count(nodes)
            .with_edge_count(requested)
            .build()
            .expect("valid request");
        assert_eq!(request.effective_edge_count(), expected);
        assert_eq!(request.is_clamped(), clamped);
    }

    #[rstest]
    fn seeded_requests_are_reproducible() {
        let request = GraphRequest::new()
            .with_node_count(12)
            .with_edge_count(20)
            .with_optional_seed(Some(5))
            .build()
            .expect("valid request");
        assert_eq!(request.seed(), Some(5));
        assert_eq!(request.generate(), request.generate());
    }
}
