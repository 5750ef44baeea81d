//! Uniform random graph generation.
//!
//! A graph with `n` nodes and `m` requested edges is drawn by sampling `m`
//! distinct pairs from the `n * (n - 1) / 2` candidates without replacement, so
//! every edge subset of that size is equally likely. Requests for more edges
//! than exist are clamped to the complete graph.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::index};
use tracing::{Span, debug, field, info, instrument, warn};

use crate::{
    Result,
    error::GraphError,
    graph::{Edge, Graph, candidate_edges},
};

/// Largest node count the generator accepts.
pub const MAX_NODE_COUNT: usize = 200;

/// Returns the number of distinct undirected edges on `node_count` nodes.
///
/// # Examples
/// ```
/// use edgewise_core::max_edges;
///
/// assert_eq!(max_edges(0), 0);
/// assert_eq!(max_edges(1), 0);
/// assert_eq!(max_edges(5), 10);
/// assert_eq!(max_edges(200), 19_900);
/// ```
#[must_use]
pub const fn max_edges(node_count: usize) -> usize {
    // One of two consecutive integers is even, so the halving is exact.
    let (even, odd) = if node_count % 2 == 0 {
        (node_count, node_count.saturating_sub(1))
    } else {
        (node_count.saturating_sub(1), node_count)
    };
    (even / 2) * odd
}

pub(crate) fn check_node_count(node_count: usize) -> Result<()> {
    if node_count == 0 || node_count > MAX_NODE_COUNT {
        warn!(node_count, max = MAX_NODE_COUNT, "rejecting node count");
        return Err(GraphError::InvalidNodeCount {
            got: node_count,
            max: MAX_NODE_COUNT,
        });
    }
    Ok(())
}

/// Generates a random graph, seeding the sampler from `seed` when given and
/// from OS entropy otherwise.
///
/// The same seed and arguments always yield the same edge set.
///
/// # Errors
/// Returns [`GraphError::InvalidNodeCount`] when `node_count` is zero or
/// exceeds [`MAX_NODE_COUNT`]. Edge counts above [`max_edges`] are clamped
/// rather than rejected.
///
/// # Examples
/// ```
/// use edgewise_core::generate;
///
/// let first = generate(10, 12, Some(7))?;
/// let second = generate(10, 12, Some(7))?;
/// assert_eq!(first, second);
///
/// let complete = generate(5, 999, None)?;
/// assert_eq!(complete.edge_count(), 10);
/// # Ok::<(), edgewise_core::GraphError>(())
/// ```
#[instrument(
    name = "core.generate",
    err,
    skip_all,
    fields(nodes = node_count, requested = requested_edges, seed = field::Empty),
)]
pub fn generate(node_count: usize, requested_edges: usize, seed: Option<u64>) -> Result<Graph> {
    if let Some(seed) = seed {
        Span::current().record("seed", seed);
    }
    check_node_count(node_count)?;
    Ok(generate_seeded(node_count, requested_edges, seed))
}

/// Samples a graph for a node count that has already been checked.
pub(crate) fn generate_seeded(
    node_count: usize,
    requested_edges: usize,
    seed: Option<u64>,
) -> Graph {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    sample_edges(node_count, requested_edges, &mut rng)
}

/// Generates a random graph drawing randomness from `rng`.
///
/// Use this to share one random source across several generations or to
/// plug in a custom generator.
///
/// # Errors
/// Returns [`GraphError::InvalidNodeCount`] when `node_count` is zero or
/// exceeds [`MAX_NODE_COUNT`].
///
/// # Examples
/// ```
/// use edgewise_core::generate_with_rng;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let graph = generate_with_rng(4, 2, &mut rng)?;
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), edgewise_core::GraphError>(())
/// ```
pub fn generate_with_rng<R>(
    node_count: usize,
    requested_edges: usize,
    rng: &mut R,
) -> Result<Graph>
where
    R: Rng + ?Sized,
{
    check_node_count(node_count)?;
    Ok(sample_edges(node_count, requested_edges, rng))
}

#[instrument(
    name = "core.sample_edges",
    skip_all,
    fields(nodes = node_count, requested = requested_edges, edges = field::Empty),
)]
fn sample_edges<R>(node_count: usize, requested_edges: usize, rng: &mut R) -> Graph
where
    R: Rng + ?Sized,
{
    let available = max_edges(node_count);
    let effective = requested_edges.min(available);
    if effective < requested_edges {
        debug!(
            requested = requested_edges,
            available, "clamping edge count to the complete graph"
        );
    }

    let candidates: Vec<Edge> = candidate_edges(node_count).collect();
    let edges = index::sample(rng, candidates.len(), effective)
        .into_iter()
        .filter_map(|slot| candidates.get(slot).copied())
        .collect();
    let graph = Graph::from_sampled(node_count, edges);

    Span::current().record("edges", graph.edge_count());
    record_metrics(&graph);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph generated"
    );
    graph
}

#[cfg(feature = "metrics")]
fn record_metrics(graph: &Graph) {
    metrics::counter!("graph_generations").increment(1);
    metrics::histogram!("graph_generated_edges").record(graph.edge_count() as f64);
}

#[cfg(not(feature = "metrics"))]
const fn record_metrics(_graph: &Graph) {}
