//! Fixture strategies for the generation properties.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::{MAX_NODE_COUNT, max_edges};

/// How the requested edge count relates to the maximum for the node count.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Density {
    /// A handful of edges; many isolated nodes.
    #[weight(3)]
    Sparse,
    /// Somewhere between empty and complete.
    #[weight(3)]
    Moderate,
    /// Exactly the complete graph.
    #[weight(1)]
    Complete,
    /// More edges than can exist, exercising the clamp.
    #[weight(1)]
    OverRequested,
}

/// Inputs for one generation call.
#[derive(Clone, Copy, Debug)]
pub(super) struct GenerationFixture {
    pub(super) nodes: usize,
    pub(super) requested: usize,
    pub(super) seed: u64,
    pub(super) density: Density,
}

impl GenerationFixture {
    /// Edge count the generator must produce for this fixture.
    pub(super) fn expected_edges(&self) -> usize {
        self.requested.min(max_edges(self.nodes))
    }
}

/// Generates fixtures over the full supported node range, biased towards
/// small graphs so shrinking stays readable.
pub(super) fn generation_fixture_strategy() -> impl Strategy<Value = GenerationFixture> {
    (
        prop_oneof![3 => 1_usize..=24, 1 => 1_usize..=MAX_NODE_COUNT],
        any::<Density>(),
        any::<u64>(),
        any::<u64>(),
    )
        .prop_map(|(nodes, density, pick, seed)| {
            let available = max_edges(nodes);
            let requested = match density {
                Density::Sparse => pick_within(pick, nodes.min(available)),
                Density::Moderate => pick_within(pick, available),
                Density::Complete => available,
                Density::OverRequested => available + 1 + pick_within(pick, nodes),
            };
            GenerationFixture {
                nodes,
                requested,
                seed,
                density,
            }
        })
}

fn pick_within(pick: u64, upper: usize) -> usize {
    let upper = upper as u64 + 1;
    (pick % upper) as usize
}
