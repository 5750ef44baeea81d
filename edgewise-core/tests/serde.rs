//! Serialisation shape of the public views.
#![cfg(feature = "serde")]

use edgewise_core::{Graph, LayoutKind, adjacency_matrix, degrees, summary};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn views_serialise_to_plain_json() -> Result<(), serde_json::Error> {
    let graph = Graph::from_edges(3, [(0, 1)]).expect("valid pairs");

    assert_eq!(
        serde_json::to_value(&graph)?,
        json!({ "node_count": 3, "edges": [{ "source": 0, "target": 1 }] })
    );
    assert_eq!(serde_json::to_value(degrees(&graph))?, json!([1, 1, 0]));
    assert_eq!(
        serde_json::to_value(adjacency_matrix(&graph))?,
        json!([[0, 1, 0], [1, 0, 0], [0, 0, 0]])
    );
    assert_eq!(
        serde_json::to_value(summary(&graph))?,
        json!({
            "node_count": 3,
            "edge_count": 1,
            "average_degree": 0.67,
            "component_count": 2,
        })
    );
    assert_eq!(serde_json::to_value(LayoutKind::Shell)?, json!("shell"));
    Ok(())
}
