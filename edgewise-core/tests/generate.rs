//! Tests for the generation entry points and their instrumentation.

use edgewise_core::{
    GraphError, GraphRequest, MAX_NODE_COUNT, adjacency_matrix, degrees, generate,
    generate_with_rng, summary,
};
use edgewise_test_support::tracing::RecordingLayer;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[rstest]
fn six_nodes_six_edges_seed_42() {
    let graph = generate(6, 6, Some(42)).expect("valid request");
    assert_eq!(graph.edge_count(), 6);
    assert!(
        graph
            .edges()
            .iter()
            .all(|edge| edge.source() < 6 && edge.target() < 6)
    );
    let stats = summary(&graph);
    assert_eq!(stats.node_count(), 6);
    assert_eq!(stats.average_degree(), 2.0);
    assert_eq!(degrees(&graph).total(), 12);
    assert_eq!(adjacency_matrix(&graph).sum(), 12);
}

#[rstest]
fn single_node_graph() {
    let graph = generate(1, 0, None).expect("valid request");
    let stats = summary(&graph);
    assert_eq!(stats.node_count(), 1);
    assert_eq!(stats.edge_count(), 0);
    assert_eq!(stats.component_count(), 1);
    assert_eq!(stats.average_degree(), 0.0);
    assert_eq!(adjacency_matrix(&graph).row(0), Some(&[0][..]));
}

#[rstest]
fn over_requested_edges_produce_the_complete_graph() {
    let graph = generate(5, 10, None).expect("valid request");
    assert_eq!(graph.edge_count(), 10);
    assert_eq!(summary(&graph).component_count(), 1);
    assert!(degrees(&graph).iter().all(|(_, degree)| degree == 4));
}

#[rstest]
#[case(16, 1, 0.12)]
#[case(16, 5, 0.62)]
#[case(80, 1, 0.03)]
fn average_degree_ties_follow_the_stored_value(
    #[case] nodes: usize,
    #[case] edges: usize,
    #[case] expected: f64,
) {
    let graph = generate(nodes, edges, Some(1)).expect("valid request");
    assert_eq!(summary(&graph).average_degree(), expected);
}

#[rstest]
fn shared_rng_advances_between_generations() {
    let mut rng = SmallRng::seed_from_u64(17);
    let first = generate_with_rng(20, 15, &mut rng).expect("valid request");
    let second = generate_with_rng(20, 15, &mut rng).expect("valid request");
    assert_ne!(first, second);

    let mut replay = SmallRng::seed_from_u64(17);
    let replayed = generate_with_rng(20, 15, &mut replay).expect("valid request");
    assert_eq!(first, replayed);
}

#[rstest]
fn seeded_generate_matches_request_builder() {
    let direct = generate(15, 30, Some(8)).expect("valid request");
    let built = GraphRequest::new()
        .with_node_count(15)
        .with_edge_count(30)
        .with_seed(8)
        .build()
        .expect("valid request")
        .generate();
    assert_eq!(direct, built);
}

#[rstest]
fn generate_records_span_fields() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let graph = tracing::subscriber::with_default(subscriber, || generate(8, 40, Some(3)))
        .expect("valid request");
    assert_eq!(graph.edge_count(), 28);

    let span = layer
        .span_named("core.generate")
        .expect("core.generate span must exist");
    assert_eq!(span.field("nodes"), Some("8"));
    assert_eq!(span.field("requested"), Some("40"));
    assert_eq!(span.field("seed"), Some("3"));

    let sample = layer
        .span_named("core.sample_edges")
        .expect("core.sample_edges span must exist");
    assert_eq!(sample.field("edges"), Some("28"));

    assert!(layer.has_event(Level::DEBUG, "clamping edge count to the complete graph"));
    assert!(layer.has_event(Level::INFO, "graph generated"));
}

#[rstest]
fn invalid_node_count_is_logged_and_rejected() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let err = tracing::subscriber::with_default(subscriber, || generate(MAX_NODE_COUNT + 1, 1, None))
        .expect_err("node count must be rejected");
    assert!(matches!(err, GraphError::InvalidNodeCount { got: 201, max: 200 }));

    assert!(layer.has_event(Level::WARN, "rejecting node count"));
    let span = layer
        .span_named("core.generate")
        .expect("core.generate span must exist");
    assert_eq!(span.field("seed"), None);
    assert!(layer.events().iter().any(|event| event.level == Level::ERROR));
}
