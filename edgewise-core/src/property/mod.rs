//! Property-based suites for graph generation and the derived views.
//!
//! Fixtures are drawn across density regimes so sparse, dense and
//! over-requested graphs all exercise the same invariants. Component counts
//! are cross-checked against a breadth-first traversal oracle.

mod oracle;
mod strategies;
