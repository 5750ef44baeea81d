//! Support library for the edgewise CLI binary.
//!
//! Exposes command parsing, report rendering, adjacency export and logging
//! setup so integration tests can drive the pipeline without spawning a
//! subprocess.

pub mod cli;
pub mod export;
pub mod logging;
pub mod render;
