//! Town graph and distances.
//!
//! Provides a dense matrix of optional distances and the validated,
//! name-addressable town graph built on top of it.

mod graph;
mod matrix;

pub use graph::{DistanceGraph, GraphBuilder};
pub use matrix::DistanceMatrix;
