//! Exhaustive route search.
//!
//! - [`DeliveryProblem`] — packages resolved against the town graph
//! - [`RouteSearch`] — branch-and-bound over partial routes with cargo simulation
//! - [`SolutionTracker`] — caller-owned best-route accumulator

mod engine;
mod problem;
mod state;
mod tracker;

pub use engine::{RouteSearch, SearchConfig, SearchStats};
pub use problem::{DeliveryProblem, Shipment};
pub use state::Cargo;
pub use tracker::SolutionTracker;
