//! Route replay and feasibility checking.

mod evaluator;

pub use evaluator::{RouteEvaluator, Violation, ViolationType};
