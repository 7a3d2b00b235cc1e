//! Least-distance objective.

use crate::distance::DistanceGraph;
use crate::models::{Route, TownId};
use crate::search::{Cargo, SolutionTracker};

use super::{Objective, ObjectiveKind};

/// Sums road distances. Routes may be anchored at any town.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestDistance;

impl Objective for ShortestDistance {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::ShortestPath
    }

    fn calculate(&self, graph: &DistanceGraph, from: TownId, to: TownId, _: &Cargo) -> Option<f64> {
        graph.distance(from, to)
    }

    fn reduce(&self, step: f64, accumulated: f64) -> f64 {
        step + accumulated
    }

    fn should_continue_branch(&self, combined: f64, _: &[TownId], best: &SolutionTracker) -> bool {
        combined < best.best_value().unwrap_or(f64::MAX)
    }

    fn on_new_solution(&self, candidate: Route, best: &mut SolutionTracker) {
        if best.best_value().map_or(true, |v| candidate.value() < v) {
            best.replace(candidate);
        }
    }
}
