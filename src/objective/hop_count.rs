//! Fewest-stops objective.

use crate::distance::DistanceGraph;
use crate::models::{Route, TownId};
use crate::search::{Cargo, SolutionTracker};

use super::{Objective, ObjectiveKind};

/// Counts moves; only routes starting at the office are accepted.
///
/// A branch continues while its hop count is below the number of towns in
/// the best route, so a branch may still tie the best length before it
/// closes; replacement itself is strict.
///
/// # Examples
///
/// ```
/// use u_courier::objective::{HopCount, Objective};
///
/// let hops = HopCount::new(Some(0));
/// assert!(hops.admits_anchor(0));
/// assert!(!hops.admits_anchor(1));
/// assert_eq!(hops.reduce(1.0, 3.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HopCount {
    office: Option<TownId>,
}

impl HopCount {
    /// Creates the objective for the given office.
    pub fn new(office: Option<TownId>) -> Self {
        Self { office }
    }

    fn starts_at_office(&self, path: &[TownId]) -> bool {
        self.office.is_some() && path.first().copied() == self.office
    }
}

impl Objective for HopCount {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::BasicPath
    }

    fn calculate(&self, graph: &DistanceGraph, from: TownId, to: TownId, _: &Cargo) -> Option<f64> {
        graph.distance(from, to).map(|_| 1.0)
    }

    fn reduce(&self, step: f64, accumulated: f64) -> f64 {
        step + accumulated
    }

    fn should_continue_branch(&self, combined: f64, path: &[TownId], best: &SolutionTracker) -> bool {
        let bound = best.best().map_or(f64::MAX, |r| r.len() as f64);
        combined < bound && self.starts_at_office(path)
    }

    fn on_new_solution(&self, candidate: Route, best: &mut SolutionTracker) {
        if !self.starts_at_office(candidate.path()) {
            return;
        }
        if best.best().map_or(true, |r| candidate.len() < r.len()) {
            best.replace(candidate);
        }
    }

    fn admits_anchor(&self, anchor: TownId) -> bool {
        self.office == Some(anchor)
    }
}
