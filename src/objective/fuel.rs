//! Load-dependent fuel objective.
//!
//! Consumption per unit of distance is `(10 + load / 100) / 100`, so an empty
//! vehicle burns 0.1 per unit and every 100 units of cargo add 0.01. Step
//! costs and running totals are both rounded to four decimals as soon as they
//! are computed; the rounding can decide which of two close branches is
//! pruned.

use crate::distance::DistanceGraph;
use crate::models::{Route, TownId};
use crate::search::{Cargo, SolutionTracker};

use super::{Objective, ObjectiveKind};

/// Rounds to four decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use u_courier::objective::round4;
///
/// assert_eq!(round4(0.123456), 0.1235);
/// assert_eq!(round4(2.00004), 2.0);
/// ```
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Fuel burned along the route, depending on the cargo weight of each leg.
///
/// # Examples
///
/// ```
/// use u_courier::distance::DistanceGraph;
/// use u_courier::input::PathRecord;
/// use u_courier::objective::{MostEfficientFuel, Objective};
/// use u_courier::search::Cargo;
///
/// let g = DistanceGraph::from_records(&[PathRecord::new("A", "B", 100.0)]);
/// // empty vehicle: 100 * 10 / 100
/// assert_eq!(MostEfficientFuel.calculate(&g, 0, 1, &Cargo::empty()), Some(10.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MostEfficientFuel;

impl MostEfficientFuel {
    /// Fuel for `distance` with `load` aboard, rounded to four decimals.
    pub fn leg_fuel(distance: f64, load: f64) -> f64 {
        round4(distance * (10.0 + load / 100.0) / 100.0)
    }
}

impl Objective for MostEfficientFuel {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::MostEfficientPath
    }

    fn calculate(&self, graph: &DistanceGraph, from: TownId, to: TownId, cargo: &Cargo) -> Option<f64> {
        graph
            .distance(from, to)
            .map(|d| Self::leg_fuel(d, cargo.weight()))
    }

    fn reduce(&self, step: f64, accumulated: f64) -> f64 {
        round4(step + accumulated)
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
