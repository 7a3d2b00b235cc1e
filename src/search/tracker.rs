//! Best-solution accumulator.

use crate::models::Route;

/// Holds the best route found so far.
///
/// Owned by the caller of the search and updated only through
/// [`Objective::on_new_solution`](crate::objective::Objective::on_new_solution),
/// which decides whether a candidate replaces the current best.
#[derive(Debug, Clone, Default)]
pub struct SolutionTracker {
    best: Option<Route>,
    improvements: usize,
}

impl SolutionTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// The best route so far.
    pub fn best(&self) -> Option<&Route> {
        self.best.as_ref()
    }

    /// Value of the best route so far.
    pub fn best_value(&self) -> Option<f64> {
        self.best.as_ref().map(Route::value)
    }

    /// Number of times the best route was replaced.
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    /// Makes `route` the new best.
    pub fn replace(&mut self, route: Route) {
        self.best = Some(route);
        self.improvements += 1;
    }

    /// Consumes the tracker, returning the best route.
    pub fn into_best(self) -> Option<Route> {
        self.best
    }
}
