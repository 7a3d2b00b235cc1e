//! Objective strategies driving the route search.
//!
//! - [`HopCount`] — fewest moves, office-anchored routes only
//! - [`ShortestDistance`] — least total distance, any anchor
//! - [`MostEfficientFuel`] — least fuel, where consumption grows with load
//!
//! Each strategy supplies the step cost, the accumulation rule, the pruning
//! predicate and the rule for replacing the best known route.

mod fuel;
mod hop_count;
mod shortest;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceGraph;
use crate::models::{Route, TownId};
use crate::search::{Cargo, SolutionTracker};

pub use fuel::{round4, MostEfficientFuel};
pub use hop_count::HopCount;
pub use shortest::ShortestDistance;

/// Cost model used by the route search.
///
/// Implementations are stateless; the best route lives in a
/// [`SolutionTracker`] owned by the caller.
pub trait Objective: Send + Sync {
    /// Which objective this is.
    fn kind(&self) -> ObjectiveKind;

    /// Cost of moving from `from` to `to` with `cargo` aboard.
    ///
    /// `None` if the move is impossible (no distance between the towns).
    fn calculate(&self, graph: &DistanceGraph, from: TownId, to: TownId, cargo: &Cargo)
        -> Option<f64>;

    /// Combines a step cost with the value accumulated so far.
    fn reduce(&self, step: f64, accumulated: f64) -> f64;

    /// Returns `true` if a branch with value `combined` along `path` can
    /// still improve on the best route.
    fn should_continue_branch(&self, combined: f64, path: &[TownId], best: &SolutionTracker)
        -> bool;

    /// Offers a closed route; replaces the best route if it is better.
    fn on_new_solution(&self, candidate: Route, best: &mut SolutionTracker);

    /// Returns `true` if routes anchored at `anchor` can be accepted.
    fn admits_anchor(&self, _anchor: TownId) -> bool {
        true
    }
}

/// Objective selector.
///
/// # Examples
///
/// ```
/// use u_courier::objective::ObjectiveKind;
///
/// let kind: ObjectiveKind = "ShortestPath".parse().unwrap();
/// assert_eq!(kind, ObjectiveKind::ShortestPath);
/// assert_eq!(kind.to_string(), "ShortestPath");
/// assert!("Fastest".parse::<ObjectiveKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectiveKind {
    /// Fewest stops.
    #[default]
    BasicPath,
    /// Least total distance.
    ShortestPath,
    /// Least fuel.
    MostEfficientPath,
}

impl ObjectiveKind {
    /// All objectives.
    pub const ALL: [ObjectiveKind; 3] = [
        ObjectiveKind::BasicPath,
        ObjectiveKind::ShortestPath,
        ObjectiveKind::MostEfficientPath,
    ];

    /// Creates the strategy for this objective.
    ///
    /// `office` is only used by [`ObjectiveKind::BasicPath`]; `None` means
    /// the office is not in the graph and no route is acceptable.
    pub fn build(self, office: Option<TownId>) -> Box<dyn Objective> {
        match self {
            ObjectiveKind::BasicPath => Box::new(HopCount::new(office)),
            ObjectiveKind::ShortestPath => Box::new(ShortestDistance),
            ObjectiveKind::MostEfficientPath => Box::new(MostEfficientFuel),
        }
    }

    /// Name used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            ObjectiveKind::BasicPath => "BasicPath",
            ObjectiveKind::ShortestPath => "ShortestPath",
            ObjectiveKind::MostEfficientPath => "MostEfficientPath",
        }
    }
}

impl fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown objective name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown objective {0:?}, expected BasicPath, ShortestPath or MostEfficientPath")]
pub struct UnknownObjective(pub String);

impl FromStr for ObjectiveKind {
    type Err = UnknownObjective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectiveKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s.trim())
            .ok_or_else(|| UnknownObjective(s.to_string()))
    }
}
