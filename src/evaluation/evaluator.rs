//! Route evaluator that replays cargo along a path and scores it.

use crate::models::TownId;
use crate::objective::Objective;
use crate::search::{Cargo, DeliveryProblem};

/// Kind of constraint violation found on a route.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// The route does not end where it started.
    NotClosed,
    /// Cargo weight exceeds the capacity after loading at a stop.
    CapacityExceeded {
        /// Position of the stop in the path.
        step: usize,
        /// Weight aboard when leaving the stop.
        load: f64,
        /// Vehicle capacity.
        capacity: f64,
    },
    /// No known distance between two consecutive stops.
    MissingDistance {
        /// Town the move starts from.
        from: TownId,
        /// Town the move leads to.
        to: TownId,
    },
    /// A package was never loaded or never unloaded.
    Undelivered {
        /// Package name.
        package: String,
    },
}

/// A constraint violation.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Replays a path the way the route search builds it: at each stop the
/// cargo destined there is unloaded, the packages waiting there are loaded,
/// and the move to the next stop is scored with what is aboard.
///
/// # Examples
///
/// ```
/// use u_courier::distance::DistanceGraph;
/// use u_courier::evaluation::RouteEvaluator;
/// use u_courier::input::PathRecord;
/// use u_courier::models::{Package, PackageIndex, Settings};
/// use u_courier::objective::MostEfficientFuel;
/// use u_courier::search::DeliveryProblem;
///
/// let graph = DistanceGraph::from_records(&[PathRecord::new("A", "B", 100.0)]);
/// let packages = PackageIndex::from_records(vec![
///     ("A".to_string(), Package::new("P1", "B", 100.0)),
/// ]);
/// let problem = DeliveryProblem::new(&graph, &packages, &Settings::new("A", 100.0));
///
/// let evaluator = RouteEvaluator::new(&problem, &MostEfficientFuel);
/// let (fuel, violations) = evaluator.evaluate(&[0, 1, 0]);
/// // loaded leg 11, empty leg back 10
/// assert_eq!(fuel, 21.0);
/// assert!(violations.is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    problem: &'a DeliveryProblem<'a>,
    objective: &'a dyn Objective,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given problem and objective.
    pub fn new(problem: &'a DeliveryProblem<'a>, objective: &'a dyn Objective) -> Self {
        Self { problem, objective }
    }

    /// Scores `path` and lists every violation found along it.
    ///
    /// Moves without a known distance contribute nothing to the value.
    pub fn evaluate(&self, path: &[TownId]) -> (f64, Vec<Violation>) {
        let problem = self.problem;
        let graph = problem.graph();
        let capacity = problem.capacity();

        let mut violations = Vec::new();
        let mut value = 0.0;
        let mut cargo = Cargo::empty();
        let mut pending = problem.all_pending();

        for (step, &town) in path.iter().enumerate() {
            let (loaded, remaining) = problem.transfer(town, &cargo, &pending);
            cargo = loaded;
            pending = remaining;

            if cargo.weight() > capacity {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    step,
                    load: cargo.weight(),
                    capacity,
                }));
            }

            let Some(&next) = path.get(step + 1) else {
                break;
            };
            match self.objective.calculate(graph, town, next, &cargo) {
                Some(cost) => value = self.objective.reduce(cost, value),
                None => violations.push(Violation::new(ViolationType::MissingDistance {
                    from: town,
                    to: next,
                })),
            }
        }

        if path.is_empty() || path.first() != path.last() {
            violations.push(Violation::new(ViolationType::NotClosed));
        }

        let shipments = problem.shipments();
        let left_behind = pending
            .iter()
            .filter_map(|&group| problem.group_members(group))
            .flatten();
        for &i in cargo.items().iter().chain(left_behind) {
            violations.push(Violation::new(ViolationType::Undelivered {
                package: shipments[i].name.clone(),
            }));
        }

        (value, violations)
    }

    /// Returns `true` if `path` has no violations.
    pub fn is_feasible(&self, path: &[TownId]) -> bool {
        self.evaluate(path).1.is_empty()
    }
}
