//! Branch-and-bound route enumeration.
//!
//! # Algorithm
//!
//! For every anchor town admitted by the objective, run a depth-first search
//! over partial routes held on an explicit LIFO stack. Expanding a state at
//! town `c`:
//!
//! 1. unload the cargo destined to `c`, then load the packages waiting at `c`;
//! 2. abandon the branch if the cargo now exceeds the capacity;
//! 3. collect the towns still to visit (cargo destinations, then pending
//!    origins, without `c`);
//! 4. if there are none, close the route back to the anchor and offer it to
//!    the objective;
//! 5. otherwise push one child per town whose accumulated value still passes
//!    the objective's pruning predicate.
//!
//! Each expansion either collects or delivers at least one package on the
//! path to termination, so branch depth is bounded by twice the number of
//! package towns.
//!
//! # Complexity
//!
//! Exponential in the number of package towns in the worst case; pruning
//! against the best known route keeps typical instances small.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use log::{debug, info, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Route, TownId};
use crate::objective::Objective;

use super::state::PartialRoute;
use super::{DeliveryProblem, SolutionTracker};

/// Configuration for the route search.
///
/// # Examples
///
/// ```
/// use u_courier::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_expansions(1_000_000)
///     .with_parallel(true);
/// assert_eq!(config.max_expansions, 1_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of states expanded across all anchors. 0 = no limit.
    ///
    /// When the budget runs out the best route so far is kept, but it is no
    /// longer guaranteed to be optimal.
    pub max_expansions: usize,

    /// Whether to search anchors in parallel using rayon.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: 0,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Counters collected during a search run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Anchor towns searched.
    pub anchors: usize,
    /// States popped from the frontier and expanded.
    pub expanded: usize,
    /// Children discarded by the pruning predicate or for lack of a road.
    pub pruned: usize,
    /// States abandoned because the cargo exceeded the capacity.
    pub infeasible: usize,
    /// Closed routes offered to the objective.
    pub solutions: usize,
    /// Whether the budget or a cancellation cut the search short.
    pub exhausted: bool,
}

impl SearchStats {
    /// Adds another run's counters to these.
    pub fn merge(&mut self, other: &SearchStats) {
        self.anchors += other.anchors;
        self.expanded += other.expanded;
        self.pruned += other.pruned;
        self.infeasible += other.infeasible;
        self.solutions += other.solutions;
        self.exhausted |= other.exhausted;
    }
}

/// Expansion budget shared by every anchor of a run.
struct Budget {
    limit: usize,
    used: AtomicUsize,
    cancel: Option<Arc<AtomicBool>>,
}

impl Budget {
    fn new(limit: usize, cancel: Option<Arc<AtomicBool>>) -> Self {
        Self {
            limit,
            used: AtomicUsize::new(0),
            cancel,
        }
    }

    /// Claims one expansion; `false` once the budget is spent or cancelled.
    fn try_consume(&self) -> bool {
        if self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return false;
        }
        let used = self.used.fetch_add(1, Ordering::Relaxed);
        self.limit == 0 || used < self.limit
    }
}

/// Exhaustive branch-and-bound search for the best closed delivery route.
///
/// # Examples
///
/// ```
/// use u_courier::distance::DistanceGraph;
/// use u_courier::input::PathRecord;
/// use u_courier::models::{Package, PackageIndex, Settings};
/// use u_courier::objective::ShortestDistance;
/// use u_courier::search::{DeliveryProblem, RouteSearch, SearchConfig, SolutionTracker};
///
/// let graph = DistanceGraph::from_records(&[
///     PathRecord::new("A", "B", 100.0),
///     PathRecord::new("B", "C", 100.0),
///     PathRecord::new("C", "A", 100.0),
/// ]);
/// let packages = PackageIndex::from_records(vec![
///     ("C".to_string(), Package::new("P1", "A", 120.0)),
///     ("B".to_string(), Package::new("P2", "A", 120.0)),
/// ]);
/// let problem = DeliveryProblem::new(&graph, &packages, &Settings::new("A", 240.0));
///
/// let mut tracker = SolutionTracker::new();
/// let stats = RouteSearch::new(&problem, &ShortestDistance, SearchConfig::default())
///     .run(&mut tracker);
///
/// assert_eq!(stats.anchors, 3);
/// assert_eq!(tracker.best_value(), Some(300.0));
/// ```
pub struct RouteSearch<'p, 'g> {
    problem: &'p DeliveryProblem<'g>,
    objective: &'p dyn Objective,
    config: SearchConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'p, 'g> RouteSearch<'p, 'g> {
    /// Creates a search over `problem` scored by `objective`.
    pub fn new(
        problem: &'p DeliveryProblem<'g>,
        objective: &'p dyn Objective,
        config: SearchConfig,
    ) -> Self {
        Self {
            problem,
            objective,
            config,
            cancel: None,
        }
    }

    /// Stops the search as soon as `flag` is set.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Towns the search is rooted at, in graph order.
    pub fn anchors(&self) -> Vec<TownId> {
        (0..self.problem.graph().len())
            .filter(|&town| self.objective.admits_anchor(town))
            .collect()
    }

    /// Runs the search, reporting closed routes into `tracker`.
    pub fn run(&self, tracker: &mut SolutionTracker) -> SearchStats {
        let mut stats = SearchStats::default();

        if self.problem.is_empty() {
            debug!("no packages to deliver, nothing to search");
            return stats;
        }
        if !self.problem.is_solvable() {
            warn!(
                "packages reference unknown towns {:?}, no route can deliver them",
                self.problem.unresolved()
            );
            return stats;
        }

        let anchors = self.anchors();
        let budget = Budget::new(self.config.max_expansions, self.cancel.clone());

        if self.config.parallel {
            let runs: Vec<(SolutionTracker, SearchStats)> = anchors
                .par_iter()
                .map(|&anchor| {
                    let mut local = SolutionTracker::new();
                    let mut local_stats = SearchStats::default();
                    self.search_anchor(anchor, &budget, &mut local, &mut local_stats);
                    (local, local_stats)
                })
                .collect();
            for (local, local_stats) in runs {
                stats.merge(&local_stats);
                if let Some(route) = local.into_best() {
                    self.objective.on_new_solution(route, tracker);
                }
            }
        } else {
            for &anchor in &anchors {
                self.search_anchor(anchor, &budget, tracker, &mut stats);
                if stats.exhausted {
                    break;
                }
            }
        }

        if stats.exhausted {
            warn!(
                "search stopped after {} expansions, best route may not be optimal",
                stats.expanded
            );
        }
        info!(
            "{} search: {} anchors, {} expanded, {} pruned, {} infeasible, {} solutions, best {:?}",
            self.objective.kind(),
            stats.anchors,
            stats.expanded,
            stats.pruned,
            stats.infeasible,
            stats.solutions,
            tracker.best_value()
        );

        stats
    }

    fn search_anchor(
        &self,
        anchor: TownId,
        budget: &Budget,
        tracker: &mut SolutionTracker,
        stats: &mut SearchStats,
    ) {
        let problem = self.problem;
        let graph = problem.graph();
        let objective = self.objective;
        let expanded_before = stats.expanded;

        stats.anchors += 1;
        let mut frontier = vec![PartialRoute::root(anchor, problem.all_pending())];

        while let Some(state) = frontier.pop() {
            if !budget.try_consume() {
                stats.exhausted = true;
                break;
            }
            stats.expanded += 1;

            let current = state.current();
            let (cargo, pending) = problem.transfer(current, &state.cargo, &state.pending);
            if cargo.weight() > problem.capacity() {
                stats.infeasible += 1;
                continue;
            }

            let destinations = problem.destinations(current, &cargo, &pending);
            if destinations.is_empty() {
                let closed = if current == anchor {
                    Some(Route::new(state.path, state.value))
                } else {
                    objective
                        .calculate(graph, current, anchor, &cargo)
                        .map(|step| {
                            let mut path = state.path;
                            path.push(anchor);
                            Route::new(path, objective.reduce(step, state.value))
                        })
                };
                match closed {
                    Some(route) => {
                        trace!("closed route {:?} with value {}", route.path(), route.value());
                        stats.solutions += 1;
                        objective.on_new_solution(route, tracker);
                    }
                    None => stats.pruned += 1,
                }
                continue;
            }

            for next in destinations {
                let Some(step) = objective.calculate(graph, current, next, &cargo) else {
                    stats.pruned += 1;
                    continue;
                };
                let combined = objective.reduce(step, state.value);

                let mut path = Vec::with_capacity(state.path.len() + 1);
                path.extend_from_slice(&state.path);
                path.push(next);

                if !objective.should_continue_branch(combined, &path, tracker) {
                    stats.pruned += 1;
                    continue;
                }

                frontier.push(PartialRoute {
                    path,
                    cargo: cargo.clone(),
                    pending: pending.clone(),
                    value: combined,
                });
            }
        }

        debug!(
            "anchor {}: {} states expanded, best {:?}",
            graph.town_name(anchor),
            stats.expanded - expanded_before,
            tracker.best_value()
        );
    }
}
