//! End-to-end delivery planning: records in, formatted route out.

use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::distance::GraphBuilder;
use crate::error::Result;
use crate::input::{DataProvider, ProblemInput};
use crate::objective::ObjectiveKind;
use crate::search::{DeliveryProblem, RouteSearch, SearchConfig, SolutionTracker};

/// Configuration for a planning run.
///
/// # Examples
///
/// ```
/// use u_courier::objective::ObjectiveKind;
/// use u_courier::planner::PlannerConfig;
/// use u_courier::search::SearchConfig;
///
/// let config = PlannerConfig::default()
///     .with_objective(ObjectiveKind::MostEfficientPath)
///     .with_search(SearchConfig::default().with_parallel(true));
/// assert!(config.validate);
/// assert!(config.search.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// What the route is optimised for.
    pub objective: ObjectiveKind,

    /// Whether to check the office, package towns, weights and distances
    /// before searching.
    pub validate: bool,

    /// Search limits and parallelism.
    pub search: SearchConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            objective: ObjectiveKind::BasicPath,
            validate: true,
            search: SearchConfig::default(),
        }
    }
}

impl PlannerConfig {
    pub fn with_objective(mut self, objective: ObjectiveKind) -> Self {
        self.objective = objective;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

/// A planned route with town names resolved.
///
/// Formats as the comma-joined path, followed by the total distance for
/// [`ObjectiveKind::ShortestPath`] or the fuel with four decimals for
/// [`ObjectiveKind::MostEfficientPath`]. An empty plan formats as `""`.
///
/// # Examples
///
/// ```
/// use u_courier::objective::ObjectiveKind;
/// use u_courier::planner::Plan;
///
/// let plan = Plan {
///     objective: ObjectiveKind::MostEfficientPath,
///     path: vec!["A".into(), "B".into(), "A".into()],
///     value: 33.6,
/// };
/// assert_eq!(plan.to_string(), "A,B,A,33.6000");
/// assert_eq!(Plan::empty(ObjectiveKind::ShortestPath).to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Objective the route was optimised for.
    pub objective: ObjectiveKind,
    /// Town names, first and last being the anchor.
    pub path: Vec<String>,
    /// Objective value of the route.
    pub value: f64,
}

impl Plan {
    /// A plan with no route.
    pub fn empty(objective: ObjectiveKind) -> Self {
        Self {
            objective,
            path: Vec::new(),
            value: 0.0,
        }
    }

    /// Returns `true` if no route was found.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        f.write_str(&self.path.join(","))?;
        match self.objective {
            ObjectiveKind::BasicPath => Ok(()),
            ObjectiveKind::ShortestPath => write!(f, ",{}", self.value),
            ObjectiveKind::MostEfficientPath => write!(f, ",{:.4}", self.value),
        }
    }
}

/// Plans a delivery route from provider records.
///
/// # Examples
///
/// ```
/// use u_courier::input::StaticProvider;
/// use u_courier::objective::ObjectiveKind;
/// use u_courier::planner::{Planner, PlannerConfig};
///
/// let provider = StaticProvider::new(["A,B,200"], ["A,PR1,B,250"], "A,300");
/// let planner = Planner::new(PlannerConfig::default().with_objective(ObjectiveKind::ShortestPath));
///
/// let plan = planner.plan(&provider).unwrap();
/// assert_eq!(plan.to_string(), "A,B,A,400");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl Planner {
    /// Creates a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Stops the search as soon as `flag` is set; the best route found so
    /// far is returned.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Fetches records from `provider` and plans a route.
    pub fn plan<P: DataProvider + ?Sized>(&self, provider: &P) -> Result<Plan> {
        let input = ProblemInput::fetch(provider)?;
        self.plan_input(&input)
    }

    /// Plans a route for already parsed input.
    pub fn plan_input(&self, input: &ProblemInput) -> Result<Plan> {
        let kind = self.config.objective;
        let graph = GraphBuilder::new()
            .with_validation(self.config.validate)
            .build(&input.paths, &input.packages, &input.settings)?;

        if input.packages.is_empty() {
            debug!("no packages, returning an empty plan");
            return Ok(Plan::empty(kind));
        }

        let problem = DeliveryProblem::new(&graph, &input.packages, &input.settings);
        let objective = kind.build(problem.office());

        let mut search = RouteSearch::new(&problem, objective.as_ref(), self.config.search.clone());
        if let Some(flag) = &self.cancel {
            search = search.with_cancel(Arc::clone(flag));
        }

        let mut tracker = SolutionTracker::new();
        search.run(&mut tracker);

        let Some(route) = tracker.into_best() else {
            info!("{kind}: no feasible route");
            return Ok(Plan::empty(kind));
        };
        let (path, value) = route.into_parts();
        Ok(Plan {
            objective: kind,
            path: path
                .into_iter()
                .map(|town| graph.town_name(town).to_string())
                .collect(),
            value,
        })
    }
}

/// Plans a route for `kind` with default settings and formats it.
///
/// # Examples
///
/// ```
/// use u_courier::input::StaticProvider;
/// use u_courier::objective::ObjectiveKind;
/// use u_courier::planner::calculate;
///
/// let provider = StaticProvider::new(["A,B,200"], ["A,PR1,B,250"], "A,300");
/// assert_eq!(calculate(ObjectiveKind::BasicPath, &provider).unwrap(), "A,B,A");
/// ```
pub fn calculate<P: DataProvider + ?Sized>(kind: ObjectiveKind, provider: &P) -> Result<String> {
    let plan = Planner::new(PlannerConfig::default().with_objective(kind)).plan(provider)?;
    Ok(plan.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ValidationError};
    use crate::input::StaticProvider;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn run(kind: ObjectiveKind, paths: &[&str], packages: &[&str], settings: &str) -> String {
        init_logger();
        let provider = StaticProvider::new(paths.iter().copied(), packages.iter().copied(), settings);
        calculate(kind, &provider).expect("valid input")
    }

    fn reversed<'a>(records: &[&'a str]) -> Vec<&'a str> {
        records.iter().rev().copied().collect()
    }

    const FOUR_TOWNS: [&str; 6] = [
        "TownB,TownC,2",
        "TownA,TownC,2",
        "TownA,TownB,1",
        "TownD,TownA,4",
        "TownD,TownB,4",
        "TownD,TownC,4",
    ];

    const TRIANGLE: [&str; 3] = [
        "София,Ивайловград,100",
        "Ивайловград,Пловдив,100",
        "Пловдив,София,100",
    ];

    const TRIANGLE_PACKAGES: [&str; 2] = [
        "Пловдив,PL_SOf_120,София,120",
        "Ивайловград,IVA_SOf_120,София,120",
    ];

    const WHEEL_PACKAGES: [&str; 9] = [
        "TownA,PR_NAME3,TownB,500",
        "TownB,PR_NAME3,TownC,500",
        "TownC,PR_NAME3,TownD,500",
        "TownD,PR_NAME3,TownE,500",
        "TownE,PR_NAME3,TownF,500",
        "TownF,PR_NAME3,TownG,500",
        "TownG,PR_NAME3,TownH,500",
        "TownA,PR_NAME2,TownH,500",
        "TownH,PR_NAME2,TownB,1",
    ];

    /// Ring A..H with H in the middle, every distance scaled by `unit`.
    fn wheel(unit: u32) -> Vec<String> {
        let edges: [(&str, &str, u32); 29] = [
            ("A", "B", 1),
            ("B", "C", 1),
            ("C", "D", 1),
            ("D", "E", 1),
            ("E", "F", 1),
            ("F", "G", 1),
            ("G", "H", 1),
            ("A", "H", 2),
            ("B", "H", 2),
            ("C", "H", 2),
            ("D", "H", 2),
            ("E", "H", 2),
            ("F", "H", 2),
            ("G", "H", 2),
            ("A", "C", 2),
            ("A", "D", 3),
            ("A", "E", 3),
            ("A", "F", 2),
            ("A", "G", 1),
            ("B", "D", 2),
            ("B", "E", 3),
            ("B", "F", 3),
            ("B", "G", 2),
            ("C", "E", 2),
            ("C", "F", 3),
            ("C", "G", 3),
            ("D", "F", 2),
            ("D", "G", 3),
            ("E", "G", 2),
        ];
        edges
            .iter()
            .map(|(a, b, d)| format!("Town{a},Town{b},{}", d * unit))
            .collect()
    }

    #[test]
    fn test_no_packages() {
        for kind in ObjectiveKind::ALL {
            assert_eq!(run(kind, &TRIANGLE, &[], "София,100"), "");
        }
    }

    #[test]
    fn test_two_towns() {
        let plan = run(
            ObjectiveKind::BasicPath,
            &["София,Енина,200"],
            &["София,PR_NAME3,Енина,250", "Енина,PR_NAME1,София,250"],
            "София,300",
        );
        assert_eq!(plan, "София,Енина,София");
    }

    #[test]
    fn test_office_and_capacity_from_settings() {
        let plan = run(
            ObjectiveKind::BasicPath,
            &["TownB,TownC,2", "TownA,TownC,2", "TownA,TownB,1"],
            &[
                "TownB,Product4,TownC,10",
                "TownA,PR_NAME3,TownC,11",
                "TownA,PR_NAME3,TownB,10",
            ],
            "TownA,21",
        );
        assert_eq!(plan, "TownA,TownB,TownC,TownA");
    }

    #[test]
    fn test_cannot_deliver_immediately() {
        let plan = run(
            ObjectiveKind::BasicPath,
            &FOUR_TOWNS,
            &[
                "TownA,Product4,TownB,10",
                "TownA,PR_NAME3,TownC,10",
                "TownB,PR_NAME3,TownC,20",
                "TownC,PR_NAME3,TownD,1",
            ],
            "TownA,21",
        );
        let expected = [
            "TownA,TownC,TownD,TownB,TownC,TownA",
            "TownA,TownC,TownB,TownC,TownD,TownA",
            "TownA,TownC,TownB,TownD,TownC,TownA",
        ];
        assert!(expected.contains(&plan.as_str()), "unexpected route {plan}");
    }

    #[test]
    fn test_back_and_forth_to_office() {
        let plan = run(
            ObjectiveKind::BasicPath,
            &FOUR_TOWNS,
            &[
                "TownA,Product4,TownB,10",
                "TownB,PR_NAME3,TownA,10",
                "TownC,PR_NAME3,TownA,10",
                "TownD,PR_NAME3,TownA,1",
                "TownA,PR_NAME3,TownD,1",
            ],
            "TownA,11",
        );
        let expected = [
            "TownA,TownB,TownA,TownC,TownD,TownA",
            "TownA,TownB,TownA,TownD,TownC,TownA",
            "TownA,TownB,TownD,TownA,TownC,TownA",
            "TownA,TownD,TownB,TownA,TownC,TownA",
        ];
        assert!(expected.contains(&plan.as_str()), "unexpected route {plan}");
    }

    #[test]
    fn test_circular_deliveries() {
        let mut paths = FOUR_TOWNS.to_vec();
        paths.extend([
            "TownD,TownE,4",
            "TownD,TownF,4",
            "TownF,TownE,8",
            "TownA,TownE,8",
            "TownB,TownE,8",
            "TownC,TownE,8",
            "TownA,TownF,8",
            "TownB,TownF,8",
            "TownC,TownF,8",
        ]);
        let plan = run(
            ObjectiveKind::BasicPath,
            &paths,
            &[
                "TownA,Product4,TownB,1",
                "TownB,Product4,TownC,1",
                "TownB,Product4,TownA,1",
                "TownC,Product4,TownD,1",
                "TownC,Product4,TownA,1",
                "TownD,Product4,TownE,1",
                "TownD,Product4,TownA,1",
                "TownE,Product4,TownF,1",
                "TownE,Product4,TownA,1",
            ],
            "TownA,11",
        );
        assert_eq!(plan, "TownA,TownB,TownC,TownD,TownE,TownF,TownA");
    }

    #[test]
    fn test_ignores_towns_without_packages() {
        let plan = run(
            ObjectiveKind::BasicPath,
            &FOUR_TOWNS,
            &[
                "TownA,Product4,TownB,10",
                "TownB,PR_NAME3,TownC,10",
                "TownC,PR_NAME3,TownA,10",
            ],
            "TownA,10",
        );
        assert_eq!(plan, "TownA,TownB,TownC,TownA");
    }

    #[test]
    fn test_shortest_without_immediate_delivery() {
        let plan = run(ObjectiveKind::ShortestPath, &TRIANGLE, &TRIANGLE_PACKAGES, "София,240");
        let expected = [
            "София,Пловдив,Ивайловград,София,300",
            "София,Ивайловград,Пловдив,София,300",
            "Ивайловград,Пловдив,София,Ивайловград,300",
            "Пловдив,Ивайловград,София,Пловдив,300",
        ];
        assert!(expected.contains(&plan.as_str()), "unexpected route {plan}");
    }

    #[test]
    fn test_shortest_single_solution() {
        let paths = wheel(2);
        let paths: Vec<&str> = paths.iter().map(String::as_str).rev().collect();
        let plan = run(
            ObjectiveKind::ShortestPath,
            &paths,
            &reversed(&WHEEL_PACKAGES),
            "TownE,1001",
        );
        assert_eq!(plan, "TownH,TownA,TownB,TownC,TownD,TownE,TownF,TownG,TownH,18");
    }

    #[test]
    fn test_fuel_without_immediate_delivery() {
        let plan = run(
            ObjectiveKind::MostEfficientPath,
            &TRIANGLE,
            &TRIANGLE_PACKAGES,
            "София,240",
        );
        let expected = [
            "София,Пловдив,Ивайловград,София,33.6000",
            "София,Ивайловград,Пловдив,София,33.6000",
            "Ивайловград,Пловдив,София,Ивайловград,33.6000",
            "Пловдив,Ивайловград,София,Пловдив,33.6000",
        ];
        assert!(expected.contains(&plan.as_str()), "unexpected route {plan}");
    }

    #[test]
    fn test_fuel_differs_from_shortest() {
        let plan = run(
            ObjectiveKind::MostEfficientPath,
            &["TownA,TownC,2", "TownA,TownB,1", "TownB,TownC,2"],
            &[
                "TownA,PR_NAME3,TownB,500",
                "TownB,PR_NAME1,TownA,500",
                "TownB,PR_NAME2,TownC,1",
                "TownA,PR_NAME4,TownC,1",
            ],
            "TownA,502",
        );
        let expected = [
            "TownA,TownB,TownA,TownC,TownA,0.7007",
            "TownC,TownA,TownB,TownA,TownC,0.7007",
            "TownC,TownB,TownA,TownB,TownC,0.7007",
            "TownB,TownA,TownB,TownC,TownB,0.7007",
        ];
        assert!(expected.contains(&plan.as_str()), "unexpected route {plan}");
    }

    #[test]
    fn test_fuel_single_solution() {
        let paths = wheel(1);
        let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
        let plan = run(
            ObjectiveKind::MostEfficientPath,
            &paths,
            &WHEEL_PACKAGES,
            "TownE,1001",
        );
        assert_eq!(plan, "TownH,TownA,TownB,TownC,TownD,TownE,TownF,TownG,TownH,1.8003");
    }

    /// 26 towns on a line, few packages.
    fn line_of_towns() -> (Vec<String>, [&'static str; 8]) {
        let mut paths = Vec::new();
        for start in 1u8..=25 {
            for end in start + 1..=26 {
                let from = (b'@' + start) as char;
                let to = (b'@' + end) as char;
                paths.push(format!("Town{from},Town{to},{}", end - start));
            }
        }
        let packages = [
            "TownC,PR_NAME5,TownA,50",
            "TownA,PR_NAME1,TownB,100",
            "TownA,PR_NAME2,TownB,100",
            "TownB,PR_NAME3,TownA,100",
            "TownC,PR_NAME4,TownB,50",
            "TownC,PR_NAME6,TownD,152",
            "TownY,PR_NAME7,TownA,41",
            "TownY,PR_NAME7,TownZ,27",
        ];
        (paths, packages)
    }

    #[test]
    fn test_many_towns_few_packages() {
        let (paths, packages) = line_of_towns();
        let paths: Vec<&str> = paths.iter().map(String::as_str).collect();

        let shortest = run(ObjectiveKind::ShortestPath, &paths, &packages, "TownE,1001");
        assert_eq!(shortest, "TownA,TownC,TownY,TownZ,TownD,TownB,TownA,50");

        let fuel = run(ObjectiveKind::MostEfficientPath, &paths, &packages, "TownE,1001");
        assert_eq!(fuel, "TownD,TownY,TownZ,TownC,TownB,TownA,TownB,TownD,5.2303");
    }

    #[test]
    fn test_unknown_destination_is_rejected() {
        let provider = StaticProvider::new(TRIANGLE, ["София,P1,Варна,10"], "София,100");
        let err = calculate(ObjectiveKind::ShortestPath, &provider).unwrap_err();
        assert_eq!(
            err,
            Error::Validation(ValidationError::UnknownTown {
                town: "Варна".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_town_without_validation() {
        let provider = StaticProvider::new(TRIANGLE, ["София,P1,Варна,10"], "София,100");
        let plan = Planner::new(
            PlannerConfig::default()
                .with_objective(ObjectiveKind::ShortestPath)
                .with_validation(false),
        )
        .plan(&provider)
        .expect("validation is off");
        assert!(plan.is_empty());
    }

    #[test]
    fn test_malformed_record() {
        let provider = StaticProvider::new(["A,B"], ["A,P1,B,1"], "A,10");
        assert!(matches!(
            calculate(ObjectiveKind::BasicPath, &provider),
            Err(Error::Record(_))
        ));
    }

    #[test]
    fn test_no_feasible_route() {
        // both packages are loaded together at A
        let provider = StaticProvider::new(["A,B,1"], ["A,P1,B,6", "A,P2,B,6"], "A,10");
        assert_eq!(calculate(ObjectiveKind::ShortestPath, &provider).unwrap(), "");
    }

    #[test]
    fn test_parallel_plan_matches_sequential() {
        let provider = StaticProvider::new(FOUR_TOWNS, [
            "TownA,Product4,TownB,10",
            "TownA,PR_NAME3,TownC,10",
            "TownB,PR_NAME3,TownC,20",
            "TownC,PR_NAME3,TownD,1",
        ], "TownA,21");
        for kind in ObjectiveKind::ALL {
            let config = PlannerConfig::default().with_objective(kind);
            let sequential = Planner::new(config.clone()).plan(&provider).unwrap();
            let parallel = Planner::new(
                config.with_search(SearchConfig::default().with_parallel(true)),
            )
            .plan(&provider)
            .unwrap();
            assert_eq!(sequential, parallel);
        }
    }

    #[test]
    fn test_cancelled_plan_is_empty() {
        let provider = StaticProvider::new(TRIANGLE, TRIANGLE_PACKAGES, "София,240");
        let plan = Planner::new(PlannerConfig::default())
            .with_cancel(Arc::new(AtomicBool::new(true)))
            .plan(&provider)
            .unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_display() {
        let path: Vec<String> = vec!["A".into(), "B".into(), "A".into()];
        let plan = |objective, value| Plan {
            objective,
            path: path.clone(),
            value,
        };
        assert_eq!(plan(ObjectiveKind::BasicPath, 2.0).to_string(), "A,B,A");
        assert_eq!(plan(ObjectiveKind::ShortestPath, 864.0).to_string(), "A,B,A,864");
        assert_eq!(plan(ObjectiveKind::ShortestPath, 2.5).to_string(), "A,B,A,2.5");
        assert_eq!(plan(ObjectiveKind::MostEfficientPath, 0.7007).to_string(), "A,B,A,0.7007");
    }

    #[test]
    fn test_config_serde() {
        let config = PlannerConfig::default()
            .with_objective(ObjectiveKind::ShortestPath)
            .with_search(SearchConfig::default().with_max_expansions(500));
        let json = serde_json::to_string(&config).unwrap();
        let back: PlannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let partial: PlannerConfig =
            serde_json::from_str(r#"{"objective":"MostEfficientPath"}"#).unwrap();
        assert_eq!(partial.objective, ObjectiveKind::MostEfficientPath);
        assert!(partial.validate);
        assert_eq!(partial.search, SearchConfig::default());
    }

    mod properties {
        use proptest::prelude::*;

        use super::super::*;
        use crate::distance::DistanceGraph;
        use crate::evaluation::RouteEvaluator;
        use crate::input::PathRecord;
        use crate::models::{Package, PackageIndex, Settings};
        use crate::objective::round4;

        const TOWNS: [&str; 5] = ["T0", "T1", "T2", "T3", "T4"];

        /// Complete graph on `n` towns with distances in 5..=10, which always
        /// satisfies the triangle inequality.
        fn instance() -> impl Strategy<Value = (Vec<PathRecord>, PackageIndex, f64)> {
            (3usize..=5).prop_flat_map(|n| {
                let pairs = n * (n - 1) / 2;
                (
                    prop::collection::vec(5u32..=10, pairs),
                    prop::collection::vec((0..n, 0..n, 1u32..=50), 1..=3),
                    50u32..=150,
                )
                    .prop_map(move |(distances, packages, capacity)| {
                        let mut paths = Vec::new();
                        let mut d = distances.into_iter();
                        for a in 0..n {
                            for b in a + 1..n {
                                paths.push(PathRecord::new(TOWNS[a], TOWNS[b], d.next().unwrap_or(5) as f64));
                            }
                        }
                        let index = PackageIndex::from_records(
                            packages
                                .into_iter()
                                .filter(|(o, t, _)| o != t)
                                .enumerate()
                                .map(|(i, (o, t, w))| {
                                    (TOWNS[o].to_string(), Package::new(format!("P{i}"), TOWNS[t], w as f64))
                                }),
                        );
                        (paths, index, capacity as f64)
                    })
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn routes_are_closed_complete_and_within_capacity((paths, packages, capacity) in instance()) {
                let settings = Settings::new("T0", capacity);
                let input = ProblemInput { paths, packages, settings };
                let graph = DistanceGraph::from_records(&input.paths);
                let problem = DeliveryProblem::new(&graph, &input.packages, &input.settings);

                for kind in ObjectiveKind::ALL {
                    let plan = Planner::new(PlannerConfig::default().with_objective(kind))
                        .plan_input(&input)
                        .unwrap();
                    if input.packages.is_empty() {
                        prop_assert!(plan.is_empty());
                        continue;
                    }
                    if plan.is_empty() {
                        // a whole origin group can outweigh the capacity
                        continue;
                    }

                    let path: Vec<_> = plan
                        .path
                        .iter()
                        .filter_map(|name| graph.town_id(name))
                        .collect();
                    prop_assert_eq!(path.len(), plan.path.len());

                    let objective = kind.build(problem.office());
                    let (value, violations) =
                        RouteEvaluator::new(&problem, objective.as_ref()).evaluate(&path);
                    prop_assert!(violations.is_empty(), "{:?}", violations);
                    prop_assert_eq!(value, plan.value);
                    if kind == ObjectiveKind::MostEfficientPath {
                        prop_assert_eq!(round4(value), value);
                    }
                    if kind == ObjectiveKind::BasicPath {
                        prop_assert_eq!(plan.path.first().map(String::as_str), Some("T0"));
                    }
                }
            }

            #[test]
            fn more_capacity_never_costs_more((paths, packages, capacity) in instance()) {
                prop_assume!(!packages.is_empty());
                let tight = ProblemInput {
                    paths: paths.clone(),
                    packages: packages.clone(),
                    settings: Settings::new("T0", capacity),
                };
                let loose = ProblemInput {
                    paths,
                    packages,
                    settings: Settings::new("T0", capacity + 100.0),
                };
                let planner = Planner::new(PlannerConfig::default().with_objective(ObjectiveKind::ShortestPath));
                let tight = planner.plan_input(&tight).unwrap();
                let loose = planner.plan_input(&loose).unwrap();
                if !tight.is_empty() {
                    prop_assert!(!loose.is_empty());
                    prop_assert!(loose.value <= tight.value);
                }
            }
        }
    }
}
