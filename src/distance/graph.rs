//! Town graph construction and input validation.

use std::collections::HashMap;

use log::debug;

use crate::error::ValidationError;
use crate::input::PathRecord;
use crate::models::{PackageIndex, Settings, TownId};

use super::DistanceMatrix;

/// Symmetric distances between named towns.
///
/// Towns are interned in the order they first appear in the path records;
/// that order is also the order in which the search tries anchor towns.
///
/// # Examples
///
/// ```
/// use u_courier::distance::DistanceGraph;
/// use u_courier::input::PathRecord;
///
/// let graph = DistanceGraph::from_records(&[
///     PathRecord::new("A", "B", 100.0),
///     PathRecord::new("B", "C", 50.0),
/// ]);
/// let a = graph.town_id("A").unwrap();
/// let b = graph.town_id("B").unwrap();
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.distance(a, b), Some(100.0));
/// assert_eq!(graph.distance(b, a), Some(100.0));
/// assert_eq!(graph.distance_between("A", "C"), None);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceGraph {
    towns: Vec<String>,
    ids: HashMap<String, TownId>,
    distances: DistanceMatrix,
}

impl DistanceGraph {
    /// Builds the graph, inserting both directions of every record.
    ///
    /// A later record for the same pair replaces the earlier distance.
    pub fn from_records(records: &[PathRecord]) -> Self {
        let mut towns = Vec::new();
        let mut ids = HashMap::new();
        let mut intern = |name: &str| -> TownId {
            *ids.entry(name.to_string()).or_insert_with(|| {
                towns.push(name.to_string());
                towns.len() - 1
            })
        };
        let edges: Vec<(TownId, TownId, f64)> = records
            .iter()
            .map(|r| (intern(&r.from), intern(&r.to), r.distance))
            .collect();

        let mut distances = DistanceMatrix::new(towns.len());
        for (a, b, d) in edges {
            distances.set_symmetric(a, b, d);
        }

        Self {
            towns,
            ids,
            distances,
        }
    }

    /// Number of towns.
    pub fn len(&self) -> usize {
        self.towns.len()
    }

    /// Returns `true` if no path record was given.
    pub fn is_empty(&self) -> bool {
        self.towns.is_empty()
    }

    /// Town names, indexed by [`TownId`].
    pub fn towns(&self) -> &[String] {
        &self.towns
    }

    /// Looks up a town by name.
    pub fn town_id(&self, name: &str) -> Option<TownId> {
        self.ids.get(name).copied()
    }

    /// Name of a town.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn town_name(&self, id: TownId) -> &str {
        &self.towns[id]
    }

    /// Returns `true` if the town appears in any path record.
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Distance between two towns, `None` if no record joins them.
    pub fn distance(&self, from: TownId, to: TownId) -> Option<f64> {
        self.distances.get(from, to)
    }

    /// Distance between two towns looked up by name.
    pub fn distance_between(&self, from: &str, to: &str) -> Option<f64> {
        self.distance(self.town_id(from)?, self.town_id(to)?)
    }

    /// Underlying matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.distances
    }
}

/// Builds a [`DistanceGraph`] and checks the input is consistent.
///
/// Validation is on by default. It checks, in order: the office appears in
/// the paths; no package outweighs the capacity; every package origin and
/// destination appears in the paths; every triple of towns has all three
/// distances and satisfies the triangle inequality. The triple scan is
/// O(towns³) and may be skipped for trusted inputs with
/// [`with_validation(false)`](GraphBuilder::with_validation).
///
/// # Examples
///
/// ```
/// use u_courier::distance::GraphBuilder;
/// use u_courier::input::PathRecord;
/// use u_courier::models::{Package, PackageIndex, Settings};
///
/// let paths = vec![PathRecord::new("A", "B", 200.0)];
/// let packages = PackageIndex::from_records(vec![
///     ("A".to_string(), Package::new("PR1", "B", 250.0)),
/// ]);
/// let settings = Settings::new("A", 300.0);
///
/// let graph = GraphBuilder::new().build(&paths, &packages, &settings).unwrap();
/// assert_eq!(graph.len(), 2);
///
/// let tight = Settings::new("A", 200.0);
/// assert!(GraphBuilder::new().build(&paths, &packages, &tight).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    validate: bool,
}

impl GraphBuilder {
    /// Creates a builder with validation enabled.
    pub fn new() -> Self {
        Self { validate: true }
    }

    /// Enables or disables input validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Builds the graph from path records, validating it against the
    /// packages and settings when enabled.
    pub fn build(
        &self,
        paths: &[PathRecord],
        packages: &PackageIndex,
        settings: &Settings,
    ) -> Result<DistanceGraph, ValidationError> {
        let graph = DistanceGraph::from_records(paths);
        debug!(
            "built graph with {} towns from {} path records",
            graph.len(),
            paths.len()
        );

        if self.validate {
            validate_endpoints(&graph, packages, settings)?;
            validate_distances(&graph)?;
        }

        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_endpoints(
    graph: &DistanceGraph,
    packages: &PackageIndex,
    settings: &Settings,
) -> Result<(), ValidationError> {
    if !graph.contains(&settings.office) {
        return Err(ValidationError::OfficeNotInPaths {
            office: settings.office.clone(),
        });
    }

    for (_, group) in packages.iter() {
        for package in group {
            if package.weight > settings.capacity {
                return Err(ValidationError::OverweightPackage {
                    name: package.name.clone(),
                    weight: package.weight,
                    capacity: settings.capacity,
                });
            }
        }
    }

    let destinations = packages
        .iter()
        .flat_map(|(_, group)| group.iter().map(|p| p.destination.as_str()));
    if let Some(town) = destinations
        .chain(packages.origins())
        .find(|town| !graph.contains(town))
    {
        return Err(ValidationError::UnknownTown {
            town: town.to_string(),
        });
    }

    Ok(())
}

fn validate_distances(graph: &DistanceGraph) -> Result<(), ValidationError> {
    let n = graph.len();
    for f in 0..n {
        for s in (f + 1)..n {
            for t in (s + 1)..n {
                check_triple(graph, f, s, t)?;
            }
        }
    }
    Ok(())
}

fn check_triple(
    graph: &DistanceGraph,
    f: TownId,
    s: TownId,
    t: TownId,
) -> Result<(), ValidationError> {
    let names = || {
        (
            graph.town_name(f).to_string(),
            graph.town_name(s).to_string(),
            graph.town_name(t).to_string(),
        )
    };

    let (fs, ft, st) = match (
        graph.distance(f, s),
        graph.distance(f, t),
        graph.distance(s, t),
    ) {
        // three towns at zero mutual distance are reported as missing too
        (Some(fs), Some(ft), Some(st)) if fs + ft + st != 0.0 => (fs, ft, st),
        _ => {
            let (first, second, third) = names();
            return Err(ValidationError::MissingDistance {
                first,
                second,
                third,
            });
        }
    };

    let sums = [fs + ft - st, fs + st - ft, st + ft - fs];
    if sums.iter().any(|&v| v < 0.0) {
        let (first, second, third) = names();
        return Err(ValidationError::TriangleInequality {
            first,
            second,
            third,
            sums,
        });
    }

    Ok(())
}
