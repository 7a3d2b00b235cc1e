//! Package data resolved against a town graph.

use crate::distance::DistanceGraph;
use crate::models::{PackageIndex, Settings, TownId};

use super::Cargo;

/// A package with both endpoints resolved to graph towns.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    /// Package name.
    pub name: String,
    /// Town where the package is loaded.
    pub origin: TownId,
    /// Town where the package is unloaded.
    pub destination: TownId,
    /// Package weight.
    pub weight: f64,
}

/// Everything the route search needs: the graph, the packages grouped by
/// origin town, the vehicle capacity and the office.
///
/// Package towns that do not appear in the graph are collected in
/// [`unresolved`](DeliveryProblem::unresolved); such a problem has no
/// feasible route. With validation on this never happens.
///
/// # Examples
///
/// ```
/// use u_courier::distance::DistanceGraph;
/// use u_courier::input::PathRecord;
/// use u_courier::models::{Package, PackageIndex, Settings};
/// use u_courier::search::DeliveryProblem;
///
/// let graph = DistanceGraph::from_records(&[PathRecord::new("A", "B", 200.0)]);
/// let packages = PackageIndex::from_records(vec![
///     ("A".to_string(), Package::new("PR1", "B", 250.0)),
/// ]);
/// let problem = DeliveryProblem::new(&graph, &packages, &Settings::new("A", 300.0));
/// assert_eq!(problem.shipments().len(), 1);
/// assert_eq!(problem.office(), Some(0));
/// assert!(problem.is_solvable());
/// ```
#[derive(Debug, Clone)]
pub struct DeliveryProblem<'a> {
    graph: &'a DistanceGraph,
    shipments: Vec<Shipment>,
    groups: Vec<(TownId, Vec<usize>)>,
    group_of: Vec<Option<usize>>,
    capacity: f64,
    office: Option<TownId>,
    unresolved: Vec<String>,
}

impl<'a> DeliveryProblem<'a> {
    /// Resolves packages and settings against `graph`.
    pub fn new(graph: &'a DistanceGraph, packages: &PackageIndex, settings: &Settings) -> Self {
        let mut shipments = Vec::with_capacity(packages.len());
        let mut groups: Vec<(TownId, Vec<usize>)> = Vec::new();
        let mut group_of = vec![None; graph.len()];
        let mut unresolved = Vec::new();

        for (origin_name, group) in packages.iter() {
            let Some(origin) = graph.town_id(origin_name) else {
                unresolved.push(origin_name.to_string());
                continue;
            };
            let mut members = Vec::with_capacity(group.len());
            for package in group {
                let Some(destination) = graph.town_id(&package.destination) else {
                    unresolved.push(package.destination.clone());
                    continue;
                };
                members.push(shipments.len());
                shipments.push(Shipment {
                    name: package.name.clone(),
                    origin,
                    destination,
                    weight: package.weight,
                });
            }
            group_of[origin] = Some(groups.len());
            groups.push((origin, members));
        }

        Self {
            graph,
            shipments,
            groups,
            group_of,
            capacity: settings.capacity,
            office: graph.town_id(&settings.office),
            unresolved,
        }
    }

    /// The town graph.
    pub fn graph(&self) -> &'a DistanceGraph {
        self.graph
    }

    /// Resolved packages.
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// The office, if it appears in the graph.
    pub fn office(&self) -> Option<TownId> {
        self.office
    }

    /// Package towns that could not be found in the graph.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// Returns `true` if there are no packages to deliver.
    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty() && self.unresolved.is_empty()
    }

    /// Returns `true` if every package town is part of the graph.
    pub fn is_solvable(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Every origin group, as the pending set of a fresh route.
    pub fn all_pending(&self) -> Vec<usize> {
        (0..self.groups.len()).collect()
    }

    /// Origin town of a pending group.
    pub fn group_origin(&self, group: usize) -> TownId {
        self.groups[group].0
    }

    /// Packages waiting at the origin of `group`.
    pub fn group_members(&self, group: usize) -> Option<&[usize]> {
        self.groups.get(group).map(|(_, members)| members.as_slice())
    }

    /// Offloads cargo destined to `town`, then loads the packages waiting
    /// there if they are still pending.
    ///
    /// Newly loaded packages come first in the returned cargo, followed by
    /// the packages that stay aboard. The returned pending set no longer
    /// contains `town`'s group.
    pub fn transfer(&self, town: TownId, cargo: &Cargo, pending: &[usize]) -> (Cargo, Vec<usize>) {
        let mut items = Vec::with_capacity(cargo.len());
        let mut remaining = pending.to_vec();

        if let Some(group) = self.group_of.get(town).copied().flatten() {
            if let Some(pos) = remaining.iter().position(|&g| g == group) {
                remaining.remove(pos);
                items.extend_from_slice(&self.groups[group].1);
            }
        }
        items.extend(
            cargo
                .items()
                .iter()
                .copied()
                .filter(|&i| self.shipments[i].destination != town),
        );

        (Cargo::new(items, &self.shipments), remaining)
    }

    /// Distinct towns the vehicle still has to visit: destinations of the
    /// cargo aboard, then origins of pending groups, without `current`.
    pub fn destinations(&self, current: TownId, cargo: &Cargo, pending: &[usize]) -> Vec<TownId> {
        let mut towns: Vec<TownId> = Vec::new();
        let candidates = cargo
            .items()
            .iter()
            .map(|&i| self.shipments[i].destination)
            .chain(pending.iter().map(|&g| self.group_origin(g)));
        for town in candidates {
            if town != current && !towns.contains(&town) {
                towns.push(town);
            }
        }
        towns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PathRecord;
    use crate::models::Package;

    fn graph() -> DistanceGraph {
        DistanceGraph::from_records(&[
            PathRecord::new("A", "B", 1.0),
            PathRecord::new("B", "C", 2.0),
            PathRecord::new("A", "C", 2.0),
        ])
    }

    fn index() -> PackageIndex {
        PackageIndex::from_records(vec![
            ("B".to_string(), Package::new("b1", "C", 10.0)),
            ("A".to_string(), Package::new("a1", "C", 11.0)),
            ("A".to_string(), Package::new("a2", "B", 10.0)),
        ])
    }

    #[test]
    fn test_resolution() {
        let g = graph();
        let p = DeliveryProblem::new(&g, &index(), &Settings::new("A", 21.0));
        assert_eq!(p.shipments().len(), 3);
        assert_eq!(p.all_pending(), vec![0, 1]);
        assert_eq!(p.group_origin(0), 1);
        assert_eq!(p.group_origin(1), 0);
        assert_eq!(p.capacity(), 21.0);
        assert!(!p.is_empty());
    }

    #[test]
    fn test_transfer_loads_then_keeps_cargo() {
        let g = graph();
        let p = DeliveryProblem::new(&g, &index(), &Settings::new("A", 21.0));

        // at A: load a1, a2
        let (cargo, pending) = p.transfer(0, &Cargo::empty(), &p.all_pending());
        assert_eq!(cargo.items(), &[1, 2]);
        assert_eq!(cargo.weight(), 21.0);
        assert_eq!(pending, vec![0]);

        // at B: drop a2, load b1 ahead of a1
        let (cargo, pending) = p.transfer(1, &cargo, &pending);
        assert_eq!(cargo.items(), &[0, 1]);
        assert_eq!(cargo.weight(), 21.0);
        assert!(pending.is_empty());

        // at C: everything is delivered
        let (cargo, _) = p.transfer(2, &cargo, &pending);
        assert!(cargo.is_empty());
    }

    #[test]
    fn test_transfer_skips_collected_group() {
        let g = graph();
        let p = DeliveryProblem::new(&g, &index(), &Settings::new("A", 21.0));
        let (cargo, pending) = p.transfer(0, &Cargo::empty(), &[0]);
        assert!(cargo.is_empty());
        assert_eq!(pending, vec![0]);
    }

    #[test]
    fn test_destinations_order() {
        let g = graph();
        let p = DeliveryProblem::new(&g, &index(), &Settings::new("A", 21.0));
        let (cargo, pending) = p.transfer(0, &Cargo::empty(), &p.all_pending());
        // cargo a1 -> C, a2 -> B, then pending origin B (already listed)
        assert_eq!(p.destinations(0, &cargo, &pending), vec![2, 1]);
    }

    #[test]
    fn test_unresolved_towns() {
        let g = graph();
        let packages = PackageIndex::from_records(vec![
            ("A".to_string(), Package::new("x", "Nowhere", 1.0)),
            ("Elsewhere".to_string(), Package::new("y", "A", 1.0)),
        ]);
        let p = DeliveryProblem::new(&g, &packages, &Settings::new("Z", 21.0));
        assert!(!p.is_solvable());
        assert_eq!(p.unresolved(), &["Nowhere".to_string(), "Elsewhere".to_string()]);
        assert_eq!(p.office(), None);
        assert!(!p.is_empty());
    }
}
