//! Cargo and partial route states of the search frontier.

use crate::models::TownId;

use super::Shipment;

/// Packages aboard the vehicle, with their total weight.
///
/// Items are indices into [`DeliveryProblem::shipments`](super::DeliveryProblem::shipments).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cargo {
    items: Vec<usize>,
    weight: f64,
}

impl Cargo {
    /// An empty vehicle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates cargo from shipment indices, summing weights in item order.
    pub fn new(items: Vec<usize>, shipments: &[Shipment]) -> Self {
        let weight = items.iter().map(|&i| shipments[i].weight).sum();
        Self { items, weight }
    }

    /// Shipment indices aboard.
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// Total weight aboard.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of packages aboard.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is aboard.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A route under construction.
///
/// `cargo` and `pending` describe the vehicle on arrival at the last town of
/// `path`, before anything is unloaded or loaded there.
#[derive(Debug, Clone)]
pub(crate) struct PartialRoute {
    pub path: Vec<TownId>,
    pub cargo: Cargo,
    pub pending: Vec<usize>,
    pub value: f64,
}

impl PartialRoute {
    pub fn root(anchor: TownId, pending: Vec<usize>) -> Self {
        Self {
            path: vec![anchor],
            cargo: Cargo::empty(),
            pending,
            value: 0.0,
        }
    }

    pub fn current(&self) -> TownId {
        // paths are never empty: roots hold the anchor
        self.path[self.path.len() - 1]
    }
}
