//! Vehicle settings.

use serde::{Deserialize, Serialize};

/// Depot and capacity of the single delivery vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Town every accepted route starts and ends at.
    pub office: String,
    /// Maximum total cargo weight at any point of a route.
    pub capacity: f64,
}

impl Settings {
    /// Creates new settings.
    pub fn new(office: impl Into<String>, capacity: f64) -> Self {
        Self {
            office: office.into(),
            capacity,
        }
    }
}
