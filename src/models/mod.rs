//! Domain model types for single-vehicle pickup and delivery.
//!
//! Packages waiting at their origin towns, the vehicle settings, and
//! closed routes with the objective value they were scored with.

mod package;
mod route;
mod settings;

pub use package::{Package, PackageIndex};
pub use route::{Route, TownId};
pub use settings::Settings;
