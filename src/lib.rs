//! # u-courier
//!
//! Single-vehicle pickup and delivery planning: packages wait at origin
//! towns, the vehicle has a weight capacity, and the best closed route is
//! found by exhaustive branch-and-bound over a road graph.
//!
//! ## Modules
//!
//! - [`input`] — Data provider and comma-delimited record parsing
//! - [`distance`] — Town graph, distance matrix and input validation
//! - [`models`] — Domain model types (Package, PackageIndex, Settings, Route)
//! - [`objective`] — Hop count, shortest distance and fuel objectives
//! - [`search`] — Branch-and-bound route search
//! - [`evaluation`] — Route replay and feasibility checking
//! - [`planner`] — End-to-end planning and output formatting
//!
//! ## Example
//!
//! ```
//! use u_courier::input::StaticProvider;
//! use u_courier::objective::ObjectiveKind;
//!
//! let provider = StaticProvider::new(
//!     ["A,B,100", "B,C,100", "C,A,100"],
//!     ["C,P1,A,120", "B,P2,A,120"],
//!     "A,240",
//! );
//! let route = u_courier::calculate(ObjectiveKind::ShortestPath, &provider).unwrap();
//! assert!(route.ends_with(",300"));
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod input;
pub mod models;
pub mod objective;
pub mod planner;
pub mod search;

pub use error::{Error, RecordError, Result, ValidationError};
pub use objective::ObjectiveKind;
pub use planner::{calculate, Plan, Planner, PlannerConfig};
