//! Provider records and their parsing.
//!
//! The routing core never reads storage itself; a [`DataProvider`] hands it
//! raw comma-delimited records which are parsed into typed values here.

mod provider;
mod records;

pub use provider::{DataProvider, ProblemInput, StaticProvider};
pub use records::{PackageRecord, PathRecord};
