//! Error types.

use thiserror::Error as ThisError;

/// Input rejected by the graph builder before any search runs.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ValidationError {
    /// The office does not appear in any path record.
    #[error("office {office} is not among the paths")]
    OfficeNotInPaths {
        /// Configured office town.
        office: String,
    },
    /// A package origin or destination does not appear in any path record.
    #[error("package town {town} is not among the paths")]
    UnknownTown {
        /// Offending town.
        town: String,
    },
    /// A single package is heavier than the vehicle can carry.
    #[error("package {name} weighs {weight}, more than capacity {capacity}")]
    OverweightPackage {
        /// Package name.
        name: String,
        /// Package weight.
        weight: f64,
        /// Vehicle capacity.
        capacity: f64,
    },
    /// One of the three pairwise distances between towns is absent.
    #[error("missing distance between {first}, {second} and {third}")]
    MissingDistance {
        /// First town of the triple.
        first: String,
        /// Second town of the triple.
        second: String,
        /// Third town of the triple.
        third: String,
    },
    /// The three pairwise distances violate the triangle inequality.
    #[error("inconsistent distances between {first}, {second} and {third}: {sums:?}")]
    TriangleInequality {
        /// First town of the triple.
        first: String,
        /// Second town of the triple.
        second: String,
        /// Third town of the triple.
        third: String,
        /// The three triangle sums that were checked.
        sums: [f64; 3],
    },
}

/// Record kind, used to tell which provider feed a bad record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `Town,Town,Distance`
    Path,
    /// `Origin,Name,Destination,Weight`
    Package,
    /// `Office,Capacity`
    Settings,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Path => "path",
            RecordKind::Package => "package",
            RecordKind::Settings => "settings",
        };
        f.write_str(name)
    }
}

/// A provider record that could not be split into typed fields.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum RecordError {
    #[error("{kind} record {record:?} has {found} fields, expected {expected}")]
    FieldCount {
        kind: RecordKind,
        record: String,
        expected: usize,
        found: usize,
    },
    #[error("{kind} record {record:?} has an empty town or name")]
    EmptyField { kind: RecordKind, record: String },
    #[error("{kind} record {record:?}: {value:?} is not a finite non-negative number")]
    InvalidNumber {
        kind: RecordKind,
        record: String,
        value: String,
    },
}

/// Crate-level error.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

pub type Result<T> = std::result::Result<T, Error>;
