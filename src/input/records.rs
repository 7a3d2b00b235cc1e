//! Comma-delimited provider records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordKind};
use crate::models::{Package, Settings};

/// An undirected road between two towns, `"Town,Town,Distance"`.
///
/// # Examples
///
/// ```
/// use u_courier::input::PathRecord;
///
/// let r: PathRecord = "Sofia,Plovdiv,146".parse().unwrap();
/// assert_eq!(r.from, "Sofia");
/// assert_eq!(r.to, "Plovdiv");
/// assert_eq!(r.distance, 146.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    /// One end of the road.
    pub from: String,
    /// The other end of the road.
    pub to: String,
    /// Road length.
    pub distance: f64,
}

impl PathRecord {
    /// Creates a new path record.
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

impl FromStr for PathRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(RecordKind::Path, s, 3)?;
        Ok(Self {
            from: fields[0].to_string(),
            to: fields[1].to_string(),
            distance: parse_number(RecordKind::Path, s, fields[2])?,
        })
    }
}

/// A package waiting at `origin`, `"Origin,Name,Destination,Weight"`.
///
/// # Examples
///
/// ```
/// use u_courier::input::PackageRecord;
///
/// let r: PackageRecord = "Sofia,fridge,Plovdiv,100".parse().unwrap();
/// assert_eq!(r.origin, "Sofia");
/// assert_eq!(r.package.name, "fridge");
/// assert_eq!(r.package.weight, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Town where the package is loaded.
    pub origin: String,
    /// The package itself.
    pub package: Package,
}

impl PackageRecord {
    /// Creates a new package record.
    pub fn new(
        origin: impl Into<String>,
        name: impl Into<String>,
        destination: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            package: Package::new(name, destination, weight),
        }
    }
}

impl FromStr for PackageRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(RecordKind::Package, s, 4)?;
        let weight = parse_number(RecordKind::Package, s, fields[3])?;
        Ok(Self::new(fields[0], fields[1], fields[2], weight))
    }
}

impl FromStr for Settings {
    type Err = RecordError;

    /// Parses `"Office,Capacity"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(RecordKind::Settings, s, 2)?;
        let capacity = parse_number(RecordKind::Settings, s, fields[1])?;
        Ok(Settings::new(fields[0], capacity))
    }
}

fn split_fields(kind: RecordKind, record: &str, expected: usize) -> Result<Vec<&str>, RecordError> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(RecordError::FieldCount {
            kind,
            record: record.to_string(),
            expected,
            found: fields.len(),
        });
    }
    // the trailing field is numeric and checked separately
    if fields[..expected - 1].iter().any(|f| f.is_empty()) {
        return Err(RecordError::EmptyField {
            kind,
            record: record.to_string(),
        });
    }
    Ok(fields)
}

fn parse_number(kind: RecordKind, record: &str, value: &str) -> Result<f64, RecordError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| RecordError::InvalidNumber {
            kind,
            record: record.to_string(),
            value: value.to_string(),
        })
}
