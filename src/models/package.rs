//! Packages and the per-origin package index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A package waiting to be carried from its origin town to `destination`.
///
/// The origin is implicit: it is the key under which the package is stored
/// in a [`PackageIndex`].
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
///
/// let p = Package::new("fridge", "Plovdiv", 100.0);
/// assert_eq!(p.destination, "Plovdiv");
/// assert_eq!(p.weight, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Package label. Not required to be unique.
    pub name: String,
    /// Town where the package is unloaded.
    pub destination: String,
    /// Package weight, in the same unit as the vehicle capacity.
    pub weight: f64,
}

impl Package {
    /// Creates a new package.
    pub fn new(name: impl Into<String>, destination: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
            weight,
        }
    }
}

/// Packages grouped by the town where they become available for loading.
///
/// Origins are kept in first-appearance order and packages keep their input
/// order within an origin, so iteration is deterministic.
///
/// # Examples
///
/// ```
/// use u_courier::models::{Package, PackageIndex};
///
/// let index = PackageIndex::from_records(vec![
///     ("Sofia".to_string(), Package::new("a", "Plovdiv", 10.0)),
///     ("Ruse".to_string(), Package::new("b", "Sofia", 5.0)),
///     ("Sofia".to_string(), Package::new("c", "Ruse", 1.0)),
/// ]);
/// assert_eq!(index.origins().collect::<Vec<_>>(), vec!["Sofia", "Ruse"]);
/// assert_eq!(index.get("Sofia").len(), 2);
/// assert_eq!(index.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    groups: Vec<(String, Vec<Package>)>,
    positions: HashMap<String, usize>,
}

impl PackageIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups `(origin, package)` pairs by origin.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, Package)>,
    {
        let mut index = Self::new();
        for (origin, package) in records {
            index.insert(origin, package);
        }
        index
    }

    /// Appends a package to its origin's list.
    pub fn insert(&mut self, origin: String, package: Package) {
        match self.positions.get(&origin) {
            Some(&pos) => self.groups[pos].1.push(package),
            None => {
                self.positions.insert(origin.clone(), self.groups.len());
                self.groups.push((origin, vec![package]));
            }
        }
    }

    /// Packages waiting at `origin`, empty if there are none.
    pub fn get(&self, origin: &str) -> &[Package] {
        self.positions
            .get(origin)
            .map(|&pos| self.groups[pos].1.as_slice())
            .unwrap_or(&[])
    }

    /// Origin towns in first-appearance order.
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(origin, _)| origin.as_str())
    }

    /// Iterates over `(origin, packages)` groups.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Package])> {
        self.groups
            .iter()
            .map(|(origin, packages)| (origin.as_str(), packages.as_slice()))
    }

    /// Total number of packages.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, packages)| packages.len()).sum()
    }

    /// Returns `true` if there are no packages at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
