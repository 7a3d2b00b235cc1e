//! Data provider collaborator.

use crate::error::RecordError;
use crate::models::{PackageIndex, Settings};

use super::{PackageRecord, PathRecord};

/// Source of raw path, package and settings records.
///
/// Storage and transport are up to the implementor; records use the
/// comma-delimited shapes parsed by [`PathRecord`], [`PackageRecord`] and
/// [`Settings`].
pub trait DataProvider {
    /// `"Town,Town,Distance"` records, in any order.
    fn fetch_paths(&self) -> Vec<String>;

    /// `"Origin,Name,Destination,Weight"` records.
    fn fetch_packages(&self) -> Vec<String>;

    /// A single `"Office,Capacity"` record.
    fn settings(&self) -> String;
}

/// Parsed provider contents.
#[derive(Debug, Clone)]
pub struct ProblemInput {
    /// Road records.
    pub paths: Vec<PathRecord>,
    /// Packages grouped by origin.
    pub packages: PackageIndex,
    /// Office and capacity.
    pub settings: Settings,
}

impl ProblemInput {
    /// Fetches and parses every record from `provider`.
    pub fn fetch<P: DataProvider + ?Sized>(provider: &P) -> Result<Self, RecordError> {
        let paths = provider
            .fetch_paths()
            .iter()
            .map(|r| r.parse::<PathRecord>())
            .collect::<Result<Vec<_>, _>>()?;
        let packages = provider
            .fetch_packages()
            .iter()
            .map(|r| r.parse::<PackageRecord>().map(|p| (p.origin, p.package)))
            .collect::<Result<Vec<_>, _>>()?;
        let settings = provider.settings().parse::<Settings>()?;

        Ok(Self {
            paths,
            packages: PackageIndex::from_records(packages),
            settings,
        })
    }
}

/// In-memory provider holding the raw records.
///
/// # Examples
///
/// ```
/// use u_courier::input::{DataProvider, StaticProvider};
///
/// let provider = StaticProvider::new(
///     ["A,B,200"],
///     ["A,PR1,B,250"],
///     "A,300",
/// );
/// assert_eq!(provider.fetch_paths(), vec!["A,B,200".to_string()]);
/// assert_eq!(provider.settings(), "A,300");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    paths: Vec<String>,
    packages: Vec<String>,
    settings: String,
}

impl StaticProvider {
    /// Creates a provider from path records, package records and settings.
    pub fn new<P, K>(paths: P, packages: K, settings: impl Into<String>) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            packages: packages.into_iter().map(Into::into).collect(),
            settings: settings.into(),
        }
    }

    /// Replaces the package records.
    pub fn with_packages<K>(mut self, packages: K) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
    {
        self.packages = packages.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the settings record.
    pub fn with_settings(mut self, settings: impl Into<String>) -> Self {
        self.settings = settings.into();
        self
    }
}

impl DataProvider for StaticProvider {
    fn fetch_paths(&self) -> Vec<String> {
        self.paths.clone()
    }

    fn fetch_packages(&self) -> Vec<String> {
        self.packages.clone()
    }

    fn settings(&self) -> String {
        self.settings.clone()
    }
}
