//! Closed route type.

/// Index of a town in a [`DistanceGraph`](crate::distance::DistanceGraph).
pub type TownId = usize;

/// A town sequence together with its accumulated objective value.
///
/// Routes produced by the search are closed: the first and last town are
/// the same anchor.
///
/// # Examples
///
/// ```
/// use u_courier::models::Route;
///
/// let route = Route::new(vec![0, 1, 0], 400.0);
/// assert!(route.is_closed());
/// assert_eq!(route.hops(), 2);
/// assert_eq!(route.anchor(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    path: Vec<TownId>,
    value: f64,
}

impl Route {
    /// Creates a route from a town sequence and its value.
    pub fn new(path: Vec<TownId>, value: f64) -> Self {
        Self { path, value }
    }

    /// Towns in visiting order.
    pub fn path(&self) -> &[TownId] {
        &self.path
    }

    /// Accumulated objective value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of towns in the path, anchor counted at both ends.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the path has no towns.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of moves between towns.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// First town of the route.
    pub fn anchor(&self) -> Option<TownId> {
        self.path.first().copied()
    }

    /// Returns `true` if the route ends where it started.
    pub fn is_closed(&self) -> bool {
        !self.path.is_empty() && self.path.first() == self.path.last()
    }

    /// Consumes the route, returning its path and value.
    pub fn into_parts(self) -> (Vec<TownId>, f64) {
        (self.path, self.value)
    }
}
