//! Location type.

use serde::{Deserialize, Serialize};

/// A point to visit in a travelling salesman problem.
///
/// Location 0 is conventionally the depot. Coordinates are only needed to
/// derive Euclidean distances or to draw a tour; the search itself works on
/// the distance matrix alone.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
///
/// let depot = Location::depot(0.0, 0.0);
/// assert_eq!(depot.id(), 0);
///
/// let l = Location::new(1, 3.0, 4.0);
/// assert!((depot.distance_to(&l) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a location with the given index and coordinates.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Creates a depot at the given coordinates (id = 0).
    pub fn depot(x: f64, y: f64) -> Self {
        Self::new(0, x, y)
    }

    /// Location index.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Builds locations from `(x, y)` pairs, numbering them in order.
///
/// ```
/// use u_tsp::models::locations_from_points;
///
/// let locs = locations_from_points(&[(50.0, 50.0), (49.0, 31.0)]);
/// assert_eq!(locs[1].id(), 1);
/// assert_eq!(locs[1].y(), 31.0);
/// ```
pub fn locations_from_points(points: &[(f64, f64)]) -> Vec<Location> {
    points
        .iter()
        .enumerate()
        .map(|(id, &(x, y))| Location::new(id, x, y))
        .collect()
}
