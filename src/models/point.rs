//! Map locations: points, clients and the depot.

use serde::{Deserialize, Serialize};

/// A named location on the map.
///
/// # Examples
///
/// ```
/// use u_drone_routing::models::Point;
///
/// let a = Point::new("A", 0.0, 0.0);
/// let b = Point::new("B", 3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: String,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point with the given identifier and coordinates.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    /// Identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// X-coordinate (m).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate (m).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Displacement vector from `self` to `other`.
    pub fn displacement_to(&self, other: &Point) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let (dx, dy) = self.displacement_to(other);
        dx.hypot(dy)
    }
}

/// A delivery client: a point with a demand drawn from drone capacity.
///
/// Two clients are the same client when their identifiers match.
///
/// # Examples
///
/// ```
/// use u_drone_routing::models::Client;
///
/// let c = Client::new("C1", 41.0, 49.0, 10);
/// assert_eq!(c.id(), "C1");
/// assert_eq!(c.demand(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    point: Point,
    demand: u32,
}

impl Client {
    /// Creates a new client.
    pub fn new(id: impl Into<String>, x: f64, y: f64, demand: u32) -> Self {
        Self {
            point: Point::new(id, x, y),
            demand,
        }
    }

    /// Identifier.
    pub fn id(&self) -> &str {
        self.point.id()
    }

    /// Location of this client.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Quantity delivered to this client.
    pub fn demand(&self) -> u32 {
        self.demand
    }

    /// Returns `true` if both refer to the same client.
    pub fn is_same(&self, other: &Client) -> bool {
        self.id() == other.id()
    }
}

/// The depot every route starts from and returns to. Demand is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    point: Point,
}

impl Depot {
    /// Creates a depot.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            point: Point::new(id, x, y),
        }
    }

    /// Creates a depot named `Depot` at the origin.
    pub fn origin() -> Self {
        Self::new("Depot", 0.0, 0.0)
    }

    /// Identifier.
    pub fn id(&self) -> &str {
        self.point.id()
    }

    /// Location of this depot.
    pub fn point(&self) -> &Point {
        &self.point
    }
}
