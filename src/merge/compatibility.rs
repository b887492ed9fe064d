//! Compatibility checks between routes and between deliveries.

use crate::models::{Delivery, Route};

/// Returns `true` if two routes may be combined: they share a depot.
pub fn routes_compatible(a: &Route, b: &Route) -> bool {
    a.same_depot(b)
}

/// Returns `true` if two deliveries may be combined.
///
/// They must be flown by the same drone in the same wind, and their routes
/// must be compatible.
pub fn deliveries_compatible(a: &Delivery, b: &Delivery) -> bool {
    a.parameters().shares_drone_and_wind(b.parameters()) && routes_compatible(a.route(), b.route())
}
