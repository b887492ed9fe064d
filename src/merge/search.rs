//! Locating a client among deliveries.

use crate::models::{Client, Delivery};

/// Positions within a route at which a client is looked for.
///
/// `first` and `last` are the boundary positions and apply to any non-empty
/// route (a lone client is both). `interior` is strictly between them and
/// only exists in routes of three or more clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zones {
    /// First client of the route.
    pub first: bool,
    /// Clients strictly between the first and the last.
    pub interior: bool,
    /// Last client of the route.
    pub last: bool,
}

impl Zones {
    /// Head of the route only.
    pub const FIRST: Self = Self {
        first: true,
        interior: false,
        last: false,
    };

    /// Tail of the route only.
    pub const LAST: Self = Self {
        first: false,
        interior: false,
        last: true,
    };

    /// Anywhere in the route.
    pub const ANY: Self = Self {
        first: true,
        interior: true,
        last: true,
    };

    fn matches(&self, position: usize, len: usize) -> bool {
        (self.first && position == 0)
            || (self.last && position + 1 == len)
            || (self.interior && position > 0 && position + 1 < len)
    }
}

/// Index of the first delivery holding `client` in one of the given zones.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_drone_routing::merge::{search_deliveries_for_client, Zones};
/// use u_drone_routing::models::{Client, Delivery, DeliveryParameters, Depot, Drone, Route, Wind};
///
/// let depot = Arc::new(Depot::origin());
/// let params = Arc::new(
///     DeliveryParameters::new(Arc::new(Drone::default()), Arc::new(Wind::calm()), None).unwrap(),
/// );
/// let c: Vec<_> = (1..=3).map(|i| Arc::new(Client::new(format!("C{i}"), 0.0, 0.0, 1))).collect();
/// let deliveries = vec![Delivery::new(Route::new(c.clone(), depot), params)];
///
/// assert_eq!(search_deliveries_for_client(&c[2], &deliveries, Zones::LAST), Some(0));
/// assert_eq!(search_deliveries_for_client(&c[1], &deliveries, Zones::FIRST), None);
/// assert_eq!(search_deliveries_for_client(&c[1], &deliveries, Zones::ANY), Some(0));
/// ```
pub fn search_deliveries_for_client(
    client: &Client,
    deliveries: &[Delivery],
    zones: Zones,
) -> Option<usize> {
    deliveries.iter().position(|d| {
        d.route()
            .position(client)
            .is_some_and(|p| zones.matches(p, d.len()))
    })
}

/// Returns `true` if `client` is served by any of the deliveries.
pub fn is_assigned(client: &Client, deliveries: &[Delivery]) -> bool {
    search_deliveries_for_client(client, deliveries, Zones::ANY).is_some()
}
