//! Route and delivery merges.
//!
//! A merge never edits its inputs. It returns a new route or delivery when
//! the result is legal, and `None` otherwise.

use log::trace;

use crate::models::{Delivery, Route};

use super::{deliveries_compatible, routes_compatible};

/// Merges route `a` followed by route `b`.
///
/// When the last client of `a` is the first client of `b` the shared client
/// is kept once. With `require_common_client` that shared boundary client is
/// mandatory; without it, routes that do not touch are simply concatenated.
///
/// Returns `None` if the routes are incompatible or the result visits a
/// client twice.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_drone_routing::merge::merge_routes;
/// use u_drone_routing::models::{Client, Depot, Route};
///
/// let depot = Arc::new(Depot::origin());
/// let c1 = Arc::new(Client::new("C1", 1.0, 0.0, 1));
/// let c2 = Arc::new(Client::new("C2", 2.0, 0.0, 1));
/// let c3 = Arc::new(Client::new("C3", 3.0, 0.0, 1));
///
/// let a = Route::new(vec![c1, c2.clone()], depot.clone());
/// let b = Route::new(vec![c2, c3], depot);
/// let merged = merge_routes(&a, &b, true).unwrap();
/// assert_eq!(merged.client_ids(), vec!["C1", "C2", "C3"]);
/// assert!(merge_routes(&b, &a, true).is_none());
/// ```
pub fn merge_routes(a: &Route, b: &Route, require_common_client: bool) -> Option<Route> {
    if !routes_compatible(a, b) {
        return None;
    }

    let shared_boundary = match (a.last(), b.first()) {
        (Some(tail), Some(head)) => tail.is_same(head),
        _ => false,
    };
    if require_common_client && !shared_boundary {
        return None;
    }

    let skip = usize::from(shared_boundary);
    let clients = a
        .clients()
        .iter()
        .chain(b.clients().iter().skip(skip))
        .cloned()
        .collect();

    let merged = Route::new(clients, a.depot().clone());
    merged.is_legal().then_some(merged)
}

/// Merges delivery `a` followed by delivery `b`.
///
/// The result keeps `a`'s parameters. Returns `None` if the deliveries are
/// incompatible, the routes cannot be merged, or the merged delivery exceeds
/// the drone capacity.
pub fn merge_deliveries(
    a: &Delivery,
    b: &Delivery,
    require_common_client: bool,
) -> Option<Delivery> {
    if !deliveries_compatible(a, b) {
        return None;
    }
    let route = merge_routes(a.route(), b.route(), require_common_client)?;
    let merged = Delivery::new(route, a.parameters().clone());
    merged.is_legal().then_some(merged)
}

/// Joins two deliveries through a shared boundary client, in either order.
///
/// If either delivery is empty the other is appended without a shared client.
/// Otherwise `a` then `b` is tried first, and `b` then `a` second.
pub fn sequential_merge_if_possible(a: &Delivery, b: &Delivery) -> Option<Delivery> {
    if a.is_empty() || b.is_empty() {
        return merge_deliveries(a, b, false);
    }
    let merged = merge_deliveries(a, b, true).or_else(|| merge_deliveries(b, a, true));
    if let Some(d) = &merged {
        trace!("joined deliveries into {:?}", d.route().client_ids());
    }
    merged
}
