//! Compatibility checks and merges of routes and deliveries.
//!
//! - [`routes_compatible`] / [`deliveries_compatible`] — may two be combined
//! - [`merge_routes`] / [`merge_deliveries`] — combine, keeping legality
//! - [`sequential_merge_if_possible`] — join through a shared end client
//! - [`search_deliveries_for_client`] — where a client already sits

mod combine;
mod compatibility;
mod search;

pub use combine::{merge_deliveries, merge_routes, sequential_merge_if_possible};
pub use compatibility::{deliveries_compatible, routes_compatible};
pub use search::{is_assigned, search_deliveries_for_client, Zones};
