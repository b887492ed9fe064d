//! Domain model types for drone delivery problems.
//!
//! Provides points, clients and the depot, drone and wind parameters, routes
//! as ordered client sequences, deliveries (a route flown with given
//! parameters), solutions, and the problem that records them.

mod delivery;
mod drone;
mod point;
mod problem;
mod route;
mod solution;

pub use delivery::{Delivery, DeliveryParameters};
pub use drone::{Drone, Wind};
pub use point::{Client, Depot, Point};
pub use problem::Problem;
pub use route::Route;
pub use solution::Solution;
