//! # u-drone-routing
//!
//! Drone delivery routing under wind: an energy cost model for flight legs
//! and Clarke-Wright savings construction of delivery routes.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Client, Depot, Drone, Wind, Route, Delivery, Solution, Problem)
//! - [`cost`] — Energy cost of a leg under wind (constant ground or air speed)
//! - [`matrix`] — Cost and savings matrices
//! - [`merge`] — Compatibility checks, route merging, client search
//! - [`constructive`] — Sequential and parallel Clarke-Wright savings
//! - [`generate`] — Random problem instances
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use u_drone_routing::constructive::clarke_and_wright;
//! use u_drone_routing::cost::ConstantAirSpeed;
//! use u_drone_routing::models::{Client, DeliveryParameters, Depot, Drone, Problem, Wind};
//!
//! let mut problem = Problem::new(
//!     Depot::origin(),
//!     vec![
//!         Client::new("C1", 120.0, 40.0, 20),
//!         Client::new("C2", 150.0, -30.0, 30),
//!         Client::new("C3", -80.0, 60.0, 25),
//!     ],
//! );
//! let params = Arc::new(
//!     DeliveryParameters::new(
//!         Arc::new(Drone::new(60, 12.0, 0.02).unwrap()),
//!         Arc::new(Wind::new(3.0, -1.0)),
//!         Some(Arc::new(ConstantAirSpeed::default())),
//!     )
//!     .unwrap(),
//! );
//!
//! let solution = clarke_and_wright(&mut problem, &params, "sequential", None).unwrap();
//! assert!(solution.is_legal());
//! assert_eq!(solution.num_served(), 3);
//! ```

pub mod constructive;
pub mod cost;
pub mod error;
pub mod generate;
pub mod matrix;
pub mod merge;
pub mod models;
