//! Savings-based construction of drone deliveries.
//!
//! - [`clarke_and_wright_init`] — sorted savings list, O(n² log n)
//! - [`sequential_build_deliveries`] — a single working delivery
//! - [`parallel_build_deliveries`] — many fragments grown and spliced
//! - [`clarke_and_wright`] — full run, recorded on the [`Problem`](crate::models::Problem)

mod clarke_wright;
mod parallel;
mod savings;
mod sequential;

pub use clarke_wright::{
    add_single_client_deliveries, build_deliveries, build_deliveries_by_name, clarke_and_wright,
    Strategy,
};
pub use parallel::parallel_build_deliveries;
pub use savings::{clarke_and_wright_init, Saving};
pub use sequential::sequential_build_deliveries;

use clarke_wright::pair_delivery;
