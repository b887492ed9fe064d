//! Energy cost and savings matrices.
//!
//! Provides the dense depot-and-clients cost matrix and the client-by-client
//! Clarke-Wright savings matrix derived from it.

mod cost;
mod savings;

pub use cost::{cost_matrix, CostMatrix};
pub use savings::{savings_matrix, SavingsMatrix};
