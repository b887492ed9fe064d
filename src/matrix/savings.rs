//! Clarke-Wright savings matrix.

use crate::error::ConfigError;
use crate::models::{DeliveryParameters, Problem};

use super::CostMatrix;

/// A dense n×n savings matrix over clients (depot excluded).
///
/// ```text
/// S[i][k] = c(i, depot) + c(depot, k) − c(i, k)
/// ```
///
/// is the energy saved by flying depot → i → k → depot instead of two
/// separate round trips. The diagonal is zero. Entries are `None` when costs
/// are undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsMatrix {
    data: Vec<Option<f64>>,
    size: usize,
}

impl SavingsMatrix {
    /// Derives savings from a cost matrix whose index 0 is the depot.
    pub fn from_costs(costs: &CostMatrix) -> Self {
        let n = costs.size().saturating_sub(1);
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for k in 0..n {
                let value = if i == k {
                    costs.get(i + 1, i + 1).map(|_| 0.0)
                } else {
                    match (costs.get(i + 1, 0), costs.get(0, k + 1), costs.get(i + 1, k + 1)) {
                        (Some(back), Some(out), Some(direct)) => Some(back + out - direct),
                        _ => None,
                    }
                };
                data.push(value);
            }
        }
        Self { data, size: n }
    }

    /// Computes the cost matrix of `problem` and derives savings from it.
    pub fn from_problem(
        problem: &Problem,
        parameters: &DeliveryParameters,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_costs(&CostMatrix::from_problem(problem, parameters)?))
    }

    /// Savings of serving client `k` right after client `i`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, k: usize) -> Option<f64> {
        self.data[i * self.size + k]
    }

    /// Number of clients.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major entries.
    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.data
    }
}

/// Builds the savings matrix of `problem` under `parameters`.
pub fn savings_matrix(
    problem: &Problem,
    parameters: &DeliveryParameters,
) -> Result<SavingsMatrix, ConfigError> {
    SavingsMatrix::from_problem(problem, parameters)
}
