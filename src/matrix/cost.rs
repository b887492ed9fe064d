//! Dense energy cost matrix.

use crate::error::{ConfigError, CostError};
use crate::models::{DeliveryParameters, Problem};

/// A dense (n+1)×(n+1) energy cost matrix stored in row-major order.
///
/// Index 0 is the depot and `1..=n` are the clients in problem order. Entries
/// are `None` when no cost function is configured.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_drone_routing::cost::ConstantAirSpeed;
/// use u_drone_routing::matrix::CostMatrix;
/// use u_drone_routing::models::{Client, DeliveryParameters, Depot, Drone, Problem, Wind};
///
/// let problem = Problem::new(Depot::origin(), vec![Client::new("C1", 30.0, 40.0, 1)]);
/// let params = DeliveryParameters::new(
///     Arc::new(Drone::new(10, 10.0, 0.01).unwrap()),
///     Arc::new(Wind::calm()),
///     Some(Arc::new(ConstantAirSpeed::default())),
/// )
/// .unwrap();
///
/// let cm = CostMatrix::from_problem(&problem, &params).unwrap();
/// assert_eq!(cm.size(), 2);
/// assert_eq!(cm.get(0, 0), Some(0.0));
/// assert!((cm.get(0, 1).unwrap() - 32.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<Option<f64>>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size with every entry undefined.
    pub fn undefined(size: usize) -> Self {
        Self {
            data: vec![None; size * size],
            size,
        }
    }

    /// Evaluates the configured cost function between every pair of locations.
    ///
    /// Without a cost function the result is the undefined matrix.
    pub fn from_problem(
        problem: &Problem,
        parameters: &DeliveryParameters,
    ) -> Result<Self, ConfigError> {
        let n = problem.number_of_clients() + 1;
        let mut cm = Self::undefined(n);
        if !parameters.has_cost_function() {
            return Ok(cm);
        }

        let points: Vec<_> = std::iter::once(problem.depot().point())
            .chain(problem.clients().iter().map(|c| c.point()))
            .collect();
        for (i, from) in points.iter().enumerate() {
            for (k, to) in points.iter().enumerate() {
                match parameters.leg_cost(from, to) {
                    Ok(c) => cm.set(i, k, Some(c)),
                    Err(CostError::Undefined) => {}
                    Err(CostError::Config(e)) => return Err(e),
                }
            }
        }
        Ok(cm)
    }

    /// Cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.data[from * self.size + to]
    }

    /// Sets the cost from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: Option<f64>) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of locations (depot included).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if every entry is defined.
    pub fn is_defined(&self) -> bool {
        self.data.iter().all(Option::is_some)
    }

    /// Returns `true` if the defined matrix is symmetric within `tol`.
    ///
    /// An undefined matrix is not symmetric.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in i..self.size {
                match (self.get(i, j), self.get(j, i)) {
                    (Some(a), Some(b)) if (a - b).abs() <= tol => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

/// Builds the cost matrix of `problem` under `parameters`.
pub fn cost_matrix(
    problem: &Problem,
    parameters: &DeliveryParameters,
) -> Result<CostMatrix, ConfigError> {
    CostMatrix::from_problem(problem, parameters)
}
