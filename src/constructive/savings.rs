//! Sorted savings list.

use std::sync::Arc;

use crate::error::ConfigError;
use crate::matrix::SavingsMatrix;
use crate::models::{Client, DeliveryParameters, Problem};

/// A savings value for serving client `k` right after client `i`.
///
/// Indices refer to [`Problem::clients`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    /// Client served first.
    pub i: usize,
    /// Client served next.
    pub k: usize,
    /// Energy saved (J).
    pub value: f64,
}

impl Saving {
    /// The two clients of the pair, or `None` if an index is out of range
    /// for `clients`.
    pub fn clients<'a>(
        &self,
        clients: &'a [Arc<Client>],
    ) -> Option<(&'a Arc<Client>, &'a Arc<Client>)> {
        Some((clients.get(self.i)?, clients.get(self.k)?))
    }
}

/// Every ordered client pair, sorted by decreasing savings.
///
/// The whole n×n savings matrix is flattened (diagonal included), sorted in
/// ascending order and reversed; each flat index maps back to its `(i, k)`
/// pair. Without a cost function the list is empty.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_drone_routing::constructive::clarke_and_wright_init;
/// use u_drone_routing::cost::ConstantGroundSpeed;
/// use u_drone_routing::models::{Client, DeliveryParameters, Depot, Drone, Problem, Wind};
///
/// let problem = Problem::new(
///     Depot::origin(),
///     vec![Client::new("C1", 30.0, 0.0, 1), Client::new("C2", 40.0, 0.0, 1)],
/// );
/// let params = DeliveryParameters::new(
///     Arc::new(Drone::default()),
///     Arc::new(Wind::calm()),
///     Some(Arc::new(ConstantGroundSpeed)),
/// )
/// .unwrap();
///
/// let savings = clarke_and_wright_init(&problem, &params).unwrap();
/// assert_eq!(savings.len(), 4);
/// assert!(savings[0].value >= savings[3].value);
/// assert_ne!(savings[0].i, savings[0].k);
/// ```
pub fn clarke_and_wright_init(
    problem: &Problem,
    parameters: &DeliveryParameters,
) -> Result<Vec<Saving>, ConfigError> {
    if !parameters.has_cost_function() {
        return Ok(Vec::new());
    }

    let matrix = SavingsMatrix::from_problem(problem, parameters)?;
    let n = matrix.size();

    let mut flat: Vec<(usize, f64)> = matrix
        .as_slice()
        .iter()
        .enumerate()
        .filter_map(|(idx, value)| value.map(|v| (idx, v)))
        .collect();
    flat.sort_by(|a, b| a.1.total_cmp(&b.1));
    flat.reverse();

    Ok(flat
        .into_iter()
        .map(|(idx, value)| Saving {
            i: idx / n,
            k: idx % n,
            value,
        })
        .collect())
}
