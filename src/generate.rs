//! Random problem instances.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::{Client, Depot, Problem};

/// Builds a problem with `n` clients scattered around a depot at the origin.
///
/// Coordinates are uniform in `[-half_extent, half_extent]` on both axes and
/// demands uniform in `demand`. Clients are named `C1` to `Cn`.
///
/// Returns `None` if `half_extent` is negative or not finite, or if `demand`
/// is empty.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_drone_routing::generate::random_problem;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let problem = random_problem(20, 500.0, 1..=10, &mut rng).unwrap();
/// assert_eq!(problem.number_of_clients(), 20);
/// assert_eq!(problem.clients()[0].id(), "C1");
/// ```
pub fn random_problem<R: Rng + ?Sized>(
    n: usize,
    half_extent: f64,
    demand: RangeInclusive<u32>,
    rng: &mut R,
) -> Option<Problem> {
    if !half_extent.is_finite() || half_extent < 0.0 || demand.is_empty() {
        return None;
    }

    let clients = (1..=n)
        .map(|i| {
            let x = rng.random_range(-half_extent..=half_extent);
            let y = rng.random_range(-half_extent..=half_extent);
            let d = rng.random_range(demand.clone());
            Client::new(format!("C{i}"), x, y, d)
        })
        .collect();

    Some(Problem::new(Depot::origin(), clients))
}
