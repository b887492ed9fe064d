//! Solution type.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{ConfigError, CostError};

use super::{Delivery, DeliveryParameters};

/// A named set of deliveries built with one set of parameters.
///
/// A solution is legal when every delivery is legal and no client is served
/// by more than one delivery.
#[derive(Debug, Clone)]
pub struct Solution {
    name: String,
    deliveries: Vec<Delivery>,
    parameters: Arc<DeliveryParameters>,
}

impl Solution {
    /// Creates a solution.
    pub fn new(
        name: impl Into<String>,
        deliveries: Vec<Delivery>,
        parameters: Arc<DeliveryParameters>,
    ) -> Self {
        Self {
            name: name.into(),
            deliveries,
            parameters,
        }
    }

    /// Solution name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deliveries in construction order.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Parameters the solution was built with.
    pub fn parameters(&self) -> &Arc<DeliveryParameters> {
        &self.parameters
    }

    /// Number of deliveries (drone flights).
    pub fn num_deliveries(&self) -> usize {
        self.deliveries.len()
    }

    /// Total number of clients served.
    pub fn num_served(&self) -> usize {
        self.deliveries.iter().map(Delivery::len).sum()
    }

    /// Returns `true` if every delivery is legal and clients are globally unique.
    pub fn is_legal(&self) -> bool {
        let mut seen = HashSet::new();
        self.deliveries.iter().all(|d| {
            d.is_legal() && d.clients().iter().all(|c| seen.insert(c.id().to_owned()))
        })
    }

    /// Total `(cost, savings)` over deliveries that have a cost function.
    ///
    /// Deliveries without a cost function are skipped.
    pub fn cost_and_savings(&self) -> Result<(f64, f64), ConfigError> {
        let mut cost = 0.0;
        let mut savings = 0.0;
        for delivery in &self.deliveries {
            match delivery.cost_and_savings() {
                Ok((c, s)) => {
                    cost += c;
                    savings += s;
                }
                Err(CostError::Undefined) => {}
                Err(CostError::Config(e)) => return Err(e),
            }
        }
        Ok((cost, savings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Client, Depot, Drone, Point, Route, Wind};

    fn euclid(a: &Point, b: &Point, _: &Drone, _: &Wind) -> Result<f64, ConfigError> {
        Ok(a.distance_to(b))
    }

    fn setup() -> (Arc<Depot>, Vec<Arc<Client>>, Arc<DeliveryParameters>) {
        let depot = Arc::new(Depot::origin());
        let clients = vec![
            Arc::new(Client::new("C1", 3.0, 0.0, 5)),
            Arc::new(Client::new("C2", 4.0, 0.0, 5)),
            Arc::new(Client::new("C3", 0.0, 5.0, 5)),
        ];
        let params = DeliveryParameters::new(
            Arc::new(Drone::default()),
            Arc::new(Wind::calm()),
            Some(Arc::new(euclid)),
        )
        .expect("valid");
        (depot, clients, Arc::new(params))
    }

    #[test]
    fn test_solution_empty() {
        let (_, _, params) = setup();
        let sol = Solution::new("empty", vec![], params);
        assert_eq!(sol.name(), "empty");
        assert_eq!(sol.num_deliveries(), 0);
        assert_eq!(sol.num_served(), 0);
        assert!(sol.is_legal());
        assert_eq!(sol.cost_and_savings(), Ok((0.0, 0.0)));
    }

    #[test]
    fn test_solution_cost_and_savings() {
        let (depot, clients, params) = setup();
        let pair = Delivery::new(
            Route::new(clients[..2].to_vec(), depot.clone()),
            params.clone(),
        );
        let single = Delivery::singleton(clients[2].clone(), depot, params.clone());
        let sol = Solution::new("s", vec![pair, single], params);
        let (cost, savings) = sol.cost_and_savings().expect("defined");
        assert!((cost - 18.0).abs() < 1e-10);
        assert!((savings - 6.0).abs() < 1e-10);
        assert_eq!(sol.num_served(), 3);
        assert!(sol.is_legal());
    }

    #[test]
    fn test_solution_skips_undefined_cost() {
        let (depot, clients, params) = setup();
        let bare = Arc::new(
            DeliveryParameters::new(params.drone().clone(), params.wind().clone(), None)
                .expect("valid"),
        );
        let priced = Delivery::singleton(clients[0].clone(), depot.clone(), params.clone());
        let unpriced = Delivery::singleton(clients[1].clone(), depot, bare);
        let sol = Solution::new("mixed", vec![priced, unpriced], params);
        assert_eq!(sol.cost_and_savings(), Ok((6.0, 0.0)));
    }

    #[test]
    fn test_solution_duplicate_client_is_illegal() {
        let (depot, clients, params) = setup();
        let a = Delivery::singleton(clients[0].clone(), depot.clone(), params.clone());
        let b = Delivery::new(Route::new(clients[..2].to_vec(), depot), params.clone());
        let sol = Solution::new("dup", vec![a, b], params);
        assert!(!sol.is_legal());
    }
}
