//! Sequential savings construction: a single delivery grown as far as it goes.

use std::sync::Arc;

use log::{debug, trace};

use crate::merge::sequential_merge_if_possible;
use crate::models::{Delivery, DeliveryParameters, Problem};

use super::{add_single_client_deliveries, pair_delivery, Saving};

/// Builds deliveries by growing one working delivery with the best savings.
///
/// Each pass scans the non-negative savings from the best one and joins the
/// first pair that extends the working delivery through one of its ends (an
/// empty working delivery takes the first legal pair). After a join, pairs
/// whose two clients are both in the delivery are dropped and the scan
/// restarts from the best saving. The first pass that joins nothing ends the
/// run; every client left out gets a singleton delivery.
///
/// `savings` must be sorted by decreasing value, as returned by
/// [`clarke_and_wright_init`](super::clarke_and_wright_init). Pairs whose
/// indices fall outside [`Problem::clients`] are ignored.
pub fn sequential_build_deliveries(
    problem: &Problem,
    parameters: &Arc<DeliveryParameters>,
    savings: &[Saving],
) -> Vec<Delivery> {
    let clients = problem.clients();
    let depot = problem.depot();

    let mut pairs: Vec<_> = savings
        .iter()
        .filter(|s| s.value >= 0.0)
        .filter_map(|s| s.clients(clients))
        .collect();
    let mut current = Delivery::empty(depot.clone(), parameters.clone());

    for _ in 0..=pairs.len() {
        let joined = pairs.iter().find_map(|&(a, b)| {
            let candidate = pair_delivery(a, b, depot, parameters);
            sequential_merge_if_possible(&current, &candidate).map(|merged| (merged, a, b))
        });
        let Some((merged, a, b)) = joined else {
            break;
        };

        trace!("extended delivery with ({}, {})", a.id(), b.id());
        current = merged;
        let route = current.route();
        pairs.retain(|(a, b)| !(route.contains(a) && route.contains(b)));
    }

    let mut deliveries = Vec::new();
    if !current.is_empty() {
        debug!("sequential delivery {:?}", current.route().client_ids());
        deliveries.push(current);
    }
    add_single_client_deliveries(problem, parameters, &mut deliveries);
    deliveries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::clarke_and_wright_init;
    use crate::error::ConfigError;
    use crate::models::{Client, Depot, Drone, Point, Wind};

    fn euclid(a: &Point, b: &Point, _: &Drone, _: &Wind) -> Result<f64, ConfigError> {
        Ok(a.distance_to(b))
    }

    fn params(capacity: u32) -> Arc<DeliveryParameters> {
        let drone = Drone::new(capacity, 10.0, 0.01).expect("valid");
        Arc::new(
            DeliveryParameters::new(Arc::new(drone), Arc::new(Wind::calm()), Some(Arc::new(euclid)))
                .expect("valid"),
        )
    }

    fn ids(deliveries: &[Delivery]) -> Vec<Vec<&str>> {
        deliveries.iter().map(|d| d.route().client_ids()).collect()
    }

    #[test]
    fn test_line_becomes_one_delivery() {
        let problem = Problem::new(
            Depot::origin(),
            vec![
                Client::new("C1", 1.0, 0.0, 10),
                Client::new("C2", 2.0, 0.0, 10),
                Client::new("C3", 3.0, 0.0, 10),
            ],
        );
        let p = params(30);
        let savings = clarke_and_wright_init(&problem, &p).expect("valid");
        let deliveries = sequential_build_deliveries(&problem, &p, &savings);
        assert_eq!(deliveries.len(), 1);
        let route = deliveries[0].route();
        assert_eq!(route.len(), 3);
        assert!(route.is_legal());
        // a line is visited end to end
        let ends = [route.first().map(|c| c.id()), route.last().map(|c| c.id())];
        assert!(ends.contains(&Some("C1")) && ends.contains(&Some("C3")));
    }

    #[test]
    fn test_two_clusters_grow_one_delivery() {
        let problem = Problem::new(
            Depot::origin(),
            vec![
                Client::new("E1", 100.0, 0.0, 10),
                Client::new("E2", 100.0, 10.0, 10),
                Client::new("W1", -100.0, 0.0, 10),
                Client::new("W2", -100.0, 10.0, 10),
            ],
        );
        let p = params(20);
        let savings = clarke_and_wright_init(&problem, &p).expect("valid");
        let deliveries = sequential_build_deliveries(&problem, &p, &savings);
        // the full working delivery ends the run; the other cluster is left
        // to singletons
        assert_eq!(
            ids(&deliveries),
            vec![vec!["W2", "W1"], vec!["E1"], vec!["E2"]]
        );
        assert!(deliveries.iter().all(Delivery::is_legal));
    }

    #[test]
    fn test_stops_when_working_delivery_cannot_grow() {
        let problem = Problem::new(
            Depot::origin(),
            (1..=4)
                .map(|i| Client::new(format!("C{i}"), 0.0, 0.0, 1))
                .collect(),
        );
        let savings = [
            Saving { i: 0, k: 1, value: 9.0 },
            Saving { i: 2, k: 3, value: 8.0 },
            Saving { i: 1, k: 2, value: 7.0 },
        ];
        let deliveries = sequential_build_deliveries(&problem, &params(10), &savings);
        // (C3, C4) touches neither end of [C1, C2], then (C2, C3) extends it
        // and (C3, C4) follows on the next scan
        assert_eq!(ids(&deliveries), vec![vec!["C1", "C2", "C3", "C4"]]);

        let capped = sequential_build_deliveries(&problem, &params(2), &savings);
        assert_eq!(
            ids(&capped),
            vec![vec!["C1", "C2"], vec!["C3"], vec!["C4"]]
        );
    }

    #[test]
    fn test_out_of_range_pairs_ignored() {
        let problem = Problem::new(
            Depot::origin(),
            vec![
                Client::new("C1", 1.0, 0.0, 1),
                Client::new("C2", 2.0, 0.0, 1),
            ],
        );
        let savings = [
            Saving { i: 0, k: 5, value: 9.0 },
            Saving { i: 0, k: 1, value: 1.0 },
        ];
        let deliveries = sequential_build_deliveries(&problem, &params(10), &savings);
        assert_eq!(ids(&deliveries), vec![vec!["C1", "C2"]]);
    }

    #[test]
    fn test_capacity_forces_singletons() {
        let problem = Problem::new(
            Depot::origin(),
            vec![
                Client::new("C1", 1.0, 0.0, 15),
                Client::new("C2", 2.0, 0.0, 15),
            ],
        );
        let p = params(20);
        let savings = clarke_and_wright_init(&problem, &p).expect("valid");
        let deliveries = sequential_build_deliveries(&problem, &p, &savings);
        assert_eq!(ids(&deliveries), vec![vec!["C1"], vec!["C2"]]);
    }

    #[test]
    fn test_no_savings_gives_singletons() {
        let problem = Problem::new(
            Depot::origin(),
            vec![
                Client::new("C1", 1.0, 0.0, 1),
                Client::new("C2", 2.0, 0.0, 1),
            ],
        );
        let deliveries = sequential_build_deliveries(&problem, &params(100), &[]);
        assert_eq!(ids(&deliveries), vec![vec!["C1"], vec!["C2"]]);
    }

    #[test]
    fn test_negative_savings_ignored() {
        let problem = Problem::new(
            Depot::origin(),
            vec![
                Client::new("C1", 1.0, 0.0, 1),
                Client::new("C2", 2.0, 0.0, 1),
            ],
        );
        let savings = [Saving {
            i: 0,
            k: 1,
            value: -1.0,
        }];
        let deliveries = sequential_build_deliveries(&problem, &params(100), &savings);
        assert_eq!(deliveries.len(), 2);
    }
}
