//! Clarke-Wright savings construction for drone deliveries.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts from one round trip
//! per client and joins trips in order of decreasing savings:
//!
//! ```text
//! s(i, k) = c(i, depot) + c(depot, k) - c(i, k)
//! ```
//!
//! Here `c` is the energy a drone spends on a leg under wind, so `s` is not
//! symmetric in general. Joins are subject to drone capacity and to every
//! client being served exactly once.
//!
//! Two strategies are provided: [`Strategy::Sequential`] grows a single
//! delivery as far as the savings allow and serves everyone else alone,
//! [`Strategy::Parallel`] grows many fragments at once and splices them.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, warn};

use crate::error::ConstructionError;
use crate::models::{Client, Delivery, DeliveryParameters, Depot, Problem, Route, Solution};

use super::{clarke_and_wright_init, parallel_build_deliveries, sequential_build_deliveries, Saving};

/// Order in which savings are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A single working delivery.
    Sequential,
    /// All fragments at once.
    Parallel,
}

impl Strategy {
    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            other => Err(ConstructionError::UnknownStrategy(other.to_owned())),
        }
    }
}

/// Two-client delivery `a → b`.
pub(super) fn pair_delivery(
    a: &Arc<Client>,
    b: &Arc<Client>,
    depot: &Arc<Depot>,
    parameters: &Arc<DeliveryParameters>,
) -> Delivery {
    let route = Route::new(vec![a.clone(), b.clone()], depot.clone());
    Delivery::new(route, parameters.clone())
}

/// Appends a singleton delivery for every client not yet served.
///
/// Clients whose demand alone exceeds the drone capacity still get one, so
/// every client is covered; such deliveries are not legal.
pub fn add_single_client_deliveries(
    problem: &Problem,
    parameters: &Arc<DeliveryParameters>,
    deliveries: &mut Vec<Delivery>,
) {
    let served: HashSet<String> = deliveries
        .iter()
        .flat_map(|d| d.clients().iter().map(|c| c.id().to_owned()))
        .collect();
    let capacity = parameters.drone().capacity();

    for client in problem.clients() {
        if served.contains(client.id()) {
            continue;
        }
        if client.demand() > capacity {
            warn!(
                "client {} demands {} but the drone carries {}",
                client.id(),
                client.demand(),
                capacity
            );
        }
        deliveries.push(Delivery::singleton(
            client.clone(),
            problem.depot().clone(),
            parameters.clone(),
        ));
    }
}

/// Builds deliveries from sorted savings with the given strategy.
pub fn build_deliveries(
    problem: &Problem,
    parameters: &Arc<DeliveryParameters>,
    strategy: Strategy,
    savings: &[Saving],
) -> Vec<Delivery> {
    match strategy {
        Strategy::Sequential => sequential_build_deliveries(problem, parameters, savings),
        Strategy::Parallel => parallel_build_deliveries(problem, parameters, savings),
    }
}

/// Like [`build_deliveries`], with the strategy given by name.
///
/// An unknown name builds nothing.
pub fn build_deliveries_by_name(
    problem: &Problem,
    parameters: &Arc<DeliveryParameters>,
    strategy: &str,
    savings: &[Saving],
) -> Vec<Delivery> {
    match strategy.parse() {
        Ok(s) => build_deliveries(problem, parameters, s, savings),
        Err(_) => Vec::new(),
    }
}

/// Solves `problem` with the savings heuristic and records the solution.
///
/// The solution is named `name`, or after the strategy and drone capacity
/// when `name` is `None`. It is appended to the problem's history and a
/// reference to it is returned.
///
/// # Errors
///
/// - [`ConstructionError::UnknownStrategy`] if `strategy` is not a known name
/// - [`ConstructionError::Config`] if the cost function rejects its inputs
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_drone_routing::constructive::clarke_and_wright;
/// use u_drone_routing::cost::ConstantAirSpeed;
/// use u_drone_routing::models::{Client, DeliveryParameters, Depot, Drone, Problem, Wind};
///
/// let mut problem = Problem::new(
///     Depot::origin(),
///     vec![
///         Client::new("C1", 100.0, 0.0, 10),
///         Client::new("C2", 200.0, 0.0, 10),
///         Client::new("C3", 300.0, 0.0, 10),
///     ],
/// );
/// let params = Arc::new(
///     DeliveryParameters::new(
///         Arc::new(Drone::new(30, 10.0, 0.01).unwrap()),
///         Arc::new(Wind::calm()),
///         Some(Arc::new(ConstantAirSpeed::default())),
///     )
///     .unwrap(),
/// );
///
/// let solution = clarke_and_wright(&mut problem, &params, "parallel", None).unwrap();
/// assert_eq!(solution.num_deliveries(), 1);
/// assert_eq!(solution.num_served(), 3);
/// assert_eq!(problem.solutions().len(), 1);
/// ```
pub fn clarke_and_wright<'p>(
    problem: &'p mut Problem,
    parameters: &Arc<DeliveryParameters>,
    strategy: &str,
    name: Option<&str>,
) -> Result<&'p Solution, ConstructionError> {
    let strategy: Strategy = strategy.parse()?;
    debug!(
        "clarke-wright {} over {} clients",
        strategy,
        problem.number_of_clients()
    );

    let savings = clarke_and_wright_init(problem, parameters)?;
    let deliveries = build_deliveries(problem, parameters, strategy, &savings);
    debug!("clarke-wright {} built {} deliveries", strategy, deliveries.len());

    let name = match name {
        Some(n) => n.to_owned(),
        None => format!(
            "clarke-wright {} (capacity {})",
            strategy,
            parameters.drone().capacity()
        ),
    };
    Ok(problem.push_solution(Solution::new(name, deliveries, parameters.clone())))
}
