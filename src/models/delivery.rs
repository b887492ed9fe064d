//! Deliveries: a route flown by a given drone in a given wind.

use std::fmt;
use std::sync::Arc;

use crate::cost::CostFunction;
use crate::error::{ConfigError, CostError};

use super::{Client, Depot, Drone, Point, Route, Wind};

/// Drone, wind and cost function shared by every delivery of a run.
///
/// Built once and shared through an [`Arc`]. The drone and wind are checked
/// here so cost evaluation in the construction loops never has to re-check
/// them.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_drone_routing::cost::ConstantAirSpeed;
/// use u_drone_routing::models::{DeliveryParameters, Drone, Wind};
///
/// let drone = Arc::new(Drone::new(180, 10.3, 0.013).unwrap());
/// let calm = Arc::new(Wind::calm());
/// let params = DeliveryParameters::new(drone.clone(), calm, Some(Arc::new(ConstantAirSpeed::default())));
/// assert!(params.is_ok());
///
/// let gale = Arc::new(Wind::new(6.0, 0.0));
/// let params = DeliveryParameters::new(drone, gale, Some(Arc::new(ConstantAirSpeed::default())));
/// assert!(params.is_err());
/// ```
#[derive(Clone)]
pub struct DeliveryParameters {
    drone: Arc<Drone>,
    wind: Arc<Wind>,
    cost: Option<Arc<dyn CostFunction>>,
}

impl DeliveryParameters {
    /// Validates and bundles the run parameters.
    pub fn new(
        drone: Arc<Drone>,
        wind: Arc<Wind>,
        cost: Option<Arc<dyn CostFunction>>,
    ) -> Result<Self, ConfigError> {
        drone.validate()?;
        wind.validate()?;
        if let Some(f) = &cost {
            f.validate(&drone, &wind)?;
        }
        Ok(Self { drone, wind, cost })
    }

    /// The drone flying every delivery.
    pub fn drone(&self) -> &Arc<Drone> {
        &self.drone
    }

    /// The wind during the run.
    pub fn wind(&self) -> &Arc<Wind> {
        &self.wind
    }

    /// The configured cost function, if any.
    pub fn cost_function(&self) -> Option<&dyn CostFunction> {
        self.cost.as_deref()
    }

    /// Returns `true` if a cost function is configured.
    pub fn has_cost_function(&self) -> bool {
        self.cost.is_some()
    }

    /// Cost of one leg with this drone and wind.
    pub fn leg_cost(&self, from: &Point, to: &Point) -> Result<f64, CostError> {
        let f = self.cost.as_deref().ok_or(CostError::Undefined)?;
        Ok(f.cost(from, to, &self.drone, &self.wind)?)
    }

    /// Returns `true` if both refer to the same drone and the same wind.
    pub fn shares_drone_and_wind(&self, other: &DeliveryParameters) -> bool {
        Arc::ptr_eq(&self.drone, &other.drone) && Arc::ptr_eq(&self.wind, &other.wind)
    }
}

impl fmt::Debug for DeliveryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryParameters")
            .field("drone", &self.drone)
            .field("wind", &self.wind)
            .field("has_cost_function", &self.cost.is_some())
            .finish()
    }
}

/// A route together with the parameters it is flown with.
///
/// Deliveries are never edited in place: merges build new ones.
#[derive(Debug, Clone)]
pub struct Delivery {
    route: Route,
    parameters: Arc<DeliveryParameters>,
}

impl Delivery {
    /// Creates a delivery.
    pub fn new(route: Route, parameters: Arc<DeliveryParameters>) -> Self {
        Self { route, parameters }
    }

    /// Creates a delivery with no clients.
    pub fn empty(depot: Arc<Depot>, parameters: Arc<DeliveryParameters>) -> Self {
        Self::new(Route::empty(depot), parameters)
    }

    /// Creates a depot → client → depot delivery.
    pub fn singleton(
        client: Arc<Client>,
        depot: Arc<Depot>,
        parameters: Arc<DeliveryParameters>,
    ) -> Self {
        Self::new(Route::new(vec![client], depot), parameters)
    }

    /// The route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The shared parameters.
    pub fn parameters(&self) -> &Arc<DeliveryParameters> {
        &self.parameters
    }

    /// Clients in visit order.
    pub fn clients(&self) -> &[Arc<Client>] {
        self.route.clients()
    }

    /// The depot.
    pub fn depot(&self) -> &Arc<Depot> {
        self.route.depot()
    }

    /// Number of clients.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns `true` if no client is served.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Returns `true` if the route is legal and the drone can carry its load.
    pub fn is_legal(&self) -> bool {
        self.route.is_legal()
            && self.route.total_demand() <= u64::from(self.parameters.drone().capacity())
    }

    /// Energy cost of the full depot → clients → depot tour.
    ///
    /// # Errors
    ///
    /// [`CostError::Undefined`] if no cost function is configured.
    pub fn cost(&self) -> Result<f64, CostError> {
        let params = &self.parameters;
        if !params.has_cost_function() {
            return Err(CostError::Undefined);
        }
        let clients = self.route.clients();
        let (Some(first), Some(last)) = (clients.first(), clients.last()) else {
            return Ok(0.0);
        };

        let depot = self.route.depot().point();
        let mut total = params.leg_cost(depot, first.point())?;
        for pair in clients.windows(2) {
            total += params.leg_cost(pair[0].point(), pair[1].point())?;
        }
        total += params.leg_cost(last.point(), depot)?;
        Ok(total)
    }

    /// Returns `(cost, savings)`.
    ///
    /// Savings compare against serving every client on its own round trip.
    /// They are zero for zero or one client.
    pub fn cost_and_savings(&self) -> Result<(f64, f64), CostError> {
        let cost = self.cost()?;
        if self.route.len() < 2 {
            return Ok((cost, 0.0));
        }
        let depot = self.route.depot().point();
        let mut separate = 0.0;
        for client in self.route.clients() {
            separate += self.parameters.leg_cost(client.point(), depot)?;
            separate += self.parameters.leg_cost(depot, client.point())?;
        }
        Ok((cost, separate - cost))
    }
}
