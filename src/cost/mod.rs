//! Energy cost functions for drone legs.
//!
//! - [`cost_a`] / [`ConstantGroundSpeed`] — ground speed held at the drone speed
//! - [`cost_b`] / [`ConstantAirSpeed`] — air speed held at the drone speed
//!
//! Any closure `Fn(&Point, &Point, &Drone, &Wind) -> Result<f64, ConfigError>`
//! is also a [`CostFunction`], so tests and alternative physics models can be
//! plugged into [`DeliveryParameters`](crate::models::DeliveryParameters)
//! without touching the construction code.

mod energy;

pub use energy::{cost_a, cost_b, power, AIR_DENSITY, DEFAULT_SAFETY_FACTOR};

use crate::error::ConfigError;
use crate::models::{Drone, Point, Wind};

/// Energy cost (J) of flying from one point to another.
pub trait CostFunction: Send + Sync {
    /// Cost of the leg `from → to`.
    fn cost(&self, from: &Point, to: &Point, drone: &Drone, wind: &Wind)
        -> Result<f64, ConfigError>;

    /// Checks once that this function can be evaluated for the drone and wind.
    ///
    /// The default accepts everything.
    fn validate(&self, _drone: &Drone, _wind: &Wind) -> Result<(), ConfigError> {
        Ok(())
    }
}

impl<F> CostFunction for F
where
    F: Fn(&Point, &Point, &Drone, &Wind) -> Result<f64, ConfigError> + Send + Sync,
{
    fn cost(
        &self,
        from: &Point,
        to: &Point,
        drone: &Drone,
        wind: &Wind,
    ) -> Result<f64, ConfigError> {
        self(from, to, drone, wind)
    }
}

/// [`cost_a`] as a cost function with up-front validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantGroundSpeed;

impl CostFunction for ConstantGroundSpeed {
    fn cost(
        &self,
        from: &Point,
        to: &Point,
        drone: &Drone,
        wind: &Wind,
    ) -> Result<f64, ConfigError> {
        cost_a(from, to, drone, wind)
    }

    fn validate(&self, drone: &Drone, _wind: &Wind) -> Result<(), ConfigError> {
        if drone.speed() > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositiveSpeed {
                speed: drone.speed(),
            })
        }
    }
}

/// [`cost_b`] with a fixed safety factor.
///
/// # Examples
///
/// ```
/// use u_drone_routing::cost::{ConstantAirSpeed, CostFunction};
/// use u_drone_routing::models::{Drone, Wind};
///
/// let model = ConstantAirSpeed::new(2.0).unwrap();
/// let drone = Drone::new(100, 10.0, 0.01).unwrap();
/// assert!(model.validate(&drone, &Wind::new(4.0, 0.0)).is_ok());
/// assert!(model.validate(&drone, &Wind::new(5.0, 0.0)).is_err());
/// assert!(ConstantAirSpeed::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConstantAirSpeed {
    safety_factor: f64,
}

impl ConstantAirSpeed {
    /// Creates the model. The safety factor must exceed 1.
    pub fn new(safety_factor: f64) -> Result<Self, ConfigError> {
        if safety_factor > 1.0 {
            Ok(Self { safety_factor })
        } else {
            Err(ConfigError::SafetyFactorTooLow { safety_factor })
        }
    }

    /// Required ratio of drone speed to wind speed.
    pub fn safety_factor(&self) -> f64 {
        self.safety_factor
    }
}

impl Default for ConstantAirSpeed {
    fn default() -> Self {
        Self {
            safety_factor: DEFAULT_SAFETY_FACTOR,
        }
    }
}

impl CostFunction for ConstantAirSpeed {
    fn cost(
        &self,
        from: &Point,
        to: &Point,
        drone: &Drone,
        wind: &Wind,
    ) -> Result<f64, ConfigError> {
        cost_b(from, to, drone, wind, self.safety_factor)
    }

    fn validate(&self, drone: &Drone, wind: &Wind) -> Result<(), ConfigError> {
        energy::check_headway(drone, wind, self.safety_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_cost_function() {
        let manhattan = |a: &Point, b: &Point, _: &Drone, _: &Wind| -> Result<f64, ConfigError> {
            let (dx, dy) = a.displacement_to(b);
            Ok(dx.abs() + dy.abs())
        };
        let a = Point::new("A", 0.0, 0.0);
        let b = Point::new("B", 3.0, -4.0);
        let c = manhattan.cost(&a, &b, &Drone::default(), &Wind::calm());
        assert_eq!(c, Ok(7.0));
    }

    #[test]
    fn test_plain_fn_is_cost_function() {
        let f: &dyn CostFunction = &cost_a;
        let a = Point::new("A", 0.0, 0.0);
        let b = Point::new("B", 10.0, 0.0);
        let direct = cost_a(&a, &b, &Drone::default(), &Wind::calm());
        assert_eq!(f.cost(&a, &b, &Drone::default(), &Wind::calm()), direct);
    }

    #[test]
    fn test_ground_speed_validate() {
        assert!(ConstantGroundSpeed
            .validate(&Drone::default(), &Wind::new(50.0, 0.0))
            .is_ok());
        let stalled = Drone::unchecked(10, 0.0, 0.01);
        assert!(ConstantGroundSpeed
            .validate(&stalled, &Wind::calm())
            .is_err());
    }

    #[test]
    fn test_air_speed_default_factor() {
        assert_eq!(ConstantAirSpeed::default().safety_factor(), 2.0);
    }

    #[test]
    fn test_air_speed_matches_cost_b() {
        let model = ConstantAirSpeed::new(3.0).expect("valid");
        let a = Point::new("A", 0.0, 0.0);
        let b = Point::new("B", 20.0, 15.0);
        let wind = Wind::new(1.0, -2.0);
        let drone = Drone::default();
        assert_eq!(
            model.cost(&a, &b, &drone, &wind),
            cost_b(&a, &b, &drone, &wind, 3.0)
        );
    }

    #[test]
    fn test_air_speed_equal_speed_rejected() {
        let drone = Drone::default();
        let wind = Wind::new(0.0, drone.speed());
        assert!(ConstantAirSpeed::default().validate(&drone, &wind).is_err());
        assert!(ConstantAirSpeed::new(1.0).is_err());
    }
}
