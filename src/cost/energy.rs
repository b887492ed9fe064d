//! Aerodynamic energy model for a single leg.
//!
//! Power is taken as pure drag: `P = ½ ρ (A·Cd) v³` with `v` the speed of the
//! drone relative to the air. The energy of a leg is power times flight time.
//! Two kinematic conventions decide what is held constant along the leg:
//!
//! - [`cost_a`]: the ground speed is fixed at `drone.speed`, so the air speed
//!   depends on the wind.
//! - [`cost_b`]: the air speed is fixed at `drone.speed`; the drone crabs into
//!   the wind to stay on track, and the ground speed along the leg follows.

use std::cmp::Ordering;

use crate::error::ConfigError;
use crate::models::{Drone, Point, Wind};

/// Air density used by the power model (kg/m³).
pub const AIR_DENSITY: f64 = 1.3;

/// Default ratio between drone speed and wind speed required by [`cost_b`].
pub const DEFAULT_SAFETY_FACTOR: f64 = 2.0;

/// Drag power (W) for a drone moving at `speed_rel_to_air` (m/s).
pub fn power(drone: &Drone, speed_rel_to_air: f64) -> f64 {
    0.5 * AIR_DENSITY * drone.acd() * speed_rel_to_air.powi(3)
}

/// Energy (J) from `from` to `to` at constant ground speed.
///
/// # Errors
///
/// [`ConfigError::NonPositiveSpeed`] if the drone speed is not positive.
///
/// # Examples
///
/// ```
/// use u_drone_routing::cost::{cost_a, power};
/// use u_drone_routing::models::{Drone, Point, Wind};
///
/// let drone = Drone::new(100, 10.0, 0.01).unwrap();
/// let a = Point::new("A", 0.0, 0.0);
/// let b = Point::new("B", 100.0, 0.0);
/// let e = cost_a(&a, &b, &drone, &Wind::calm()).unwrap();
/// // 10 s of flight at 10 m/s through still air.
/// assert!((e - power(&drone, 10.0) * 10.0).abs() < 1e-9);
/// ```
pub fn cost_a(from: &Point, to: &Point, drone: &Drone, wind: &Wind) -> Result<f64, ConfigError> {
    let speed = drone.speed();
    if speed.is_nan() || speed <= 0.0 {
        return Err(ConfigError::NonPositiveSpeed { speed });
    }

    let (dx, dy) = from.displacement_to(to);
    let distance = dx.hypot(dy);
    if distance == 0.0 {
        return Ok(0.0);
    }

    let ground_x = speed * dx / distance;
    let ground_y = speed * dy / distance;
    let air_speed = (ground_x - wind.x()).hypot(ground_y - wind.y());

    Ok(power(drone, air_speed) * distance / speed)
}

/// Energy (J) from `from` to `to` at constant air speed.
///
/// The ground speed `v` along the unit direction `u` satisfies
/// `|v·u − wind| = drone.speed`, whose forward root is
/// `v = e + sqrt(e² − f)` with `e = wind·u` and `f = |wind|² − speed²`.
///
/// # Errors
///
/// - [`ConfigError::SafetyFactorTooLow`] if `safety_factor <= 1`
/// - [`ConfigError::WindTooStrong`] unless `drone.speed > safety_factor * wind.speed`
pub fn cost_b(
    from: &Point,
    to: &Point,
    drone: &Drone,
    wind: &Wind,
    safety_factor: f64,
) -> Result<f64, ConfigError> {
    check_headway(drone, wind, safety_factor)?;

    let (dx, dy) = from.displacement_to(to);
    let distance = dx.hypot(dy);
    if distance == 0.0 {
        return Ok(0.0);
    }

    let (ux, uy) = (dx / distance, dy / distance);
    let e = wind.x() * ux + wind.y() * uy;
    let f = wind.speed().powi(2) - drone.speed().powi(2);
    let ground_speed = e + (e * e - f).sqrt();

    Ok(power(drone, drone.speed()) * distance / ground_speed)
}

pub(super) fn check_headway(
    drone: &Drone,
    wind: &Wind,
    safety_factor: f64,
) -> Result<(), ConfigError> {
    if safety_factor.is_nan() || safety_factor <= 1.0 {
        return Err(ConfigError::SafetyFactorTooLow { safety_factor });
    }
    // NaN anywhere leaves the speeds unordered, which is rejected too
    let required = safety_factor * wind.speed();
    if drone.speed().partial_cmp(&required) != Some(Ordering::Greater) {
        return Err(ConfigError::WindTooStrong {
            drone_speed: drone.speed(),
            wind_speed: wind.speed(),
            safety_factor,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drone() -> Drone {
        Drone::new(1000, 10.0, 0.01).expect("valid")
    }

    #[test]
    fn test_power() {
        // 0.5 * 1.3 * 0.01 * 1000
        assert!((power(&drone(), 10.0) - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_zero_distance() {
        let p = Point::new("P", 7.0, -3.0);
        let q = Point::new("Q", 7.0, -3.0);
        let wind = Wind::new(2.0, 1.0);
        assert_eq!(cost_a(&p, &q, &drone(), &wind), Ok(0.0));
        assert_eq!(cost_b(&p, &q, &drone(), &wind, 2.0), Ok(0.0));
    }

    #[test]
    fn test_models_agree_without_wind() {
        let a = Point::new("A", 0.0, 0.0);
        let b = Point::new("B", 30.0, 40.0);
        let ca = cost_a(&a, &b, &drone(), &Wind::calm()).expect("valid");
        let cb = cost_b(&a, &b, &drone(), &Wind::calm(), 2.0).expect("valid");
        // 50 m at 10 m/s = 5 s at 6.5 W
        assert!((ca - 32.5).abs() < 1e-9);
        assert!((cb - 32.5).abs() < 1e-9);
    }

    #[test]
    fn test_cost_a_headwind_costs_more() {
        let a = Point::new("A", 0.0, 0.0);
        let b = Point::new("B", 100.0, 0.0);
        let wind = Wind::new(3.0, 0.0);
        let downwind = cost_a(&a, &b, &drone(), &wind).expect("valid");
        let upwind = cost_a(&b, &a, &drone(), &wind).expect("valid");
        // air speed 7 m/s vs 13 m/s, both for 10 s
        assert!((downwind - power(&drone(), 7.0) * 10.0).abs() < 1e-9);
        assert!((upwind - power(&drone(), 13.0) * 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_cost_b_tailwind_and_headwind() {
        let a = Point::new("A", 0.0, 0.0);
        let b = Point::new("B", 100.0, 0.0);
        let wind = Wind::new(2.0, 0.0);
        let downwind = cost_b(&a, &b, &drone(), &wind, 2.0).expect("valid");
        let upwind = cost_b(&b, &a, &drone(), &wind, 2.0).expect("valid");
        // ground speed 12 m/s downwind, 8 m/s upwind
        assert!((downwind - 6.5 * 100.0 / 12.0).abs() < 1e-9);
        assert!((upwind - 6.5 * 100.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_cost_b_crosswind() {
        let a = Point::new("A", 0.0, 0.0);
        let b = Point::new("B", 0.0, 80.0);
        let wind = Wind::new(3.0, 0.0);
        let cost = cost_b(&a, &b, &drone(), &wind, 2.0).expect("valid");
        // crabbing: ground speed sqrt(100 - 9)
        let expected = 6.5 * 80.0 / 91.0_f64.sqrt();
        assert!((cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_cost_a_rejects_non_positive_speed() {
        let a = Point::new("A", 0.0, 0.0);
        let b = Point::new("B", 1.0, 0.0);
        let stalled = Drone::unchecked(100, 0.0, 0.01);
        assert!(matches!(
            cost_a(&a, &b, &stalled, &Wind::calm()),
            Err(ConfigError::NonPositiveSpeed { .. })
        ));
        let reversed = Drone::unchecked(100, -3.0, 0.01);
        assert!(cost_a(&a, &b, &reversed, &Wind::calm()).is_err());
    }

    #[test]
    fn test_cost_b_rejects_equal_speeds() {
        let a = Point::new("A", 0.0, 0.0);
        let b = Point::new("B", 1.0, 0.0);
        let wind = Wind::new(10.0, 0.0);
        assert!(matches!(
            cost_b(&a, &b, &drone(), &wind, 1.0),
            Err(ConfigError::SafetyFactorTooLow { .. })
        ));
        assert!(matches!(
            cost_b(&a, &b, &drone(), &wind, 2.0),
            Err(ConfigError::WindTooStrong { .. })
        ));
    }

    #[test]
    fn test_cost_b_rejects_marginal_wind() {
        let a = Point::new("A", 0.0, 0.0);
        let b = Point::new("B", 1.0, 0.0);
        // 10 > 2 * 5 does not hold
        let wind = Wind::new(0.0, 5.0);
        assert!(cost_b(&a, &b, &drone(), &wind, 2.0).is_err());
        assert!(cost_b(&a, &b, &drone(), &Wind::new(0.0, 4.9), 2.0).is_ok());
    }

    #[test]
    fn test_nan_inputs_rejected() {
        let a = Point::new("A", 0.0, 0.0);
        let b = Point::new("B", 1.0, 0.0);
        let lost = Drone::unchecked(100, f64::NAN, 0.01);
        assert!(matches!(
            cost_a(&a, &b, &lost, &Wind::calm()),
            Err(ConfigError::NonPositiveSpeed { .. })
        ));
        assert!(matches!(
            cost_b(&a, &b, &drone(), &Wind::calm(), f64::NAN),
            Err(ConfigError::SafetyFactorTooLow { .. })
        ));
        assert!(matches!(
            cost_b(&a, &b, &drone(), &Wind::new(f64::NAN, 0.0), 2.0),
            Err(ConfigError::WindTooStrong { .. })
        ));
        assert!(matches!(
            cost_b(&a, &b, &lost, &Wind::calm(), 2.0),
            Err(ConfigError::WindTooStrong { .. })
        ));
    }
}
