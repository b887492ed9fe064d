//! Drone and wind parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A delivery drone.
///
/// # Examples
///
/// ```
/// use u_drone_routing::models::Drone;
///
/// let d = Drone::new(180, 10.3, 0.013).unwrap();
/// assert_eq!(d.capacity(), 180);
/// assert!(Drone::new(180, 0.0, 0.013).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    capacity: u32,
    speed: f64,
    acd: f64,
}

impl Drone {
    /// Creates a drone.
    ///
    /// `speed` is in m/s; `acd` is frontal area times drag coefficient (m²).
    pub fn new(capacity: u32, speed: f64, acd: f64) -> Result<Self, ConfigError> {
        let drone = Self {
            capacity,
            speed,
            acd,
        };
        drone.validate()?;
        Ok(drone)
    }

    /// Builds a drone without validation, as deserialization would.
    #[cfg(test)]
    pub(crate) fn unchecked(capacity: u32, speed: f64, acd: f64) -> Self {
        Self {
            capacity,
            speed,
            acd,
        }
    }

    /// Checks that every parameter is positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::NonPositiveCapacity);
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::NonPositiveSpeed { speed: self.speed });
        }
        if !(self.acd.is_finite() && self.acd > 0.0) {
            return Err(ConfigError::NonPositiveDragArea { acd: self.acd });
        }
        Ok(())
    }

    /// Maximum payload.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Cruise speed (m/s).
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Drag-area product.
    pub fn acd(&self) -> f64 {
        self.acd
    }
}

impl Default for Drone {
    fn default() -> Self {
        Self {
            capacity: 100,
            speed: 10.0,
            acd: 0.01,
        }
    }
}

/// A uniform wind field.
///
/// `x > 0` blows west to east, `y > 0` blows south to north.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Wind {
    x: f64,
    y: f64,
}

impl Wind {
    /// Creates a wind from its vector components (m/s).
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// No wind.
    pub fn calm() -> Self {
        Self::default()
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Wind vector `(x, y)`.
    pub fn vector(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Sets both components at once.
    pub fn set_vector(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Wind speed, the norm of the vector (m/s).
    pub fn speed(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rescales the vector to the target speed, keeping its direction.
    ///
    /// A calm wind has no direction; it becomes an eastward wind.
    pub fn set_speed(&mut self, target: f64) {
        let current = self.speed();
        if current > 0.0 {
            let ratio = target / current;
            self.x *= ratio;
            self.y *= ratio;
        } else {
            self.x = target;
        }
    }

    /// Checks that both components are finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::NonFiniteWind {
                x: self.x,
                y: self.y,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drone_new() {
        let d = Drone::new(510, 12.5, 0.024).expect("valid");
        assert_eq!(d.capacity(), 510);
        assert_eq!(d.speed(), 12.5);
        assert_eq!(d.acd(), 0.024);
    }

    #[test]
    fn test_drone_invalid() {
        assert_eq!(
            Drone::new(0, 10.0, 0.01),
            Err(ConfigError::NonPositiveCapacity)
        );
        assert!(matches!(
            Drone::new(10, -1.0, 0.01),
            Err(ConfigError::NonPositiveSpeed { .. })
        ));
        assert!(matches!(
            Drone::new(10, f64::NAN, 0.01),
            Err(ConfigError::NonPositiveSpeed { .. })
        ));
        assert!(matches!(
            Drone::new(10, 10.0, 0.0),
            Err(ConfigError::NonPositiveDragArea { .. })
        ));
    }

    #[test]
    fn test_drone_default_is_valid() {
        assert!(Drone::default().validate().is_ok());
    }

    #[test]
    fn test_wind_speed() {
        let w = Wind::new(3.0, 4.0);
        assert!((w.speed() - 5.0).abs() < 1e-10);
        assert_eq!(Wind::calm().speed(), 0.0);
    }

    #[test]
    fn test_wind_set_speed_keeps_direction() {
        let mut w = Wind::new(3.0, 4.0);
        w.set_speed(10.0);
        assert!((w.x() - 6.0).abs() < 1e-10);
        assert!((w.y() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_wind_set_speed_from_calm() {
        let mut w = Wind::calm();
        w.set_speed(2.5);
        assert_eq!(w.vector(), (2.5, 0.0));
    }

    #[test]
    fn test_wind_validate() {
        assert!(Wind::new(1.0, -1.0).validate().is_ok());
        assert!(Wind::new(f64::INFINITY, 0.0).validate().is_err());
    }
}
