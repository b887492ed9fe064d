//! Error types.

use thiserror::Error;

/// Invalid physical configuration of a drone, wind, or cost model.
///
/// These are caller contract violations. They are reported once, when
/// [`DeliveryParameters`](crate::models::DeliveryParameters) are built, and
/// again by the cost functions themselves if called directly with bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Drone speed must be strictly positive and finite.
    #[error("drone speed must be positive, got {speed}")]
    NonPositiveSpeed {
        /// Offending speed (m/s).
        speed: f64,
    },
    /// Drone capacity must be strictly positive.
    #[error("drone capacity must be positive")]
    NonPositiveCapacity,
    /// Drag-area product must be strictly positive and finite.
    #[error("drone drag-area product must be positive, got {acd}")]
    NonPositiveDragArea {
        /// Offending `acd` value.
        acd: f64,
    },
    /// Wind components must be finite.
    #[error("wind vector ({x}, {y}) is not finite")]
    NonFiniteWind {
        /// X component.
        x: f64,
        /// Y component.
        y: f64,
    },
    /// Safety factor of the air-speed model must exceed 1.
    #[error("safety factor must be greater than 1, got {safety_factor}")]
    SafetyFactorTooLow {
        /// Offending factor.
        safety_factor: f64,
    },
    /// The drone cannot make safe headway against the wind.
    #[error(
        "drone speed {drone_speed} m/s must exceed {safety_factor} x wind speed {wind_speed} m/s"
    )]
    WindTooStrong {
        /// Drone air speed (m/s).
        drone_speed: f64,
        /// Wind speed (m/s).
        wind_speed: f64,
        /// Required ratio.
        safety_factor: f64,
    },
}

/// Failure to evaluate the energy cost of a delivery.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostError {
    /// The delivery parameters carry no cost function.
    #[error("no cost function configured")]
    Undefined,
    /// The cost function rejected its inputs.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failure of a savings-based construction run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    /// Strategy name is neither `sequential` nor `parallel`.
    #[error("unknown construction strategy `{0}`")]
    UnknownStrategy(String),
    /// The cost function rejected its inputs while building savings.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
