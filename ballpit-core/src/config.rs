use std::time::Duration;
use thiserror::Error;

/// Reasons a configuration or arena is rejected
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("min_timestep must be positive, got {0}")]
    NonPositiveTimestep(f64),
    #[error("impulse_ttl must not be negative, got {0}")]
    NegativeImpulseTtl(f64),
    #[error("bounce_factor must lie in [0, 1], got {0}")]
    BounceOutOfRange(f64),
    #[error("impulse range is inverted: min {min} > max {max}")]
    InvertedImpulseRange { min: f64, max: f64 },
    #[error("arena {width}x{height} cannot hold a ball of radius {radius}")]
    ArenaTooSmall { width: f64, height: f64, radius: f64 },
}

/// Physics constants shared by every body in a simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Fraction of velocity kept after a wall hit
    pub bounce_factor: f64,
    pub mass: f64,
    pub gravity: f64,
    pub radius: f64,
    /// Floor for the per-step dt, in seconds; also the scheduler cadence
    pub min_timestep: f64,
    /// Inclusive bounds for each component of a spawn impulse
    pub impulse_range: (f64, f64),
    /// Seconds a spawn impulse keeps acting
    pub impulse_ttl: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bounce_factor: 0.8,
            mass: 10.0,
            gravity: 10.0,
            radius: 15.0,
            min_timestep: 0.005,
            impulse_range: (-1000.0, 1000.0),
            impulse_ttl: 0.10,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("bounce_factor", self.bounce_factor),
            ("mass", self.mass),
            ("gravity", self.gravity),
            ("radius", self.radius),
            ("min_timestep", self.min_timestep),
            ("impulse_range.min", self.impulse_range.0),
            ("impulse_range.max", self.impulse_range.1),
            ("impulse_ttl", self.impulse_ttl),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        if self.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.radius));
        }
        if self.min_timestep <= 0.0 {
            return Err(ConfigError::NonPositiveTimestep(self.min_timestep));
        }
        if self.impulse_ttl < 0.0 {
            return Err(ConfigError::NegativeImpulseTtl(self.impulse_ttl));
        }
        if !(0.0..=1.0).contains(&self.bounce_factor) {
            return Err(ConfigError::BounceOutOfRange(self.bounce_factor));
        }
        let (min, max) = self.impulse_range;
        if min > max {
            return Err(ConfigError::InvertedImpulseRange { min, max });
        }
        Ok(())
    }

    /// Check that a ball fits in a `width x height` arena on both axes.
    pub fn check_arena(&self, width: f64, height: f64) -> Result<(), ConfigError> {
        let diameter = 2.0 * self.radius;
        if !(width > diameter && height > diameter) {
            return Err(ConfigError::ArenaTooSmall {
                width,
                height,
                radius: self.radius,
            });
        }
        Ok(())
    }

    /// How often the driver should call `step`
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(self.min_timestep)
    }
}
