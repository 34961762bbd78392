//! Physical parameters and their startup validation.
//!
//! Parameters are fixed for the lifetime of the process. They are gathered
//! from [`crate::constants`] by [`PhysicsParams::default`] and must pass
//! [`PhysicsParams::validate`] before the frame loop starts; a bad value is a
//! configuration fault, never something the per-frame update has to handle.

use crate::constants::{
    DAMPING_COEFFICIENT, EPSILON, EQUILIBRIUM_X, OBJ_MASS, SPRING_STIFFNESS, START_VELOCITY,
    THRESHOLD,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("object mass must be positive, got {0}")]
    NonPositiveMass(f32),
    #[error("spring stiffness must be positive, got {0}")]
    NonPositiveStiffness(f32),
    #[error("damping coefficient must not be negative, got {0}")]
    NegativeDamping(f32),
    #[error("settle epsilon must be positive, got {0}")]
    NonPositiveEpsilon(f64),
    #[error("release threshold must not be negative, got {0}")]
    NegativeThreshold(f64),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsParams {
    pub equilibrium: f32,
    pub stiffness: f32,
    pub mass: f32,
    pub damping: f32,
    /// Velocity the oscillator starts with, so the first release already moves.
    pub start_velocity: f32,
    /// Settle threshold for both |displacement| and |velocity|.
    pub epsilon: f64,
    /// Minimum |displacement| at release that starts a simulation.
    pub threshold: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            equilibrium: EQUILIBRIUM_X,
            stiffness: SPRING_STIFFNESS,
            mass: OBJ_MASS,
            damping: DAMPING_COEFFICIENT,
            start_velocity: START_VELOCITY,
            epsilon: EPSILON,
            threshold: THRESHOLD,
        }
    }
}

impl PhysicsParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("equilibrium", self.equilibrium),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
            ("damping", self.damping),
            ("start_velocity", self.start_velocity),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if !self.epsilon.is_finite() {
            return Err(ConfigError::NonFinite("epsilon"));
        }
        if !self.threshold.is_finite() {
            return Err(ConfigError::NonFinite("threshold"));
        }

        if self.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        if self.stiffness <= 0.0 {
            return Err(ConfigError::NonPositiveStiffness(self.stiffness));
        }
        if self.damping < 0.0 {
            return Err(ConfigError::NegativeDamping(self.damping));
        }
        if self.epsilon <= 0.0 {
            return Err(ConfigError::NonPositiveEpsilon(self.epsilon));
        }
        if self.threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold(self.threshold));
        }
        Ok(())
    }
}
