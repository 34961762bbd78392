//! Damped spring-mass model advanced with semi-implicit Euler.
//!
//! The model keeps no state of its own: callers own an [`OscillatorState`],
//! hand it in by value and get the advanced state back.

use crate::params::PhysicsParams;

/// Position along the drag axis and its time derivative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OscillatorState {
    pub position: f32,
    pub velocity: f32,
}

impl OscillatorState {
    pub fn new(position: f32, velocity: f32) -> Self {
        Self { position, velocity }
    }

    /// Startup state: at equilibrium but already moving.
    pub fn initial(params: &PhysicsParams) -> Self {
        Self::new(params.equilibrium, params.start_velocity)
    }
}

#[inline]
pub fn displacement(params: &PhysicsParams, position: f32) -> f32 {
    position - params.equilibrium
}

#[inline]
pub fn acceleration(params: &PhysicsParams, state: OscillatorState) -> f32 {
    let d = displacement(params, state.position);
    -(params.stiffness / params.mass) * d - (params.damping / params.mass) * state.velocity
}

/// Advance one time step. Velocity is updated first and the position moves by
/// the new velocity; swapping the two turns this into explicit Euler.
pub fn step(params: &PhysicsParams, state: OscillatorState, dt: f32) -> OscillatorState {
    let a = acceleration(params, state);
    let velocity = state.velocity + a * dt;
    let position = state.position + velocity * dt;
    OscillatorState { position, velocity }
}

/// Kinetic plus spring potential energy, in f64.
pub fn mechanical_energy(params: &PhysicsParams, state: OscillatorState) -> f64 {
    let d = displacement(params, state.position) as f64;
    let v = state.velocity as f64;
    0.5 * params.mass as f64 * v * v + 0.5 * params.stiffness as f64 * d * d
}

/// Both |displacement| and |velocity| below epsilon, compared independently.
pub fn is_settled(params: &PhysicsParams, state: OscillatorState) -> bool {
    let d = (state.position as f64 - params.equilibrium as f64).abs();
    d < params.epsilon && (state.velocity as f64).abs() < params.epsilon
}

/// Released far enough from equilibrium to be worth simulating.
pub fn is_displaced(params: &PhysicsParams, position: f32) -> bool {
    (position as f64 - params.equilibrium as f64).abs() > params.threshold
}
