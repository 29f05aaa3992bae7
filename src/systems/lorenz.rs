use nalgebra::Vector3;

use crate::error::ConfigError;
use crate::sim::integrator::euler_step;
use crate::systems::System;

// ---------------------------------------------------------------------------
// Lorenz system: dx = σ(y−x), dy = x(ρ−z) − y, dz = xy − βz
// ---------------------------------------------------------------------------

/// Phase-space state (x, y, z).
pub type LorenzState = Vector3<f64>;

/// Lorenz system parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzParams {
    pub sigma: f64, // Prandtl number
    pub rho: f64,   // Rayleigh number
    pub beta: f64,  // geometric factor
}

impl Default for LorenzParams {
    /// Canonical chaotic regime.
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl System for LorenzParams {
    type State = LorenzState;

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("sigma", self.sigma),
            ("rho", self.rho),
            ("beta", self.beta),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveLorenzParam { name, value });
            }
        }
        Ok(())
    }

    fn step(&self, state: LorenzState, dt: f64) -> LorenzState {
        euler_step(state, self, dt)
    }
}

// ---------------------------------------------------------------------------
// Vector field
// ---------------------------------------------------------------------------

/// Time derivative of the Lorenz state.
///
/// Pure and deterministic: identical inputs give bit-identical outputs.
/// All real-valued states are valid; nothing is clamped or normalized.
pub fn derivatives(state: &LorenzState, params: &LorenzParams) -> LorenzState {
    Vector3::new(
        params.sigma * (state.y - state.x),
        state.x * (params.rho - state.z) - state.y,
        state.x * state.y - params.beta * state.z,
    )
}

/// Fixed points of the system.
///
/// The origin always; for ρ > 1 additionally
/// C± = (±√(β(ρ−1)), ±√(β(ρ−1)), ρ−1).
pub fn fixed_points(params: &LorenzParams) -> Vec<LorenzState> {
    if params.rho <= 1.0 {
        vec![Vector3::zeros()]
    } else {
        let c = (params.beta * (params.rho - 1.0)).sqrt();
        vec![
            Vector3::zeros(),
            Vector3::new(c, c, params.rho - 1.0),
            Vector3::new(-c, -c, params.rho - 1.0),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
