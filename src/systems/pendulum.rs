use crate::error::ConfigError;
use crate::sim::integrator::semi_implicit_step;
use crate::systems::System;

// ---------------------------------------------------------------------------
// Damped simple pendulum: α = −(g/L)·sin θ − b·ω
// ---------------------------------------------------------------------------

/// Pendulum state.
///
/// The angle is NOT normalized into [−π, π]: it accumulates without bound as
/// the pendulum winds, which is what phase portraits and time plots expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    pub theta: f64, // rad, unwrapped angle from the downward vertical
    pub omega: f64, // rad/s, angular velocity
}

impl PendulumState {
    pub fn new(theta: f64, omega: f64) -> Self {
        Self { theta, omega }
    }

    /// Bob position in the vertical plane, pivot at the origin:
    /// x = L·sin θ, y = −L·cos θ.
    pub fn bob_position(&self, params: &PendulumParams) -> (f64, f64) {
        (
            params.length * self.theta.sin(),
            -params.length * self.theta.cos(),
        )
    }

    /// Total mechanical energy per unit mass, E = ½ω² − (g/L)·cos θ.
    pub fn energy(&self, params: &PendulumParams) -> f64 {
        0.5 * self.omega * self.omega
            - (params.gravity / params.length) * self.theta.cos()
    }
}

/// Pendulum parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumParams {
    pub length: f64,  // m
    pub gravity: f64, // m/s^2
    pub damping: f64, // 1/s, viscous friction coefficient
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            length: 1.0,
            gravity: 9.81,
            damping: 0.25,
        }
    }
}

impl PendulumParams {
    /// Frictionless variant of these parameters.
    pub fn undamped(self) -> Self {
        Self { damping: 0.0, ..self }
    }
}

impl System for PendulumParams {
    type State = PendulumState;

    fn validate(&self) -> Result<(), ConfigError> {
        if self.length <= 0.0 {
            return Err(ConfigError::NonPositiveLength(self.length));
        }
        if self.gravity <= 0.0 {
            return Err(ConfigError::NonPositiveGravity(self.gravity));
        }
        if self.damping < 0.0 {
            return Err(ConfigError::NegativeDamping(self.damping));
        }
        Ok(())
    }

    fn step(&self, state: PendulumState, dt: f64) -> PendulumState {
        semi_implicit_step(state, self, dt)
    }
}

// ---------------------------------------------------------------------------
// Vector field
// ---------------------------------------------------------------------------

/// Angular acceleration for the damped pendulum.
pub fn angular_acceleration(state: &PendulumState, params: &PendulumParams) -> f64 {
    -(params.gravity / params.length) * state.theta.sin() - params.damping * state.omega
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn rest_at_bottom_is_equilibrium() {
        let params = PendulumParams::default();
        let state = PendulumState::new(0.0, 0.0);
        assert_eq!(angular_acceleration(&state, &params), 0.0);
    }

    #[test]
    fn restoring_torque_opposes_displacement() {
        let params = PendulumParams::default().undamped();
        let right = PendulumState::new(0.3, 0.0);
        let left = PendulumState::new(-0.3, 0.0);
        assert!(angular_acceleration(&right, &params) < 0.0);
        assert!(angular_acceleration(&left, &params) > 0.0);
    }

    #[test]
    fn damping_opposes_motion() {
        let params = PendulumParams::default();
        let moving = PendulumState::new(0.0, 2.0);
        // At the bottom only the friction term acts
        assert_relative_eq!(
            angular_acceleration(&moving, &params),
            -params.damping * 2.0
        );
    }

    #[test]
    fn bob_position_at_sixty_degrees() {
        let params = PendulumParams::default();
        let state = PendulumState::new(PI / 3.0, 0.0);
        let (x, y) = state.bob_position(&params);
        assert_relative_eq!(x, (PI / 3.0).sin(), epsilon = 1e-12);
        assert_relative_eq!(y, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn energy_at_rest_is_potential_only() {
        let params = PendulumParams::default();
        let state = PendulumState::new(PI / 3.0, 0.0);
        assert_relative_eq!(
            state.energy(&params),
            -(9.81 / 1.0) * 0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn rejects_bad_parameters() {
        let bad_len = PendulumParams { length: 0.0, ..Default::default() };
        assert_eq!(
            bad_len.validate(),
            Err(crate::error::ConfigError::NonPositiveLength(0.0))
        );

        let bad_g = PendulumParams { gravity: -9.81, ..Default::default() };
        assert!(bad_g.validate().is_err());

        let bad_b = PendulumParams { damping: -0.1, ..Default::default() };
        assert!(bad_b.validate().is_err());

        assert!(PendulumParams::default().validate().is_ok());
    }
}
