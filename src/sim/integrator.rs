use crate::systems::lorenz::{self, LorenzParams, LorenzState};
use crate::systems::pendulum::{self, PendulumParams, PendulumState};

// ---------------------------------------------------------------------------
// Fixed-step steppers. No adaptive control, no stability detection: a dt too
// large for the system drives the state non-finite and the values propagate.
// ---------------------------------------------------------------------------

/// Single explicit Euler step for the Lorenz system.
///
/// All three components advance simultaneously from the same pre-step state
/// (fully explicit, not semi-implicit).
pub fn euler_step(state: LorenzState, params: &LorenzParams, dt: f64) -> LorenzState {
    state + lorenz::derivatives(&state, params) * dt
}

/// Single semi-implicit (symplectic) Euler step for the pendulum.
///
/// The velocity is updated first and the NEW velocity advances the angle.
/// This ordering keeps the undamped pendulum's energy bounded over long runs;
/// swapping it degenerates to fully-explicit Euler, which drifts.
pub fn semi_implicit_step(
    state: PendulumState,
    params: &PendulumParams,
    dt: f64,
) -> PendulumState {
    let omega = state.omega + pendulum::angular_acceleration(&state, params) * dt;
    let theta = state.theta + omega * dt;
    PendulumState { theta, omega }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
