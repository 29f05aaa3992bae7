pub mod error;
pub mod render;
pub mod sim;
pub mod systems;

// Convenience re-exports
pub mod integrator {
    pub use crate::sim::integrator::{euler_step, semi_implicit_step};
    pub use crate::sim::runner::{simulate, simulate_pair};
}

pub mod types {
    pub use crate::error::ConfigError;
    pub use crate::sim::trajectory::{TimeGrid, Trajectory};
    pub use crate::systems::lorenz::{LorenzParams, LorenzState};
    pub use crate::systems::pendulum::{PendulumParams, PendulumState};
    pub use crate::systems::System;
}
