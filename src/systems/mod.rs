pub mod lorenz;
pub mod pendulum;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// System: the seam between a parameter set and the generic driver loop
// ---------------------------------------------------------------------------

/// A dynamical system advanced by a fixed-step scheme.
///
/// Implementors pair an immutable parameter set with the stepping rule that
/// fits the system (fully explicit Euler for Lorenz, semi-implicit Euler for
/// the pendulum). The driver in [`crate::sim::runner`] is generic over this
/// trait, so both pipelines share one loop.
pub trait System {
    /// Instantaneous state of the system. Dimensionality is fixed by the
    /// type, so it cannot vary across steps.
    type State: Copy + PartialEq + std::fmt::Debug;

    /// Check parameters before a run. Called by the driver ahead of buffer
    /// allocation.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Advance the state by one fixed step of size `dt`.
    ///
    /// No stability check is performed; a step size too large for the system
    /// produces non-finite values that propagate silently.
    fn step(&self, state: Self::State, dt: f64) -> Self::State;
}
