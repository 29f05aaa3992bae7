use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Time grid
// ---------------------------------------------------------------------------

/// Uniform integration grid: fixed step `dt` over horizon `horizon`.
///
/// The step count is derived once, `N = floor(horizon / dt)`, and the loop
/// runs exactly N iterations; step i corresponds to time i·dt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    dt: f64,      // s
    horizon: f64, // s
}

impl TimeGrid {
    /// Build a grid, rejecting non-positive step or horizon up front.
    pub fn new(dt: f64, horizon: f64) -> Result<Self, ConfigError> {
        if dt <= 0.0 {
            return Err(ConfigError::NonPositiveDt(dt));
        }
        if horizon <= 0.0 {
            return Err(ConfigError::NonPositiveHorizon(horizon));
        }
        Ok(Self { dt, horizon })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Number of integration steps, N = floor(horizon / dt).
    pub fn steps(&self) -> usize {
        (self.horizon / self.dt) as usize
    }

    /// Time of step index i.
    pub fn time(&self, index: usize) -> f64 {
        index as f64 * self.dt
    }
}

// ---------------------------------------------------------------------------
// Trajectory buffer
// ---------------------------------------------------------------------------

/// Completed record of one integration run.
///
/// Holds N+1 states for an N-step grid: index 0 is the exact initial
/// condition, index N the state after the final step. Allocated once with
/// exact capacity, filled monotonically by the driver, and immutable from
/// the outside — consumers (renderers, reports) only ever see a finished
/// buffer.
#[derive(Debug, Clone)]
pub struct Trajectory<S> {
    states: Vec<S>,
    dt: f64,
}

impl<S: Copy> Trajectory<S> {
    pub(crate) fn with_capacity(steps: usize, dt: f64) -> Self {
        Self {
            states: Vec::with_capacity(steps + 1),
            dt,
        }
    }

    pub(crate) fn push(&mut self, state: S) {
        self.states.push(state);
    }

    /// Number of recorded states (steps + 1).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// State at step index i.
    pub fn state(&self, index: usize) -> S {
        self.states[index]
    }

    /// Time of step index i.
    pub fn time(&self, index: usize) -> f64 {
        index as f64 * self.dt
    }

    /// All recorded states, in step order.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn first(&self) -> S {
        self.states[0]
    }

    pub fn last(&self) -> S {
        self.states[self.states.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }
}

impl<S: Copy> std::ops::Index<usize> for Trajectory<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.states[index]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
