use thiserror::Error;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Rejected simulation configuration.
///
/// Every variant is raised before a single integration step runs and before
/// any trajectory buffer is allocated. Numerical instability mid-run (NaN or
/// infinity from a too-large step) is deliberately NOT represented here; the
/// integrators propagate non-finite values into the buffer unguarded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Integration time step must be strictly positive.
    #[error("time step must be positive, got {0}")]
    NonPositiveDt(f64),

    /// Simulation horizon must be strictly positive.
    #[error("time horizon must be positive, got {0}")]
    NonPositiveHorizon(f64),

    /// Lorenz parameters sigma, rho, beta must all be strictly positive.
    #[error("lorenz parameter {name} must be positive, got {value}")]
    NonPositiveLorenzParam {
        /// Which parameter failed validation.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Pendulum length must be strictly positive.
    #[error("pendulum length must be positive, got {0}")]
    NonPositiveLength(f64),

    /// Gravitational acceleration must be strictly positive.
    #[error("gravity must be positive, got {0}")]
    NonPositiveGravity(f64),

    /// Damping coefficient must be non-negative.
    #[error("damping coefficient must be non-negative, got {0}")]
    NegativeDamping(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_dt() {
        let err = ConfigError::NonPositiveDt(-0.01);
        let msg = format!("{err}");
        assert!(msg.contains("time step"));
        assert!(msg.contains("-0.01"));
    }

    #[test]
    fn error_display_lorenz_param() {
        let err = ConfigError::NonPositiveLorenzParam {
            name: "sigma",
            value: 0.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("sigma"));
        assert!(msg.contains("0"));
    }
}
