pub mod integrator;
pub mod runner;
pub mod trajectory;

pub use integrator::{euler_step, semi_implicit_step};
pub use runner::{separation, simulate, simulate_pair};
pub use trajectory::{TimeGrid, Trajectory};
