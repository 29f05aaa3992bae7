use std::f64::consts::PI;

use chaos_sim::sim::{self, TimeGrid};
use chaos_sim::systems::pendulum::{PendulumParams, PendulumState};

fn main() {
    // Shorter horizon variant of the pendulum scenario: same core, the
    // trajectory read as a theta-omega orbit instead of time series.
    let params = PendulumParams::default();
    let grid = TimeGrid::new(0.05, 50.0).expect("valid grid");
    let initial = PendulumState::new(PI / 3.0, 0.0);

    println!("Simulating damped pendulum, theta0 = 60 deg, T = {} s ...", grid.horizon());
    let traj = sim::simulate(&params, initial, &grid).expect("simulation");

    println!("{:>10}  {:>12}", "theta", "omega");
    for s in traj.iter().step_by(traj.len() / 40) {
        println!("{:>10.4}  {:>12.4}", s.theta, s.omega);
    }

    let last = traj.last();
    println!(
        "Spiraled from ({:.3}, {:.3}) to ({:.3e}, {:.3e}) over {} points",
        initial.theta,
        initial.omega,
        last.theta,
        last.omega,
        traj.len()
    );
}
