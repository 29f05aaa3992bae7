use std::f64::consts::PI;

use nalgebra::Vector3;

use chaos_sim::sim::{self, TimeGrid};
use chaos_sim::systems::lorenz::LorenzParams;
use chaos_sim::systems::pendulum::{PendulumParams, PendulumState};

fn main() {
    // -----------------------------------------------------------------------
    // Scenario 1: Lorenz attractor, sensitivity to initial conditions
    // -----------------------------------------------------------------------
    let lorenz = LorenzParams::default();
    let grid = TimeGrid::new(0.01, 50.0).expect("valid lorenz grid");

    let perturbation = 1e-4;
    let a0 = Vector3::new(1.0, 1.0, 1.0);
    let b0 = Vector3::new(1.0 + perturbation, 1.0, 1.0);

    let (traj_a, traj_b) =
        sim::simulate_pair(&lorenz, a0, b0, &grid).expect("lorenz simulation");
    let sep = sim::separation(&traj_a, &traj_b);

    println!();
    println!("====================================================================");
    println!("  LORENZ ATTRACTOR — SENSITIVITY TO INITIAL CONDITIONS");
    println!("====================================================================");
    println!();
    println!("  Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  sigma:    {:>8.2}       rho:     {:>8.2}       beta:  {:>8.4}",
        lorenz.sigma, lorenz.rho, lorenz.beta
    );
    println!(
        "  dt:       {:>8.3} s     horizon: {:>8.1} s     steps: {:>8}",
        grid.dt(),
        grid.horizon(),
        grid.steps()
    );
    println!("  initial separation: {perturbation:.1e} (x component)");
    println!();

    println!("  Divergence");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>12}  {:>22}  {:>22}",
        "t (s)", "|Δ|", "run 1 (x, y, z)", "run 2 (x, y, z)"
    );
    println!("  {}", "─".repeat(68));

    let sample_interval = (traj_a.len() / 10).max(1);
    for i in (0..traj_a.len()).step_by(sample_interval) {
        let (sa, sb) = (traj_a[i], traj_b[i]);
        println!(
            "  {:>7.2}  {:>12.4e}  {:>6.1} {:>6.1} {:>6.1}   {:>6.1} {:>6.1} {:>6.1}",
            traj_a.time(i),
            sep[i],
            sa.x, sa.y, sa.z,
            sb.x, sb.y, sb.z,
        );
    }

    let final_sep = *sep.last().unwrap();
    println!();
    println!(
        "  Final separation: {:.3e}  ({:.1e}x the initial perturbation)",
        final_sep,
        final_sep / perturbation
    );
    println!();

    // -----------------------------------------------------------------------
    // Scenario 2: damped pendulum settling from 60 degrees
    // -----------------------------------------------------------------------
    let pendulum = PendulumParams::default();
    let grid = TimeGrid::new(0.05, 100.0).expect("valid pendulum grid");
    let s0 = PendulumState::new(PI / 3.0, 0.0);

    let traj = sim::simulate(&pendulum, s0, &grid).expect("pendulum simulation");

    println!("====================================================================");
    println!("  DAMPED PENDULUM — SETTLING FROM 60 DEGREES");
    println!("====================================================================");
    println!();
    println!("  Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  length:   {:>8.2} m     gravity: {:>8.2} m/s^2  damping: {:>6.2}",
        pendulum.length, pendulum.gravity, pendulum.damping
    );
    println!(
        "  dt:       {:>8.3} s     horizon: {:>8.1} s     steps:   {:>6}",
        grid.dt(),
        grid.horizon(),
        grid.steps()
    );
    println!();

    println!("  Motion");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>11}  {:>12}  {:>11}",
        "t (s)", "theta (rad)", "omega (rad/s)", "E (J/kg)"
    );
    println!("  {}", "─".repeat(48));

    let sample_interval = (traj.len() / 20).max(1);
    for i in (0..traj.len()).step_by(sample_interval) {
        let s = traj[i];
        println!(
            "  {:>7.2}  {:>11.4}  {:>12.4}  {:>11.4}",
            traj.time(i),
            s.theta,
            s.omega,
            s.energy(&pendulum)
        );
    }

    let last = traj.last();
    let peak_omega = traj
        .iter()
        .map(|s| s.omega.abs())
        .fold(0.0_f64, f64::max);
    println!();
    println!(
        "  Peak |omega|: {:.3} rad/s   Final theta: {:.4} rad   Final |omega|: {:.2e} rad/s",
        peak_omega,
        last.theta,
        last.omega.abs()
    );
    println!();
    println!("====================================================================");
    println!();
}
