use nalgebra::Vector3;

use chaos_sim::sim::{self, TimeGrid};
use chaos_sim::systems::lorenz::LorenzParams;

fn main() {
    let params = LorenzParams::default();
    let grid = TimeGrid::new(0.01, 50.0).expect("valid grid");

    println!("Simulating two Lorenz runs, dx0 = 1e-4 ...");
    let (a, b) = sim::simulate_pair(
        &params,
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0001, 1.0, 1.0),
        &grid,
    )
    .expect("simulation");

    let sep = sim::separation(&a, &b);
    for i in (0..sep.len()).step_by(sep.len() / 25) {
        println!("t = {:6.2} s   |delta| = {:.4e}", a.time(i), sep[i]);
    }
    println!(
        "Separation grew {:.1e}x over {} steps",
        sep.last().unwrap() / sep[0],
        grid.steps()
    );
}
