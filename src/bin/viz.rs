use std::f64::consts::PI;
use std::time::Duration;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};
use nalgebra::Vector3;

use chaos_sim::render::{component_limits, AxisLimits, FrameCursor};
use chaos_sim::sim::{self, TimeGrid, Trajectory};
use chaos_sim::systems::lorenz::{LorenzParams, LorenzState};
use chaos_sim::systems::pendulum::{PendulumParams, PendulumState};

fn main() -> eframe::Result {
    let lorenz = LorenzParams::default();
    let lorenz_grid = TimeGrid::new(0.01, 50.0).expect("valid lorenz grid");
    let (lorenz_a, lorenz_b) = sim::simulate_pair(
        &lorenz,
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0001, 1.0, 1.0),
        &lorenz_grid,
    )
    .expect("lorenz simulation");

    let pendulum = PendulumParams::default();
    let pendulum_grid = TimeGrid::new(0.05, 100.0).expect("valid pendulum grid");
    let pendulum_traj = sim::simulate(&pendulum, PendulumState::new(PI / 3.0, 0.0), &pendulum_grid)
        .expect("pendulum simulation");

    let app = ChaosViz::new(lorenz_a, lorenz_b, pendulum, pendulum_traj);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Chaotic Systems", options, Box::new(|_| Ok(Box::new(app))))
}

struct ChaosViz {
    lorenz_a: Trajectory<LorenzState>,
    lorenz_b: Trajectory<LorenzState>,
    pendulum: PendulumParams,
    pendulum_traj: Trajectory<PendulumState>,
    lorenz_cursor: FrameCursor,
    pendulum_cursor: FrameCursor,
    // Axis limits fixed from the completed buffers before the first frame
    lorenz_x: AxisLimits,
    lorenz_y: AxisLimits,
    lorenz_t: AxisLimits,
    phase_theta: AxisLimits,
    phase_omega: AxisLimits,
}

impl ChaosViz {
    fn new(
        lorenz_a: Trajectory<LorenzState>,
        lorenz_b: Trajectory<LorenzState>,
        pendulum: PendulumParams,
        pendulum_traj: Trajectory<PendulumState>,
    ) -> Self {
        let both: Vec<LorenzState> = lorenz_a
            .iter()
            .chain(lorenz_b.iter())
            .copied()
            .collect();
        let lorenz_x = component_limits(&both, |s| s.x).padded(0.05);
        let lorenz_y = component_limits(&both, |s| s.y).padded(0.05);
        let lorenz_t = AxisLimits {
            min: 0.0,
            max: lorenz_a.time(lorenz_a.len() - 1),
        };
        let phase_theta =
            component_limits(pendulum_traj.states(), |s| s.theta).padded(0.1);
        let phase_omega =
            component_limits(pendulum_traj.states(), |s| s.omega).padded(0.1);

        let lorenz_cursor = FrameCursor::new(lorenz_a.len());
        let pendulum_cursor = FrameCursor::new(pendulum_traj.len());

        Self {
            lorenz_a,
            lorenz_b,
            pendulum,
            pendulum_traj,
            lorenz_cursor,
            pendulum_cursor,
            lorenz_x,
            lorenz_y,
            lorenz_t,
            phase_theta,
            phase_omega,
        }
    }
}

impl eframe::App for ChaosViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One buffer index per repaint, strictly in order
        self.lorenz_cursor.advance();
        self.pendulum_cursor.advance();
        let li = self.lorenz_cursor.current().unwrap_or(0);
        let pi = self.pendulum_cursor.current().unwrap_or(0);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Lorenz attractor and damped pendulum");
            ui.label(format!(
                "Lorenz t = {:.2} s  |  pendulum t = {:.2} s  |  separation |Δ| = {:.3e}",
                self.lorenz_a.time(li),
                self.pendulum_traj.time(pi),
                (self.lorenz_a[li] - self.lorenz_b[li]).norm(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Lorenz attractor, x-y projection, both runs
                ui.vertical(|ui| {
                    ui.label("Lorenz attractor (x-y projection)");
                    let trail_a: PlotPoints = self.lorenz_a.states()[..=li]
                        .iter()
                        .map(|s| [s.x, s.y])
                        .collect();
                    let trail_b: PlotPoints = self.lorenz_b.states()[..=li]
                        .iter()
                        .map(|s| [s.x, s.y])
                        .collect();
                    let head_a = self.lorenz_a[li];
                    let head_b = self.lorenz_b[li];
                    Plot::new("attractor")
                        .width(half_w)
                        .height(half_h)
                        .include_x(self.lorenz_x.min)
                        .include_x(self.lorenz_x.max)
                        .include_y(self.lorenz_y.min)
                        .include_y(self.lorenz_y.max)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Run 1", trail_a));
                            plot_ui.line(Line::new("Run 2", trail_b));
                            plot_ui.points(
                                Points::new("Run 1 head", vec![[head_a.x, head_a.y]])
                                    .radius(4.0),
                            );
                            plot_ui.points(
                                Points::new("Run 2 head", vec![[head_b.x, head_b.y]])
                                    .radius(4.0),
                            );
                        });
                });

                // X vs time, both runs
                ui.vertical(|ui| {
                    ui.label("X vs time");
                    let x_a: PlotPoints = (0..=li)
                        .map(|i| [self.lorenz_a.time(i), self.lorenz_a[i].x])
                        .collect();
                    let x_b: PlotPoints = (0..=li)
                        .map(|i| [self.lorenz_b.time(i), self.lorenz_b[i].x])
                        .collect();
                    Plot::new("x_vs_t")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .include_x(self.lorenz_t.min)
                        .include_x(self.lorenz_t.max)
                        .include_y(self.lorenz_x.min)
                        .include_y(self.lorenz_x.max)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Run 1", x_a));
                            plot_ui.line(Line::new("Run 2", x_b));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Pendulum rod in the vertical plane
                ui.vertical(|ui| {
                    ui.label("Pendulum");
                    let (bx, by) = self.pendulum_traj[pi].bob_position(&self.pendulum);
                    let reach = self.pendulum.length * 1.2;
                    Plot::new("rod")
                        .width(half_w)
                        .height(half_h)
                        .data_aspect(1.0)
                        .include_x(-reach)
                        .include_x(reach)
                        .include_y(-reach)
                        .include_y(reach)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Rod", vec![[0.0, 0.0], [bx, by]]));
                            plot_ui.points(Points::new("Bob", vec![[bx, by]]).radius(6.0));
                        });
                });

                // Phase portrait with cumulative trail
                ui.vertical(|ui| {
                    ui.label("Phase portrait (theta-omega)");
                    let trail: PlotPoints = self.pendulum_traj.states()[..=pi]
                        .iter()
                        .map(|s| [s.theta, s.omega])
                        .collect();
                    let head = self.pendulum_traj[pi];
                    Plot::new("phase")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("theta (rad)")
                        .include_x(self.phase_theta.min)
                        .include_x(self.phase_theta.max)
                        .include_y(self.phase_omega.min)
                        .include_y(self.phase_omega.max)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Orbit", trail));
                            plot_ui.points(
                                Points::new("State", vec![[head.theta, head.omega]])
                                    .radius(4.0),
                            );
                        });
                });
            });
        });

        if !self.lorenz_cursor.finished() || !self.pendulum_cursor.finished() {
            ctx.request_repaint_after(Duration::from_millis(10));
        }
    }
}
