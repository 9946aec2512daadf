//! Interactive arena window for ballpit
//!
//! Clicks on the arena queue a spawn; each frame drains the queue, steps the
//! simulation by the wall-clock time since the previous frame and redraws.

use ballpit_core::{
    render, Color, FrameClock, InputEvent, RenderSurface, SimState, Simulation, SpawnQueue,
};
use eframe::egui;
use glam::DVec2;
use log::info;
use rand_pcg::Pcg64;
use std::time::Instant;

/// Draws arena coordinates onto an egui painter whose origin is the arena's top-left corner
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl RenderSurface for PainterSurface<'_> {
    fn size(&self) -> (f64, f64) {
        (self.rect.width() as f64, self.rect.height() as f64)
    }

    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, 0.0, egui::Color32::from_gray(24));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        let [r, g, b] = color.rgb();
        let screen = self.rect.min + egui::vec2(center.x as f32, center.y as f32);
        self.painter
            .circle_filled(screen, radius as f32, egui::Color32::from_rgb(r, g, b));
    }
}

pub struct ArenaApp {
    sim: Simulation,
    rng: Pcg64,
    queue: SpawnQueue,
    /// Started on the first spawn
    clock: Option<FrameClock>,
}

impl ArenaApp {
    pub fn new(sim: Simulation, rng: Pcg64) -> Self {
        Self {
            sim,
            rng,
            queue: SpawnQueue::new(),
            clock: None,
        }
    }

    fn advance(&mut self, now: Instant) {
        if self.sim.drain_inputs(&mut self.queue, &mut self.rng) > 0 && self.clock.is_none() {
            info!("starting frame clock");
            self.clock = Some(FrameClock::start(now));
        }

        if self.sim.state() != SimState::Running {
            return;
        }
        let Some(clock) = self.clock.as_mut() else {
            return;
        };
        if !clock.try_begin() {
            return;
        }
        let elapsed_ms = clock.tick(now);
        self.sim.step(elapsed_ms);
        clock.finish();
    }
}

impl eframe::App for ArenaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance(Instant::now());

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match self.sim.state() {
                    SimState::Uninitialized => ui.label("Click anywhere in the arena to drop a ball"),
                    SimState::Running => ui.label(format!("Balls: {}", self.sim.body_count())),
                };
                ui.separator();
                ui.label(format!("t = {:.2}s", self.sim.elapsed_sim_time()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let bounds = self.sim.bounds();
            let size = egui::vec2(bounds.x as f32, bounds.y as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
            let rect = response.rect;

            if response.clicked() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    let local = pointer - rect.min;
                    self.queue.push(InputEvent {
                        pos: DVec2::new(local.x as f64, local.y as f64),
                        timestamp: ctx.input(|i| i.time),
                    });
                }
            }

            let mut surface = PainterSurface {
                painter: &painter,
                rect,
            };
            render(&self.sim, &mut surface);
        });

        if self.sim.state() == SimState::Running || !self.queue.is_empty() {
            ctx.request_repaint_after(self.sim.config().tick_interval());
        }
    }
}
