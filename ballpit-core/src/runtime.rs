use crate::config::{ConfigError, SimConfig};
use crate::engine::{Body, Lifetime};
use crate::input::SpawnQueue;
use crate::palette::{random_impulse, Color};
use glam::DVec2;
use log::{debug, info, trace, warn};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Seed for the colour generator used by [`Simulation::spawn_body`]
const DEFAULT_COLOR_SEED: u64 = 0x0ba1_1b17;

/// Lifecycle of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    /// No bodies yet; the driver should not be stepping
    Uninitialized,
    /// At least one body; the driver steps periodically
    Running,
}

/// What the renderer needs to draw one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub pos: DVec2,
    pub color: Color,
}

/// A set of independent bodies bouncing around a fixed rectangular arena
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    bounds: DVec2,
    bodies: Vec<Body>,
    state: SimState,
    color_rng: Pcg64,
    steps: u64,
    sim_time: f64,
}

impl Simulation {
    /// Build an empty simulation over a `width x height` arena.
    pub fn new(config: SimConfig, width: f64, height: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        config.check_arena(width, height)?;
        Ok(Self {
            config,
            bounds: DVec2::new(width, height),
            bodies: Vec::new(),
            state: SimState::Uninitialized,
            color_rng: Pcg64::seed_from_u64(DEFAULT_COLOR_SEED),
            steps: 0,
            sim_time: 0.0,
        })
    }

    /// Spawn a body at `(x, y)` with gravity and the given timed impulse.
    pub fn spawn_body(&mut self, x: f64, y: f64, impulse: DVec2) -> usize {
        let color = Color::random(&mut self.color_rng);
        self.insert(DVec2::new(x, y), impulse, color)
    }

    /// Spawn a body at `(x, y)` with a random impulse and colour drawn from `rng`.
    pub fn spawn_random<R: Rng + ?Sized>(&mut self, x: f64, y: f64, rng: &mut R) -> usize {
        let impulse = random_impulse(rng, self.config.impulse_range);
        let color = Color::random(rng);
        self.insert(DVec2::new(x, y), impulse, color)
    }

    /// Spawn one random body per queued input event. Returns how many were spawned.
    pub fn drain_inputs<R: Rng + ?Sized>(&mut self, queue: &mut SpawnQueue, rng: &mut R) -> usize {
        let mut spawned = 0;
        for event in queue.drain() {
            self.spawn_random(event.pos.x, event.pos.y, rng);
            spawned += 1;
        }
        spawned
    }

    fn insert(&mut self, pos: DVec2, impulse: DVec2, color: Color) -> usize {
        let mut body = Body::new(pos, color, self.config.gravity, self.config.mass);
        body.add_force(impulse, Lifetime::Remaining(self.config.impulse_ttl));

        let index = self.bodies.len();
        debug!(
            "spawned body {} at ({}, {}) impulse ({}, {}) color {}",
            index, pos.x, pos.y, impulse.x, impulse.y, color
        );
        self.bodies.push(body);

        if self.state == SimState::Uninitialized {
            info!("first body spawned, simulation running");
            self.state = SimState::Running;
        }
        index
    }

    /// Advance every body by the wall-clock time since the previous step,
    /// floored at `min_timestep`. Returns the dt actually used, in seconds.
    pub fn step(&mut self, elapsed_ms: f64) -> f64 {
        let dt = self.timestep_for(elapsed_ms);
        trace!("step {} dt={}", self.steps, dt);

        let SimConfig {
            mass,
            radius,
            bounce_factor,
            ..
        } = self.config;
        for body in self.bodies.iter_mut() {
            let net = body.resolve_forces(dt);
            body.integrate(dt, net, mass);
            body.apply_wall_collision(self.bounds, radius, bounce_factor);
        }

        self.steps += 1;
        self.sim_time += dt;
        dt
    }

    /// The dt `step` would use for a measured elapsed time.
    pub fn timestep_for(&self, elapsed_ms: f64) -> f64 {
        let measured = elapsed_ms / 1000.0;
        if !measured.is_finite() || measured < 0.0 {
            warn!("bad elapsed time {}ms, using minimum timestep", elapsed_ms);
            return self.config.min_timestep;
        }
        measured.max(self.config.min_timestep)
    }

    /// Snapshot of every body's position and colour, in spawn order.
    pub fn bodies(&self) -> Vec<BodyState> {
        self.bodies
            .iter()
            .map(|b| BodyState {
                pos: b.pos(),
                color: b.color(),
            })
            .collect()
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Arena `(width, height)`
    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Sum of every dt stepped so far, in seconds
    pub fn elapsed_sim_time(&self) -> f64 {
        self.sim_time
    }
}
