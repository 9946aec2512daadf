use crate::integrator::verlet_step;
use crate::palette::Color;
use glam::DVec2;
use log::debug;

/// How long a force keeps acting on its body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lifetime {
    /// Never expires (gravity)
    Permanent,
    /// Seconds left before eviction
    Remaining(f64),
}

/// A directed push acting on a single body
#[derive(Debug, Clone, PartialEq)]
pub struct Force {
    pub push: DVec2,
    pub lifetime: Lifetime,
}

impl Force {
    pub fn permanent(push: DVec2) -> Self {
        Self {
            push,
            lifetime: Lifetime::Permanent,
        }
    }

    pub fn timed(push: DVec2, ttl: f64) -> Self {
        Self {
            push,
            lifetime: Lifetime::Remaining(ttl),
        }
    }

    fn expired(&self) -> bool {
        matches!(self.lifetime, Lifetime::Remaining(t) if t < 0.0)
    }
}

/// One simulated ball
#[derive(Debug, Clone)]
pub struct Body {
    pos: DVec2,
    vel: DVec2,
    /// Acceleration from the previous step, needed by velocity-Verlet
    acc: DVec2,
    color: Color,
    forces: Vec<Force>,
}

impl Body {
    /// Create a body at rest with a permanent gravity force of `gravity * mass` pointing down (+y).
    pub fn new(pos: DVec2, color: Color, gravity: f64, mass: f64) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            acc: DVec2::ZERO,
            color,
            forces: vec![Force::permanent(DVec2::new(0.0, gravity * mass))],
        }
    }

    pub fn add_force(&mut self, push: DVec2, lifetime: Lifetime) {
        self.forces.push(Force { push, lifetime });
    }

    /// Count down every timed force by `dt`, sum all pushes, and drop the
    /// forces whose remaining time went strictly negative.
    ///
    /// A force evicted here still contributes to the returned total.
    pub fn resolve_forces(&mut self, dt: f64) -> DVec2 {
        let mut net = DVec2::ZERO;
        for force in self.forces.iter_mut() {
            if let Lifetime::Remaining(t) = &mut force.lifetime {
                *t -= dt;
            }
            net += force.push;
        }

        let before = self.forces.len();
        self.forces.retain(|f| !f.expired());
        let evicted = before - self.forces.len();
        if evicted > 0 {
            debug!("evicted {} expired force(s), {} left", evicted, self.forces.len());
        }

        net
    }

    /// Advance one step with velocity-Verlet. `dt` must be positive.
    pub fn integrate(&mut self, dt: f64, net_force: DVec2, mass: f64) {
        let (pos, vel, acc) = verlet_step(self.pos, self.vel, self.acc, net_force, mass, dt);
        self.pos = pos;
        self.vel = vel;
        self.acc = acc;
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn vel(&self) -> DVec2 {
        self.vel
    }

    pub fn acc(&self) -> DVec2 {
        self.acc
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    pub(crate) fn set_pos(&mut self, pos: DVec2) {
        self.pos = pos;
    }

    pub(crate) fn set_vel(&mut self, vel: DVec2) {
        self.vel = vel;
    }
}
