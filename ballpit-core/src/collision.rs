//! Wall collision response for bodies inside a rectangular arena.
//!
//! The arena spans `[0, width] x [0, height]` with +y pointing down. A body
//! touching a wall is clamped onto it, the velocity component normal to the
//! wall is reflected and damped, and the tangential component is damped too.

use crate::engine::Body;
use glam::DVec2;

impl Body {
    /// Clamp the body into `[radius, bounds - radius]` on each axis and bounce
    /// its velocity off whichever walls it touched.
    ///
    /// Left, right and top use inclusive comparisons; the bottom wall only
    /// triggers once the body is strictly past it.
    pub fn apply_wall_collision(&mut self, bounds: DVec2, radius: f64, bounce: f64) {
        let mut pos = self.pos();
        let mut vel = self.vel();
        let reflect_x = DVec2::new(-bounce, bounce);
        let reflect_y = DVec2::new(bounce, -bounce);

        if pos.x <= radius {
            pos.x = radius;
            vel *= reflect_x;
        }
        if pos.x >= bounds.x - radius {
            pos.x = bounds.x - radius;
            vel *= reflect_x;
        }
        if pos.y <= radius {
            pos.y = radius;
            vel *= reflect_y;
        }
        if pos.y > bounds.y - radius {
            pos.y = bounds.y - radius;
            vel *= reflect_y;
        }

        self.set_pos(pos);
        self.set_vel(vel);
    }
}
