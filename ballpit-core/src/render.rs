use crate::palette::Color;
use crate::runtime::Simulation;
use glam::DVec2;

/// Anything that can show filled circles in arena coordinates
pub trait RenderSurface {
    /// Arena `(width, height)`
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
}

/// Clear the surface and draw every body, in `bodies()` order.
pub fn render<S: RenderSurface + ?Sized>(sim: &Simulation, surface: &mut S) {
    surface.clear();
    let radius = sim.config().radius;
    for body in sim.bodies() {
        surface.fill_circle(body.pos, radius, body.color);
    }
}
