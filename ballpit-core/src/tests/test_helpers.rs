//! Test helper utilities for ballpit tests

use crate::config::SimConfig;
use crate::palette::Color;
use crate::render::RenderSurface;
use crate::runtime::Simulation;
use glam::DVec2;

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Check if two vectors are approximately equal component-wise
pub fn approx_eq_vec(a: DVec2, b: DVec2, tol: f64) -> bool {
    approx_eq(a.x, b.x, tol) && approx_eq(a.y, b.y, tol)
}

/// The 200x200 arena with default constants used throughout the tests
pub fn small_arena() -> Simulation {
    Simulation::new(SimConfig::default(), 200.0, 200.0).expect("default config is valid")
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
}

/// Render surface that remembers what was drawn on it
#[derive(Debug)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }
}

/// Compare two simulations' body snapshots with tolerance
pub fn snapshots_approx_equal(a: &Simulation, b: &Simulation, tol: f64) -> bool {
    let (a, b) = (a.bodies(), b.bodies());
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| x.color == y.color && approx_eq_vec(x.pos, y.pos, tol))
}
