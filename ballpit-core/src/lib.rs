pub mod collision;
pub mod config;
pub mod engine;
pub mod input;
pub mod integrator;
pub mod palette;
pub mod render;
pub mod runtime;
pub mod schedule;

pub use config::{ConfigError, SimConfig};
pub use engine::{Body, Force, Lifetime};
pub use input::{InputEvent, SpawnQueue};
pub use palette::Color;
pub use render::{render, RenderSurface};
pub use runtime::{BodyState, SimState, Simulation};
pub use schedule::FrameClock;

// Test helpers module (public for integration tests)
pub mod tests;
