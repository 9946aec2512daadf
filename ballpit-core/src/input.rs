//! Spawn requests coming from the input side.
//!
//! Input callbacks only ever push onto a [`SpawnQueue`]; the driver drains it
//! into the simulation at the top of a frame, so spawning never interleaves
//! with a step.

use glam::DVec2;
use std::collections::VecDeque;

/// A user action at an arena coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    pub pos: DVec2,
    /// Seconds, in whatever clock the input source uses
    pub timestamp: f64,
}

#[derive(Debug, Default)]
pub struct SpawnQueue {
    pending: VecDeque<InputEvent>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending event in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }
}
