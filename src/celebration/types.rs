//! Celebration data structures: confetti and the special message.

use crate::core::timers::{Scheduler, TimerId};

/// Shown when no custom message is configured.
pub const DEFAULT_MESSAGE: &str = "Wishing you a beary special birthday filled with happiness, \
bamboo, and lots of love! May your day be as sweet and unique as you are. Remember that like \
Kung Fu Panda says, 'There is no secret ingredient... it's just you!' And you are amazing just \
the way you are!";

pub const CONFETTI_GLYPHS: [char; 6] = ['*', '•', '♥', '✦', '▪', '~'];

/// One falling piece, in confetti field units (see `CONFETTI_FIELD_*`).
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Horizontal drift, units per second.
    pub vx: f64,
    /// Fall speed, units per second (positive = down).
    pub vy: f64,
    pub glyph: char,
    /// Index into the renderer's palette.
    pub color: u8,
}

/// A non-recycling burst: pieces fall once and are dropped below the field.
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    pub particles: Vec<Particle>,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTask {
    StopConfetti,
}

/// The hidden birthday message and its reveal.
#[derive(Debug, Clone)]
pub struct MessageReveal {
    pub name: String,
    pub message: String,
    pub revealed: bool,
    pub confetti: Confetti,
    pub(crate) timers: Scheduler<RevealTask>,
    pub(crate) confetti_timer: Option<TimerId>,
}

impl MessageReveal {
    pub fn new(name: &str, message: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            message: message.unwrap_or(DEFAULT_MESSAGE).to_string(),
            revealed: false,
            confetti: Confetti::new(),
            timers: Scheduler::new(),
            confetti_timer: None,
        }
    }

    pub fn confetti_active(&self) -> bool {
        self.confetti_timer.is_some()
    }
}
