//! Shared plumbing: constants, timers and configuration.

pub mod config;
pub mod constants;
pub mod timers;

pub use config::{BirthdayConfig, ConfigError, ConfigLayer, ConfigStore};
pub use constants::*;
pub use timers::{Scheduler, TimerId};
