//! The special birthday message and confetti.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
