//! Bamboo Birthday Harvest minigame.
//!
//! The panda moves left and right collecting bamboo stalks that sprout every
//! couple of seconds. Collecting five unlocks the next part of the party.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
