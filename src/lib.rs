//! Panda Party - a terminal birthday celebration.
//!
//! A live countdown to the birthday, a bamboo-collecting minigame that
//! unlocks a quiz, and a quiz that unlocks a special message. The state
//! machines are plain data driven by explicit key actions and elapsed time,
//! so everything except `ui` can be exercised without a terminal.

pub mod app;
pub mod bamboo;
pub mod build_info;
pub mod celebration;
pub mod core;
pub mod countdown;
pub mod input;
pub mod quiz;
pub mod setup;
pub mod ui;
pub mod utils;
