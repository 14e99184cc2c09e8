//! Birthday quiz: one free-text question, then scored multiple choice.

pub mod data;
pub mod logic;
pub mod types;

pub use data::*;
pub use logic::*;
pub use types::*;
