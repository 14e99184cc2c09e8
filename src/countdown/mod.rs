//! Countdown to the birthday.
//!
//! Recomputes the remaining days/hours/minutes/seconds once per second and
//! reports arrival exactly once when the target instant is reached.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
