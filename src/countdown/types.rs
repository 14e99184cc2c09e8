//! Countdown data structures.

use crate::core::timers::{Scheduler, TimerId};
use chrono::{DateTime, Utc};

/// Remaining time to the target, split into display units.
///
/// Always derived from `target - now`; never stepped by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub is_complete: bool,
}

impl CountdownState {
    /// The terminal all-zero state.
    pub const ARRIVED: CountdownState = CountdownState {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        is_complete: true,
    };

    /// Labelled units in display order.
    pub fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("Days", self.days),
            ("Hours", self.hours),
            ("Minutes", self.minutes),
            ("Seconds", self.seconds),
        ]
    }
}

/// Completion notification. Returned by exactly one transition per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownNotice {
    Arrived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTask {
    Tick,
}

/// Countdown to a fixed target instant.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    pub target: DateTime<Utc>,
    pub state: CountdownState,
    pub(crate) timers: Scheduler<CountdownTask>,
    pub(crate) tick_timer: Option<TimerId>,
}

impl CountdownEngine {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self {
            target,
            state: CountdownState::default(),
            timers: Scheduler::new(),
            tick_timer: None,
        }
    }

    /// True while the one-second tick is registered.
    pub fn is_running(&self) -> bool {
        self.tick_timer.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    /// Timers still pending (zero after `stop` or arrival).
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_engine_defaults() {
        let target = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let engine = CountdownEngine::new(target);
        assert_eq!(engine.target, target);
        assert_eq!(engine.state, CountdownState::default());
        assert!(!engine.is_running());
        assert!(!engine.is_complete());
    }

    #[test]
    fn test_units_order() {
        let state = CountdownState {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4,
            is_complete: false,
        };
        let labels: Vec<_> = state.units().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Days", "Hours", "Minutes", "Seconds"]);
        assert_eq!(state.units()[3].1, 4);
    }
}
