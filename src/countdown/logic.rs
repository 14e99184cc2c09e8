//! Countdown recomputation and the one-second tick.

use super::types::{CountdownEngine, CountdownNotice, CountdownState, CountdownTask};
use crate::core::constants::{
    COUNTDOWN_TICK_MS, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};
use chrono::{DateTime, Utc};

/// Split a millisecond difference into days/hours/minutes/seconds.
///
/// A non-positive difference is the arrived state.
pub fn breakdown(diff_ms: i64) -> CountdownState {
    if diff_ms <= 0 {
        return CountdownState::ARRIVED;
    }
    CountdownState {
        days: (diff_ms / MS_PER_DAY) as u64,
        hours: ((diff_ms / MS_PER_HOUR) % 24) as u64,
        minutes: ((diff_ms / MS_PER_MINUTE) % 60) as u64,
        seconds: ((diff_ms / MS_PER_SECOND) % 60) as u64,
        is_complete: false,
    }
}

/// Compute immediately and register the repeating tick.
///
/// Restarting an engine that is already running replaces its tick rather
/// than stacking a second one.
pub fn start(engine: &mut CountdownEngine, now: DateTime<Utc>) -> Option<CountdownNotice> {
    stop(engine);
    let notice = tick(engine, now);
    if !engine.state.is_complete {
        engine.tick_timer = Some(
            engine
                .timers
                .schedule_repeating(COUNTDOWN_TICK_MS, CountdownTask::Tick),
        );
    }
    notice
}

/// Recompute the breakdown for `now`.
///
/// Returns `Arrived` only on the tick that first observes a non-positive
/// difference; afterwards the state stays at zero even if the clock moves
/// backwards.
pub fn tick(engine: &mut CountdownEngine, now: DateTime<Utc>) -> Option<CountdownNotice> {
    if engine.state.is_complete {
        return None;
    }

    let diff_ms = (engine.target - now).num_milliseconds();
    engine.state = breakdown(diff_ms);

    if engine.state.is_complete {
        stop(engine);
        tracing::info!(target_date = %engine.target, "countdown arrived");
        return Some(CountdownNotice::Arrived);
    }
    None
}

/// Let `elapsed_ms` pass, running every tick that falls due.
pub fn advance(
    engine: &mut CountdownEngine,
    elapsed_ms: u64,
    now: DateTime<Utc>,
) -> Option<CountdownNotice> {
    let deadline = engine.timers.deadline_after(elapsed_ms);
    let mut notice = None;
    while let Some(CountdownTask::Tick) = engine.timers.pop_due(deadline) {
        notice = notice.or(tick(engine, now));
    }
    engine.timers.advance_to(deadline);
    notice
}

/// Cancel the tick. The last computed state is kept.
pub fn stop(engine: &mut CountdownEngine) {
    if let Some(id) = engine.tick_timer.take() {
        engine.timers.cancel(id);
    }
}
