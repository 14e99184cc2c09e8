//! Integration test: countdown engine driven by elapsed time and a clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use panda_party::countdown::{self, CountdownEngine, CountdownNotice, CountdownState};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
}

/// Advance one second at a time, returning every notice seen.
fn run_seconds(
    engine: &mut CountdownEngine,
    start: DateTime<Utc>,
    seconds: i64,
) -> Vec<CountdownNotice> {
    let mut notices = Vec::new();
    for s in 1..=seconds {
        let now = start + Duration::seconds(s);
        notices.extend(countdown::advance(engine, 1_000, now));
    }
    notices
}

#[test]
fn test_breakdown_then_one_second_later() {
    let target = t0()
        + Duration::days(2)
        + Duration::hours(3)
        + Duration::minutes(10)
        + Duration::seconds(5);
    let mut engine = CountdownEngine::new(target);

    assert_eq!(countdown::start(&mut engine, t0()), None);
    assert_eq!(
        (engine.state.days, engine.state.hours, engine.state.minutes, engine.state.seconds),
        (2, 3, 10, 5)
    );

    countdown::advance(&mut engine, 1_000, t0() + Duration::seconds(1));
    assert_eq!(
        engine.state,
        CountdownState {
            days: 2,
            hours: 3,
            minutes: 10,
            seconds: 4,
            is_complete: false,
        }
    );
}

#[test]
fn test_arrival_fires_exactly_once() {
    let target = t0() + Duration::seconds(3);
    let mut engine = CountdownEngine::new(target);
    countdown::start(&mut engine, t0());

    let notices = run_seconds(&mut engine, t0(), 10);
    assert_eq!(notices, vec![CountdownNotice::Arrived]);
    assert_eq!(engine.state, CountdownState::ARRIVED);
    assert!(!engine.is_running());
    assert_eq!(engine.pending_timers(), 0);
}

#[test]
fn test_partial_ticks_accumulate() {
    let target = t0() + Duration::seconds(2);
    let mut engine = CountdownEngine::new(target);
    countdown::start(&mut engine, t0());

    // 50 ms frames, like the terminal loop
    let mut arrived_at = None;
    for frame in 1..=60 {
        let now = t0() + Duration::milliseconds(frame * 50);
        if countdown::advance(&mut engine, 50, now).is_some() {
            arrived_at = Some(frame);
        }
    }
    assert_eq!(arrived_at, Some(40));
}

#[test]
fn test_clock_going_backwards_after_arrival_keeps_zero() {
    let mut engine = CountdownEngine::new(t0());
    assert_eq!(
        countdown::start(&mut engine, t0()),
        Some(CountdownNotice::Arrived)
    );
    let earlier = t0() - Duration::hours(5);
    assert_eq!(countdown::tick(&mut engine, earlier), None);
    assert_eq!(countdown::advance(&mut engine, 5_000, earlier), None);
    assert!(engine.is_complete());
    assert_eq!(engine.state, CountdownState::ARRIVED);
}

#[test]
fn test_restart_does_not_stack_ticks() {
    let mut engine = CountdownEngine::new(t0() + Duration::days(1));
    countdown::start(&mut engine, t0());
    countdown::start(&mut engine, t0());
    assert_eq!(engine.pending_timers(), 1);
    countdown::stop(&mut engine);
    assert_eq!(engine.pending_timers(), 0);
    assert!(!engine.is_running());
}
