mod common;

use std::time::Duration;

use chip8_host::{RateTimer, TimerError, CHIP8_TIMER_PERIOD};
use common::{ManualClock, MS};

fn timer(clock: &ManualClock, period_ms: u64) -> RateTimer<ManualClock> {
    RateTimer::new(clock.clone(), Duration::from_millis(period_ms)).unwrap()
}

#[test]
fn zero_period_is_rejected() {
    let clock = ManualClock::at(0);
    assert_eq!(
        RateTimer::new(clock.clone(), Duration::from_secs(0)).err(),
        Some(TimerError::InvalidPeriod(Duration::from_secs(0)))
    );
    assert!(RateTimer::new(clock, Duration::from_nanos(999)).is_err());
}

#[test]
fn huge_period_is_rejected() {
    let clock = ManualClock::at(0);
    assert!(RateTimer::new(clock, Duration::from_secs(u64::MAX)).is_err());
}

#[test]
fn sixty_hertz_period() {
    let clock = ManualClock::at(0);
    let timer = RateTimer::new(clock, CHIP8_TIMER_PERIOD).unwrap();
    assert_eq!(timer.period(), Duration::from_micros(16_666));
}

#[test]
fn immediate_polls_return_zero() {
    let clock = ManualClock::at(5 * MS);
    let mut t = timer(&clock, 16);

    assert_eq!(t.ticks_elapsed(), 0);
    assert_eq!(t.ticks_elapsed(), 0);

    clock.advance(16 * MS);
    assert_eq!(t.ticks_elapsed(), 1);
}

#[test]
fn exact_multiples_leave_no_remainder() {
    let clock = ManualClock::at(0);
    let mut t = timer(&clock, 16);

    clock.set(5 * 16 * MS);
    assert_eq!(t.ticks_elapsed(), 5);
    assert_eq!(t.ticks_elapsed(), 0);

    clock.advance(16 * MS - 1);
    assert_eq!(t.ticks_elapsed(), 0);
    clock.advance(1);
    assert_eq!(t.ticks_elapsed(), 1);
}

#[test]
fn remainder_carries_forward() {
    let clock = ManualClock::at(0);
    let mut t = timer(&clock, 16);

    // 3 periods and 5ms.
    clock.set(53 * MS);
    assert_eq!(t.ticks_elapsed(), 3);
    assert_eq!(t.ticks_elapsed(), 0);

    // The remaining 11ms completes the fourth period.
    clock.advance(11 * MS);
    assert_eq!(t.ticks_elapsed(), 1);
}

#[test]
fn frame_scenario() {
    common::init_logger();
    let clock = ManualClock::at(0);
    let mut t = timer(&clock, 16);

    clock.set(10 * MS);
    assert_eq!(t.ticks_elapsed(), 0);

    clock.set(20 * MS);
    assert_eq!(t.ticks_elapsed(), 1);

    // 17ms since the tick at 16ms.
    clock.set(33 * MS);
    assert_eq!(t.ticks_elapsed(), 1);

    // The clock now sits at 32ms, so 47ms is still short of the next tick.
    clock.set(47 * MS);
    assert_eq!(t.ticks_elapsed(), 0);
    clock.set(48 * MS);
    assert_eq!(t.ticks_elapsed(), 1);
}

#[test]
fn backward_clock_yields_no_ticks() {
    common::init_logger();
    let clock = ManualClock::at(100 * MS);
    let mut t = timer(&clock, 16);

    clock.set(50 * MS);
    assert_eq!(t.ticks_elapsed(), 0);

    // The timer still counts from 100ms.
    clock.set(115 * MS);
    assert_eq!(t.ticks_elapsed(), 0);
    clock.set(116 * MS);
    assert_eq!(t.ticks_elapsed(), 1);
}

#[test]
fn irregular_polling_does_not_drift() {
    let clock = ManualClock::at(0);
    let mut t = RateTimer::new(clock.clone(), CHIP8_TIMER_PERIOD).unwrap();
    let period = CHIP8_TIMER_PERIOD.as_micros() as u64;

    let mut total = 0;
    let mut now = 0;
    let mut seed = 0x9e37_79b9_u32;

    for _ in 0..5_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        now += u64::from(seed % 40_000);
        clock.set(now);
        total += t.ticks_elapsed();
        assert_eq!(total, now / period);
    }
}

#[test]
fn unpolled_timer_catches_up() {
    let clock = ManualClock::at(0);
    let mut t = timer(&clock, 16);

    clock.set(60 * 60 * 1000 * MS);
    assert_eq!(t.ticks_elapsed(), 225_000);
    assert_eq!(t.ticks_elapsed(), 0);
}

#[test]
fn clock_by_reference() {
    let clock = ManualClock::at(0);
    let mut t = RateTimer::new(&clock, Duration::from_millis(1)).unwrap();

    clock.set(3 * MS + 500);
    assert_eq!(t.ticks_elapsed(), 3);
}
