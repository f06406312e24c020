use core::convert::TryFrom;
use core::time::Duration;

use log::*;
use thiserror::Error;

use crate::hardware::Clock;

/// Period of the 60Hz delay and sound timers, in microseconds.
pub const CHIP8_TIMER_PERIOD: Duration = Duration::from_micros(1_000_000 / 60);

/// Errors raised when creating a timer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// The period rounds to zero microseconds or doesn't fit the clock.
    #[error("invalid timer period: {0:?}")]
    InvalidPeriod(Duration),
}

/// Converts elapsed clock time into whole ticks of a fixed period.
///
/// The sub-period remainder is carried across polls, so the long-run tick
/// rate stays at one per period however irregularly the timer is polled.
pub struct RateTimer<C> {
    clock: C,
    period: u64,
    last: u64,
}

impl<C: Clock> RateTimer<C> {
    /// Create a timer which starts counting from now.
    pub fn new(clock: C, period: Duration) -> Result<Self, TimerError> {
        let micros = u64::try_from(period.as_micros())
            .map_err(|_| TimerError::InvalidPeriod(period))?;
        if micros == 0 {
            return Err(TimerError::InvalidPeriod(period));
        }

        let last = clock.clock();

        Ok(Self {
            clock,
            period: micros,
            last,
        })
    }

    /// The tick period.
    pub fn period(&self) -> Duration {
        Duration::from_micros(self.period)
    }

    /// Count the ticks since the previous poll, consuming them.
    pub fn ticks_elapsed(&mut self) -> u64 {
        let now = self.clock.clock();

        let elapsed = match now.checked_sub(self.last) {
            Some(elapsed) => elapsed,
            None => {
                warn!("Clock went backward: {} -> {}", self.last, now);
                return 0;
            }
        };

        if elapsed < self.period {
            return 0;
        }

        let ticks = elapsed / self.period;
        self.last = now - elapsed % self.period;

        trace!("Timer ticks: {} (last={})", ticks, self.last);

        ticks
    }
}
