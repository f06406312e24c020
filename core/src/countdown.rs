use core::convert::TryFrom;
use core::time::Duration;

use log::*;

use crate::hardware::Clock;
use crate::timer::{RateTimer, TimerError};

/// An 8-bit register counting down to zero at a fixed rate.
///
/// This is how the interpreter's delay and sound timers behave: once loaded
/// with a non-zero value they decrement once per tick until they reach zero.
pub struct Countdown<C> {
    timer: RateTimer<C>,
    value: u8,
}

impl<C: Clock> Countdown<C> {
    /// Create a countdown holding zero.
    pub fn new(clock: C, period: Duration) -> Result<Self, TimerError> {
        Ok(Self {
            timer: RateTimer::new(clock, period)?,
            value: 0,
        })
    }

    /// Load the register.
    pub fn load(&mut self, value: u8) {
        debug!("Countdown load: {}", value);
        self.value = value;
    }

    /// The current register value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Whether the register is still counting.
    pub fn is_active(&self) -> bool {
        self.value != 0
    }

    /// Apply the ticks elapsed since the last update and return the new value.
    pub fn update(&mut self) -> u8 {
        let ticks = u8::try_from(self.timer.ticks_elapsed()).unwrap_or(u8::MAX);
        self.value = self.value.saturating_sub(ticks);
        self.value
    }
}
