use core::time::Duration;

use log::*;

use crate::countdown::Countdown;
use crate::hardware::{Clock, KeySource};
use crate::keypad::KeypadController;
use crate::timer::{TimerError, CHIP8_TIMER_PERIOD};

/// Configuration of the host devices.
#[derive(Clone, Debug)]
pub struct Config {
    /// Period of the delay and sound timers.
    pub(crate) timer_period: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self {
            timer_period: CHIP8_TIMER_PERIOD,
        }
    }

    /// Set the period of the delay and sound timers.
    pub fn timer_period(mut self, period: Duration) -> Self {
        self.timer_period = period;
        self
    }
}

/// The host devices of one emulation session.
pub struct System<S, C> {
    keypad: KeypadController<S>,
    delay: Countdown<C>,
    sound: Countdown<C>,
}

impl<S: KeySource, C: Clock + Clone> System<S, C> {
    /// Subscribe the keypad to `source` and start both timers on `clock`.
    pub fn new(cfg: Config, source: S, clock: C) -> Result<Self, TimerError> {
        info!("Initializing...");

        let delay = Countdown::new(clock.clone(), cfg.timer_period)?;
        let sound = Countdown::new(clock, cfg.timer_period)?;

        Ok(Self {
            keypad: KeypadController::new(source),
            delay,
            sound,
        })
    }

    /// Run once per frame: sync the keypad, then count both timers down.
    pub fn poll(&mut self) {
        self.keypad.sync();
        self.delay.update();
        self.sound.update();
    }

    /// The keypad.
    pub fn keypad(&self) -> &KeypadController<S> {
        &self.keypad
    }

    /// The keypad, mutably.
    pub fn keypad_mut(&mut self) -> &mut KeypadController<S> {
        &mut self.keypad
    }

    /// The delay timer.
    pub fn delay(&self) -> &Countdown<C> {
        &self.delay
    }

    /// The delay timer, mutably.
    pub fn delay_mut(&mut self) -> &mut Countdown<C> {
        &mut self.delay
    }

    /// The sound timer. The tone plays while it's active.
    pub fn sound(&self) -> &Countdown<C> {
        &self.sound
    }

    /// The sound timer, mutably.
    pub fn sound_mut(&mut self) -> &mut Countdown<C> {
        &mut self.sound
    }
}
