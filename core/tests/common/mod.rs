#![allow(dead_code)]

use std::{cell::Cell, rc::Rc};

/// Clock driven by the test, in microseconds.
#[derive(Clone, Default)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn at(time: u64) -> Self {
        Self(Rc::new(Cell::new(time)))
    }

    pub fn set(&self, time: u64) {
        self.0.set(time);
    }

    pub fn advance(&self, by: u64) {
        self.0.set(self.0.get() + by);
    }
}

impl chip8_host::Clock for ManualClock {
    fn clock(&self) -> u64 {
        self.0.get()
    }
}

pub const MS: u64 = 1000;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
