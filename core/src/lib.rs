//!
//! `chip8-host` is a no-std library providing the host devices a Chip-8 interpreter polls:
//! the 16-key hexadecimal keypad and the 60Hz delay and sound timers.
//!
//! The users of this library implement [`Clock`][] and [`KeySource`][], which abstract
//! the OS-specific clock and input layer. Once they're implemented, the devices work.
//!
//! The following code implements both with a system clock and a canned list of key events.
//!
//! ```rust
//! use chip8_host::{Config, HexKey, KeyEvent, KeySource, System};
//!
//! #[derive(Clone)]
//! struct Clock;
//!
//! impl chip8_host::Clock for Clock {
//!     fn clock(&self) -> u64 {
//!         let epoch = std::time::SystemTime::now()
//!             .duration_since(std::time::UNIX_EPOCH)
//!             .expect("Couldn't get epoch");
//!         epoch.as_micros() as u64
//!     }
//! }
//!
//! struct Input(Vec<KeyEvent<'static>>);
//!
//! impl KeySource for Input {
//!     fn next_event(&mut self) -> Option<KeyEvent<'_>> {
//!         if self.0.is_empty() {
//!             None
//!         } else {
//!             Some(self.0.remove(0))
//!         }
//!     }
//! }
//!
//! let input = Input(vec![KeyEvent::press("KeyW"), KeyEvent::press("KeyQ")]);
//!
//! let mut sys = System::new(Config::new(), input, Clock).expect("Invalid timer period");
//!
//! sys.delay_mut().load(60);
//! sys.poll();
//!
//! assert_eq!(sys.keypad().current_key(), HexKey::new(5));
//! assert!(sys.delay().value() <= 60);
//! ```

#![no_std]

mod countdown;
mod fault;
mod keypad;
mod queue;
mod system;
mod timer;

/// Hardware interface, which abstracts OS-specific functions.
pub mod hardware;

/// Mapping from physical key identifiers to keypad keys.
pub mod keymap;

pub use crate::countdown::Countdown;
pub use crate::fault::report_fault;
pub use crate::hardware::{Clock, ErrorIndicator, KeyEvent, KeyEventKind, KeySource};
pub use crate::keymap::HexKey;
pub use crate::keypad::{HexKeyboard, Keypad, KeypadController};
pub use crate::queue::{EventQueue, EVENT_QUEUE_SIZE};
pub use crate::system::{Config, System};
pub use crate::timer::{RateTimer, TimerError, CHIP8_TIMER_PERIOD};
