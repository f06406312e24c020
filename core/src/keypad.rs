use log::*;

use crate::hardware::{KeyEvent, KeyEventKind, KeySource};
use crate::keymap::{self, HexKey};

/// The keypad as seen by the interpreter.
pub trait HexKeyboard {
    /// The key currently held, if any.
    fn pressed_key(&self) -> Option<HexKey>;

    /// Whether `key` is the key currently held.
    fn is_pressed(&self, key: HexKey) -> bool {
        self.pressed_key() == Some(key)
    }
}

/// Single-key latch fed by host key notifications.
///
/// Only one key is held at a time. The first mapped key pressed wins and
/// stays held until that same key is released; other presses are ignored.
#[derive(Debug, Default)]
pub struct Keypad {
    pressed: Option<HexKey>,
}

impl Keypad {
    /// Create a keypad with no key held.
    pub fn new() -> Self {
        Self { pressed: None }
    }

    /// Handle a press of the physical key `code`.
    pub fn on_press(&mut self, code: &str) {
        let key = match keymap::lookup(code) {
            Some(key) => key,
            None => return,
        };

        match self.pressed {
            None => {
                trace!("Keypad press: {} ({})", key, code);
                self.pressed = Some(key);
            }
            Some(held) => {
                debug!("Keypad press ignored: {} ({}), {} held", key, code, held);
            }
        }
    }

    /// Handle a release of the physical key `code`.
    pub fn on_release(&mut self, code: &str) {
        let key = match keymap::lookup(code) {
            Some(key) => key,
            None => return,
        };

        if self.pressed == Some(key) {
            trace!("Keypad release: {} ({})", key, code);
            self.pressed = None;
        } else {
            debug!("Keypad release ignored: {} ({})", key, code);
        }
    }

    /// Dispatch a host notification to [`Keypad::on_press`] or [`Keypad::on_release`].
    pub fn handle(&mut self, event: KeyEvent) {
        match event.kind {
            KeyEventKind::Press => self.on_press(event.code),
            KeyEventKind::Release => self.on_release(event.code),
        }
    }

    /// The key currently held, if any.
    pub fn current_key(&self) -> Option<HexKey> {
        self.pressed
    }
}

impl HexKeyboard for Keypad {
    fn pressed_key(&self) -> Option<HexKey> {
        self.current_key()
    }
}

/// A [`Keypad`] subscribed to a host [`KeySource`].
pub struct KeypadController<S> {
    keypad: Keypad,
    source: S,
}

impl<S: KeySource> KeypadController<S> {
    /// Subscribe a fresh keypad to the host's notifications.
    pub fn new(source: S) -> Self {
        Self {
            keypad: Keypad::new(),
            source,
        }
    }

    /// Drain every pending notification into the latch.
    ///
    /// Returns the number of notifications that concerned a keypad key.
    pub fn sync(&mut self) -> usize {
        let mut relevant = 0;

        while let Some(event) = self.source.next_event() {
            if keymap::lookup(event.code).is_some() {
                relevant += 1;
            }
            self.keypad.handle(event);
        }

        relevant
    }

    /// Feed a notification directly, bypassing the source.
    pub fn handle(&mut self, event: KeyEvent) {
        self.keypad.handle(event);
    }

    /// The key currently held, if any.
    pub fn current_key(&self) -> Option<HexKey> {
        self.keypad.current_key()
    }

    /// The subscribed source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The subscribed source, mutably.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unsubscribe, handing back the source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: KeySource> HexKeyboard for KeypadController<S> {
    fn pressed_key(&self) -> Option<HexKey> {
        self.current_key()
    }
}
