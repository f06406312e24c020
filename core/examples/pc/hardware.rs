use log::*;
use minifb::{Key, Scale, Window, WindowOptions};
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use chip8_host::{ErrorIndicator, EventQueue, KeyEvent};

pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 32;

#[derive(Clone)]
pub struct SystemClock;

impl chip8_host::Clock for SystemClock {
    fn clock(&self) -> u64 {
        let epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Couldn't get epoch");
        epoch.as_micros() as u64
    }
}

fn code(key: Key) -> Option<&'static str> {
    let code = match key {
        Key::Key1 => "Digit1",
        Key::Key2 => "Digit2",
        Key::Key3 => "Digit3",
        Key::Key4 => "Digit4",
        Key::Q => "KeyQ",
        Key::W => "KeyW",
        Key::E => "KeyE",
        Key::R => "KeyR",
        Key::A => "KeyA",
        Key::S => "KeyS",
        Key::D => "KeyD",
        Key::F => "KeyF",
        Key::Z => "KeyZ",
        Key::X => "KeyX",
        Key::C => "KeyC",
        Key::V => "KeyV",
        Key::Escape => "Escape",
        _ => return None,
    };
    Some(code)
}

pub struct Gui {
    window: Window,
    held: HashSet<&'static str>,
    escape: bool,
}

impl Gui {
    pub fn new() -> Self {
        let window = match Window::new(
            "Chip-8 keypad",
            WIDTH,
            HEIGHT,
            WindowOptions {
                resize: false,
                scale: Scale::X8,
                ..WindowOptions::default()
            },
        ) {
            Ok(win) => win,
            Err(err) => {
                panic!("Unable to create window {}", err);
            }
        };

        Self {
            window,
            held: HashSet::new(),
            escape: false,
        }
    }

    pub fn sched(&self) -> bool {
        self.window.is_open() && !self.escape
    }

    /// Diff the window's key state against the last frame into notifications.
    pub fn keyupdate(&mut self, queue: &mut EventQueue) {
        let now: HashSet<&'static str> = self
            .window
            .get_keys()
            .unwrap_or_default()
            .into_iter()
            .filter_map(code)
            .collect();

        if now.contains("Escape") {
            self.escape = true;
            return;
        }

        for &released in self.held.difference(&now) {
            queue.push(KeyEvent::release(released));
        }
        for &pressed in now.difference(&self.held) {
            queue.push(KeyEvent::press(pressed));
        }

        self.held = now;
    }

    pub fn vramupdate(&mut self, vram: &[u32]) -> Result<(), String> {
        self.window
            .update_with_buffer(vram)
            .map_err(|e| e.to_string())
    }
}

/// Paints the whole screen red once revealed.
#[derive(Default)]
pub struct ErrorCard {
    pub visible: bool,
}

impl ErrorIndicator for ErrorCard {
    fn reveal(&mut self) {
        warn!("Showing error card");
        self.visible = true;
    }
}
