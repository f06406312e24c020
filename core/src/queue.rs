use arrayvec::ArrayVec;
use log::*;

use crate::hardware::{KeyEvent, KeySource};

/// Number of notifications an [`EventQueue`] holds before dropping.
pub const EVENT_QUEUE_SIZE: usize = 32;

/// Buffers host notifications until the keypad is next synced.
///
/// Useful for hosts that deliver key callbacks outside the frame loop.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: ArrayVec<KeyEvent<'static>, EVENT_QUEUE_SIZE>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            events: ArrayVec::new(),
        }
    }

    /// Enqueue a notification. Returns `false` if the queue is full and the
    /// notification was dropped.
    pub fn push(&mut self, event: KeyEvent<'static>) -> bool {
        match self.events.try_push(event) {
            Ok(()) => true,
            Err(e) => {
                warn!("Event queue full, dropping {:?}", e.element());
                false
            }
        }
    }

    /// Number of pending notifications.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no notification is pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop every pending notification.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl KeySource for EventQueue {
    fn next_event(&mut self) -> Option<KeyEvent<'_>> {
        self.events.pop_at(0)
    }
}
