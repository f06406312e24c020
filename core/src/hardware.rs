/// The kind of a host key notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    /// The physical key went down.
    Press,
    /// The physical key went up.
    Release,
}

/// A single notification from the host input layer.
///
/// `code` is the host's physical key identifier, named like the DOM's
/// `KeyboardEvent.code` (`"Digit1"`, `"KeyQ"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent<'a> {
    /// Press or release.
    pub kind: KeyEventKind,
    /// Physical key identifier.
    pub code: &'a str,
}

impl<'a> KeyEvent<'a> {
    /// Create a press notification.
    pub fn press(code: &'a str) -> Self {
        Self {
            kind: KeyEventKind::Press,
            code,
        }
    }

    /// Create a release notification.
    pub fn release(code: &'a str) -> Self {
        Self {
            kind: KeyEventKind::Release,
            code,
        }
    }
}

/// The interface to abstract the OS-specific clock.
///
/// The users of this library need to implement this trait for the timers.
pub trait Clock {
    /// Clock source used by the timers.
    /// The return value is a timestamp in microseconds.
    fn clock(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn clock(&self) -> u64 {
        (**self).clock()
    }
}

/// Subscription to the host's key notifications.
///
/// The host adapter implements this and hands it to the keypad, which drains
/// it whenever it's synced.
pub trait KeySource {
    /// Return the next pending notification, or `None` once drained.
    fn next_event(&mut self) -> Option<KeyEvent<'_>>;
}

impl<S: KeySource + ?Sized> KeySource for &mut S {
    fn next_event(&mut self) -> Option<KeyEvent<'_>> {
        (**self).next_event()
    }
}

/// A hidden error indicator the host can reveal to the user.
pub trait ErrorIndicator {
    /// Make the indicator visible.
    fn reveal(&mut self);
}
