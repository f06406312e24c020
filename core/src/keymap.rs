use core::fmt;

use hashbrown::HashMap;
use lazy_static::lazy_static;

/// One of the 16 keys of the hexadecimal keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexKey(u8);

impl HexKey {
    /// All keys, in numeric order.
    pub const ALL: [HexKey; 16] = [
        HexKey(0x0),
        HexKey(0x1),
        HexKey(0x2),
        HexKey(0x3),
        HexKey(0x4),
        HexKey(0x5),
        HexKey(0x6),
        HexKey(0x7),
        HexKey(0x8),
        HexKey(0x9),
        HexKey(0xa),
        HexKey(0xb),
        HexKey(0xc),
        HexKey(0xd),
        HexKey(0xe),
        HexKey(0xf),
    ];

    /// Returns `None` if the value is not a hex digit.
    pub fn new(value: u8) -> Option<Self> {
        match value {
            0x0..=0xf => Some(Self(value)),
            _ => None,
        }
    }

    /// The key's value in `0..=15`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Flatten a latch value into the integer form, `-1` meaning no key.
    pub fn code(key: Option<HexKey>) -> i8 {
        match key {
            Some(HexKey(v)) => v as i8,
            None => -1,
        }
    }
}

impl fmt::Display for HexKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

impl From<HexKey> for u8 {
    fn from(key: HexKey) -> u8 {
        key.0
    }
}

// The keypad layout is mapped onto the left four columns of a QWERTY board.
//
// |1|2|3|C|      |1|2|3|4|
// |4|5|6|D|  ->  |Q|W|E|R|
// |7|8|9|E|  ->  |A|S|D|F|
// |A|0|B|F|      |Z|X|C|V|
const LAYOUT: [(&str, u8); 16] = [
    ("Digit1", 0x1),
    ("Digit2", 0x2),
    ("Digit3", 0x3),
    ("Digit4", 0xc),
    ("KeyQ", 0x4),
    ("KeyW", 0x5),
    ("KeyE", 0x6),
    ("KeyR", 0xd),
    ("KeyA", 0x7),
    ("KeyS", 0x8),
    ("KeyD", 0x9),
    ("KeyF", 0xe),
    ("KeyZ", 0xa),
    ("KeyX", 0x0),
    ("KeyC", 0xb),
    ("KeyV", 0xf),
];

lazy_static! {
    static ref KEYMAP: HashMap<&'static str, HexKey> = LAYOUT
        .iter()
        .map(|&(code, value)| (code, HexKey(value)))
        .collect();
}

/// Look up the keypad key a physical key identifier is mapped to.
pub fn lookup(code: &str) -> Option<HexKey> {
    KEYMAP.get(code).copied()
}

/// The physical key identifier mapped to a keypad key.
pub fn identifier(key: HexKey) -> &'static str {
    LAYOUT
        .iter()
        .find(|&&(_, value)| value == key.0)
        .map(|&(code, _)| code)
        .unwrap_or_else(|| unreachable!("every hex key is in the layout"))
}
