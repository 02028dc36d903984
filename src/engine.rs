//! Rotation engine
//!
//! Pure character/string transformation for the two cipher families:
//! ROT-N (Caesar rotation restricted to ASCII letters) and ROT47
//! (rotation across the full 94-character printable-graphic span).
//! All transforms are total over byte values; anything a cipher does
//! not apply to passes through unchanged.

use log::warn;

/// First printable non-space ASCII graphic (`!`).
pub const GRAPH_BEGIN: u8 = 33;
/// Last printable ASCII graphic (`~`).
pub const GRAPH_END: u8 = 126;
/// Number of printable graphics, the ROT47 wheel size.
pub const GRAPH_SPAN: u8 = GRAPH_END - GRAPH_BEGIN + 1;

const UPPER_BEGIN: u8 = b'A';
const UPPER_END: u8 = b'Z';
const LOWER_BEGIN: u8 = b'a';
const LOWER_END: u8 = b'z';
const ALPHA_SPAN: u8 = 26;

/// A normalized rotation amount.
///
/// Construction goes through [`Shift::normalize`], so a `Shift` always
/// holds a value in `[0, 26)`. The value `0` is the ROT47 sentinel; any
/// other value selects ROT-N.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift(u8);

/// Cipher selected by a normalized shift. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rotate all printable graphics by 47 (self-inverse).
    Rot47,
    /// Rotate letters by the given amount, wrapping within each case.
    RotN(u8),
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Rot47 => write!(f, "ROT47"),
            Mode::RotN(n) => write!(f, "ROT{}", n),
        }
    }
}

impl Shift {
    /// Normalize a raw, caller-supplied shift amount.
    ///
    /// The clamp is a deliberate two-step wrap, not a full modulo: one
    /// subtraction of 26 for values >= 26, then a fallback to the ROT47
    /// sentinel if the value is still out of the alphabet span (raw
    /// values >= 52). So raw 13 stays 13, raw 26 becomes 0 (ROT47), and
    /// raw 52 falls back to ROT47 with an advisory diagnostic. Negative
    /// shifts take the same fallback.
    pub fn normalize(raw: i32) -> Self {
        if raw < 0 {
            warn!("negative shift {} is not supported, falling back to ROT47", raw);
            return Shift(0);
        }
        let mut n = raw;
        if n >= 26 {
            n -= 26;
        }
        if n >= 26 {
            warn!("shift {} is out of range, falling back to ROT47", raw);
            n = 0;
        }
        Shift(n as u8)
    }

    /// The effective alphabetic shift, guaranteed in `[0, 26)`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Cipher this shift selects: 0 is ROT47, anything else is ROT-N.
    pub fn mode(self) -> Mode {
        match self.0 {
            0 => Mode::Rot47,
            n => Mode::RotN(n),
        }
    }
}

/// Rotate a single byte across the printable-graphic span by 47.
///
/// Bytes outside `[33, 126]` (space, controls, high bytes) pass through.
/// Applying this twice returns the original byte: 47 + 47 = 94.
pub fn rot47_byte(b: u8) -> u8 {
    if (GRAPH_BEGIN..=GRAPH_END).contains(&b) {
        GRAPH_BEGIN + ((b - GRAPH_BEGIN + 47) % GRAPH_SPAN)
    } else {
        b
    }
}

/// Rotate a single byte by `shift` alphabet positions, wrapping within
/// its case. Non-letters pass through.
///
/// The wrap is a single conditional subtraction, which is only correct
/// because [`Shift`] guarantees `shift < 26`.
fn rotn_byte(b: u8, shift: u8) -> u8 {
    match b {
        UPPER_BEGIN..=UPPER_END => {
            let rotated = b + shift;
            if rotated > UPPER_END {
                rotated - ALPHA_SPAN
            } else {
                rotated
            }
        }
        LOWER_BEGIN..=LOWER_END => {
            let rotated = b + shift;
            if rotated > LOWER_END {
                rotated - ALPHA_SPAN
            } else {
                rotated
            }
        }
        _ => b,
    }
}

/// Transform a byte sequence under the cipher selected by `shift`.
///
/// Pure and total: the output has the same length as the input, and the
/// input is never mutated. Callers can never observe a
/// partially-transformed buffer.
pub fn transform(input: &[u8], shift: Shift) -> Vec<u8> {
    match shift.mode() {
        Mode::Rot47 => input.iter().map(|&b| rot47_byte(b)).collect(),
        Mode::RotN(n) => input.iter().map(|&b| rotn_byte(b, n)).collect(),
    }
}
