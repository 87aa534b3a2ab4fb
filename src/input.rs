//! Button input contract for the pocketpad shift register.
//!
//! The console wires its six buttons through a parallel-in/serial-out shift
//! register, so one bus read yields a single byte carrying every button
//! state. This module names those bits and provides pure predicates over
//! snapshot bytes. It never touches the register itself: the firmware's
//! polling loop owns the bus, samples the byte, and hands raw values in.
//!
//! Bit assignments, most significant first:
//! - bit 7: Up
//! - bit 6: Down
//! - bit 5: Left
//! - bit 4: Right
//! - bit 3: A
//! - bit 2: B
//! - bits 1 and 0: reserved, unmapped

use heapless::Vec;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Error for a byte that does not select exactly one button bit.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no button is mapped to bit mask {mask:#010b}")]
pub struct UnknownButtonMask {
    /// The rejected mask byte
    pub mask: u8,
}

/// Logical button on the console, named by its bit in the snapshot byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
}

impl Button {
    /// All six buttons, most to least significant bit.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::A,
        Self::B,
    ];

    /// The fixed single-bit mask of this button within a snapshot byte.
    pub const fn mask(self) -> u8 {
        match self {
            Self::Up => 0b1000_0000,
            Self::Down => 0b0100_0000,
            Self::Left => 0b0010_0000,
            Self::Right => 0b0001_0000,
            Self::A => 0b0000_1000,
            Self::B => 0b0000_0100,
        }
    }

    /// Human-readable name for UI text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl core::fmt::Display for Button {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Button {
    type Error = UnknownButtonMask;

    /// Resolves a single-bit mask back to its button.
    ///
    /// Zero, multi-bit, and reserved-bit masks name no button and are
    /// rejected.
    fn try_from(mask: u8) -> Result<Self, Self::Error> {
        match mask {
            0b1000_0000 => Ok(Self::Up),
            0b0100_0000 => Ok(Self::Down),
            0b0010_0000 => Ok(Self::Left),
            0b0001_0000 => Ok(Self::Right),
            0b0000_1000 => Ok(Self::A),
            0b0000_0100 => Ok(Self::B),
            _ => Err(UnknownButtonMask { mask }),
        }
    }
}

/// One sampled value of the shift-register byte.
///
/// Produced and refreshed entirely by external polling code; wrapping a byte
/// here neither reads hardware nor alters the byte. The reserved low bits
/// are carried through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot(u8);

impl InputSnapshot {
    /// Bits of the snapshot byte that are wired to buttons.
    pub const BUTTON_BITS: u8 = 0b1111_1100;

    /// Reserved low bits, unmapped on current hardware.
    pub const RESERVED_BITS: u8 = 0b0000_0011;

    /// Wraps a raw byte as sampled from the register.
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// The full raw byte, reserved bits included.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Whether the given button's bit is set: `(byte & mask) != 0`.
    pub const fn pressed(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    /// Named counterpart of [`pressed`](Self::pressed) for Up, and likewise
    /// below for the other five buttons.
    pub const fn up_pressed(self) -> bool {
        self.pressed(Button::Up)
    }

    pub const fn down_pressed(self) -> bool {
        self.pressed(Button::Down)
    }

    pub const fn left_pressed(self) -> bool {
        self.pressed(Button::Left)
    }

    pub const fn right_pressed(self) -> bool {
        self.pressed(Button::Right)
    }

    pub const fn a_pressed(self) -> bool {
        self.pressed(Button::A)
    }

    pub const fn b_pressed(self) -> bool {
        self.pressed(Button::B)
    }

    /// Whether any of the six button bits is set.
    ///
    /// Reserved bits do not count.
    pub const fn any_pressed(self) -> bool {
        self.0 & Self::BUTTON_BITS != 0
    }

    /// The reserved low bits, raw and uninterpreted.
    pub const fn reserved_bits(self) -> u8 {
        self.0 & Self::RESERVED_BITS
    }

    /// Every button whose bit is set, most significant first.
    pub fn pressed_buttons(self) -> Vec<Button, 6> {
        Button::ALL
            .iter()
            .copied()
            .filter(|button| self.pressed(*button))
            .collect()
    }
}

impl From<u8> for InputSnapshot {
    fn from(raw: u8) -> Self {
        Self::new(raw)
    }
}

impl From<InputSnapshot> for u8 {
    fn from(snapshot: InputSnapshot) -> Self {
        snapshot.raw()
    }
}

/// The pair of snapshots a polling loop keeps around for change detection.
///
/// Both fields are supplied by the caller: after each register read the loop
/// decides for itself how the old `current` becomes `previous`. This type
/// only names the two bytes; it never shifts, captures, or debounces them,
/// and "just pressed" style edge detection stays with the caller
/// (`pair.pressed(b) && !pair.was_pressed(b)`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPair {
    /// Snapshot from the most recent register read.
    pub current: InputSnapshot,
    /// Snapshot from the read before it.
    pub previous: InputSnapshot,
}

impl InputPair {
    pub const fn new(current: InputSnapshot, previous: InputSnapshot) -> Self {
        Self { current, previous }
    }

    /// Whether the button is down in the current snapshot.
    pub const fn pressed(self, button: Button) -> bool {
        self.current.pressed(button)
    }

    /// Whether the button was down in the previous snapshot.
    pub const fn was_pressed(self, button: Button) -> bool {
        self.previous.pressed(button)
    }
}
