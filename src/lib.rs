//! Hardware-independent support library for the pocketpad handheld console
//!
//! This crate contains the platform-agnostic contract shared by the console
//! firmware and its tooling: the fixed RGB565 display palette and the
//! bit-level layout of the shift-register button byte.
//!
//! It is `#![no_std]` so it compiles on both the embedded target and desktop
//! hosts (for tests). It performs no I/O: reading the shift register and
//! drawing to the display belong to the firmware that consumes these
//! definitions.

#![no_std]

pub mod input;
pub mod palette;
