//! Configuration types
//!
//! Board-agnostic device configuration. The firmware build script parses
//! `device.toml` into these types at compile time.

pub mod types;

pub use types::*;
