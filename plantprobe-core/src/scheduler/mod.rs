//! Run loop scheduling
//!
//! The run loop on the main core renders the current screen, then
//! suspends until the refresh timer fires or the mode changes.

pub mod run_loop;
pub mod screen;

pub use run_loop::{suspend, RunLoop, WakeReason};
pub use screen::{render, select_screen, Screen};
