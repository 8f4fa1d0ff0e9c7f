//! View modes and the debounced mode button
//!
//! The button cycles DUAL → SOIL → LIGHT → DUAL. Only the button task
//! writes the mode; the run loop reads it every cycle.

pub mod selector;
pub mod view_mode;

pub use selector::ModeSelector;
pub use view_mode::{ModeCell, ViewMode};
