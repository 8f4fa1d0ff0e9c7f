//! Cross-task and cross-core shared state
//!
//! The mailbox is written by the sampling loop on core 1 and read by the
//! run loop on core 0. The mode cell and its change signal are written by
//! the button task and read by the run loop.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use plantprobe_core::mailbox::SensorMailbox;
use plantprobe_core::mode::{ModeCell, ViewMode};

/// Latest sensor readings
pub static SENSOR_MAILBOX: SensorMailbox = SensorMailbox::new();

/// Current view mode, starts at DUAL
pub static VIEW_MODE: ModeCell = ModeCell::new(ViewMode::Dual);

/// Raised by the button task after every accepted mode change
pub static MODE_CHANGED: Signal<CriticalSectionRawMutex, ViewMode> = Signal::new();
