//! Debounced mode selector
//!
//! Pure state machine over millisecond timestamps. The firmware feeds it
//! falling edges from the button task inside a critical section.

use super::view_mode::ViewMode;
use crate::config::DEFAULT_DEBOUNCE_MS;

/// Edge-triggered mode cycler with a debounce window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeSelector {
    mode: ViewMode,
    debounce_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl ModeSelector {
    /// Start at `mode`; the first edge is always accepted
    pub const fn new(mode: ViewMode, debounce_ms: u32) -> Self {
        Self {
            mode,
            debounce_ms: debounce_ms as u64,
            last_accepted_ms: None,
        }
    }

    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Handle a falling edge seen at `now_ms`
    ///
    /// Accepted only when at least the debounce window has passed since
    /// the last accepted edge; returns the new mode. Rejected edges do not
    /// move the window.
    pub fn on_falling_edge(&mut self, now_ms: u64) -> Option<ViewMode> {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < self.debounce_ms {
                trace!("mode edge at {}ms ignored", now_ms);
                return None;
            }
        }

        self.last_accepted_ms = Some(now_ms);
        self.mode = self.mode.next();
        debug!("mode -> {}", self.mode);
        Some(self.mode)
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new(ViewMode::Dual, DEFAULT_DEBOUNCE_MS)
    }
}
