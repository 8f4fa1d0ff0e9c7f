//! View mode enum and its shared cell

use portable_atomic::{AtomicU8, Ordering};

/// Which live screen the run loop draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ViewMode {
    /// Moisture and light bars together
    Dual = 0,
    /// Moisture bar with a qualitative label
    Soil = 1,
    /// Light bar with a qualitative label
    Light = 2,
}

impl ViewMode {
    /// Cyclic successor
    pub const fn next(self) -> Self {
        match self {
            ViewMode::Dual => ViewMode::Soil,
            ViewMode::Soil => ViewMode::Light,
            ViewMode::Light => ViewMode::Dual,
        }
    }

    /// Header label, at most 5 characters
    pub const fn label(self) -> &'static str {
        match self {
            ViewMode::Dual => "DUAL",
            ViewMode::Soil => "SOIL",
            ViewMode::Light => "LIGHT",
        }
    }

    /// Decode a stored tag
    pub const fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(ViewMode::Dual),
            1 => Some(ViewMode::Soil),
            2 => Some(ViewMode::Light),
            _ => None,
        }
    }
}

/// Mode shared between the button task and the run loop
///
/// A single byte, so reads are never torn. A tag that does not decode
/// is reported as `None` and shown as the critical error view.
pub struct ModeCell {
    tag: AtomicU8,
}

impl ModeCell {
    pub const fn new(mode: ViewMode) -> Self {
        Self {
            tag: AtomicU8::new(mode as u8),
        }
    }

    pub fn load(&self) -> Option<ViewMode> {
        ViewMode::from_u8(self.tag.load(Ordering::Relaxed))
    }

    pub fn store(&self, mode: ViewMode) {
        self.tag.store(mode as u8, Ordering::Relaxed);
    }
}

impl Default for ModeCell {
    fn default() -> Self {
        Self::new(ViewMode::Dual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(ViewMode::Dual.next(), ViewMode::Soil);
        assert_eq!(ViewMode::Soil.next(), ViewMode::Light);
        assert_eq!(ViewMode::Light.next(), ViewMode::Dual);
    }

    #[test]
    fn test_tag_roundtrip_and_invalid() {
        for mode in [ViewMode::Dual, ViewMode::Soil, ViewMode::Light] {
            assert_eq!(ViewMode::from_u8(mode as u8), Some(mode));
        }
        assert_eq!(ViewMode::from_u8(3), None);
        assert_eq!(ViewMode::from_u8(0xff), None);
    }

    #[test]
    fn test_cell_starts_at_dual() {
        let cell = ModeCell::default();
        assert_eq!(cell.load(), Some(ViewMode::Dual));
        cell.store(ViewMode::Light);
        assert_eq!(cell.load(), Some(ViewMode::Light));
    }

    #[test]
    fn test_labels_fit_header() {
        for mode in [ViewMode::Dual, ViewMode::Soil, ViewMode::Light] {
            assert!(mode.label().len() <= 5);
        }
    }
}
