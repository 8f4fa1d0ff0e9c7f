//! Shared sensor mailbox
//!
//! Single-slot, last-writer-wins record shared between the sampling core
//! and the run loop. Each field is its own atomic: a reader may see a new
//! temperature next to an old lux value, but never a half-written field.
//! The sampler is the only writer, so `Relaxed` is enough.

use portable_atomic::{AtomicI16, AtomicU16, Ordering};

/// Temperature published before the first real reading
///
/// Anything at or below this value means "no data yet".
pub const TEMPERATURE_SENTINEL: i16 = -100;

/// One view of the mailbox contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSnapshot {
    /// Whole degrees, unit per sensor config
    pub temperature: i16,
    /// Ambient light in lux
    pub lux: u16,
    /// Raw capacitive moisture count
    pub moisture: u16,
}

impl SensorSnapshot {
    /// Snapshot carrying the sentinel
    pub const EMPTY: Self = Self {
        temperature: TEMPERATURE_SENTINEL,
        lux: 0,
        moisture: 0,
    };

    /// False while the temperature is still the sentinel
    pub const fn has_reading(&self) -> bool {
        self.temperature > TEMPERATURE_SENTINEL
    }
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The cross-core mailbox
pub struct SensorMailbox {
    temperature: AtomicI16,
    lux: AtomicU16,
    moisture: AtomicU16,
}

impl SensorMailbox {
    /// Mailbox holding the sentinel, usable in a `static`
    pub const fn new() -> Self {
        Self {
            temperature: AtomicI16::new(TEMPERATURE_SENTINEL),
            lux: AtomicU16::new(0),
            moisture: AtomicU16::new(0),
        }
    }

    pub fn publish_temperature(&self, temperature: i16) {
        self.temperature.store(temperature, Ordering::Relaxed);
    }

    pub fn publish_lux(&self, lux: u16) {
        self.lux.store(lux, Ordering::Relaxed);
    }

    pub fn publish_moisture(&self, moisture: u16) {
        self.moisture.store(moisture, Ordering::Relaxed);
    }

    /// Write all three fields, one after another
    pub fn publish(&self, snapshot: SensorSnapshot) {
        self.publish_temperature(snapshot.temperature);
        self.publish_lux(snapshot.lux);
        self.publish_moisture(snapshot.moisture);
    }

    /// Read all three fields, one after another
    pub fn snapshot(&self) -> SensorSnapshot {
        SensorSnapshot {
            temperature: self.temperature.load(Ordering::Relaxed),
            lux: self.lux.load(Ordering::Relaxed),
            moisture: self.moisture.load(Ordering::Relaxed),
        }
    }
}

impl Default for SensorMailbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_sentinel() {
        let mailbox = SensorMailbox::new();
        let snapshot = mailbox.snapshot();
        assert_eq!(snapshot, SensorSnapshot::EMPTY);
        assert!(!snapshot.has_reading());
    }

    #[test]
    fn test_publish_is_last_writer_wins() {
        let mailbox = SensorMailbox::new();
        mailbox.publish(SensorSnapshot {
            temperature: 70,
            lux: 500,
            moisture: 800,
        });
        mailbox.publish_lux(900);

        let snapshot = mailbox.snapshot();
        assert_eq!(snapshot.temperature, 70);
        assert_eq!(snapshot.lux, 900);
        assert_eq!(snapshot.moisture, 800);
        assert!(snapshot.has_reading());
    }

    #[test]
    fn test_below_sentinel_is_no_reading() {
        let snapshot = SensorSnapshot {
            temperature: -127,
            lux: 10,
            moisture: 10,
        };
        assert!(!snapshot.has_reading());
        assert!(SensorSnapshot {
            temperature: -99,
            ..snapshot
        }
        .has_reading());
    }
}
