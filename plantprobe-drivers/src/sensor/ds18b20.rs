//! DS18B20 1-Wire temperature sensor
//!
//! Single device on the bus, addressed with SKIP ROM. Each read starts a
//! conversion, waits the configured conversion time, then reads and
//! checks the scratchpad.

use embedded_hal::delay::DelayNs;
use plantprobe_core::config::TemperatureUnit;
use plantprobe_core::traits::{SensorError, TemperatureSensor};

use crate::onewire::{crc8, OneWire, SKIP_ROM};

/// Function commands
mod command {
    pub const CONVERT_T: u8 = 0x44;
    pub const READ_SCRATCHPAD: u8 = 0xBE;
}

/// Scratchpad length including the CRC byte
const SCRATCHPAD_LEN: usize = 9;

pub use plantprobe_core::config::DEFAULT_CONVERSION_MS;

/// Whole degrees from the raw 1/16 °C register value
pub const fn raw_to_degrees(raw: i16, unit: TemperatureUnit) -> i16 {
    let raw = raw as i32;
    let degrees = match unit {
        TemperatureUnit::Celsius => raw / 16,
        TemperatureUnit::Fahrenheit => raw * 9 / 80 + 32,
    };
    degrees as i16
}

/// DS18B20 on a 1-Wire bus
pub struct Ds18b20<B, D> {
    bus: B,
    delay: D,
    unit: TemperatureUnit,
    conversion_ms: u32,
}

impl<B, D> Ds18b20<B, D>
where
    B: OneWire,
    D: DelayNs,
{
    /// Check that a device answers on `bus`
    ///
    /// Fails with [`SensorError::NoDevice`] when nothing pulls the line
    /// for a presence pulse.
    pub fn probe(
        mut bus: B,
        delay: D,
        unit: TemperatureUnit,
        conversion_ms: u32,
    ) -> Result<Self, SensorError> {
        if !bus.reset()? {
            return Err(SensorError::NoDevice);
        }
        debug!("DS18B20 present");

        Ok(Self {
            bus,
            delay,
            unit,
            conversion_ms,
        })
    }

    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Reset, then address the only device
    fn select(&mut self) -> Result<(), SensorError> {
        if !self.bus.reset()? {
            return Err(SensorError::NoDevice);
        }
        self.bus.write_byte(SKIP_ROM)
    }

    /// Raw temperature register, 1/16 °C per count
    pub fn read_raw(&mut self) -> Result<i16, SensorError> {
        self.select()?;
        self.bus.write_byte(command::CONVERT_T)?;
        self.delay.delay_ms(self.conversion_ms);

        self.select()?;
        self.bus.write_byte(command::READ_SCRATCHPAD)?;
        let mut scratchpad = [0u8; SCRATCHPAD_LEN];
        for byte in scratchpad.iter_mut() {
            *byte = self.bus.read_byte()?;
        }

        if crc8(&scratchpad) != 0 {
            warn!("DS18B20 scratchpad CRC mismatch");
            return Err(SensorError::Crc);
        }
        Ok(i16::from_le_bytes([scratchpad[0], scratchpad[1]]))
    }
}

impl<B, D> TemperatureSensor for Ds18b20<B, D>
where
    B: OneWire,
    D: DelayNs,
{
    fn read_temperature(&mut self) -> Result<i16, SensorError> {
        self.read_raw().map(|raw| raw_to_degrees(raw, self.unit))
    }
}

#[cfg(test)]
mod tests {
    use heapless::Vec;

    use super::*;
    use crate::testing::FakeDelay;

    /// Byte-level bus that serves a scratchpad after READ SCRATCHPAD
    #[derive(Default)]
    struct FakeBus {
        absent: bool,
        written: Vec<u8, 16>,
        resets: usize,
        scratchpad: [u8; SCRATCHPAD_LEN],
        read_pos: usize,
    }

    impl FakeBus {
        fn with_temperature(raw: i16) -> Self {
            let mut scratchpad = [0u8; SCRATCHPAD_LEN];
            scratchpad[..2].copy_from_slice(&raw.to_le_bytes());
            scratchpad[2..8].copy_from_slice(&[0x4B, 0x46, 0x7F, 0xFF, 0x0C, 0x10]);
            scratchpad[8] = crc8(&scratchpad[..8]);
            Self {
                scratchpad,
                ..Default::default()
            }
        }
    }

    impl OneWire for FakeBus {
        fn reset(&mut self) -> Result<bool, SensorError> {
            self.resets += 1;
            Ok(!self.absent)
        }

        fn write_byte(&mut self, byte: u8) -> Result<(), SensorError> {
            let _ = self.written.push(byte);
            Ok(())
        }

        fn read_byte(&mut self) -> Result<u8, SensorError> {
            let byte = self.scratchpad[self.read_pos % SCRATCHPAD_LEN];
            self.read_pos += 1;
            Ok(byte)
        }
    }

    fn sensor(bus: FakeBus, unit: TemperatureUnit) -> Ds18b20<FakeBus, FakeDelay> {
        Ds18b20::probe(bus, FakeDelay::default(), unit, DEFAULT_CONVERSION_MS).unwrap()
    }

    #[test]
    fn test_conversion_wait_matches_config_default() {
        assert_eq!(
            DEFAULT_CONVERSION_MS,
            plantprobe_core::config::SensorConfig::DEFAULT.conversion_ms
        );
        assert_eq!(DEFAULT_CONVERSION_MS, 1000);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(raw_to_degrees(0x0550, TemperatureUnit::Fahrenheit), 185);
        assert_eq!(raw_to_degrees(0x0191, TemperatureUnit::Fahrenheit), 77);
        assert_eq!(raw_to_degrees(0x0550, TemperatureUnit::Celsius), 85);
        assert_eq!(raw_to_degrees(0x0191, TemperatureUnit::Celsius), 25);
        assert_eq!(raw_to_degrees(0, TemperatureUnit::Fahrenheit), 32);
    }

    #[test]
    fn test_read_sequence() {
        let mut ds = sensor(FakeBus::with_temperature(0x0191), TemperatureUnit::Fahrenheit);
        assert_eq!(ds.read_temperature(), Ok(77));

        let (bus, delay) = ds.release();
        assert_eq!(&bus.written[..], &[0xCC, 0x44, 0xCC, 0xBE]);
        assert_eq!(bus.resets, 3);
        assert_eq!(bus.read_pos, 9);
        assert_eq!(delay.total_ns, 1_000_000_000);
    }

    #[test]
    fn test_celsius_reading() {
        let mut ds = sensor(FakeBus::with_temperature(0x0550), TemperatureUnit::Celsius);
        assert_eq!(ds.read_temperature(), Ok(85));
    }

    #[test]
    fn test_corrupt_scratchpad() {
        let mut bus = FakeBus::with_temperature(0x0191);
        bus.scratchpad[0] ^= 0x01;
        let mut ds = sensor(bus, TemperatureUnit::Fahrenheit);
        assert_eq!(ds.read_temperature(), Err(SensorError::Crc));
    }

    #[test]
    fn test_missing_device() {
        let bus = FakeBus {
            absent: true,
            ..Default::default()
        };
        let result = Ds18b20::probe(
            bus,
            FakeDelay::default(),
            TemperatureUnit::Fahrenheit,
            DEFAULT_CONVERSION_MS,
        );
        assert!(matches!(result, Err(SensorError::NoDevice)));
    }
}
