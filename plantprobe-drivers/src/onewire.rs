//! 1-Wire bus
//!
//! [`OneWire`] is the byte-level bus contract the DS18B20 driver needs.
//! [`BitBangOneWire`] implements it on a single open-drain GPIO with
//! standard-speed slot timings.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use plantprobe_core::traits::SensorError;

/// ROM command addressing every device on the bus
pub const SKIP_ROM: u8 = 0xCC;

/// Byte-level 1-Wire operations
pub trait OneWire {
    /// Reset pulse; `Ok(true)` if a device answered with a presence pulse
    fn reset(&mut self) -> Result<bool, SensorError>;

    /// Write one byte, LSB first
    fn write_byte(&mut self, byte: u8) -> Result<(), SensorError>;

    /// Read one byte, LSB first
    fn read_byte(&mut self) -> Result<u8, SensorError>;
}

/// Standard-speed timings (µs)
mod timing {
    pub const RESET_LOW: u32 = 480;
    pub const PRESENCE_SAMPLE: u32 = 70;
    pub const RESET_RECOVERY: u32 = 410;
    pub const WRITE_ONE_LOW: u32 = 6;
    pub const WRITE_ONE_RELEASE: u32 = 64;
    pub const WRITE_ZERO_LOW: u32 = 60;
    pub const WRITE_ZERO_RELEASE: u32 = 10;
    pub const READ_LOW: u32 = 6;
    pub const READ_SAMPLE: u32 = 9;
    pub const READ_RELEASE: u32 = 55;
}

/// 1-Wire master on an open-drain pin with an external pull-up
///
/// Driving the pin high releases the line.
pub struct BitBangOneWire<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> BitBangOneWire<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn pull_low(&mut self) -> Result<(), SensorError> {
        self.pin.set_low().map_err(|_| SensorError::Bus)
    }

    fn release_line(&mut self) -> Result<(), SensorError> {
        self.pin.set_high().map_err(|_| SensorError::Bus)
    }

    fn line_is_low(&mut self) -> Result<bool, SensorError> {
        self.pin.is_low().map_err(|_| SensorError::Bus)
    }

    fn write_bit(&mut self, bit: bool) -> Result<(), SensorError> {
        let (low, release) = if bit {
            (timing::WRITE_ONE_LOW, timing::WRITE_ONE_RELEASE)
        } else {
            (timing::WRITE_ZERO_LOW, timing::WRITE_ZERO_RELEASE)
        };
        self.pull_low()?;
        self.delay.delay_us(low);
        self.release_line()?;
        self.delay.delay_us(release);
        Ok(())
    }

    fn read_bit(&mut self) -> Result<bool, SensorError> {
        self.pull_low()?;
        self.delay.delay_us(timing::READ_LOW);
        self.release_line()?;
        self.delay.delay_us(timing::READ_SAMPLE);
        let bit = !self.line_is_low()?;
        self.delay.delay_us(timing::READ_RELEASE);
        Ok(bit)
    }
}

impl<P, D> OneWire for BitBangOneWire<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn reset(&mut self) -> Result<bool, SensorError> {
        self.pull_low()?;
        self.delay.delay_us(timing::RESET_LOW);
        self.release_line()?;
        self.delay.delay_us(timing::PRESENCE_SAMPLE);
        let present = self.line_is_low()?;
        self.delay.delay_us(timing::RESET_RECOVERY);
        Ok(present)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), SensorError> {
        for i in 0..8 {
            self.write_bit(byte & (1 << i) != 0)?;
        }
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, SensorError> {
        let mut byte = 0;
        for i in 0..8 {
            if self.read_bit()? {
                byte |= 1 << i;
            }
        }
        Ok(byte)
    }
}

/// Dallas/Maxim CRC-8 (polynomial x^8 + x^5 + x^4 + 1, reflected)
///
/// Running it over data followed by its CRC byte yields 0.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &byte in data {
        let mut b = byte;
        for _ in 0..8 {
            let mix = (crc ^ b) & 0x01;
            crc >>= 1;
            if mix != 0 {
                crc ^= 0x8C;
            }
            b >>= 1;
        }
    }
    crc
}
