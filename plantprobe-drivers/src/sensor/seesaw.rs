//! Adafruit Seesaw capacitive soil moisture sensor
//!
//! Moisture is the raw count from touch channel 0, roughly 200 (dry air)
//! to 2000 (in water).

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use plantprobe_core::traits::{MoistureSensor, SensorError};

/// Factory default address
pub const DEFAULT_ADDRESS: u8 = 0x36;

/// Register bases and functions
mod reg {
    pub const STATUS_BASE: u8 = 0x00;
    pub const STATUS_SWRST: u8 = 0x7F;
    pub const TOUCH_BASE: u8 = 0x0F;
    pub const TOUCH_CHANNEL_OFFSET: u8 = 0x10;
}

/// Value written to the reset register
const RESET_MAGIC: u8 = 0xFF;

/// Wait between requesting and reading a touch channel
const TOUCH_READ_DELAY_US: u32 = 3000;

/// Time the chip needs after a software reset
const RESET_DELAY_MS: u32 = 500;

/// Seesaw soil sensor on a blocking I2C bus
pub struct Seesaw<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> Seesaw<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    /// Software reset, then wait for the chip to come back
    pub fn reset(&mut self) -> Result<(), SensorError> {
        self.i2c
            .write(
                self.address,
                &[reg::STATUS_BASE, reg::STATUS_SWRST, RESET_MAGIC],
            )
            .map_err(|_| SensorError::Bus)?;
        self.delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D> MoistureSensor for Seesaw<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn read_moisture(&mut self) -> Result<u16, SensorError> {
        self.i2c
            .write(self.address, &[reg::TOUCH_BASE, reg::TOUCH_CHANNEL_OFFSET])
            .map_err(|_| SensorError::Bus)?;
        self.delay.delay_us(TOUCH_READ_DELAY_US);

        let mut buf = [0u8; 2];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(u16::from_be_bytes(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeDelay, FakeI2c};

    #[test]
    fn test_reset_writes_magic_and_waits() {
        let mut sensor = Seesaw::new(FakeI2c::default(), FakeDelay::default(), DEFAULT_ADDRESS);
        sensor.reset().unwrap();

        let (i2c, delay) = sensor.release();
        assert_eq!(i2c.writes[0].0, 0x36);
        assert_eq!(&i2c.writes[0].1[..], &[0x00, 0x7F, 0xFF]);
        assert_eq!(delay.total_ns, 500_000_000);
    }

    #[test]
    fn test_moisture_read() {
        let mut sensor = Seesaw::new(
            FakeI2c::answering(&[0x02, 0xBC]),
            FakeDelay::default(),
            DEFAULT_ADDRESS,
        );
        assert_eq!(sensor.read_moisture(), Ok(700));

        let (i2c, delay) = sensor.release();
        assert_eq!(&i2c.writes[0].1[..], &[0x0F, 0x10]);
        assert_eq!(delay.total_ns, 3_000_000);
    }

    #[test]
    fn test_bus_error() {
        let fake = FakeI2c {
            fail: true,
            ..Default::default()
        };
        let mut sensor = Seesaw::new(fake, FakeDelay::default(), DEFAULT_ADDRESS);
        assert_eq!(sensor.read_moisture(), Err(SensorError::Bus));
    }
}
