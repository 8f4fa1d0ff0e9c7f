//! BH1750 ambient light sensor
//!
//! Runs in continuous high-resolution mode; each read returns the most
//! recent conversion. One count is 1/1.2 lux.

use embedded_hal::i2c::I2c;
use plantprobe_core::traits::{LightSensor, SensorError};

/// Address with the ADDR pin low
pub const DEFAULT_ADDRESS: u8 = 0x23;

/// BH1750 opcodes
mod opcode {
    pub const POWER_ON: u8 = 0x01;
    pub const CONTINUOUS_HIGH_RES: u8 = 0x10;
}

/// BH1750 on a blocking I2C bus
pub struct Bh1750<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Bh1750<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Power the sensor up and start continuous measurement
    pub fn start(&mut self) -> Result<(), SensorError> {
        self.command(opcode::POWER_ON)?;
        self.command(opcode::CONTINUOUS_HIGH_RES)
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    fn command(&mut self, op: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[op])
            .map_err(|_| SensorError::Bus)
    }
}

/// Convert a raw count to lux
pub const fn raw_to_lux(raw: u16) -> u16 {
    (raw as u32 * 10 / 12) as u16
}

impl<I2C: I2c> LightSensor for Bh1750<I2C> {
    fn read_lux(&mut self) -> Result<u16, SensorError> {
        let mut buf = [0u8; 2];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(raw_to_lux(u16::from_be_bytes(buf)))
    }
}
