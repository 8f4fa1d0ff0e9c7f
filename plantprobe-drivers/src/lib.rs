//! Sensor driver implementations
//!
//! This crate provides concrete implementations of the sensor traits
//! defined in plantprobe-core, over blocking `embedded-hal` 1.0 buses:
//!
//! - Ambient light (BH1750, I2C)
//! - Soil moisture (Adafruit Seesaw capacitive sensor, I2C)
//! - Temperature (DS18B20, 1-Wire)
//! - A bit-banged 1-Wire bus on an open-drain GPIO

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod onewire;
pub mod sensor;

#[cfg(test)]
pub(crate) mod testing;
