//! Sensor sampling on core 1
//!
//! A plain blocking loop; core 1 runs no executor. Each pass reads the
//! DS18B20 (about a second for the conversion), the BH1750 and the Seesaw,
//! then publishes to the shared mailbox.

use core::cell::RefCell;

use defmt::*;
use embassy_rp::i2c::{self, I2c};
use embassy_time::Delay;
use embedded_hal_bus::i2c::RefCellDevice;

use plantprobe_core::sampling::Sampler;
use plantprobe_drivers::onewire::BitBangOneWire;
use plantprobe_drivers::sensor::{bh1750, seesaw, Bh1750, Ds18b20, Seesaw};

use crate::board::{OneWireLine, SensorResources};
use crate::channels::SENSOR_MAILBOX;
use crate::config::DEVICE_CONFIG;

/// Core 1 entry point
pub fn run(resources: SensorResources) -> ! {
    info!("Sampling started on core 1");
    let sensors = &DEVICE_CONFIG.sensors;

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = sensors.i2c_frequency_hz;
    let bus = RefCell::new(I2c::new_blocking(
        resources.i2c,
        resources.scl,
        resources.sda,
        i2c_config,
    ));

    let line = OneWireLine::new(resources.one_wire);
    let temperature = match Ds18b20::probe(
        BitBangOneWire::new(line, Delay),
        Delay,
        sensors.temperature_unit,
        sensors.conversion_ms,
    ) {
        Ok(sensor) => Some(sensor),
        Err(e) => {
            error!("DS18B20 unavailable ({}), continuing without temperature", e);
            None
        }
    };

    let mut light = Bh1750::new(RefCellDevice::new(&bus), bh1750::DEFAULT_ADDRESS);
    if let Err(e) = light.start() {
        warn!("BH1750 start failed: {}", e);
    }

    let mut moisture = Seesaw::new(RefCellDevice::new(&bus), Delay, seesaw::DEFAULT_ADDRESS);
    if let Err(e) = moisture.reset() {
        warn!("Seesaw reset failed: {}", e);
    }

    let mut sampler = Sampler::new(temperature, light, moisture);
    loop {
        let snapshot = sampler.publish_to(&SENSOR_MAILBOX);
        trace!("Sampled {}", snapshot);
    }
}
