//! Build-time device configuration
//!
//! `DEVICE_CONFIG` is generated by build.rs from device.toml.

use plantprobe_core::config::{DeviceConfig, LcdConfig, SensorConfig, TemperatureUnit, TimingConfig};

include!(concat!(env!("OUT_DIR"), "/device_config.rs"));
