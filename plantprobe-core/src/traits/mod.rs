//! Sensor collaborator traits
//!
//! The sampling pipeline consumes sensors only through these blocking
//! "read one scalar" calls. Concrete drivers live in `plantprobe-drivers`.

pub mod sensor;

pub use sensor::{LightSensor, MoistureSensor, SensorError, TemperatureSensor};
