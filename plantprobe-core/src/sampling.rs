//! Sampling pipeline step
//!
//! One round-robin pass over the three sensors. The firmware calls
//! [`Sampler::publish_to`] forever on the second core. Nothing is retried:
//! a failed temperature read publishes the sentinel, a failed light or
//! moisture read publishes 0.

use crate::mailbox::{SensorMailbox, SensorSnapshot, TEMPERATURE_SENTINEL};
use crate::traits::{LightSensor, MoistureSensor, TemperatureSensor};

/// Owns the three sensor collaborators
pub struct Sampler<T, L, M> {
    temperature: T,
    light: L,
    moisture: M,
}

impl<T, L, M> Sampler<T, L, M>
where
    T: TemperatureSensor,
    L: LightSensor,
    M: MoistureSensor,
{
    pub fn new(temperature: T, light: L, moisture: M) -> Self {
        Self {
            temperature,
            light,
            moisture,
        }
    }

    /// Read temperature, then light, then moisture
    ///
    /// Blocks for as long as the sensors do (the temperature conversion
    /// dominates).
    pub fn sample_once(&mut self) -> SensorSnapshot {
        let temperature = self.temperature.read_temperature().unwrap_or_else(|_e| {
            warn!("temperature read failed: {}", _e);
            TEMPERATURE_SENTINEL
        });
        let lux = self.light.read_lux().unwrap_or_else(|_e| {
            warn!("light read failed: {}", _e);
            0
        });
        let moisture = self.moisture.read_moisture().unwrap_or_else(|_e| {
            warn!("moisture read failed: {}", _e);
            0
        });

        SensorSnapshot {
            temperature,
            lux,
            moisture,
        }
    }

    /// Sample once and write the result into `mailbox`
    pub fn publish_to(&mut self, mailbox: &SensorMailbox) -> SensorSnapshot {
        let snapshot = self.sample_once();
        mailbox.publish(snapshot);
        snapshot
    }

    /// Give back the sensors
    pub fn release(self) -> (T, L, M) {
        (self.temperature, self.light, self.moisture)
    }
}
