//! Temperature, light and moisture sensor traits

/// Errors a sensor collaborator can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transaction failed (NACK, arbitration loss, ...)
    Bus,
    /// No device answered (1-Wire presence pulse missing)
    NoDevice,
    /// Data failed its checksum
    Crc,
    /// Sensor was not available at startup
    Unavailable,
}

/// Blocking temperature read
///
/// Whole degrees in the unit the driver was configured for. The call may
/// block for the sensor's conversion time.
pub trait TemperatureSensor {
    fn read_temperature(&mut self) -> Result<i16, SensorError>;
}

/// Blocking ambient light read, in lux
pub trait LightSensor {
    fn read_lux(&mut self) -> Result<u16, SensorError>;
}

/// Blocking soil moisture read, raw capacitive count
pub trait MoistureSensor {
    fn read_moisture(&mut self) -> Result<u16, SensorError>;
}

/// A sensor that failed to come up at boot
///
/// `None` keeps the pipeline running and reports [`SensorError::Unavailable`]
/// on every read.
impl<T: TemperatureSensor> TemperatureSensor for Option<T> {
    fn read_temperature(&mut self) -> Result<i16, SensorError> {
        match self {
            Some(sensor) => sensor.read_temperature(),
            None => Err(SensorError::Unavailable),
        }
    }
}

impl<T: LightSensor> LightSensor for Option<T> {
    fn read_lux(&mut self) -> Result<u16, SensorError> {
        match self {
            Some(sensor) => sensor.read_lux(),
            None => Err(SensorError::Unavailable),
        }
    }
}

impl<T: MoistureSensor> MoistureSensor for Option<T> {
    fn read_moisture(&mut self) -> Result<u16, SensorError> {
        match self {
            Some(sensor) => sensor.read_moisture(),
            None => Err(SensorError::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(i16);

    impl TemperatureSensor for Fixed {
        fn read_temperature(&mut self) -> Result<i16, SensorError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_missing_sensor_is_unavailable() {
        let mut present = Some(Fixed(68));
        let mut absent: Option<Fixed> = None;
        assert_eq!(present.read_temperature(), Ok(68));
        assert_eq!(absent.read_temperature(), Err(SensorError::Unavailable));
    }
}
