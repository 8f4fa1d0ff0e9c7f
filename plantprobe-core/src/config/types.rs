//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default view refresh interval (ms)
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 500;

/// Default minimum spacing between accepted button edges (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// Default splash screen hold time (ms)
pub const DEFAULT_SPLASH_MS: u32 = 3000;

/// Default LCD reset pulse length (ms)
pub const DEFAULT_LCD_RESET_MS: u32 = 100;

/// Default LCD SPI clock (Hz)
pub const DEFAULT_SPI_FREQUENCY_HZ: u32 = 4_000_000;

pub use plantprobe_display::pcd8544::DEFAULT_OPERATING_VOLTAGE;

/// Default sensor I2C clock (Hz)
pub const DEFAULT_I2C_FREQUENCY_HZ: u32 = 100_000;

/// Default DS18B20 conversion wait (ms), 12-bit resolution
pub const DEFAULT_CONVERSION_MS: u32 = 1000;

/// Largest value the PCD8544 V_op register accepts
pub const MAX_OPERATING_VOLTAGE: u8 = 0x7F;

/// Temperature unit reported by the temperature sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Single letter shown after the reading
    pub const fn symbol(self) -> char {
        match self {
            TemperatureUnit::Celsius => 'C',
            TemperatureUnit::Fahrenheit => 'F',
        }
    }
}

/// Run loop and UI timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Maximum time between view refreshes
    pub refresh_interval_ms: u32,
    /// Minimum time between accepted mode button edges
    pub debounce_ms: u32,
    /// How long the splash screen stays up at boot
    pub splash_ms: u32,
}

impl TimingConfig {
    pub const DEFAULT: Self = Self {
        refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        debounce_ms: DEFAULT_DEBOUNCE_MS,
        splash_ms: DEFAULT_SPLASH_MS,
    };
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// LCD panel settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LcdConfig {
    /// SPI clock frequency
    pub spi_frequency_hz: u32,
    /// V_op setting (contrast), 0-127
    pub operating_voltage: u8,
    /// Reset line low time before bring-up
    pub reset_ms: u32,
}

impl LcdConfig {
    pub const DEFAULT: Self = Self {
        spi_frequency_hz: DEFAULT_SPI_FREQUENCY_HZ,
        operating_voltage: DEFAULT_OPERATING_VOLTAGE,
        reset_ms: DEFAULT_LCD_RESET_MS,
    };
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sensor bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorConfig {
    /// I2C clock for the light and moisture sensors
    pub i2c_frequency_hz: u32,
    /// Wait between starting a temperature conversion and reading it
    pub conversion_ms: u32,
    /// Unit published for temperature readings
    pub temperature_unit: TemperatureUnit,
}

impl SensorConfig {
    pub const DEFAULT: Self = Self {
        i2c_frequency_hz: DEFAULT_I2C_FREQUENCY_HZ,
        conversion_ms: DEFAULT_CONVERSION_MS,
        temperature_unit: TemperatureUnit::Fahrenheit,
    };
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    pub timing: TimingConfig,
    pub lcd: LcdConfig,
    pub sensors: SensorConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Refresh interval of zero would spin the run loop
    ZeroRefreshInterval,
    /// SPI clock of zero
    ZeroSpiFrequency,
    /// I2C clock of zero
    ZeroI2cFrequency,
    /// V_op does not fit the 7-bit register
    OperatingVoltageOutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroRefreshInterval => f.write_str("timing.refresh_interval_ms must be > 0"),
            ConfigError::ZeroSpiFrequency => f.write_str("lcd.spi_frequency_hz must be > 0"),
            ConfigError::ZeroI2cFrequency => f.write_str("sensors.i2c_frequency_hz must be > 0"),
            ConfigError::OperatingVoltageOutOfRange => {
                f.write_str("lcd.operating_voltage must be between 0 and 127")
            }
        }
    }
}

impl DeviceConfig {
    pub const DEFAULT: Self = Self {
        timing: TimingConfig::DEFAULT,
        lcd: LcdConfig::DEFAULT,
        sensors: SensorConfig::DEFAULT,
    };

    /// Check for values the firmware cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.refresh_interval_ms == 0 {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        if self.lcd.spi_frequency_hz == 0 {
            return Err(ConfigError::ZeroSpiFrequency);
        }
        if self.lcd.operating_voltage > MAX_OPERATING_VOLTAGE {
            return Err(ConfigError::OperatingVoltageOutOfRange);
        }
        if self.sensors.i2c_frequency_hz == 0 {
            return Err(ConfigError::ZeroI2cFrequency);
        }
        Ok(())
    }
}
