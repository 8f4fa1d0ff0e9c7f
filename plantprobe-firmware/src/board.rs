//! Board wiring
//!
//! Pin assignment for the plant monitor carrier board:
//!
//! | Function          | Pin     | Pad pull |
//! |-------------------|---------|----------|
//! | LCD SPI0 SCK      | GPIO18  |          |
//! | LCD SPI0 MOSI     | GPIO19  |          |
//! | LCD chip select   | GPIO17  |          |
//! | LCD data/command  | GPIO20  |          |
//! | LCD reset         | GPIO21  |          |
//! | Sensor I2C1 SDA   | GPIO6   |          |
//! | Sensor I2C1 SCL   | GPIO7   |          |
//! | Mode button       | GPIO8   | down     |
//! | DS18B20 1-Wire    | GPIO9   | up       |
//!
//! The mode button switches GPIO8 to 3V3; the pull-down holds it low at
//! rest and the selector acts on the falling edge. The 1-Wire line uses
//! the internal pull-up; an external 4.7k is still recommended for long
//! sensor cables.

use core::convert::Infallible;

use embassy_rp::gpio::{Flex, Output, Pull};
use embassy_rp::peripherals::{I2C1, PIN_6, PIN_7, PIN_9, SPI0};
use embassy_rp::spi::{Async, Spi};
use embassy_rp::Peri;
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use plantprobe_display::{Renderer, SpiInterface};

/// LCD on SPI0 with its own chip select
pub type LcdSpi = ExclusiveDevice<Spi<'static, SPI0, Async>, Output<'static>, Delay>;

/// Text renderer over the LCD
pub type Lcd = Renderer<SpiInterface<LcdSpi, Output<'static>>>;

/// Pad pull on the mode button
pub const MODE_BUTTON_PULL: Pull = Pull::Down;

/// Pad pull on the 1-Wire line
pub const ONE_WIRE_PULL: Pull = Pull::Up;

// A pull-up on a button wired to 3V3 never produces a falling edge
const _: () = assert!(matches!(MODE_BUTTON_PULL, Pull::Down));
const _: () = assert!(matches!(ONE_WIRE_PULL, Pull::Up));

/// Open-drain 1-Wire line on a flex pin
///
/// Driving high releases the line to the pad pull-up instead of driving it.
pub struct OneWireLine {
    pin: Flex<'static>,
}

impl OneWireLine {
    pub fn new(pin: Peri<'static, PIN_9>) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_pull(ONE_WIRE_PULL);
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }
}

impl embedded_hal::digital::ErrorType for OneWireLine {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for OneWireLine {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.pin.set_as_output();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.pin.set_as_input();
        Ok(())
    }
}

impl embedded_hal::digital::InputPin for OneWireLine {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_high())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_low())
    }
}

/// Peripherals handed to the sampling core
pub struct SensorResources {
    pub i2c: Peri<'static, I2C1>,
    pub sda: Peri<'static, PIN_6>,
    pub scl: Peri<'static, PIN_7>,
    pub one_wire: Peri<'static, PIN_9>,
}
