//! Display transport
//!
//! The PCD8544 is driven over a write-only serial bus with a separate
//! data/command select line. [`DisplayInterface`] hides that wiring from
//! the surface so the protocol can be exercised against an in-memory fake.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi::SpiDevice;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display controller
    Communication,
    /// Pixel or cursor coordinates outside the canvas/grid
    InvalidCoordinates,
    /// Text line index outside the grid
    InvalidLine,
}

/// Command/data transport to the display controller
///
/// Implementations select command or data mode before each transfer.
#[allow(async_fn_in_trait)]
pub trait DisplayInterface {
    /// Send a single command byte
    async fn command(&mut self, cmd: u8) -> Result<(), DisplayError>;

    /// Send a block of display RAM data
    async fn data(&mut self, data: &[u8]) -> Result<(), DisplayError>;
}

/// SPI transport with a D/C select pin
///
/// D/C low selects command mode, D/C high selects data mode.
pub struct SpiInterface<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiInterface<SPI, DC> {
    /// Create a new SPI transport
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Release the bus and pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> DisplayInterface for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    async fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Communication)?;
        self.spi
            .write(&[cmd])
            .await
            .map_err(|_| DisplayError::Communication)
    }

    async fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::Communication)?;
        self.spi
            .write(data)
            .await
            .map_err(|_| DisplayError::Communication)
    }
}
