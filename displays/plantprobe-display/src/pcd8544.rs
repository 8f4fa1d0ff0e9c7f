//! PCD8544 display driver
//!
//! Driver for the 84x48 PCD8544 controller (Nokia 5110 style module).
//! The whole canvas is pushed as one 504-byte transfer in band-major,
//! column-minor order, which is the controller's horizontal addressing
//! order starting from RAM origin.

use crate::backend::{DisplayError, DisplayInterface};
use crate::framebuffer::{Fill, Framebuffer};

/// PCD8544 instruction encodings
mod cmd {
    pub const FUNCTION_SET: u8 = 0x20;
    pub const EXTENDED_INSTRUCTIONS: u8 = 0x01;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const DISPLAY_NORMAL: u8 = 0x04;
    pub const SET_Y_ADDRESS: u8 = 0x40;
    pub const SET_X_ADDRESS: u8 = 0x80;
    pub const SET_VOP: u8 = 0x80;
}

/// Default operating voltage setting (V_op = 0x10)
pub const DEFAULT_OPERATING_VOLTAGE: u8 = 0x10;

/// One controller instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Function set with H=1
    ExtendedInstructions,
    /// Set V_op (extended set only); 7-bit value
    SetOperatingVoltage(u8),
    /// Function set with H=0
    BasicInstructions,
    /// Display control: normal mode
    NormalMode,
    /// Set X address of display RAM (0-83)
    SetXAddress(u8),
    /// Set Y address (band) of display RAM (0-5)
    SetYAddress(u8),
}

impl Command {
    /// Encode as the byte sent with D/C low
    pub const fn encode(self) -> u8 {
        match self {
            Command::ExtendedInstructions => cmd::FUNCTION_SET | cmd::EXTENDED_INSTRUCTIONS,
            Command::SetOperatingVoltage(vop) => cmd::SET_VOP | (vop & 0x7F),
            Command::BasicInstructions => cmd::FUNCTION_SET,
            Command::NormalMode => cmd::DISPLAY_CONTROL | cmd::DISPLAY_NORMAL,
            Command::SetXAddress(x) => cmd::SET_X_ADDRESS | (x & 0x7F),
            Command::SetYAddress(y) => cmd::SET_Y_ADDRESS | (y & 0x07),
        }
    }
}

/// Controller bring-up sequence
///
/// Issued at startup and after every full-canvas clear, always in this
/// order, before the canvas is pushed.
pub const fn init_sequence(operating_voltage: u8) -> [Command; 6] {
    [
        Command::ExtendedInstructions,
        Command::SetOperatingVoltage(operating_voltage),
        Command::BasicInstructions,
        Command::NormalMode,
        Command::SetXAddress(0),
        Command::SetYAddress(0),
    ]
}

/// PCD8544 pixel surface
///
/// Owns the framebuffer; drawing only touches memory until [`Self::flush`].
pub struct Pcd8544<DI> {
    interface: DI,
    framebuffer: Framebuffer,
    operating_voltage: u8,
}

impl<DI> Pcd8544<DI>
where
    DI: DisplayInterface,
{
    /// Create a new driver; call [`Self::init`] before use
    pub fn new(interface: DI, operating_voltage: u8) -> Self {
        Self {
            interface,
            framebuffer: Framebuffer::new(),
            operating_voltage,
        }
    }

    /// Bring up the controller and push a blank canvas
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        debug!("PCD8544 init, V_op={=u8:#x}", self.operating_voltage);
        self.clear().await
    }

    /// Zero the canvas, re-run the bring-up sequence and push the canvas
    pub async fn clear(&mut self) -> Result<(), DisplayError> {
        self.framebuffer.clear();
        self.send_init_sequence().await?;
        self.flush().await
    }

    /// Push the whole canvas to display RAM
    pub async fn flush(&mut self) -> Result<(), DisplayError> {
        self.interface.data(self.framebuffer.as_bytes()).await
    }

    async fn send_init_sequence(&mut self) -> Result<(), DisplayError> {
        for command in init_sequence(self.operating_voltage) {
            self.interface.command(command.encode()).await?;
        }
        Ok(())
    }
}

impl<DI> Pcd8544<DI> {
    /// See [`Framebuffer::draw_rect`]
    pub fn draw_rect(
        &mut self,
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        fill: Fill,
    ) -> Result<(), DisplayError> {
        self.framebuffer.draw_rect(x1, y1, x2, y2, fill)
    }

    /// See [`Framebuffer::draw_bitmap_8x8`]
    pub fn draw_bitmap_8x8(&mut self, bitmap: &[u8; 8], x: u8, y: u8) -> Result<(), DisplayError> {
        self.framebuffer.draw_bitmap_8x8(bitmap, x, y)
    }

    /// See [`Framebuffer::clear_line`]
    pub fn clear_line(&mut self, line: u8) -> Result<(), DisplayError> {
        self.framebuffer.clear_line(line)
    }

    /// See [`Framebuffer::blit`]
    pub fn blit(&mut self, offset: usize, data: &[u8]) -> Result<(), DisplayError> {
        self.framebuffer.blit(offset, data)
    }

    /// Current canvas contents
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Borrow the transport
    pub fn interface(&self) -> &DI {
        &self.interface
    }

    /// Release the transport
    pub fn release(self) -> DI {
        self.interface
    }
}
