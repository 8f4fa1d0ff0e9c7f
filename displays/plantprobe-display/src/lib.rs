//! Pixel surface and text rendering for the plant probe display
//!
//! This crate provides:
//! - [`Framebuffer`]: the 84x48 monochrome canvas in PCD8544 band layout
//! - [`Pcd8544`]: the framebuffer plus the controller protocol that pushes it
//! - [`Renderer`]: an 8x8 text cursor and glyph printing on top of a surface
//! - [`DisplayInterface`]: the command/data transport, with an SPI implementation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  View compositor (plantprobe-core)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Renderer (text cursor, glyphs)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Pcd8544 (framebuffer + command set)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  DisplayInterface (SPI + D/C line)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Drawing never touches the hardware. Only [`Pcd8544::init`],
//! [`Pcd8544::clear`] and [`Pcd8544::flush`] (and the autoflush variants of
//! the print calls) talk to the controller.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod backend;
pub mod font;
pub mod framebuffer;
pub mod pcd8544;
pub mod splash;
pub mod text;

// Re-export key types
pub use backend::{DisplayError, DisplayInterface, SpiInterface};
pub use framebuffer::{Fill, Framebuffer, BANDS, BUFFER_SIZE, HEIGHT, WIDTH};
pub use pcd8544::{Command, Pcd8544};
pub use text::{Renderer, TextCursor, TEXT_COLUMNS, TEXT_ROWS};
