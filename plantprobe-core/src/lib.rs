//! Board-agnostic core logic for the plant probe
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor collaborator traits (temperature, light, moisture)
//! - Shared sensor mailbox between the two cores
//! - Sampling pipeline step
//! - View modes and the debounced mode selector
//! - Run loop scheduling
//! - View compositor
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod mailbox;
pub mod mode;
pub mod sampling;
pub mod scheduler;
pub mod traits;
pub mod views;
