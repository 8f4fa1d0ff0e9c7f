//! Sensor drivers

pub mod bh1750;
pub mod ds18b20;
pub mod seesaw;

pub use bh1750::Bh1750;
pub use ds18b20::Ds18b20;
pub use seesaw::Seesaw;
