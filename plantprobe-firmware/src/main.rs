//! Plant Probe - Environmental Monitoring Firmware
//!
//! Main firmware binary for the RP2040 plant probe. Core 1 samples soil
//! temperature, ambient light and soil moisture; core 0 drives the
//! PCD8544 display and the view-mode button.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output};
use embassy_rp::multicore::{spawn_core1, Stack};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Duration, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use plantprobe_core::views;
use plantprobe_display::{Pcd8544, Renderer, SpiInterface};

use crate::board::{Lcd, SensorResources};
use crate::config::DEVICE_CONFIG;

mod board;
mod channels;
mod config;
mod tasks;

/// Core 1 stack (sampling loop only)
static CORE1_STACK: StaticCell<Stack<4096>> = StaticCell::new();

/// LCD reset line, held high once the panel is out of reset
static LCD_RESET: StaticCell<Output<'static>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Plant probe firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Sampling runs on core 1 from here on
    let sensors = SensorResources {
        i2c: p.I2C1,
        sda: p.PIN_6,
        scl: p.PIN_7,
        one_wire: p.PIN_9,
    };
    spawn_core1(p.CORE1, CORE1_STACK.init(Stack::new()), move || {
        tasks::sampling::run(sensors)
    });

    // LCD hardware reset
    let lcd_config = DEVICE_CONFIG.lcd;
    let mut reset = Output::new(p.PIN_21, Level::Low);
    Timer::after(Duration::from_millis(lcd_config.reset_ms as u64)).await;
    reset.set_high();
    LCD_RESET.init(reset);

    let mut spi_config = spi::Config::default();
    spi_config.frequency = lcd_config.spi_frequency_hz;
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_20, Level::Low);
    let device = ExclusiveDevice::new(spi, cs, Delay).unwrap();

    let mut lcd: Lcd = Renderer::new(Pcd8544::new(
        SpiInterface::new(device, dc),
        lcd_config.operating_voltage,
    ));
    show_splash(&mut lcd).await;
    info!("Display initialized");

    let button = Input::new(p.PIN_8, board::MODE_BUTTON_PULL);

    spawner
        .spawn(tasks::mode_button_task(button, DEVICE_CONFIG.timing.debounce_ms))
        .unwrap();
    spawner.spawn(tasks::run_loop_task(lcd)).unwrap();

    info!("All tasks spawned");
}

/// Bring up the controller, hold the splash screen, then blank it
async fn show_splash(lcd: &mut Lcd) {
    if let Err(e) = lcd.surface_mut().init().await {
        error!("LCD init failed: {}", e);
    }
    if let Err(e) = views::show_splash_view(lcd).await {
        warn!("Splash failed: {}", e);
    }
    Timer::after(Duration::from_millis(DEVICE_CONFIG.timing.splash_ms as u64)).await;
    if let Err(e) = views::clear_current_view(lcd).await {
        warn!("Clear after splash failed: {}", e);
    }
}
