//! Build script for plantprobe-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates device.toml, then generates `DEVICE_CONFIG`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use plantprobe_core::config::DeviceConfig;

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Turn device.toml into a `const DeviceConfig`
fn generate_config() {
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");
    if !config_path.exists() {
        fail(
            "device.toml not found!",
            &[
                "The firmware requires a device.toml configuration file.",
                "Please create one in the plantprobe-firmware directory.",
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read device.toml", &[&e.to_string()]),
    };

    let config: DeviceConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            let message = e.to_string();
            let lines: Vec<&str> = message.lines().collect();
            fail("Invalid device.toml", &lines)
        }
    };

    if let Err(e) = config.validate() {
        fail("Invalid value in device.toml", &[&e.to_string()]);
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("device_config.rs"), render_config(&config)).unwrap();

    println!("cargo:warning=device.toml validated successfully");
}

/// Rust source for the generated constant
fn render_config(config: &DeviceConfig) -> String {
    let DeviceConfig {
        timing,
        lcd,
        sensors,
    } = config;

    format!(
        "/// Device configuration generated from device.toml\n\
         pub const DEVICE_CONFIG: DeviceConfig = DeviceConfig {{\n    \
             timing: TimingConfig {{\n        \
                 refresh_interval_ms: {},\n        \
                 debounce_ms: {},\n        \
                 splash_ms: {},\n    \
             }},\n    \
             lcd: LcdConfig {{\n        \
                 spi_frequency_hz: {},\n        \
                 operating_voltage: {:#04x},\n        \
                 reset_ms: {},\n    \
             }},\n    \
             sensors: SensorConfig {{\n        \
                 i2c_frequency_hz: {},\n        \
                 conversion_ms: {},\n        \
                 temperature_unit: TemperatureUnit::{:?},\n    \
             }},\n\
         }};\n",
        timing.refresh_interval_ms,
        timing.debounce_ms,
        timing.splash_ms,
        lcd.spi_frequency_hz,
        lcd.operating_voltage,
        lcd.reset_ms,
        sensors.i2c_frequency_hz,
        sensors.conversion_ms,
        sensors.temperature_unit,
    )
}

/// Abort the build with a boxed message
fn fail(title: &str, details: &[&str]) -> ! {
    let body = details
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
