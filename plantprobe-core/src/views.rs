//! View compositor
//!
//! Builds complete screens from renderer primitives. Every live view
//! clears the panel, draws the header, adds its own content and flushes
//! once at the end.
//!
//! ```text
//! row 0   " 72F  SOIL"      header
//! y = 9   ──────────────    underline
//! row 2   "MOISTURE: "
//! row 4   [██████      ]    percentage bar
//! row 5   "    WET   "      qualitative label
//! ```

use core::fmt::Write;

use heapless::String;
use plantprobe_display::splash::SPLASH_STRIPS;
use plantprobe_display::{DisplayError, DisplayInterface, Fill, Renderer, WIDTH};

use crate::config::TemperatureUnit;
use crate::mailbox::SensorSnapshot;
use crate::mode::ViewMode;

/// Moisture count that maps to an empty bar
pub const MOISTURE_DRY_COUNT: f32 = 200.0;

/// Moisture counts between an empty and a full bar
pub const MOISTURE_SPAN: f32 = 1000.0;

/// Lux that maps to a full bar
pub const LUX_FULL_SCALE: f32 = 32_000.0;

/// Above this many lux the light view reads "SUNLIGHT"
pub const LUX_SUNLIGHT: u16 = 32_000;

/// Above this many lux the light view reads "SHADE"
pub const LUX_SHADE: u16 = 10_000;

/// Height of a percentage bar outline in pixels
const BAR_HEIGHT: u8 = 8;

/// Gap between bar outline and fill
const BAR_INSET: u8 = 2;

/// Last column of the bar outline
const BAR_RIGHT: u8 = WIDTH as u8 - 1;

/// Fill extent for a fraction of 1.0
const BAR_FILL_MAX: f32 = 81.0;

/// y of the line under the header
const HEADER_UNDERLINE_Y: u8 = 9;

const LOADING_TEXT: &str = "LOADING...";
const CRITICAL_ERROR_TEXT: &str = "  CRITICAL  ERROR!";

/// Map a raw moisture count onto the bar scale
///
/// Not clamped; counts below the dry point give a negative fraction.
pub fn moisture_fraction(moisture: u16) -> f32 {
    (f32::from(moisture) - MOISTURE_DRY_COUNT) / MOISTURE_SPAN
}

/// Map lux onto the bar scale
pub fn light_fraction(lux: u16) -> f32 {
    f32::from(lux) / LUX_FULL_SCALE
}

/// Qualitative moisture label, centred in a 10-character field
pub fn soil_label(fraction: f32) -> &'static str {
    if fraction < 0.2 {
        "    DRY   "
    } else if fraction < 0.5 {
        "   MOIST  "
    } else if fraction < 0.8 {
        "    WET   "
    } else {
        " VERY WET "
    }
}

/// Qualitative light label, centred in a 10-character field
pub fn light_label(lux: u16) -> &'static str {
    if lux > LUX_SUNLIGHT {
        " SUNLIGHT "
    } else if lux > LUX_SHADE {
        "   SHADE  "
    } else {
        "  TOO DIM "
    }
}

/// Rightmost filled column of a percentage bar, or `None` for no fill
///
/// Fractions above 1.0 are clamped; there is no lower clamp, so zero,
/// negative and tiny fractions land left of the inset and fill nothing.
pub fn bar_fill_extent(fraction: f32) -> Option<u8> {
    let to_x = (fraction.min(1.0) * BAR_FILL_MAX) as i32;
    if to_x >= i32::from(BAR_INSET) {
        Some(to_x as u8)
    } else {
        None
    }
}

/// Header text: temperature, unit and mode label
pub fn header_text(temperature: i16, unit: TemperatureUnit, mode: ViewMode) -> String<16> {
    let mut text = String::new();
    // 16 bytes holds the widest i16 plus the label
    let _ = write!(
        text,
        "{:>3}{} {:>5}",
        temperature,
        unit.symbol(),
        mode.label()
    );
    text
}

/// Draw the header row and its underline; leaves the cursor on row 1
pub async fn draw_header<DI: DisplayInterface>(
    renderer: &mut Renderer<DI>,
    temperature: i16,
    unit: TemperatureUnit,
    mode: ViewMode,
) -> Result<(), DisplayError> {
    renderer.set_cursor(0, 0)?;
    renderer
        .print_str(&header_text(temperature, unit, mode), false)
        .await?;
    renderer.set_cursor(0, 1)?;
    renderer
        .surface_mut()
        .draw_rect(0, HEADER_UNDERLINE_Y, BAR_RIGHT, HEADER_UNDERLINE_Y, Fill::Solid)
}

/// Full-width bar outline at `top` with a proportional fill
pub fn draw_percentage_bar<DI>(
    renderer: &mut Renderer<DI>,
    fraction: f32,
    top: u8,
) -> Result<(), DisplayError> {
    let surface = renderer.surface_mut();
    surface.draw_rect(0, top, BAR_RIGHT, top + BAR_HEIGHT - 1, Fill::Outline)?;

    match bar_fill_extent(fraction) {
        Some(to_x) => surface.draw_rect(
            BAR_INSET,
            top + BAR_INSET,
            to_x,
            top + BAR_HEIGHT - 1 - BAR_INSET,
            Fill::Solid,
        ),
        None => Ok(()),
    }
}

/// Shown until the first sensor reading arrives
pub async fn show_loading_view<DI: DisplayInterface>(
    renderer: &mut Renderer<DI>,
) -> Result<(), DisplayError> {
    renderer.clear().await?;
    renderer.set_cursor(0, 2)?;
    renderer.print_str(LOADING_TEXT, true).await?;
    Ok(())
}

/// Shown when the stored view mode does not decode
pub async fn show_critical_error_view<DI: DisplayInterface>(
    renderer: &mut Renderer<DI>,
) -> Result<(), DisplayError> {
    renderer.clear().await?;
    renderer.set_cursor(0, 2)?;
    renderer.print_str(CRITICAL_ERROR_TEXT, true).await?;
    Ok(())
}

/// Boot artwork, drawn over whatever is on the canvas and flushed
pub async fn show_splash_view<DI: DisplayInterface>(
    renderer: &mut Renderer<DI>,
) -> Result<(), DisplayError> {
    for (offset, strip) in SPLASH_STRIPS {
        renderer.surface_mut().blit(offset, strip)?;
    }
    renderer.flush().await
}

/// Blank the panel
pub async fn clear_current_view<DI: DisplayInterface>(
    renderer: &mut Renderer<DI>,
) -> Result<(), DisplayError> {
    renderer.clear().await
}

/// Moisture and light bars together
pub async fn show_dual_view<DI: DisplayInterface>(
    renderer: &mut Renderer<DI>,
    snapshot: &SensorSnapshot,
    unit: TemperatureUnit,
) -> Result<(), DisplayError> {
    renderer.clear().await?;
    draw_header(renderer, snapshot.temperature, unit, ViewMode::Dual).await?;
    renderer.newline();
    renderer.print_str("MOISTURE: ", false).await?;
    draw_percentage_bar(renderer, moisture_fraction(snapshot.moisture), 24)?;
    renderer.set_cursor(0, 4)?;
    renderer.print_str("LIGHT: ", false).await?;
    draw_percentage_bar(renderer, light_fraction(snapshot.lux), 40)?;
    renderer.flush().await
}

/// Moisture bar with a qualitative label
pub async fn show_soil_view<DI: DisplayInterface>(
    renderer: &mut Renderer<DI>,
    snapshot: &SensorSnapshot,
    unit: TemperatureUnit,
) -> Result<(), DisplayError> {
    let fraction = moisture_fraction(snapshot.moisture);

    renderer.clear().await?;
    draw_header(renderer, snapshot.temperature, unit, ViewMode::Soil).await?;
    renderer.newline();
    renderer.print_str("MOISTURE: ", false).await?;
    draw_percentage_bar(renderer, fraction, 32)?;
    renderer.set_cursor(0, 5)?;
    renderer.print_str(soil_label(fraction), false).await?;
    renderer.flush().await
}

/// Light bar with a qualitative label
pub async fn show_light_view<DI: DisplayInterface>(
    renderer: &mut Renderer<DI>,
    snapshot: &SensorSnapshot,
    unit: TemperatureUnit,
) -> Result<(), DisplayError> {
    renderer.clear().await?;
    draw_header(renderer, snapshot.temperature, unit, ViewMode::Light).await?;
    renderer.newline();
    renderer.print_str("QUALITY: ", false).await?;
    draw_percentage_bar(renderer, light_fraction(snapshot.lux), 32)?;
    renderer.set_cursor(0, 5)?;
    renderer.print_str(light_label(snapshot.lux), false).await?;
    renderer.flush().await
}
