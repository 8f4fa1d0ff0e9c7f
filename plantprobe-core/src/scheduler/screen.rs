//! Screen selection and dispatch to the compositor

use plantprobe_display::{DisplayError, DisplayInterface, Renderer};

use crate::config::TemperatureUnit;
use crate::mailbox::SensorSnapshot;
use crate::mode::ViewMode;
use crate::views;

/// What the run loop draws this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    Loading,
    CriticalError,
    Dual(SensorSnapshot),
    Soil(SensorSnapshot),
    Light(SensorSnapshot),
}

/// Pick the screen for a mode and mailbox snapshot
///
/// No reading yet wins over everything, including an undecodable mode.
pub fn select_screen(mode: Option<ViewMode>, snapshot: SensorSnapshot) -> Screen {
    if !snapshot.has_reading() {
        return Screen::Loading;
    }

    match mode {
        Some(ViewMode::Dual) => Screen::Dual(snapshot),
        Some(ViewMode::Soil) => Screen::Soil(snapshot),
        Some(ViewMode::Light) => Screen::Light(snapshot),
        None => Screen::CriticalError,
    }
}

/// Draw `screen`
pub async fn render<DI: DisplayInterface>(
    renderer: &mut Renderer<DI>,
    screen: Screen,
    unit: TemperatureUnit,
) -> Result<(), DisplayError> {
    match screen {
        Screen::Loading => views::show_loading_view(renderer).await,
        Screen::CriticalError => views::show_critical_error_view(renderer).await,
        Screen::Dual(snapshot) => views::show_dual_view(renderer, &snapshot, unit).await,
        Screen::Soil(snapshot) => views::show_soil_view(renderer, &snapshot, unit).await,
        Screen::Light(snapshot) => views::show_light_view(renderer, &snapshot, unit).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailbox::TEMPERATURE_SENTINEL;

    const READING: SensorSnapshot = SensorSnapshot {
        temperature: 70,
        lux: 100,
        moisture: 500,
    };

    #[test]
    fn test_sentinel_always_loading() {
        let empty = SensorSnapshot {
            temperature: TEMPERATURE_SENTINEL,
            ..READING
        };
        for mode in [
            Some(ViewMode::Dual),
            Some(ViewMode::Soil),
            Some(ViewMode::Light),
            None,
        ] {
            assert_eq!(select_screen(mode, empty), Screen::Loading);
        }

        let colder = SensorSnapshot {
            temperature: -120,
            ..READING
        };
        assert_eq!(select_screen(Some(ViewMode::Soil), colder), Screen::Loading);
    }

    #[test]
    fn test_mode_picks_view() {
        assert_eq!(
            select_screen(Some(ViewMode::Dual), READING),
            Screen::Dual(READING)
        );
        assert_eq!(
            select_screen(Some(ViewMode::Soil), READING),
            Screen::Soil(READING)
        );
        assert_eq!(
            select_screen(Some(ViewMode::Light), READING),
            Screen::Light(READING)
        );
    }

    #[test]
    fn test_invalid_mode_is_critical_error() {
        assert_eq!(select_screen(None, READING), Screen::CriticalError);
    }
}
