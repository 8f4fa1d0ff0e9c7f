//! Render-then-suspend loop body

use core::future::Future;

use embassy_futures::select::{select, Either};
use plantprobe_display::{DisplayInterface, Renderer};

use super::screen::{render, select_screen};
use crate::config::TemperatureUnit;
use crate::mailbox::SensorMailbox;
use crate::mode::{ModeCell, ViewMode};

/// Why the run loop woke up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeReason {
    /// Refresh interval elapsed
    Timer,
    /// The view mode changed
    ModeChanged,
}

/// Wait for whichever of `timer` and `mode_change` completes first
///
/// The other future is dropped, which cancels it, so a stale timer never
/// fires into the next cycle.
pub async fn suspend<T, M>(timer: T, mode_change: M) -> WakeReason
where
    T: Future,
    M: Future,
{
    match select(timer, mode_change).await {
        Either::First(_) => WakeReason::Timer,
        Either::Second(_) => WakeReason::ModeChanged,
    }
}

/// Run loop state carried between cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunLoop {
    previous: Option<ViewMode>,
    unit: TemperatureUnit,
}

impl RunLoop {
    /// Previous mode starts at SOIL while the mode starts at DUAL, so the
    /// first cycle never waits
    pub const fn new(unit: TemperatureUnit) -> Self {
        Self {
            previous: Some(ViewMode::Soil),
            unit,
        }
    }

    /// Record the mode seen this cycle; true if it differs from the last
    pub fn record_mode(&mut self, mode: Option<ViewMode>) -> bool {
        let changed = mode != self.previous;
        self.previous = mode;
        changed
    }

    /// One loop iteration: render, then suspend
    ///
    /// `timer` and `mode_change` are created by the caller for this cycle.
    /// Render failures are logged and the loop carries on.
    pub async fn cycle<DI, T, M>(
        &mut self,
        renderer: &mut Renderer<DI>,
        mailbox: &SensorMailbox,
        modes: &ModeCell,
        timer: T,
        mode_change: M,
    ) -> WakeReason
    where
        DI: DisplayInterface,
        T: Future,
        M: Future,
    {
        let mode = modes.load();
        let screen = select_screen(mode, mailbox.snapshot());
        if let Err(_e) = render(renderer, screen, self.unit).await {
            warn!("render failed: {}", _e);
        }

        if self.record_mode(mode) {
            return WakeReason::ModeChanged;
        }
        suspend(timer, mode_change).await
    }
}

#[cfg(test)]
mod tests {
    use core::future::{pending, ready};

    use embassy_futures::block_on;

    use super::*;
    use crate::mailbox::SensorSnapshot;
    use crate::views::testing::{renderer, row_shows};

    #[test]
    fn test_suspend_reports_winner() {
        assert_eq!(block_on(suspend(ready(()), pending::<()>())), WakeReason::Timer);
        assert_eq!(
            block_on(suspend(pending::<()>(), ready(()))),
            WakeReason::ModeChanged
        );
    }

    #[test]
    fn test_record_mode() {
        let mut run_loop = RunLoop::new(TemperatureUnit::Fahrenheit);
        assert!(run_loop.record_mode(Some(ViewMode::Dual)));
        assert!(!run_loop.record_mode(Some(ViewMode::Dual)));
        assert!(run_loop.record_mode(None));
        assert!(!run_loop.record_mode(None));
    }

    #[test]
    fn test_first_cycle_never_waits() {
        let mut r = renderer();
        let mailbox = SensorMailbox::new();
        let modes = ModeCell::default();
        let mut run_loop = RunLoop::new(TemperatureUnit::Fahrenheit);

        let wake = block_on(run_loop.cycle(
            &mut r,
            &mailbox,
            &modes,
            pending::<()>(),
            pending::<()>(),
        ));
        assert_eq!(wake, WakeReason::ModeChanged);
        assert!(row_shows(&r, 2, "LOADING..."));
    }

    #[test]
    fn test_cycles_follow_mode_and_mailbox() {
        let mut r = renderer();
        let mailbox = SensorMailbox::new();
        let modes = ModeCell::default();
        let mut run_loop = RunLoop::new(TemperatureUnit::Fahrenheit);

        block_on(run_loop.cycle(&mut r, &mailbox, &modes, ready(()), pending::<()>()));

        mailbox.publish(SensorSnapshot {
            temperature: 72,
            lux: 0,
            moisture: 700,
        });
        let wake = block_on(run_loop.cycle(&mut r, &mailbox, &modes, ready(()), pending::<()>()));
        assert_eq!(wake, WakeReason::Timer);
        assert!(row_shows(&r, 0, " 72F  DUAL"));

        modes.store(ViewMode::Soil);
        let wake = block_on(run_loop.cycle(
            &mut r,
            &mailbox,
            &modes,
            pending::<()>(),
            pending::<()>(),
        ));
        assert_eq!(wake, WakeReason::ModeChanged);
        assert!(row_shows(&r, 0, " 72F  SOIL"));
        assert!(row_shows(&r, 5, "    WET   "));

        let wake = block_on(run_loop.cycle(&mut r, &mailbox, &modes, pending::<()>(), ready(())));
        assert_eq!(wake, WakeReason::ModeChanged);
    }
}
