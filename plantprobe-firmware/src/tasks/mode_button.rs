//! Mode button task
//!
//! Waits for falling edges on the mode button and feeds them to the
//! debounced selector. Accepted changes are stored and signalled to the
//! run loop.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use plantprobe_core::mode::{ModeSelector, ViewMode};

use crate::channels::{MODE_CHANGED, VIEW_MODE};

#[embassy_executor::task]
pub async fn mode_button_task(mut button: Input<'static>, debounce_ms: u32) {
    info!("Mode button task started");

    let mut selector = ModeSelector::new(VIEW_MODE.load().unwrap_or(ViewMode::Dual), debounce_ms);

    loop {
        button.wait_for_falling_edge().await;
        let now_ms = Instant::now().as_millis();

        // Selector and cell change together
        let accepted = critical_section::with(|_| {
            let mode = selector.on_falling_edge(now_ms)?;
            VIEW_MODE.store(mode);
            Some(mode)
        });

        if let Some(mode) = accepted {
            info!("View mode: {}", mode);
            MODE_CHANGED.signal(mode);
        }
    }
}
