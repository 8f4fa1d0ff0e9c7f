//! Run loop task
//!
//! Renders the current view, then sleeps until the refresh interval
//! elapses or the mode changes.

use defmt::*;
use embassy_time::{Duration, Timer};

use plantprobe_core::scheduler::RunLoop;

use crate::board::Lcd;
use crate::channels::{MODE_CHANGED, SENSOR_MAILBOX, VIEW_MODE};
use crate::config::DEVICE_CONFIG;

#[embassy_executor::task]
pub async fn run_loop_task(mut lcd: Lcd) {
    info!("Run loop started");

    let refresh = Duration::from_millis(DEVICE_CONFIG.timing.refresh_interval_ms as u64);
    let mut run_loop = RunLoop::new(DEVICE_CONFIG.sensors.temperature_unit);

    loop {
        let wake = run_loop
            .cycle(
                &mut lcd,
                &SENSOR_MAILBOX,
                &VIEW_MODE,
                Timer::after(refresh),
                MODE_CHANGED.wait(),
            )
            .await;
        trace!("Run loop woke: {}", wake);
    }
}
