//! Tasks
//!
//! `run_loop_task` and `mode_button_task` run on the core 0 executor.
//! `sampling::run` is the whole of core 1.

pub mod mode_button;
pub mod run_loop;
pub mod sampling;

pub use mode_button::mode_button_task;
pub use run_loop::run_loop_task;
