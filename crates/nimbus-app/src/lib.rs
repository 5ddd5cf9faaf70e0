//! Headless host for the nimbus sky renderer.
//!
//! Loads configuration, sets up logging, then steps the simulation through a
//! scripted input sequence and writes one PNG per frame.

pub mod platform;
mod run;

pub use run::{AppError, FrameScript, atmosphere_params, initial_state, run, run_cli};
