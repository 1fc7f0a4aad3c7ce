//! Headless shooter runner.
//!
//! Wires the simulation to a paced game-loop thread, a scripted autopilot
//! standing in for keyboard and mouse input, and the logger.

pub mod autopilot;
pub mod game_loop;
pub mod logging;
pub mod state;

pub use isoshooter_core as core;
pub use logging::init as init_logging;
