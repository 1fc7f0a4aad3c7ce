//! Simulation engine for the isometric shooter.
//!
//! Owns the player, the enemy population, and the projectile pool, runs
//! every system in a fixed order once per frame, and produces
//! GameStateSnapshots for the renderer.

pub mod engine;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use isoshooter_core as core;
