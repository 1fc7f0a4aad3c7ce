//! Enemy AI for the isometric shooter.
//!
//! Implements the steering behaviors (seek, separation, wander) that drive
//! every enemy toward the player without stacking on each other.

pub mod steering;

pub use isoshooter_core as core;
