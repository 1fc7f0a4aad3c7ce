//! Core types and definitions for the isometric shooter simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, tuning config, collision geometry, frame input, state
//! snapshots, events, and constants. It has no dependency on any
//! windowing or rendering framework.

pub mod collision;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

pub use glam::Vec3;
