//! Entity state for the player, enemies, and projectile slots.
//!
//! Components are plain data structs. Game logic lives in the sim crate's
//! systems, not here.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectileOwner;
use crate::types::Color;

/// The player-controlled character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub position: Vec3,
    pub size: Vec3,
    /// Movement speed (units per tick).
    pub speed: f32,
    pub color: Color,
    /// Seconds between shots.
    pub shoot_cooldown: f32,
    /// Seconds until the next shot is allowed. Kept in `[0, shoot_cooldown]`.
    pub shoot_timer: f32,
    /// Firing height as a fraction of `size.y`.
    pub muzzle_fraction: f32,
}

/// A hostile autonomous entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Vec3,
    pub size: Vec3,
    /// Units per tick. Magnitude never exceeds `max_speed` after a tick.
    pub velocity: Vec3,
    /// Steering force applied on the most recent tick.
    pub steering: Vec3,
    pub health: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub separation_radius: f32,
    pub color: Color,
    /// Seconds since the last shot cycle ended.
    pub shoot_timer: f32,
    /// Seconds this shot cycle lasts; redrawn after every cycle.
    pub shoot_interval: f32,
}

/// One slot of the projectile pool.
///
/// Fields other than `active` are stale while the slot is inactive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec3,
    /// Unit length at spawn.
    pub direction: Vec3,
    /// Units per tick.
    pub speed: f32,
    pub radius: f32,
    pub color: Color,
    pub active: bool,
    /// Seconds since spawn.
    pub lifetime: f32,
    pub max_lifetime: f32,
    pub owner: ProjectileOwner,
}
