//! Game state snapshot: the read-only view handed to the renderer each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectileOwner;
use crate::events::SimEvent;
use crate::types::{Color, SimTime};

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    /// Active projectiles only.
    pub projectiles: Vec<ProjectileView>,
    pub active_projectiles: usize,
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub size: Vec3,
    pub color: Color,
    /// Seconds until the player may fire again.
    pub cooldown_remaining: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub index: usize,
    pub position: Vec3,
    pub size: Vec3,
    pub color: Color,
    pub health: f32,
    pub velocity: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub slot: usize,
    pub position: Vec3,
    pub radius: f32,
    pub color: Color,
    pub owner: ProjectileOwner,
}

/// Running tallies for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    pub enemy_shots_fired: u32,
    pub enemies_killed: u32,
    pub hits_taken: u32,
}
