//! Events emitted by the simulation for UI and audio feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Player projectile spawned into `slot`.
    PlayerFired { slot: usize, direction: Vec3 },
    /// Player pulled the trigger while the cooldown was running.
    FireBlocked { remaining_secs: f32 },
    /// Enemy `enemy` spawned a projectile into `slot`.
    EnemyFired { enemy: usize, slot: usize },
    /// An enemy projectile in `slot` struck the player.
    PlayerHit { slot: usize },
    /// A player projectile struck enemy `enemy`, leaving it at `health`.
    /// On a kill this is the health before the respawn, zero or below.
    EnemyHit { enemy: usize, slot: usize, health: f32 },
    /// Enemy `enemy` was killed and placed back in the world.
    EnemyRespawned { enemy: usize, position: Vec3 },
}
