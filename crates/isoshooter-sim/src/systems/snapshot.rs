//! Snapshot system: copies render-relevant state into a GameStateSnapshot.
//!
//! Read-only: it never modifies the simulation.

use isoshooter_core::components::Character;
use isoshooter_core::events::SimEvent;
use isoshooter_core::state::*;
use isoshooter_core::types::SimTime;

use crate::score::ScoreState;
use crate::systems::enemies::EnemyPopulation;
use crate::systems::projectiles::ProjectilePool;

/// Build a complete GameStateSnapshot from the current simulation state.
pub fn build_snapshot(
    time: &SimTime,
    player: &Character,
    enemies: &EnemyPopulation,
    pool: &ProjectilePool,
    events: Vec<SimEvent>,
    score: &ScoreState,
) -> GameStateSnapshot {
    let projectiles: Vec<ProjectileView> = pool
        .iter_active()
        .map(|(slot, p)| ProjectileView {
            slot,
            position: p.position,
            radius: p.radius,
            color: p.color,
            owner: p.owner,
        })
        .collect();

    GameStateSnapshot {
        time: *time,
        player: PlayerView {
            position: player.position,
            size: player.size,
            color: player.color,
            cooldown_remaining: player.shoot_timer,
        },
        enemies: enemies
            .enemies()
            .iter()
            .enumerate()
            .map(|(index, e)| EnemyView {
                index,
                position: e.position,
                size: e.size,
                color: e.color,
                health: e.health,
                velocity: e.velocity,
            })
            .collect(),
        active_projectiles: projectiles.len(),
        projectiles,
        events,
        score: score.view(),
    }
}
