//! Projectile hit passes, run after every projectile has moved.

use glam::Vec3;
use rand::Rng;

use isoshooter_core::components::Character;
use isoshooter_core::config::WorldTuning;
use isoshooter_core::enums::ProjectileOwner;
use isoshooter_core::events::SimEvent;

use crate::systems::enemies::{DamageOutcome, EnemyPopulation};
use crate::systems::projectiles::{check_hit, ProjectilePool};

/// Test enemy projectiles against the player's center mass. A projectile
/// that hits is spent. Returns the number of hits.
pub fn enemy_projectiles_vs_player(
    pool: &mut ProjectilePool,
    player: &Character,
    world: &WorldTuning,
    events: &mut Vec<SimEvent>,
) -> u32 {
    let target = player.position + Vec3::Y * world.hit_center_height;
    let mut hits = 0;

    for slot in 0..pool.capacity() {
        let Some(projectile) = pool.get(slot) else {
            continue;
        };
        if projectile.owner != ProjectileOwner::Enemy {
            continue;
        }
        if check_hit(projectile, target, world.hit_radius) {
            pool.deactivate(slot);
            events.push(SimEvent::PlayerHit { slot });
            hits += 1;
        }
    }
    hits
}

/// Test player projectiles against each enemy in population order. The
/// first enemy hit absorbs the projectile and takes `damage`; a killed
/// enemy respawns clear of `player`. Returns the number of hits.
pub fn player_projectiles_vs_enemies(
    pool: &mut ProjectilePool,
    enemies: &mut EnemyPopulation,
    player: &Character,
    damage: f32,
    world: &WorldTuning,
    rng: &mut impl Rng,
    events: &mut Vec<SimEvent>,
) -> u32 {
    let mut hits = 0;

    for slot in 0..pool.capacity() {
        let Some(projectile) = pool.get(slot) else {
            continue;
        };
        if projectile.owner != ProjectileOwner::Player {
            continue;
        }

        let struck = enemies.enemies().iter().position(|enemy| {
            let target = enemy.position + Vec3::Y * world.hit_center_height;
            check_hit(projectile, target, world.hit_radius)
        });
        let Some(index) = struck else {
            continue;
        };

        pool.deactivate(slot);
        hits += 1;
        match enemies.apply_damage(index, damage, player, rng) {
            Some(DamageOutcome::Damaged { health }) => {
                events.push(SimEvent::EnemyHit {
                    enemy: index,
                    slot,
                    health,
                });
            }
            Some(DamageOutcome::Respawned { health, position }) => {
                events.push(SimEvent::EnemyHit {
                    enemy: index,
                    slot,
                    health,
                });
                events.push(SimEvent::EnemyRespawned {
                    enemy: index,
                    position,
                });
            }
            None => {}
        }
    }
    hits
}
