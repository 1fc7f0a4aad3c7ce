//! Enemy population: steering, collision-filtered movement, shooting, and
//! damage.
//!
//! Enemies are updated in index order and in place, so enemy `i` steers
//! and collides against the positions enemies `0..i` already committed
//! this tick.

use glam::Vec3;
use log::debug;
use rand::Rng;

use isoshooter_ai::steering::{steering_force, SteeringWeights, WanderParams};
use isoshooter_core::collision::{corrected_position, overlaps};
use isoshooter_core::components::{Character, Enemy};
use isoshooter_core::config::{EnemyTuning, WorldTuning};
use isoshooter_core::enums::ProjectileOwner;
use isoshooter_core::events::SimEvent;

use crate::systems::projectiles::ProjectilePool;
use crate::world_setup::{
    draw_shoot_interval, sample_respawn_position, sample_spawn_position, spawn_enemy,
};

/// What a single damage application did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Still alive with `health` left.
    Damaged { health: f32 },
    /// Health ran out at `health`; the enemy was reset and moved to
    /// `position`.
    Respawned { health: f32, position: Vec3 },
}

/// Owns every enemy for the session.
#[derive(Debug, Clone)]
pub struct EnemyPopulation {
    enemies: Vec<Enemy>,
    tuning: EnemyTuning,
    world: WorldTuning,
}

impl EnemyPopulation {
    /// Place `count` enemies on the spawn grid, away from the player and
    /// never overlapping the player or an enemy placed before them.
    pub fn init(
        count: usize,
        player: &Character,
        tuning: &EnemyTuning,
        world: &WorldTuning,
        rng: &mut impl Rng,
    ) -> Self {
        let mut enemies: Vec<Enemy> = Vec::with_capacity(count);
        let mut obstacles = vec![(player.position, player.size)];
        for _ in 0..count {
            let position =
                sample_spawn_position(world, tuning.size, player.position, &obstacles, rng);
            obstacles.push((position, tuning.size));
            enemies.push(spawn_enemy(position, tuning, rng));
        }
        Self::from_enemies(enemies, tuning, world)
    }

    /// Wrap an existing set of enemies, e.g. a hand-built scene.
    pub fn from_enemies(enemies: Vec<Enemy>, tuning: &EnemyTuning, world: &WorldTuning) -> Self {
        Self {
            enemies,
            tuning: tuning.clone(),
            world: world.clone(),
        }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn get(&self, index: usize) -> Option<&Enemy> {
        self.enemies.get(index)
    }

    /// Mutable access for scripted scenarios. Gameplay damage goes through
    /// [`EnemyPopulation::apply_damage`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Enemy> {
        self.enemies.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Steering force enemy `index` would feel right now.
    pub fn steering_force(&self, index: usize, player_position: Vec3, rng: &mut impl Rng) -> Vec3 {
        steering_force(
            &self.enemies,
            index,
            player_position,
            &SteeringWeights::from_tuning(&self.tuning),
            &WanderParams::from_tuning(&self.tuning),
            rng,
        )
    }

    /// Advance every enemy one tick.
    ///
    /// Per enemy: steer, integrate velocity, clamp to max speed, resolve the
    /// candidate position against the player and then each other enemy,
    /// commit, and fire if the shot cycle is up and the player is in range.
    /// Any collision zeroes the enemy's velocity.
    pub fn advance(
        &mut self,
        player: &Character,
        pool: &mut ProjectilePool,
        dt: f32,
        rng: &mut impl Rng,
        events: &mut Vec<SimEvent>,
    ) {
        let weights = SteeringWeights::from_tuning(&self.tuning);
        let wander = WanderParams::from_tuning(&self.tuning);

        for i in 0..self.enemies.len() {
            let force = steering_force(&self.enemies, i, player.position, &weights, &wander, rng);

            let enemy = &mut self.enemies[i];
            enemy.steering = force;
            enemy.velocity = (enemy.velocity + force).clamp_length_max(enemy.max_speed);
            let current = enemy.position;
            let size = enemy.size;
            let velocity = enemy.velocity;

            let mut candidate = current + velocity;
            let mut blocked = false;

            if overlaps(candidate, size, player.position, player.size) {
                candidate =
                    corrected_position(current, candidate, size, player.position, player.size);
                blocked = true;
            }

            for (j, other) in self.enemies.iter().enumerate() {
                if j != i && overlaps(candidate, size, other.position, other.size) {
                    candidate =
                        corrected_position(current, candidate, size, other.position, other.size);
                    blocked = true;
                }
            }

            let enemy = &mut self.enemies[i];
            if blocked {
                enemy.velocity = Vec3::ZERO;
            }
            enemy.position = candidate;

            enemy.shoot_timer += dt;
            if enemy.shoot_timer >= enemy.shoot_interval
                && enemy.position.distance(player.position) < self.tuning.engagement_range
            {
                let origin = enemy.position + Vec3::Y * self.tuning.muzzle_height;
                let target = player.position + Vec3::Y * self.world.hit_center_height;
                if let Some(slot) = pool.spawn(origin, target, ProjectileOwner::Enemy) {
                    debug!("Enemy {i} fired slot {slot}");
                    events.push(SimEvent::EnemyFired { enemy: i, slot });
                }
                enemy.shoot_timer = 0.0;
                enemy.shoot_interval = draw_shoot_interval(&self.tuning, rng);
            }
        }
    }

    /// Damage enemy `index`. `None` if there is no such enemy.
    ///
    /// At or below zero health the enemy respawns on the respawn grid, on a
    /// cell clear of the player and every other enemy, with full health and
    /// its default color. This is the only path that resets an enemy after
    /// init, and it fires at most once per call.
    pub fn apply_damage(
        &mut self,
        index: usize,
        amount: f32,
        player: &Character,
        rng: &mut impl Rng,
    ) -> Option<DamageOutcome> {
        let health = take_damage(self.enemies.get_mut(index)?, amount, &self.tuning);
        if health > 0.0 {
            return Some(DamageOutcome::Damaged { health });
        }

        let mut obstacles: Vec<(Vec3, Vec3)> = self
            .enemies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, other)| (other.position, other.size))
            .collect();
        obstacles.push((player.position, player.size));
        let position = sample_respawn_position(&self.world, self.tuning.size, &obstacles, rng);

        let enemy = &mut self.enemies[index];
        enemy.position = position;
        enemy.health = self.tuning.max_health;
        enemy.color = self.tuning.color;
        debug!("Enemy {index} killed, respawned at {position}");
        Some(DamageOutcome::Respawned { health, position })
    }
}

/// Subtract `amount` from the enemy's health and mark it as hit. Returns
/// the health left, which may be zero or negative.
///
/// Negative amounts are treated as zero, so damage never heals.
pub fn take_damage(enemy: &mut Enemy, amount: f32, tuning: &EnemyTuning) -> f32 {
    enemy.health -= amount.max(0.0);
    enemy.color = tuning.hit_color;
    enemy.health
}
