//! Spawn factories for the session's entities.
//!
//! Places enemies on the integer spawn grid, away from the player and from
//! each other, and picks respawn cells for killed enemies.

use glam::Vec3;
use rand::Rng;

use isoshooter_core::collision::overlaps;
use isoshooter_core::components::Enemy;
use isoshooter_core::config::{EnemyTuning, WorldTuning};

/// A random cell of the square grid `[-half_extent, half_extent]` on X and Z.
pub fn random_grid_position(half_extent: i32, cell_size: f32, rng: &mut impl Rng) -> Vec3 {
    let x = rng.gen_range(-half_extent..=half_extent);
    let z = rng.gen_range(-half_extent..=half_extent);
    Vec3::new(x as f32 * cell_size, 0.0, z as f32 * cell_size)
}

/// Whether a box of `size` at `position` overlaps none of the
/// `(position, size)` obstacles.
pub fn is_clear_of(position: Vec3, size: Vec3, obstacles: &[(Vec3, Vec3)]) -> bool {
    !obstacles
        .iter()
        .any(|&(other, other_size)| overlaps(position, size, other, other_size))
}

/// Rejection-sample a spawn cell at least `min_player_distance` from the
/// player whose box of `size` clears every obstacle.
///
/// There is no retry cap: a grid without any qualifying cell never
/// returns. `GameConfig::validate` rejects such grids up front.
pub fn sample_spawn_position(
    world: &WorldTuning,
    size: Vec3,
    player_position: Vec3,
    obstacles: &[(Vec3, Vec3)],
    rng: &mut impl Rng,
) -> Vec3 {
    loop {
        let candidate = random_grid_position(world.spawn_half_extent, world.cell_size, rng);
        if candidate.distance(player_position) >= world.min_player_distance
            && is_clear_of(candidate, size, obstacles)
        {
            return candidate;
        }
    }
}

/// Rejection-sample a respawn cell whose box of `size` clears every
/// obstacle. Distance to the player is not considered.
pub fn sample_respawn_position(
    world: &WorldTuning,
    size: Vec3,
    obstacles: &[(Vec3, Vec3)],
    rng: &mut impl Rng,
) -> Vec3 {
    loop {
        let candidate = random_grid_position(world.respawn_half_extent, world.cell_size, rng);
        if is_clear_of(candidate, size, obstacles) {
            return candidate;
        }
    }
}

/// A fresh shoot interval from the tuning's half-open band.
pub fn draw_shoot_interval(tuning: &EnemyTuning, rng: &mut impl Rng) -> f32 {
    if tuning.shoot_interval_min < tuning.shoot_interval_max {
        rng.gen_range(tuning.shoot_interval_min..tuning.shoot_interval_max)
    } else {
        tuning.shoot_interval_min
    }
}

/// Build an enemy at rest at `position` with full health.
pub fn spawn_enemy(position: Vec3, tuning: &EnemyTuning, rng: &mut impl Rng) -> Enemy {
    Enemy {
        position,
        size: tuning.size,
        velocity: Vec3::ZERO,
        steering: Vec3::ZERO,
        health: tuning.max_health,
        max_speed: tuning.max_speed,
        max_force: tuning.max_force,
        separation_radius: tuning.separation_radius,
        color: tuning.color,
        shoot_timer: 0.0,
        shoot_interval: draw_shoot_interval(tuning, rng),
    }
}
