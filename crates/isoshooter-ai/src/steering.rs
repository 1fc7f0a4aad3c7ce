//! Steering behaviors for autonomous enemies.
//!
//! Pure functions over plain data. Every behavior returns a force in the
//! desired-velocity form (`desired - velocity`) or zero, and nothing here
//! divides by a length without checking it first.

use glam::Vec3;
use rand::Rng;

use isoshooter_core::components::Enemy;
use isoshooter_core::config::EnemyTuning;

/// Weights applied to each behavior before the forces are summed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringWeights {
    pub seek: f32,
    pub separation: f32,
    pub wander: f32,
}

impl SteeringWeights {
    pub fn from_tuning(tuning: &EnemyTuning) -> Self {
        Self {
            seek: tuning.seek_weight,
            separation: tuning.separation_weight,
            wander: tuning.wander_weight,
        }
    }
}

/// Random impulse parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderParams {
    /// Per-tick probability of an impulse.
    pub chance: f64,
    pub min_magnitude: f32,
    pub max_magnitude: f32,
}

impl WanderParams {
    pub fn from_tuning(tuning: &EnemyTuning) -> Self {
        Self {
            chance: tuning.wander_chance,
            min_magnitude: tuning.wander_min_magnitude,
            max_magnitude: tuning.wander_max_magnitude,
        }
    }
}

/// Steer toward `target` at full speed.
///
/// Zero when already at the target and at rest.
pub fn seek(position: Vec3, velocity: Vec3, target: Vec3, max_speed: f32) -> Vec3 {
    let offset = target - position;
    if offset == Vec3::ZERO {
        return Vec3::ZERO;
    }
    offset.normalize_or_zero() * max_speed - velocity
}

/// Steer away from neighbors inside `radius`.
///
/// Each neighbor pushes along the line between the two entities with
/// strength `1 / distance`. The pushes are averaged and the average's
/// direction becomes a full-speed desired velocity. Zero when no neighbor
/// is in range; coincident neighbors have no direction and are skipped.
pub fn separation(
    position: Vec3,
    velocity: Vec3,
    neighbors: impl IntoIterator<Item = Vec3>,
    radius: f32,
    max_speed: f32,
) -> Vec3 {
    let mut push = Vec3::ZERO;
    let mut count = 0u32;

    for neighbor in neighbors {
        let away = position - neighbor;
        let distance = away.length();
        if distance > 0.0 && distance < radius {
            push += away / distance / distance;
            count += 1;
        }
    }

    if count == 0 {
        return Vec3::ZERO;
    }

    let average = push / count as f32;
    let desired = average.normalize_or_zero() * max_speed;
    if desired == Vec3::ZERO {
        return Vec3::ZERO;
    }
    desired - velocity
}

/// Occasionally nudge in a random horizontal direction.
pub fn wander(rng: &mut impl Rng, params: &WanderParams) -> Vec3 {
    if params.chance <= 0.0 || !rng.gen_bool(params.chance.min(1.0)) {
        return Vec3::ZERO;
    }
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let magnitude = if params.min_magnitude < params.max_magnitude {
        rng.gen_range(params.min_magnitude..params.max_magnitude)
    } else {
        params.min_magnitude
    };
    Vec3::new(angle.cos(), 0.0, angle.sin()) * magnitude
}

/// Scale `force` down to `max` if it is longer.
pub fn truncate(force: Vec3, max: f32) -> Vec3 {
    if force.length() > max {
        force.normalize_or_zero() * max
    } else {
        force
    }
}

/// Weighted sum of the three behaviors, clamped to `max_force`.
pub fn combine(
    seek_force: Vec3,
    separation_force: Vec3,
    wander_force: Vec3,
    weights: &SteeringWeights,
    max_force: f32,
) -> Vec3 {
    let sum = seek_force * weights.seek
        + separation_force * weights.separation
        + wander_force * weights.wander;
    truncate(sum, max_force)
}

/// Full steering force for `enemies[index]` chasing `player_position`.
///
/// Neighbors are every other enemy in the slice at its current position.
/// Returns zero for an out-of-range index.
pub fn steering_force(
    enemies: &[Enemy],
    index: usize,
    player_position: Vec3,
    weights: &SteeringWeights,
    wander_params: &WanderParams,
    rng: &mut impl Rng,
) -> Vec3 {
    let Some(enemy) = enemies.get(index) else {
        return Vec3::ZERO;
    };

    let seek_force = seek(
        enemy.position,
        enemy.velocity,
        player_position,
        enemy.max_speed,
    );

    let neighbors = enemies
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, other)| other.position);
    let separation_force = separation(
        enemy.position,
        enemy.velocity,
        neighbors,
        enemy.separation_radius,
        enemy.max_speed,
    );

    let wander_force = wander(rng, wander_params);

    combine(
        seek_force,
        separation_force,
        wander_force,
        weights,
        enemy.max_force,
    )
}
