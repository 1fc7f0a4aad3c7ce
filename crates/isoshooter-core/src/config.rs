//! Tuning configuration for a simulation session.
//!
//! Every field has a default drawn from `constants`, and every struct is
//! `#[serde(default)]`, so a JSON file only needs to name the values it
//! overrides.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collision::overlaps;
use crate::constants::*;
use crate::types::Color;

/// Failure to load or validate a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// All tuning for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldTuning,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub projectile: ProjectileTuning,
}

/// World extents and placement rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub enemy_count: usize,
    /// Initial placement samples integer cells in `[-n, n]` on X and Z.
    pub spawn_half_extent: i32,
    /// Respawn samples integer cells in `[-n, n]` on X and Z.
    pub respawn_half_extent: i32,
    pub cell_size: f32,
    /// Initial placement rejects cells closer than this to the player.
    pub min_player_distance: f32,
    /// Hit spheres sit this far above an entity's base.
    pub hit_center_height: f32,
    pub hit_radius: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            enemy_count: ENEMY_COUNT,
            spawn_half_extent: SPAWN_HALF_EXTENT,
            respawn_half_extent: RESPAWN_HALF_EXTENT,
            cell_size: CELL_SIZE,
            min_player_distance: MIN_SPAWN_DISTANCE,
            hit_center_height: HIT_CENTER_HEIGHT,
            hit_radius: HIT_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub start: Vec3,
    pub size: Vec3,
    pub speed: f32,
    pub shoot_cooldown: f32,
    pub muzzle_fraction: f32,
    pub color: Color,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            start: PLAYER_START,
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            shoot_cooldown: PLAYER_SHOOT_COOLDOWN,
            muzzle_fraction: PLAYER_MUZZLE_FRACTION,
            color: Color::RED,
        }
    }
}

/// Enemy body, steering, and weapon tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub size: Vec3,
    pub max_health: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub separation_radius: f32,
    pub seek_weight: f32,
    pub separation_weight: f32,
    pub wander_weight: f32,
    /// Per-tick probability of a wander impulse.
    pub wander_chance: f64,
    pub wander_min_magnitude: f32,
    pub wander_max_magnitude: f32,
    pub shoot_interval_min: f32,
    pub shoot_interval_max: f32,
    pub engagement_range: f32,
    pub muzzle_height: f32,
    pub color: Color,
    pub hit_color: Color,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            size: ENEMY_SIZE,
            max_health: ENEMY_MAX_HEALTH,
            max_speed: ENEMY_MAX_SPEED,
            max_force: ENEMY_MAX_FORCE,
            separation_radius: ENEMY_SEPARATION_RADIUS,
            seek_weight: SEEK_WEIGHT,
            separation_weight: SEPARATION_WEIGHT,
            wander_weight: WANDER_WEIGHT,
            wander_chance: WANDER_CHANCE,
            wander_min_magnitude: WANDER_MIN_MAGNITUDE,
            wander_max_magnitude: WANDER_MAX_MAGNITUDE,
            shoot_interval_min: ENEMY_SHOOT_INTERVAL_MIN,
            shoot_interval_max: ENEMY_SHOOT_INTERVAL_MAX,
            engagement_range: ENEMY_ENGAGEMENT_RANGE,
            muzzle_height: ENEMY_MUZZLE_HEIGHT,
            color: Color::BLUE,
            hit_color: Color::PURPLE,
        }
    }
}

/// Projectile pool size and per-owner ballistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub capacity: usize,
    pub radius: f32,
    pub max_lifetime: f32,
    pub enemy_speed: f32,
    pub player_speed: f32,
    pub enemy_color: Color,
    pub player_color: Color,
    /// Damage a player projectile deals to an enemy.
    pub player_damage: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            capacity: PROJECTILE_CAPACITY,
            radius: PROJECTILE_RADIUS,
            max_lifetime: PROJECTILE_MAX_LIFETIME,
            enemy_speed: ENEMY_PROJECTILE_SPEED,
            player_speed: PLAYER_PROJECTILE_SPEED,
            enemy_color: Color::ORANGE,
            player_color: Color::YELLOW,
            player_damage: PLAYER_PROJECTILE_DAMAGE,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject tunings the simulation cannot run with.
    ///
    /// Enemy placement and respawn rejection-sample their grids until they
    /// find a cell clear of the player and every other enemy, so a grid
    /// too small for `enemy_count` would never terminate. That case is
    /// caught here rather than in the sampler.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.world;
        let p = &self.player;
        let e = &self.enemy;
        let pr = &self.projectile;

        non_negative("world.cell_size", w.cell_size)?;
        non_negative("world.min_player_distance", w.min_player_distance)?;
        non_negative("world.hit_radius", w.hit_radius)?;
        finite("world.hit_center_height", w.hit_center_height)?;
        if w.spawn_half_extent < 0 || w.respawn_half_extent < 0 {
            return Err(invalid("world half-extents must be >= 0"));
        }

        finite_vec("player.start", p.start)?;
        non_negative_vec("player.size", p.size)?;
        non_negative("player.speed", p.speed)?;
        non_negative("player.shoot_cooldown", p.shoot_cooldown)?;
        non_negative("player.muzzle_fraction", p.muzzle_fraction)?;

        non_negative_vec("enemy.size", e.size)?;
        if !(e.max_health.is_finite() && e.max_health > 0.0) {
            return Err(invalid("enemy.max_health must be > 0"));
        }
        non_negative("enemy.max_speed", e.max_speed)?;
        non_negative("enemy.max_force", e.max_force)?;
        non_negative("enemy.separation_radius", e.separation_radius)?;
        finite("enemy.seek_weight", e.seek_weight)?;
        finite("enemy.separation_weight", e.separation_weight)?;
        finite("enemy.wander_weight", e.wander_weight)?;
        if !(0.0..=1.0).contains(&e.wander_chance) {
            return Err(invalid("enemy.wander_chance must be within [0, 1]"));
        }
        band(
            "enemy.wander magnitude",
            e.wander_min_magnitude,
            e.wander_max_magnitude,
        )?;
        band(
            "enemy.shoot_interval",
            e.shoot_interval_min,
            e.shoot_interval_max,
        )?;
        non_negative("enemy.engagement_range", e.engagement_range)?;
        finite("enemy.muzzle_height", e.muzzle_height)?;

        if pr.capacity == 0 {
            return Err(invalid("projectile.capacity must be > 0"));
        }
        non_negative("projectile.radius", pr.radius)?;
        non_negative("projectile.max_lifetime", pr.max_lifetime)?;
        non_negative("projectile.enemy_speed", pr.enemy_speed)?;
        non_negative("projectile.player_speed", pr.player_speed)?;
        non_negative("projectile.player_damage", pr.player_damage)?;

        if w.enemy_count > 0 {
            self.check_enemy_placement()?;
        }
        Ok(())
    }

    /// Check that rejection sampling can always seat every enemy.
    ///
    /// Cells are counted on a sub-grid coarse enough that enemies on
    /// distinct sub-grid cells never overlap. An enemy standing anywhere
    /// covers at most one such cell per axis when the stride is 1, and at
    /// most two per axis otherwise.
    fn check_enemy_placement(&self) -> Result<(), ConfigError> {
        let w = &self.world;
        let e = &self.enemy;
        let p = &self.player;
        if w.cell_size <= 0.0 {
            return Err(invalid("world.cell_size must be > 0 when enemies are placed"));
        }

        let footprint = e.size.x.max(e.size.z);
        let stride = if footprint <= w.cell_size {
            1
        } else {
            (footprint / w.cell_size).ceil() as i32
        };
        let covered = if stride == 1 { 1 } else { 4 };
        let others = w.enemy_count - 1;

        let spawn_cells = sub_grid(w.spawn_half_extent, stride, w.cell_size)
            .filter(|cell| {
                cell.distance(p.start) >= w.min_player_distance
                    && !overlaps(*cell, e.size, p.start, p.size)
            })
            .count();
        if spawn_cells < covered * others + 1 {
            return Err(invalid(
                "spawn grid cannot seat world.enemy_count enemies clear of the player \
                 and each other",
            ));
        }

        // The player may stand anywhere when an enemy respawns.
        let spacing = stride as f32 * w.cell_size;
        let player_cover = ((p.size.x + e.size.x) / spacing).ceil() as usize
            * ((p.size.z + e.size.z) / spacing).ceil() as usize;
        let respawn_cells = sub_grid(w.respawn_half_extent, stride, w.cell_size).count();
        if respawn_cells < covered * others + player_cover + 1 {
            return Err(invalid(
                "respawn grid cannot always fit an enemy clear of the player and the others",
            ));
        }
        Ok(())
    }
}

/// Cells of the `[-n, n]` grid whose indices are multiples of `stride`.
fn sub_grid(n: i32, stride: i32, cell_size: f32) -> impl Iterator<Item = Vec3> {
    let axis = move || (-n..=n).filter(move |g| g % stride == 0);
    axis().flat_map(move |gx| {
        axis().map(move |gz| Vec3::new(gx as f32 * cell_size, 0.0, gz as f32 * cell_size))
    })
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

fn finite(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be finite")))
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be finite and >= 0")))
    }
}

fn finite_vec(name: &str, value: Vec3) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be finite")))
    }
}

fn non_negative_vec(name: &str, value: Vec3) -> Result<(), ConfigError> {
    if value.is_finite() && value.min_element() >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} components must be finite and >= 0")))
    }
}

/// A half-open `[min, max)` random band needs `min < max`.
fn band(name: &str, min: f32, max: f32) -> Result<(), ConfigError> {
    non_negative(name, min)?;
    non_negative(name, max)?;
    if min < max {
        Ok(())
    } else {
        Err(invalid(format!("{name} band must have min < max")))
    }
}
