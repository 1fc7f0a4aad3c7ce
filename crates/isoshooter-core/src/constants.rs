//! Simulation constants and default tuning parameters.
//!
//! Everything here only seeds `GameConfig::default()`; the simulation reads
//! its tuning from the config it was handed.

use glam::Vec3;

/// Target frame rate (Hz). Per-tick speeds below assume this rate.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the target frame rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- World ---

/// Half-extent of the grid enemies are initially placed on.
pub const SPAWN_HALF_EXTENT: i32 = 10;

/// Half-extent of the grid a killed enemy respawns on.
pub const RESPAWN_HALF_EXTENT: i32 = 20;

/// Grid cell size (world units).
pub const CELL_SIZE: f32 = 1.0;

/// Minimum distance between a freshly placed enemy and the player.
pub const MIN_SPAWN_DISTANCE: f32 = 5.0;

/// Number of enemies in a default session.
pub const ENEMY_COUNT: usize = 10;

// --- Player ---

pub const PLAYER_START: Vec3 = Vec3::ZERO;
pub const PLAYER_SIZE: Vec3 = Vec3::new(1.0, 2.0, 1.0);

/// Movement speed (units per tick).
pub const PLAYER_SPEED: f32 = 0.2;

/// Seconds between player shots.
pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.2;

/// Firing height as a fraction of player height (upper body).
pub const PLAYER_MUZZLE_FRACTION: f32 = 0.75;

// --- Enemies ---

pub const ENEMY_SIZE: Vec3 = Vec3::new(0.8, 1.8, 0.8);
pub const ENEMY_MAX_HEALTH: f32 = 100.0;

/// Maximum velocity magnitude (units per tick).
pub const ENEMY_MAX_SPEED: f32 = 0.1;

/// Maximum steering force magnitude (units per tick per tick).
pub const ENEMY_MAX_FORCE: f32 = 0.005;

/// Neighbors closer than this push each other apart.
pub const ENEMY_SEPARATION_RADIUS: f32 = 1.5;

pub const SEEK_WEIGHT: f32 = 1.0;
pub const SEPARATION_WEIGHT: f32 = 1.5;
pub const WANDER_WEIGHT: f32 = 0.3;

/// Per-tick probability of a wander impulse.
pub const WANDER_CHANCE: f64 = 0.05;

/// Magnitude band of a wander impulse.
pub const WANDER_MIN_MAGNITUDE: f32 = 0.002;
pub const WANDER_MAX_MAGNITUDE: f32 = 0.006;

/// Band the per-cycle shoot interval is drawn from (seconds, half-open).
pub const ENEMY_SHOOT_INTERVAL_MIN: f32 = 1.5;
pub const ENEMY_SHOOT_INTERVAL_MAX: f32 = 3.0;

/// Enemies only fire at a player closer than this.
pub const ENEMY_ENGAGEMENT_RANGE: f32 = 10.0;

/// Height above an enemy's base its projectiles leave from.
pub const ENEMY_MUZZLE_HEIGHT: f32 = 1.0;

// --- Projectiles ---

pub const PROJECTILE_CAPACITY: usize = 100;
pub const PROJECTILE_RADIUS: f32 = 0.2;

/// Projectile lifetime (seconds).
pub const PROJECTILE_MAX_LIFETIME: f32 = 3.0;

/// Units per tick.
pub const ENEMY_PROJECTILE_SPEED: f32 = 0.3;
pub const PLAYER_PROJECTILE_SPEED: f32 = 0.5;

// --- Hit detection ---

/// Height above an entity's base that projectiles are tested against.
pub const HIT_CENTER_HEIGHT: f32 = 1.0;

/// Radius of the hit sphere around an entity's center mass.
pub const HIT_RADIUS: f32 = 0.5;

/// Damage a player projectile deals to an enemy.
pub const PLAYER_PROJECTILE_DAMAGE: f32 = 25.0;
