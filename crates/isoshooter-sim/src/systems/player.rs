//! Player controller: cooldown, collision-aware movement, and fire control.

use glam::Vec3;
use log::{debug, trace};

use isoshooter_core::collision::{corrected_position, overlaps};
use isoshooter_core::components::{Character, Enemy};
use isoshooter_core::config::PlayerTuning;
use isoshooter_core::enums::ProjectileOwner;

use crate::systems::projectiles::ProjectilePool;

/// Result of pulling the trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireOutcome {
    /// A projectile left from `slot`; the cooldown restarted.
    Fired { slot: usize },
    /// The cooldown is still running. Nothing is queued.
    CoolingDown { remaining_secs: f32 },
    /// No free slot, or no horizontal direction to the aim point.
    Rejected,
}

impl FireOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, FireOutcome::Fired { .. })
    }
}

/// Create the player at its start position, ready to fire.
pub fn init_character(tuning: &PlayerTuning) -> Character {
    Character {
        position: tuning.start,
        size: tuning.size,
        speed: tuning.speed,
        color: tuning.color,
        shoot_cooldown: tuning.shoot_cooldown,
        shoot_timer: 0.0,
        muzzle_fraction: tuning.muzzle_fraction,
    }
}

/// Count the shot cooldown down by `dt`, stopping at zero.
pub fn tick(character: &mut Character, dt: f32) {
    if character.shoot_timer > 0.0 {
        character.shoot_timer = (character.shoot_timer - dt.max(0.0)).max(0.0);
    }
}

/// Where the player would end up after one step along `intent`.
///
/// Obstacles are resolved one at a time in slice order: each one the
/// desired position overlaps replaces it with the axis-separated
/// correction, so later obstacles see the already-corrected position. The
/// caller assigns the result.
pub fn apply_movement_intent(character: &Character, intent: Vec3, obstacles: &[Enemy]) -> Vec3 {
    let step = Vec3::new(intent.x, 0.0, intent.z);
    if step == Vec3::ZERO {
        return character.position;
    }

    let mut desired = character.position + step * character.speed;
    for obstacle in obstacles {
        if overlaps(desired, character.size, obstacle.position, obstacle.size) {
            desired = corrected_position(
                character.position,
                desired,
                character.size,
                obstacle.position,
                obstacle.size,
            );
        }
    }
    desired
}

/// Point projectiles leave the player from.
pub fn muzzle_position(character: &Character) -> Vec3 {
    character.position + Vec3::Y * (character.size.y * character.muzzle_fraction)
}

/// Fire toward `aim` if the cooldown has elapsed.
///
/// The shot travels on the horizontal plane at muzzle height whatever the
/// aim point's height. The cooldown restarts only when a projectile was
/// actually spawned.
pub fn fire_at(character: &mut Character, pool: &mut ProjectilePool, aim: Vec3) -> FireOutcome {
    if character.shoot_timer > 0.0 {
        trace!(
            "Player fire blocked, cooldown {:.2}s remaining",
            character.shoot_timer
        );
        return FireOutcome::CoolingDown {
            remaining_secs: character.shoot_timer,
        };
    }

    let origin = muzzle_position(character);
    let level_aim = Vec3::new(aim.x, origin.y, aim.z);

    match pool.spawn(origin, level_aim, ProjectileOwner::Player) {
        Some(slot) => {
            character.shoot_timer = character.shoot_cooldown;
            debug!("Player fired slot {slot} from {origin} toward {level_aim}");
            FireOutcome::Fired { slot }
        }
        None => FireOutcome::Rejected,
    }
}
