//! Scripted stand-in for the player's keyboard and mouse.
//!
//! Each frame it picks the nearest enemy, backs away when that enemy gets
//! inside `keep_away` (strafing sideways otherwise), and shoots at it as
//! soon as the cooldown allows.

use glam::Vec3;

use isoshooter_core::commands::FrameInput;
use isoshooter_core::state::{EnemyView, GameStateSnapshot};

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Distance below which the pilot retreats.
    pub keep_away: f32,
    /// Only shoot at enemies closer than this.
    pub fire_range: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            keep_away: 6.0,
            fire_range: 15.0,
        }
    }
}

impl Autopilot {
    /// Decide this frame's input from the last snapshot.
    pub fn decide(&self, snapshot: &GameStateSnapshot) -> FrameInput {
        let player = snapshot.player.position;
        let Some(target) = nearest_enemy(player, &snapshot.enemies) else {
            return FrameInput::idle();
        };

        let offset = flat(player - target.position);
        let distance = offset.length();
        let away = offset.normalize_or_zero();
        let move_intent = if distance < self.keep_away {
            away
        } else {
            // Circle the target.
            Vec3::new(-away.z, 0.0, away.x)
        };

        let input = FrameInput::moving(move_intent);
        if snapshot.player.cooldown_remaining <= 0.0 && distance < self.fire_range {
            input.with_fire_at(target.position)
        } else {
            input
        }
    }
}

fn nearest_enemy(player: Vec3, enemies: &[EnemyView]) -> Option<&EnemyView> {
    enemies.iter().min_by(|a, b| {
        let da = flat(a.position - player).length_squared();
        let db = flat(b.position - player).length_squared();
        da.total_cmp(&db)
    })
}

fn flat(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
