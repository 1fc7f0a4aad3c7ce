//! Per-frame input handed to the simulation by the input layer.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Everything the player asked for this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Horizontal movement direction, length 0 or 1.
    pub move_intent: Vec3,
    /// World-space aim point on the ground plane, if the trigger was pulled.
    pub fire_at: Option<Vec3>,
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(intent: Vec3) -> Self {
        Self {
            move_intent: intent,
            fire_at: None,
        }
    }

    pub fn with_fire_at(mut self, aim: Vec3) -> Self {
        self.fire_at = Some(aim);
        self
    }
}

/// Map held direction keys to a normalized ground-plane intent for an
/// isometric camera looking down the (-1, -1, -1) diagonal.
///
/// Opposing keys cancel; the result is zero when nothing remains.
pub fn isometric_intent(up: bool, down: bool, left: bool, right: bool) -> Vec3 {
    let mut direction = Vec3::ZERO;
    if up {
        direction += Vec3::new(-1.0, 0.0, -1.0);
    }
    if down {
        direction += Vec3::new(1.0, 0.0, 1.0);
    }
    if left {
        direction += Vec3::new(-1.0, 0.0, 1.0);
    }
    if right {
        direction += Vec3::new(1.0, 0.0, -1.0);
    }
    direction.normalize_or_zero()
}
