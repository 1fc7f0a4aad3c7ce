//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Who fired a projectile. Decides speed, color, and which hit pass
/// tests it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileOwner {
    #[default]
    Enemy,
    Player,
}
