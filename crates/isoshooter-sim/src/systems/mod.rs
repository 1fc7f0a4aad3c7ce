//! Systems that advance the simulation each tick.
//!
//! Systems are functions over the state the engine owns. They do not keep
//! state of their own beyond the containers they manage.

pub mod enemies;
pub mod hits;
pub mod player;
pub mod projectiles;
pub mod snapshot;
