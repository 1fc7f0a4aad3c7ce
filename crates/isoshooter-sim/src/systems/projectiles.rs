//! Fixed-capacity projectile pool.
//!
//! Slots are allocated once and recycled by flipping `active`. Spawning
//! always takes the lowest-indexed inactive slot, so slot reuse order is
//! deterministic.
//!
//! Displacement is per tick (`position += direction * speed`) while
//! lifetime accumulates real seconds. A projectile therefore travels
//! farther before expiring at higher frame rates. This matches the frame
//! coupled motion model used for every other entity.

use glam::Vec3;
use log::trace;

use isoshooter_core::components::Projectile;
use isoshooter_core::config::ProjectileTuning;
use isoshooter_core::enums::ProjectileOwner;

/// Owns every projectile slot for the session.
#[derive(Debug, Clone)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
    tuning: ProjectileTuning,
}

impl ProjectilePool {
    /// Allocate `tuning.capacity` inactive slots.
    pub fn new(tuning: &ProjectileTuning) -> Self {
        let idle = Projectile {
            position: Vec3::ZERO,
            direction: Vec3::ZERO,
            speed: tuning.enemy_speed,
            radius: tuning.radius,
            color: tuning.enemy_color,
            active: false,
            lifetime: 0.0,
            max_lifetime: tuning.max_lifetime,
            owner: ProjectileOwner::Enemy,
        };
        Self {
            slots: vec![idle; tuning.capacity],
            tuning: tuning.clone(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Projectile] {
        &self.slots
    }

    pub fn get(&self, slot: usize) -> Option<&Projectile> {
        self.slots.get(slot)
    }

    /// Mutable slot access for scripted scenarios.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Projectile> {
        self.slots.get_mut(slot)
    }

    /// Active slots with their indices, in slot order.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Projectile)> {
        self.slots.iter().enumerate().filter(|(_, p)| p.active)
    }

    /// Activate the first free slot, fired from `origin` toward `aim_target`.
    ///
    /// Callers apply any muzzle or aim height offsets before calling.
    /// Returns the slot index, or `None` when every slot is busy or the aim
    /// point coincides with the origin. A failed spawn changes nothing.
    pub fn spawn(
        &mut self,
        origin: Vec3,
        aim_target: Vec3,
        owner: ProjectileOwner,
    ) -> Option<usize> {
        let direction = (aim_target - origin).normalize_or_zero();
        if direction == Vec3::ZERO {
            trace!("{owner:?} projectile rejected: aim point is the origin");
            return None;
        }

        let Some(slot) = self.slots.iter().position(|p| !p.active) else {
            trace!("{owner:?} projectile dropped: pool of {} exhausted", self.slots.len());
            return None;
        };

        let (speed, color) = match owner {
            ProjectileOwner::Player => (self.tuning.player_speed, self.tuning.player_color),
            ProjectileOwner::Enemy => (self.tuning.enemy_speed, self.tuning.enemy_color),
        };

        let projectile = &mut self.slots[slot];
        projectile.position = origin;
        projectile.direction = direction;
        projectile.speed = speed;
        projectile.radius = self.tuning.radius;
        projectile.color = color;
        projectile.owner = owner;
        projectile.lifetime = 0.0;
        projectile.max_lifetime = self.tuning.max_lifetime;
        projectile.active = true;

        Some(slot)
    }

    /// Move every active projectile one tick and expire the old ones.
    pub fn advance(&mut self, dt: f32) {
        for projectile in self.slots.iter_mut().filter(|p| p.active) {
            projectile.position += projectile.direction * projectile.speed;
            projectile.lifetime += dt;
            if projectile.lifetime >= projectile.max_lifetime {
                projectile.active = false;
            }
        }
    }

    /// Return a slot to the free list. Out-of-range slots are ignored.
    pub fn deactivate(&mut self, slot: usize) {
        if let Some(projectile) = self.slots.get_mut(slot) {
            projectile.active = false;
        }
    }

    /// Diagnostic only.
    pub fn count_active(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }
}

/// Whether `projectile` touches a sphere of `target_radius` at `target`.
///
/// Inactive projectiles never hit. Exact tangency is a miss.
pub fn check_hit(projectile: &Projectile, target: Vec3, target_radius: f32) -> bool {
    if !projectile.active {
        return false;
    }
    projectile.position.distance(target) < projectile.radius + target_radius
}
