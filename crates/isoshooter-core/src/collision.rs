//! Bounding-volume construction and axis-separated collision resolution.
//!
//! Boxes are centered horizontally on an entity's position and extend
//! upward from it, so `position` is the entity's footprint center on the
//! ground plane.

use glam::Vec3;

use crate::types::BoundingBox;

/// Build the bounding box of an entity at `position` with extents `size`.
pub fn bounding_box_of(position: Vec3, size: Vec3) -> BoundingBox {
    BoundingBox {
        min: Vec3::new(
            position.x - size.x / 2.0,
            position.y,
            position.z - size.z / 2.0,
        ),
        max: Vec3::new(
            position.x + size.x / 2.0,
            position.y + size.y,
            position.z + size.z / 2.0,
        ),
    }
}

/// Whether two entities would overlap at the given positions.
pub fn overlaps(position: Vec3, size: Vec3, other_position: Vec3, other_size: Vec3) -> bool {
    bounding_box_of(position, size).intersects(&bounding_box_of(other_position, other_size))
}

/// Resolve a move from `current` toward `desired` against one obstacle.
///
/// The X component is tried alone first, then the Z component from
/// whichever X was accepted. Each axis is kept only if the box it produces
/// is clear of the obstacle, so an entity blocked on one axis still slides
/// along the other. The vertical component of `current` is kept.
pub fn corrected_position(
    current: Vec3,
    desired: Vec3,
    entity_size: Vec3,
    other_position: Vec3,
    other_size: Vec3,
) -> Vec3 {
    let other_box = bounding_box_of(other_position, other_size);
    let mut resolved = current;

    let x_only = Vec3::new(desired.x, resolved.y, resolved.z);
    if !bounding_box_of(x_only, entity_size).intersects(&other_box) {
        resolved.x = desired.x;
    }

    let z_only = Vec3::new(resolved.x, resolved.y, desired.z);
    if !bounding_box_of(z_only, entity_size).intersects(&other_box) {
        resolved.z = desired.z;
    }

    resolved
}
