//! Cast Operations - single raycast wrapper
//!
//! Delegates to a `HostRaycaster` and turns its block-relative answer into a
//! world-space hit point.
//!
//! Hosts report a face coordinate of 0 instead of 1 on the axis of the
//! positive-normal faces (South, East, Up). Such a point would land on the
//! far side of the block, so that 0 is replaced by 1 before adding the block
//! origin.

use super::cast_data::{CastOptions, HostRaycaster, SingleCastHit};
use crate::world::{BlockFace, GridCell};
use cgmath::{InnerSpace, Point3, Vector3};

/// Replace a 0 on a positive face's own axis with 1
/// Pure function - other faces and axes pass through untouched
pub fn apply_zero_fix(face: BlockFace, face_location: Vector3<f64>) -> Vector3<f64> {
    let mut fixed = face_location;
    if face.is_positive() && fixed[face.axis()] == 0.0 {
        fixed[face.axis()] = 1.0;
    }
    fixed
}

/// World-space point of a hit on `face` of the block at `block_origin`
pub fn world_hit_position(
    block_origin: GridCell,
    face: BlockFace,
    face_location: Vector3<f64>,
) -> Point3<f64> {
    block_origin.min_corner() + apply_zero_fix(face, face_location)
}

/// Cast once through the host and resolve the hit point
///
/// Returns `Ok(None)` when the host reports no hit. Host errors propagate.
pub fn cast_single<H>(
    host: &H,
    origin: Point3<f64>,
    direction: Vector3<f64>,
    options: &CastOptions,
) -> Result<Option<SingleCastHit<H::Block>>, H::Error>
where
    H: HostRaycaster + ?Sized,
{
    let Some(hit) = host.cast_ray(origin, direction, options)? else {
        log::debug!(
            "[Cast] No hit from {:?} along {:?} within {}",
            origin,
            direction,
            options.max_distance
        );
        return Ok(None);
    };

    let world_position = world_hit_position(hit.block_origin, hit.face, hit.face_location);
    let distance = (world_position - origin).magnitude();

    log::debug!(
        "[Cast] Hit block {} on {:?} face at {:?} ({:.3} away)",
        hit.block_origin,
        hit.face,
        world_position,
        distance
    );

    Ok(Some(SingleCastHit {
        block: hit.block,
        block_origin: hit.block_origin,
        face: hit.face,
        face_location: hit.face_location,
        world_position,
        distance,
    }))
}
