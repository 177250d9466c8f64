//! Grid-backed host raycast primitive
//!
//! Implements `HostRaycaster` on top of the probe traversal for embedders that
//! have a `BlockSource` but no native raycast. The traversal finds the first
//! solid block (or first block at all with `include_passable_blocks`), then a
//! slab test against that block's faces finds where the ray entered it.

use super::cast_data::{CastOptions, HostRayHit, HostRaycaster};
use crate::math::{normalize_or_zero, offset_point};
use crate::probe::{first_blocker, RayQuery};
use crate::world::{BlockFace, BlockSource, GridCell};
use cgmath::{Point3, Vector3, Zero};

pub struct VoxelRaycaster<S, P> {
    world: S,
    is_passable: P,
}

impl<S, P> VoxelRaycaster<S, P>
where
    S: BlockSource,
    P: Fn(&S::Content) -> bool,
{
    /// `is_passable` marks content rays go through unless passable blocks
    /// are included
    pub fn new(world: S, is_passable: P) -> Self {
        Self { world, is_passable }
    }
}

impl<S, P> HostRaycaster for VoxelRaycaster<S, P>
where
    S: BlockSource,
    P: Fn(&S::Content) -> bool,
{
    type Block = S::Content;
    type Error = S::Error;

    fn cast_ray(
        &self,
        origin: Point3<f64>,
        direction: Vector3<f64>,
        options: &CastOptions,
    ) -> Result<Option<HostRayHit<S::Content>>, S::Error> {
        let direction = normalize_or_zero(direction);
        if direction == Vector3::zero()
            || !(options.max_distance.is_finite() && options.max_distance > 0.0)
        {
            return Ok(None);
        }

        let end_point = offset_point(origin, direction, options.max_distance);
        if GridCell::try_containing(origin).is_none() || GridCell::try_containing(end_point).is_none() {
            log::debug!("[Cast] Ray {:?} -> {:?} leaves the integer grid", origin, end_point);
            return Ok(None);
        }
        let query = RayQuery {
            origin,
            end_point,
            max_steps: crossing_bound(origin, end_point),
            stop_at_first_blocker: true,
        };

        let include_passable = options.include_passable_blocks;
        let hit = first_blocker(&query, &self.world, |content| {
            include_passable || !(self.is_passable)(content)
        })?;

        Ok(hit.map(|entry| {
            let (face, face_location) = entry_face(origin, direction, entry.cell);
            HostRayHit {
                block: entry.content,
                block_origin: entry.cell,
                face,
                face_location,
            }
        }))
    }
}

/// Upper bound on cells a segment can touch
fn crossing_bound(origin: Point3<f64>, end_point: Point3<f64>) -> u32 {
    let delta = end_point - origin;
    let crossings = (delta.x.abs() + delta.y.abs() + delta.z.abs()).ceil() + 4.0;
    crossings.min(u32::MAX as f64) as u32
}

/// Face the ray entered `cell` through and the block-relative entry point
///
/// A ray starting inside the cell reports the face opposite its dominant axis
/// and the origin's own position in the cell.
fn entry_face(origin: Point3<f64>, direction: Vector3<f64>, cell: GridCell) -> (BlockFace, Vector3<f64>) {
    let corner = cell.min_corner();
    let mut entry_axis = None;
    let mut t_enter = f64::NEG_INFINITY;

    for axis in 0..3 {
        let d = direction[axis];
        if d == 0.0 {
            continue;
        }
        let plane = if d > 0.0 { corner[axis] } else { corner[axis] + 1.0 };
        let t = (plane - origin[axis]) / d;
        if t > t_enter {
            t_enter = t;
            entry_axis = Some(axis);
        }
    }

    let Some(axis) = entry_axis.filter(|_| t_enter > 0.0) else {
        let dominant = dominant_axis(direction);
        let face = BlockFace::from_axis(dominant, direction[dominant] < 0.0);
        return (face, clamp_unit(origin - corner));
    };

    let face = BlockFace::from_axis(axis, direction[axis] < 0.0);
    let hit_point = offset_point(origin, direction, t_enter);
    let mut local = clamp_unit(hit_point - corner);
    local[axis] = if face.is_positive() { 1.0 } else { 0.0 };
    (face, local)
}

fn dominant_axis(direction: Vector3<f64>) -> usize {
    let abs = [direction.x.abs(), direction.y.abs(), direction.z.abs()];
    if abs[0] >= abs[1] && abs[0] >= abs[2] {
        0
    } else if abs[1] >= abs[2] {
        1
    } else {
        2
    }
}

fn clamp_unit(v: Vector3<f64>) -> Vector3<f64> {
    Vector3::new(v.x.clamp(0.0, 1.0), v.y.clamp(0.0, 1.0), v.z.clamp(0.0, 1.0))
}
