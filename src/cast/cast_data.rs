//! Cast Data - single raycast options and hits
//!
//! NO LOGIC beyond defaults. Operations live in cast_operations.rs.

use crate::constants::cast::DEFAULT_MAX_DISTANCE;
use crate::world::{BlockFace, GridCell};
use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Options forwarded to the host raycast primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastOptions {
    /// Stop on passable blocks (grass, flowers, ...) instead of going through
    pub include_passable_blocks: bool,
    /// Reach of the cast in world units
    pub max_distance: f64,
}

impl Default for CastOptions {
    fn default() -> Self {
        Self {
            include_passable_blocks: false,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

/// What the host primitive reports for a hit
#[derive(Debug, Clone, PartialEq)]
pub struct HostRayHit<B> {
    pub block: B,
    /// Minimum corner of the hit block
    pub block_origin: GridCell,
    pub face: BlockFace,
    /// Hit position relative to `block_origin`, 0..1 per axis
    pub face_location: Vector3<f64>,
}

/// Resolved single-cast hit
#[derive(Debug, Clone, PartialEq)]
pub struct SingleCastHit<B> {
    pub block: B,
    pub block_origin: GridCell,
    pub face: BlockFace,
    /// Face coordinate exactly as the host reported it
    pub face_location: Vector3<f64>,
    /// `block_origin` plus the zero-fixed face coordinate
    pub world_position: Point3<f64>,
    /// Distance from the cast origin to `world_position`
    pub distance: f64,
}

/// Host "cast ray against world geometry" primitive
pub trait HostRaycaster {
    type Block;
    type Error;

    /// First block hit from `origin` along `direction`, or `None`
    fn cast_ray(
        &self,
        origin: Point3<f64>,
        direction: Vector3<f64>,
        options: &CastOptions,
    ) -> Result<Option<HostRayHit<Self::Block>>, Self::Error>;
}

impl<H: HostRaycaster + ?Sized> HostRaycaster for &H {
    type Block = H::Block;
    type Error = H::Error;

    fn cast_ray(
        &self,
        origin: Point3<f64>,
        direction: Vector3<f64>,
        options: &CastOptions,
    ) -> Result<Option<HostRayHit<Self::Block>>, Self::Error> {
        (**self).cast_ray(origin, direction, options)
    }
}
