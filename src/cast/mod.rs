//! Cast Module - single raycast wrapper
//!
//! `cast_single` wraps any `HostRaycaster` and resolves a world-space hit
//! point. `VoxelRaycaster` provides that primitive over a `BlockSource`.

pub mod cast_data;
pub mod cast_operations;
pub mod voxel_raycaster;

pub use cast_data::{CastOptions, HostRayHit, HostRaycaster, SingleCastHit};
pub use cast_operations::{apply_zero_fix, cast_single, world_hit_position};
pub use voxel_raycaster::VoxelRaycaster;
