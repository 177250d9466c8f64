// Voxel Probe - grid ray traversal and small helpers for block-world game APIs
//
// The host owns the world, the input events and the tick counter. This crate
// only borrows them:
// - probe: walk the grid cells along a segment through a BlockSource
// - cast: resolve a world-space hit point from a host raycast
// - gesture: detect repeated inputs per player on the host's ticks
//
// Data lives in *_data modules, pure functions in *_operations modules.

// Constants module
pub mod constants;

pub mod error;

// Core
pub mod math;
pub mod probe;
pub mod world;

// Peripheral helpers
pub mod cast;
pub mod gesture;

// Configuration
pub mod config;

pub use error::{ProbeError, ProbeResult};

// === Grid Types ===
pub use world::{
    block_source_fn, infallible_source, BlockFace, BlockSource, GridCell, MemoryWorld,
};

// === Traversal ===
pub use probe::{
    build_ray_query, derive_end_point, first_blocker, grid_cells, traverse, traverse_detailed,
    traverse_with_cancel, GridRayCells, ProbeEntry, RayQuery, RayQueryDesc, Termination,
    TraversalReport,
};

// === Single Cast ===
pub use cast::{cast_single, CastOptions, HostRayHit, HostRaycaster, SingleCastHit, VoxelRaycaster};

// === Gestures ===
pub use gesture::{
    advance_to_tick, create_gesture_detector, record_input, GestureConfig, GestureDetectorData,
    GestureEvent,
};

pub use config::{DynamicValue, ProbeConfig};

// Re-export cgmath so hosts build points and directions with the same version
pub use cgmath;
pub use cgmath::{Point3, Vector3};
