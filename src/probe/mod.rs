//! Probe Module - grid ray traversal
//!
//! Enumerates the voxel cells a segment passes through, near to far, asking a
//! `BlockSource` for each one. Queries are built and validated once
//! (`build_ray_query`), then walked synchronously to the end cell, the first
//! blocker, or the step cap.

pub mod grid_walk;
pub mod probe_data;
pub mod probe_operations;

pub use grid_walk::GridRayCells;
pub use probe_data::{ProbeEntry, RayQuery, RayQueryDesc, Termination, TraversalReport};
pub use probe_operations::{
    build_ray_query, derive_end_point, first_blocker, grid_cells, traverse, traverse_detailed,
    traverse_with_cancel,
};
