//! Core world data types
//!
//! Grid cells and block faces shared by the probe, the cast wrapper and the
//! in-memory world.

mod face;
mod position;

pub use face::BlockFace;
pub use position::GridCell;
