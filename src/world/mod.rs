//! World Module
//!
//! The world itself belongs to the host. This module only defines the shape
//! of a world query (`BlockSource`), the grid types it speaks in, and a small
//! in-memory implementation.

pub mod block_source;
pub mod core;
pub mod memory_world;

pub use block_source::{block_source_fn, infallible_source, BlockSource, FnBlockSource, InfallibleSource};
pub use core::{BlockFace, GridCell};
pub use memory_world::{ChunkPos, MemoryWorld};
