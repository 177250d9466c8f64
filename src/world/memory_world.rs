//! In-memory block storage
//!
//! Chunked sparse storage for embedders without a host world, and for tests.
//! Chunks are allocated on first write; reads of unallocated chunks report
//! no content.

use super::block_source::BlockSource;
use super::core::GridCell;
use std::collections::HashMap;
use std::convert::Infallible;

/// Chunk coordinate (cell coordinate divided by chunk size, rounded down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Debug, Clone)]
pub struct MemoryWorld<C> {
    chunk_size: u32,
    chunks: HashMap<ChunkPos, Vec<Option<C>>>,
    block_count: usize,
}

impl<C: Clone> MemoryWorld<C> {
    pub fn new(chunk_size: u32) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            chunks: HashMap::new(),
            block_count: 0,
        }
    }

    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Number of cells holding content
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    pub fn loaded_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Content at a cell, if any
    pub fn get_block(&self, cell: GridCell) -> Option<&C> {
        let (chunk_pos, index) = self.locate(cell);
        self.chunks.get(&chunk_pos)?.get(index)?.as_ref()
    }

    /// Store content at a cell, returning what was there before
    pub fn set_block(&mut self, cell: GridCell, content: C) -> Option<C> {
        let (chunk_pos, index) = self.locate(cell);
        let volume = (self.chunk_size as usize).pow(3);
        let chunk = self
            .chunks
            .entry(chunk_pos)
            .or_insert_with(|| vec![None; volume]);

        let previous = chunk[index].replace(content);
        if previous.is_none() {
            self.block_count += 1;
        }
        previous
    }

    /// Clear a cell, returning its previous content
    pub fn remove_block(&mut self, cell: GridCell) -> Option<C> {
        let (chunk_pos, index) = self.locate(cell);
        let chunk = self.chunks.get_mut(&chunk_pos)?;
        let previous = chunk.get_mut(index)?.take();
        if previous.is_some() {
            self.block_count -= 1;
        }
        if chunk.iter().all(Option::is_none) {
            self.chunks.remove(&chunk_pos);
        }
        previous
    }

    /// Fill an inclusive box of cells with the same content
    pub fn fill(&mut self, min: GridCell, max: GridCell, content: C) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set_block(GridCell::new(x, y, z), content.clone());
                }
            }
        }
    }

    fn locate(&self, cell: GridCell) -> (ChunkPos, usize) {
        let size = self.chunk_size as i32;
        let chunk_pos = ChunkPos {
            x: cell.x.div_euclid(size),
            y: cell.y.div_euclid(size),
            z: cell.z.div_euclid(size),
        };

        let local_x = cell.x.rem_euclid(size) as usize;
        let local_y = cell.y.rem_euclid(size) as usize;
        let local_z = cell.z.rem_euclid(size) as usize;
        let size = self.chunk_size as usize;

        (chunk_pos, local_x + local_y * size + local_z * size * size)
    }
}

impl<C: Clone> Default for MemoryWorld<C> {
    fn default() -> Self {
        Self::new(crate::constants::world::DEFAULT_CHUNK_SIZE)
    }
}

impl<C: Clone> BlockSource for MemoryWorld<C> {
    type Content = C;
    type Error = Infallible;

    fn block_at(&self, cell: GridCell) -> Result<Option<C>, Infallible> {
        Ok(self.get_block(cell).cloned())
    }
}
