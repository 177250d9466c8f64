use serde::{Deserialize, Serialize};

/// Block face, named after the host's cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockFace {
    Up,    // +Y
    Down,  // -Y
    North, // -Z
    South, // +Z
    East,  // +X
    West,  // -X
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Up,
        BlockFace::Down,
        BlockFace::North,
        BlockFace::South,
        BlockFace::East,
        BlockFace::West,
    ];

    /// Axis index of the face normal (0 = X, 1 = Y, 2 = Z)
    pub fn axis(&self) -> usize {
        match self {
            BlockFace::East | BlockFace::West => 0,
            BlockFace::Up | BlockFace::Down => 1,
            BlockFace::North | BlockFace::South => 2,
        }
    }

    /// True when the outward normal points along the positive axis
    pub fn is_positive(&self) -> bool {
        matches!(self, BlockFace::Up | BlockFace::South | BlockFace::East)
    }

    /// Face on the given axis with the given normal sign
    pub fn from_axis(axis: usize, positive: bool) -> Self {
        match (axis, positive) {
            (0, true) => BlockFace::East,
            (0, false) => BlockFace::West,
            (1, true) => BlockFace::Up,
            (1, false) => BlockFace::Down,
            (_, true) => BlockFace::South,
            (_, false) => BlockFace::North,
        }
    }
}
