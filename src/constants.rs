//! Shared constants for the probe utilities
//!
//! Grouped by the subsystem that consumes them.

/// Grid traversal constants
pub mod traversal {
    /// Default hard cap on visited cells per traversal
    pub const DEFAULT_MAX_STEPS: u32 = 4096;

    /// Crossing distances closer than this to the minimum advance together
    pub const CROSSING_EPSILON: f64 = 1e-10;
}

/// Single-cast constants
pub mod cast {
    /// Default reach of a single cast (world units)
    pub const DEFAULT_MAX_DISTANCE: f64 = 16.0;
}

/// Gesture detector defaults (all in game ticks)
pub mod gesture {
    pub const DEFAULT_EVENT_NAME: &str = "gesture:double_tap";
    pub const DEFAULT_TRIGGER_COUNT: u64 = 2;
    pub const DEFAULT_INPUT_WINDOW_TICKS: u64 = 10;
    pub const DEFAULT_LOGGING_TIMEOUT_TICKS: u64 = 10;
    pub const DEFAULT_COOLDOWN_TICKS: u64 = 20;
}

/// In-memory world constants
pub mod world {
    /// Edge length of a `MemoryWorld` chunk (cells)
    pub const DEFAULT_CHUNK_SIZE: u32 = 16;
}
