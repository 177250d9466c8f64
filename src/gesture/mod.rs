//! Gesture Module - per-player repeated input detection
//!
//! Plain data in gesture_data.rs, transformations in gesture_operations.rs,
//! and a small tick scheduler the detector uses for its timers.

pub mod gesture_data;
pub mod gesture_operations;
pub mod scheduler;

pub use gesture_data::{
    GestureConfig, GestureDetectorData, GestureEvent, GestureStats, GestureTask,
    PlayerGestureRecord, PlayerId,
};
pub use gesture_operations::{
    advance_to_tick, create_gesture_detector, forget_player, get_stats, is_on_cooldown,
    logged_ticks, presses_match, record_input, tracked_players,
};
pub use scheduler::{TickScheduler, TimerHandle};
