//! Gesture Detector Data
//!
//! NO LOGIC. Just data.
//! All transformations happen in gesture_operations.rs

use super::scheduler::{TickScheduler, TimerHandle};
use crate::config::{DynamicValue, GestureSettings};
use std::collections::HashMap;

/// Host player identifier
pub type PlayerId = String;

/// Gesture thresholds, each fixed or re-evaluated at every use
#[derive(Debug, Clone)]
pub struct GestureConfig {
    pub event_name: String,
    pub trigger_count: DynamicValue<u64>,
    pub input_window_ticks: DynamicValue<u64>,
    pub logging_timeout_ticks: DynamicValue<u64>,
    pub cooldown_ticks: DynamicValue<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::from(&GestureSettings::default())
    }
}

impl From<&GestureSettings> for GestureConfig {
    fn from(settings: &GestureSettings) -> Self {
        Self {
            event_name: settings.event_name.clone(),
            trigger_count: DynamicValue::fixed(settings.trigger_count),
            input_window_ticks: DynamicValue::fixed(settings.input_window_ticks),
            logging_timeout_ticks: DynamicValue::fixed(settings.logging_timeout_ticks),
            cooldown_ticks: DynamicValue::fixed(settings.cooldown_ticks),
        }
    }
}

/// Per-player state, alive from the first accepted press until the cooldown
/// after its judgement expires
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerGestureRecord {
    /// The one timer pending for this player: the judgement while presses are
    /// being logged, the cooldown expiry afterwards
    pub pending_timer: Option<TimerHandle>,
    /// Tick of every accepted press, oldest first
    pub tick_log: Vec<u64>,
    pub on_cooldown: bool,
}

/// Work a timer performs when it comes due
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureTask {
    /// Judge the logged presses
    Judge(PlayerId),
    /// Drop the player's record
    EndCooldown(PlayerId),
}

/// Emitted when a player completes the gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureEvent {
    pub name: String,
    pub player_id: PlayerId,
    /// Tick the judgement ran on
    pub tick: u64,
}

/// Counters for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureStats {
    pub inputs_recorded: u64,
    pub inputs_ignored: u64,
    pub judgements: u64,
    pub events_emitted: u64,
}

/// Detector state for every tracked player
#[derive(Debug, Clone)]
pub struct GestureDetectorData {
    pub config: GestureConfig,
    pub records: HashMap<PlayerId, PlayerGestureRecord>,
    pub scheduler: TickScheduler<GestureTask>,
    pub stats: GestureStats,
}

impl Default for GestureDetectorData {
    fn default() -> Self {
        Self {
            config: GestureConfig::default(),
            records: HashMap::new(),
            scheduler: TickScheduler::new(),
            stats: GestureStats::default(),
        }
    }
}
