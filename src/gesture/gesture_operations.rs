//! Gesture Detector Operations
//!
//! Detects a repeated input (for example a double jump tap) per player.
//!
//! Each accepted press is logged and pushes the judgement back to
//! `logging_timeout_ticks` after that press. When the judgement runs, the
//! gesture counts if exactly `trigger_count` presses were logged and the first
//! and last are at most `input_window_ticks` apart. Either way the player then
//! sits out `cooldown_ticks`, ignoring presses, and the record is dropped when
//! the cooldown ends.
//!
//! The host drives everything: it calls `record_input` from its input event
//! and `advance_to_tick` once per tick.

use super::gesture_data::{
    GestureConfig, GestureDetectorData, GestureEvent, GestureStats, GestureTask, PlayerId,
};
use super::scheduler::{TickScheduler, TimerHandle};
use std::collections::HashMap;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Create a detector with no tracked players
pub fn create_gesture_detector(config: GestureConfig) -> GestureDetectorData {
    GestureDetectorData {
        config,
        records: HashMap::new(),
        scheduler: TickScheduler::new(),
        stats: GestureStats::default(),
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// Log a qualifying press for `player_id` at `current_tick`
///
/// Returns false when the press was ignored because the player is on cooldown.
pub fn record_input(detector: &mut GestureDetectorData, player_id: &str, current_tick: u64) -> bool {
    let record = detector
        .records
        .entry(player_id.to_string())
        .or_default();

    if record.on_cooldown {
        detector.stats.inputs_ignored += 1;
        log::trace!("[Gesture] Ignoring input from {} during cooldown", player_id);
        return false;
    }

    record.tick_log.push(current_tick);

    if let Some(previous) = record.pending_timer.take() {
        detector.scheduler.cancel(previous);
    }

    let timeout = detector.config.logging_timeout_ticks.resolve();
    let handle = detector.scheduler.schedule(
        current_tick.saturating_add(timeout),
        GestureTask::Judge(player_id.to_string()),
    );
    record.pending_timer = Some(handle);
    detector.stats.inputs_recorded += 1;

    log::trace!(
        "[Gesture] Logged input {} for {} at tick {}",
        record.tick_log.len(),
        player_id,
        current_tick
    );
    true
}

// ============================================================================
// TICK PROCESSING
// ============================================================================

/// Run every timer due at or before `current_tick`, in due order
///
/// Returns the gesture events emitted by judgements that ran.
pub fn advance_to_tick(detector: &mut GestureDetectorData, current_tick: u64) -> Vec<GestureEvent> {
    let mut events = Vec::new();

    while let Some((handle, due_tick, task)) = detector.scheduler.pop_due(current_tick) {
        match task {
            GestureTask::Judge(player_id) => {
                if let Some(event) = judge_player(detector, handle, &player_id, due_tick) {
                    events.push(event);
                }
            }
            GestureTask::EndCooldown(player_id) => {
                end_cooldown(detector, handle, &player_id);
            }
        }
    }

    events
}

fn judge_player(
    detector: &mut GestureDetectorData,
    handle: TimerHandle,
    player_id: &str,
    tick: u64,
) -> Option<GestureEvent> {
    let record = detector.records.get_mut(player_id)?;
    if record.pending_timer != Some(handle) {
        return None;
    }

    let trigger_count = detector.config.trigger_count.resolve();
    let input_window = detector.config.input_window_ticks.resolve();
    let matched = presses_match(&record.tick_log, trigger_count, input_window);
    detector.stats.judgements += 1;

    let cooldown = detector.config.cooldown_ticks.resolve();
    record.on_cooldown = true;
    record.pending_timer = Some(detector.scheduler.schedule(
        tick.saturating_add(cooldown),
        GestureTask::EndCooldown(player_id.to_string()),
    ));

    if !matched {
        log::debug!(
            "[Gesture] {} presses from {} did not match (need {} within {} ticks)",
            record.tick_log.len(),
            player_id,
            trigger_count,
            input_window
        );
        return None;
    }

    detector.stats.events_emitted += 1;
    log::info!(
        "[Gesture] Player {} performed '{}' at tick {}",
        player_id,
        detector.config.event_name,
        tick
    );

    Some(GestureEvent {
        name: detector.config.event_name.clone(),
        player_id: player_id.to_string(),
        tick,
    })
}

fn end_cooldown(detector: &mut GestureDetectorData, handle: TimerHandle, player_id: &str) {
    let current = detector
        .records
        .get(player_id)
        .map(|record| record.pending_timer == Some(handle))
        .unwrap_or(false);

    if current {
        detector.records.remove(player_id);
        log::trace!("[Gesture] Cooldown over for {}", player_id);
    }
}

/// Whether a press log makes up the gesture
/// Pure function - exact count, first-to-last span within the window
pub fn presses_match(tick_log: &[u64], trigger_count: u64, input_window_ticks: u64) -> bool {
    match (tick_log.first(), tick_log.last()) {
        (Some(first), Some(last)) => {
            tick_log.len() as u64 == trigger_count && last.saturating_sub(*first) <= input_window_ticks
        }
        _ => false,
    }
}

// ============================================================================
// PLAYER LIFECYCLE
// ============================================================================

/// Drop a player's record and pending timer (for example when they leave)
pub fn forget_player(detector: &mut GestureDetectorData, player_id: &str) -> bool {
    match detector.records.remove(player_id) {
        Some(record) => {
            if let Some(handle) = record.pending_timer {
                detector.scheduler.cancel(handle);
            }
            true
        }
        None => false,
    }
}

// ============================================================================
// QUERIES
// ============================================================================

pub fn is_on_cooldown(detector: &GestureDetectorData, player_id: &str) -> bool {
    detector
        .records
        .get(player_id)
        .map(|record| record.on_cooldown)
        .unwrap_or(false)
}

/// Presses logged for a player since their record was created
pub fn logged_ticks<'a>(detector: &'a GestureDetectorData, player_id: &str) -> Option<&'a [u64]> {
    detector
        .records
        .get(player_id)
        .map(|record| record.tick_log.as_slice())
}

pub fn tracked_players(detector: &GestureDetectorData) -> Vec<PlayerId> {
    let mut players: Vec<PlayerId> = detector.records.keys().cloned().collect();
    players.sort();
    players
}

pub fn get_stats(detector: &GestureDetectorData) -> GestureStats {
    detector.stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DynamicValue;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    fn double_tap_config() -> GestureConfig {
        GestureConfig {
            event_name: "gesture:double_jump".to_string(),
            trigger_count: DynamicValue::fixed(2),
            input_window_ticks: DynamicValue::fixed(10),
            logging_timeout_ticks: DynamicValue::fixed(10),
            cooldown_ticks: DynamicValue::fixed(20),
        }
    }

    #[test]
    fn test_double_tap_emits_after_timeout() {
        let mut detector = create_gesture_detector(double_tap_config());

        assert!(record_input(&mut detector, "steve", 100));
        assert!(record_input(&mut detector, "steve", 105));

        assert!(advance_to_tick(&mut detector, 114).is_empty());
        let events = advance_to_tick(&mut detector, 115);
        assert_eq!(
            events,
            vec![GestureEvent {
                name: "gesture:double_jump".to_string(),
                player_id: "steve".to_string(),
                tick: 115,
            }]
        );
        assert!(is_on_cooldown(&detector, "steve"));
        assert_eq!(get_stats(&detector).events_emitted, 1);
    }

    #[test]
    fn test_cooldown_ignores_input_then_discards_record() {
        let mut detector = create_gesture_detector(double_tap_config());
        record_input(&mut detector, "alex", 0);
        record_input(&mut detector, "alex", 3);
        advance_to_tick(&mut detector, 13);

        assert!(!record_input(&mut detector, "alex", 20));
        assert_eq!(logged_ticks(&detector, "alex"), Some(&[0u64, 3][..]));

        advance_to_tick(&mut detector, 32);
        assert!(is_on_cooldown(&detector, "alex"));
        advance_to_tick(&mut detector, 33);
        assert!(!is_on_cooldown(&detector, "alex"));
        assert!(tracked_players(&detector).is_empty());

        assert!(record_input(&mut detector, "alex", 34));
        assert_eq!(logged_ticks(&detector, "alex"), Some(&[34u64][..]));
        assert_eq!(get_stats(&detector).inputs_ignored, 1);
    }

    #[test]
    fn test_slow_presses_do_not_match_but_still_cool_down() {
        let mut config = double_tap_config();
        config.input_window_ticks = DynamicValue::fixed(5);
        config.logging_timeout_ticks = DynamicValue::fixed(20);
        let mut detector = create_gesture_detector(config);

        record_input(&mut detector, "steve", 0);
        record_input(&mut detector, "steve", 8);

        assert!(advance_to_tick(&mut detector, 28).is_empty());
        assert!(is_on_cooldown(&detector, "steve"));
        assert_eq!(get_stats(&detector).judgements, 1);
        assert_eq!(get_stats(&detector).events_emitted, 0);
    }

    #[test]
    fn test_too_many_presses_do_not_match() {
        let mut detector = create_gesture_detector(double_tap_config());
        for tick in [0, 2, 4] {
            record_input(&mut detector, "steve", tick);
        }
        assert!(advance_to_tick(&mut detector, 100).is_empty());
    }

    #[test]
    fn test_each_press_reschedules_the_judgement() {
        let mut detector = create_gesture_detector(double_tap_config());
        record_input(&mut detector, "steve", 0);
        record_input(&mut detector, "steve", 9);

        assert_eq!(detector.scheduler.pending_count(), 1);
        assert_eq!(detector.scheduler.next_due(), Some(19));
        assert!(advance_to_tick(&mut detector, 18).is_empty());
        assert!(!is_on_cooldown(&detector, "steve"));
        assert_eq!(advance_to_tick(&mut detector, 19).len(), 1);
    }

    #[test]
    fn test_players_are_independent() {
        let mut detector = create_gesture_detector(double_tap_config());
        record_input(&mut detector, "alex", 0);
        record_input(&mut detector, "alex", 4);
        record_input(&mut detector, "steve", 2);

        let events = advance_to_tick(&mut detector, 20);
        let players: Vec<&str> = events.iter().map(|e| e.player_id.as_str()).collect();
        assert_eq!(players, vec!["alex"]);
        assert_eq!(tracked_players(&detector), vec!["alex".to_string(), "steve".to_string()]);
    }

    #[test]
    fn test_dynamic_thresholds_are_read_at_judgement() {
        let required = Arc::new(AtomicU64::new(2));
        let reader = Arc::clone(&required);
        let mut config = double_tap_config();
        config.trigger_count = DynamicValue::provider(move || reader.load(Ordering::SeqCst));
        let mut detector = create_gesture_detector(config);

        record_input(&mut detector, "steve", 0);
        record_input(&mut detector, "steve", 1);
        record_input(&mut detector, "steve", 2);

        required.store(3, Ordering::SeqCst);
        assert_eq!(advance_to_tick(&mut detector, 12).len(), 1);
    }

    #[test]
    fn test_zero_cooldown_drops_record_in_same_advance() {
        let mut config = double_tap_config();
        config.cooldown_ticks = DynamicValue::fixed(0);
        let mut detector = create_gesture_detector(config);

        record_input(&mut detector, "steve", 0);
        record_input(&mut detector, "steve", 1);
        assert_eq!(advance_to_tick(&mut detector, 11).len(), 1);
        assert!(tracked_players(&detector).is_empty());
        assert_eq!(detector.scheduler.pending_count(), 0);
    }

    #[test]
    fn test_forget_player_cancels_pending_timer() {
        let mut detector = create_gesture_detector(double_tap_config());
        record_input(&mut detector, "steve", 0);
        record_input(&mut detector, "steve", 1);

        assert!(forget_player(&mut detector, "steve"));
        assert!(!forget_player(&mut detector, "steve"));
        assert_eq!(detector.scheduler.pending_count(), 0);
        assert!(advance_to_tick(&mut detector, 100).is_empty());
    }

    #[test]
    fn test_forgotten_player_starts_fresh_record() {
        let mut detector = create_gesture_detector(double_tap_config());
        record_input(&mut detector, "steve", 0);
        advance_to_tick(&mut detector, 10);

        forget_player(&mut detector, "steve");
        record_input(&mut detector, "steve", 15);
        advance_to_tick(&mut detector, 24);

        assert_eq!(logged_ticks(&detector, "steve"), Some(&[15u64][..]));
    }

    #[test]
    fn test_presses_match() {
        assert!(presses_match(&[10, 20], 2, 10));
        assert!(!presses_match(&[10, 21], 2, 10));
        assert!(!presses_match(&[10], 2, 10));
        assert!(!presses_match(&[], 0, 10));
    }
}
