//! Tick scheduler with explicit timer handles
//!
//! Timers are plain data keyed by handle. Nothing runs on its own: the owner
//! pulls due timers with `pop_due` from its tick callback.

use std::collections::BTreeMap;

/// Handle of a scheduled timer, unique per scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct ScheduledTimer<T> {
    due_tick: u64,
    task: T,
}

#[derive(Debug, Clone)]
pub struct TickScheduler<T> {
    next_handle: u64,
    timers: BTreeMap<TimerHandle, ScheduledTimer<T>>,
}

impl<T> TickScheduler<T> {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            timers: BTreeMap::new(),
        }
    }

    /// Schedule `task` to become due at `due_tick`
    pub fn schedule(&mut self, due_tick: u64, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers.insert(handle, ScheduledTimer { due_tick, task });
        handle
    }

    /// Cancel a timer, returning its task if it was still pending
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        self.timers.remove(&handle).map(|timer| timer.task)
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Earliest due tick among pending timers
    pub fn next_due(&self) -> Option<u64> {
        self.timers.values().map(|timer| timer.due_tick).min()
    }

    /// Remove and return the earliest timer due at or before `current_tick`
    ///
    /// Ties on the due tick resolve in scheduling order.
    pub fn pop_due(&mut self, current_tick: u64) -> Option<(TimerHandle, u64, T)> {
        let handle = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.due_tick <= current_tick)
            .min_by_key(|(handle, timer)| (timer.due_tick, **handle))
            .map(|(handle, _)| *handle)?;

        let timer = self.timers.remove(&handle)?;
        Some((handle, timer.due_tick, timer.task))
    }
}

impl<T> Default for TickScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
