//! Gravity clock - turns elapsed wall time into due gravity ticks
//!
//! The engine owns no clock. The host feeds frame deltas in with
//! [`GravityClock::accumulate`] and then takes ticks one at a time, passing
//! the current interval each time, so a level change made by one tick sets
//! the pace of the next.

#[derive(Debug, Clone, Default)]
pub struct GravityClock {
    accumulated_ms: u32,
}

impl GravityClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed_ms` of wall time.
    pub fn accumulate(&mut self, elapsed_ms: u32) {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
    }

    /// Consume one tick of `interval_ms` if enough time has built up.
    pub fn take_tick(&mut self, interval_ms: u32) -> bool {
        let interval = interval_ms.max(1);
        if self.accumulated_ms < interval {
            return false;
        }
        self.accumulated_ms -= interval;
        true
    }

    /// Milliseconds accumulated toward the next tick
    pub fn pending_ms(&self) -> u32 {
        self.accumulated_ms
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}
