//! Level notice - the transient banner shown after a line clear

use crate::types::LEVEL_NOTICE_MS;

/// Countdown for the level banner.
///
/// Every new clear restarts the full lifetime rather than queuing a second
/// banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelNotice {
    remaining_ms: u32,
    level: u32,
}

impl LevelNotice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the banner for `level`, rescheduling any running countdown.
    pub fn show(&mut self, level: u32) {
        self.level = level;
        self.remaining_ms = LEVEL_NOTICE_MS;
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
    }

    pub fn visible(&self) -> bool {
        self.remaining_ms > 0
    }

    /// Level to display, if the banner is visible
    pub fn level(&self) -> Option<u32> {
        self.visible().then_some(self.level)
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    pub fn clear(&mut self) {
        self.remaining_ms = 0;
    }
}
