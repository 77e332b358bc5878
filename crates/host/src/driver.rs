//! Driver - runs a session against wall time and player input
//!
//! The driver is the host side of the engine boundary. It owns the gravity
//! clock, the pause gate, the level notice and the palette, and forwards
//! everything else to [`GameState`]. Rendering code reads the session through
//! [`Driver::snapshot`] and the accessors.

use crate::core::{
    entropy_rng, seeded_rng, ConfigError, GameConfig, GameSnapshot, GameState, SessionRng,
};
use crate::notice::LevelNotice;
use crate::palette::Palette;
use crate::scheduler::GravityClock;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct Driver {
    game: GameState,
    clock: GravityClock,
    notice: LevelNotice,
    palette: Palette,
    palette_rng: SessionRng,
    paused: bool,
}

impl Driver {
    /// Start a session; `seed` makes both pieces and colors reproducible.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_game(
                GameState::new(config, seed),
                seeded_rng(seed.wrapping_add(1)),
            ),
            None => Self::from_game(GameState::from_entropy(config), entropy_rng()),
        }
    }

    /// Drive an existing session; `palette_rng` colors its shapes.
    pub fn from_game(game: GameState, palette_rng: SessionRng) -> Self {
        let mut driver = Self {
            game,
            clock: GravityClock::new(),
            notice: LevelNotice::new(),
            palette: Palette::default(),
            palette_rng,
            paused: false,
        };
        driver.repaint();
        driver
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Level shown by the transient banner, if it is visible
    pub fn notice_level(&self) -> Option<u32> {
        self.notice.level()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Advance wall time by `elapsed_ms` and run any gravity ticks that are due.
    ///
    /// Returns the number of ticks delivered to the engine. Nothing is
    /// delivered while paused or after game over.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.notice.advance(elapsed_ms);
        if self.paused || self.game.game_over() {
            return 0;
        }

        self.clock.accumulate(elapsed_ms);
        let mut delivered = 0;
        // Interval is re-read per tick so a level up speeds up the rest.
        while !self.game.game_over() && self.clock.take_tick(self.game.tick_interval_ms()) {
            self.game.tick();
            self.observe_lock();
            delivered += 1;
        }
        delivered
    }

    /// Deliver one action. Returns whether it changed anything.
    ///
    /// Gameplay actions are dropped while paused; `TogglePause` and `Restart`
    /// always get through.
    pub fn handle(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::TogglePause => {
                if self.game.game_over() {
                    return false;
                }
                self.paused = !self.paused;
                log::debug!("paused={}", self.paused);
                true
            }
            GameAction::Restart => {
                self.restart(self.game.config().clone());
                true
            }
            _ if self.paused => false,
            _ => {
                let changed = self.game.apply_action(action);
                self.observe_lock();
                changed
            }
        }
    }

    /// Validate `config` and restart the session under it.
    ///
    /// An invalid config leaves the running session untouched.
    pub fn apply_config(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.restart(config);
        Ok(())
    }

    fn restart(&mut self, config: GameConfig) {
        self.game.new_game(config);
        self.clock.reset();
        self.notice.clear();
        self.paused = false;
        self.repaint();
    }

    fn repaint(&mut self) {
        let kinds: Vec<_> = self.game.prototypes().iter().map(|p| p.kind).collect();
        self.palette = Palette::generate(kinds, &mut self.palette_rng);
    }

    fn observe_lock(&mut self) {
        if let Some(event) = self.game.take_lock_event() {
            if event.cleared() {
                self.notice.show(event.level);
            }
        }
    }
}
