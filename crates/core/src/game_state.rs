//! Game state module - the piece lifecycle for one session
//!
//! This module ties together all core components: board, shapes, collision,
//! line clearing and scoring. It is the only stateful part of the engine and
//! owns no clock: the host calls [`GameState::tick`] on its own schedule and
//! forwards player actions to the per-action methods.
//!
//! Every public operation is a single synchronous transition. An illegal
//! request leaves the state untouched and returns `false`; the only terminal
//! condition is game over, entered when a spawned piece collides and left only
//! through [`GameState::new_game`] or [`GameState::reset_with`].

use rand::Rng;

use crate::board::Board;
use crate::collision::{collides, landing_y};
use crate::config::GameConfig;
use crate::generator::generate_prototypes;
use crate::lines::clear_lines;
use crate::rng::{entropy_rng, random_piece, seeded_rng, SessionRng};
use crate::rotation::rotate;
use crate::scoring::{level_for_lines, line_score};
use crate::shape::{Piece, PieceProto};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, LockEvent};

/// Observable lifecycle phase
///
/// Locking (stamp, clear, score, respawn) happens inside a single call and is
/// never observable between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No active piece yet
    Empty,
    /// A piece is falling and accepts input
    Active,
    /// A spawn collided; only a reset leaves this phase
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R = SessionRng> {
    config: GameConfig,
    prototypes: Vec<PieceProto>,
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    hold: Option<PieceProto>,
    score: u32,
    lines: u32,
    game_over: bool,
    /// Last lock event (consumed by the host).
    last_event: Option<LockEvent>,
    rng: R,
}

impl GameState<SessionRng> {
    /// Start a reproducible game with the given RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, seeded_rng(seed))
    }

    /// Start a game seeded from the thread RNG
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::with_rng(config, entropy_rng())
    }
}

impl<R: Rng> GameState<R> {
    /// Start a game driven by any random source
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let mut state = Self {
            board: Board::new(config.rows, config.cols),
            config,
            prototypes: Vec::new(),
            active: None,
            next: None,
            hold: None,
            score: 0,
            lines: 0,
            game_over: false,
            last_event: None,
            rng,
        };
        let config = state.config.clone();
        state.new_game(config);
        state
    }

    /// Reset the session under `config`: fresh prototypes, empty board.
    pub fn new_game(&mut self, config: GameConfig) {
        let prototypes = generate_prototypes(&config, &mut self.rng);
        let board = Board::new(config.rows, config.cols);
        self.config = config;
        self.reset_with(prototypes, board);
    }

    /// Reset the session onto a given prototype set and board, then spawn.
    pub fn reset_with(&mut self, prototypes: Vec<PieceProto>, board: Board) {
        self.prototypes = prototypes;
        self.board = board;
        self.active = None;
        self.next = None;
        self.hold = None;
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
        self.last_event = None;

        log::info!(
            "new game: {}x{} board, {} prototype(s)",
            self.board.cols(),
            self.board.rows(),
            self.prototypes.len()
        );
        self.spawn();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn prototypes(&self) -> &[PieceProto] {
        &self.prototypes
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn held(&self) -> Option<&PieceProto> {
        self.hold.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Level derived from cumulative lines (1-based)
    pub fn level(&self) -> u32 {
        level_for_lines(self.lines, self.config.lines_per_level)
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.active.is_some() {
            Phase::Active
        } else {
            Phase::Empty
        }
    }

    /// Gravity interval the host should use at the current level
    pub fn tick_interval_ms(&self) -> u32 {
        self.config.tick_interval_ms(self.level())
    }

    /// Take and clear the last lock event.
    pub fn take_lock_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Landing projection of the active piece (display only)
    pub fn ghost(&self) -> Option<Piece> {
        let active = self.active.as_ref()?;
        Some(Piece {
            y: landing_y(&self.board, active),
            ..active.clone()
        })
    }

    /// Board with the active piece stamped in (display only)
    pub fn display_board(&self) -> Board {
        match &self.active {
            Some(piece) => self.board.overlay(piece),
            None => self.board.clone(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            display: self.display_board(),
            active: self.active.clone(),
            ghost: self.ghost(),
            next: self.next.clone(),
            hold: self.hold.clone(),
            prototypes: self.prototypes.clone(),
            score: self.score,
            level: self.level(),
            lines: self.lines,
            tick_interval_ms: self.tick_interval_ms(),
            game_over: self.game_over,
        }
    }

    /// Promote the queued piece (or a random one) to active and queue another.
    ///
    /// Returns false and ends the game if the new piece collides at spawn.
    fn spawn(&mut self) -> bool {
        let cols = self.board.cols();
        let piece = match self.next.take() {
            Some(queued) => queued.respawned(cols),
            None => random_piece(&self.prototypes, cols, &mut self.rng),
        };
        let queued = random_piece(&self.prototypes, cols, &mut self.rng);

        if collides(&self.board, &piece, 0, 0, None) {
            self.enter_game_over();
            return false;
        }

        log::debug!("spawned kind={} at x={}", piece.kind, piece.x);
        self.active = Some(piece);
        self.next = Some(queued);
        true
    }

    fn enter_game_over(&mut self) {
        log::info!(
            "game over: score={} level={} lines={}",
            self.score,
            self.level(),
            self.lines
        );
        self.game_over = true;
        self.active = None;
        self.next = None;
    }

    /// Translate the active piece if the target is free.
    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        if collides(&self.board, active, dx, dy, None) {
            return false;
        }
        self.active = Some(active.shifted(dx, dy));
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move down one row, or lock the piece where it rests.
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over || self.active.is_none() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_active();
        }
        true
    }

    /// Gravity step; same transition as a soft drop.
    pub fn tick(&mut self) -> bool {
        self.soft_drop()
    }

    /// Rotate clockwise in place; refused outright if the result collides.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        let rotated = rotate(&active.shape);
        if collides(&self.board, active, 0, 0, Some(&rotated)) {
            return false;
        }
        self.active = Some(Piece {
            shape: rotated,
            ..active.clone()
        });
        true
    }

    /// Drop to the landing row and lock immediately.
    pub fn hard_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        let y = landing_y(&self.board, active);
        self.active = Some(Piece {
            y,
            ..active.clone()
        });
        self.lock_active();
        true
    }

    /// Swap the active piece with the held prototype.
    ///
    /// The active piece is stored as a prototype in its current rotation. With
    /// an empty slot the queued piece spawns. With an occupied slot the held prototype spawns instead,
    /// unless it would collide, in which case nothing changes. Holds are not
    /// limited per piece.
    pub fn hold(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        let current = PieceProto::new(active.kind, active.shape.clone());

        match self.hold.take() {
            None => {
                if self.spawn() {
                    self.hold = Some(current);
                }
                true
            }
            Some(held) => {
                let swapped = Piece::spawn(&held, self.board.cols());
                if collides(&self.board, &swapped, 0, 0, None) {
                    self.hold = Some(held);
                    return false;
                }
                self.active = Some(swapped);
                self.hold = Some(current);
                true
            }
        }
    }

    /// Stamp the active piece, clear lines, score, then spawn the follow-on piece.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let locked = self.board.lock(&piece);
        let (cleared, lines_cleared) = clear_lines(&locked);
        self.board = cleared;

        let level_before = self.level();
        let score_delta = line_score(lines_cleared, level_before);
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(lines_cleared);
        let level = self.level();
        let leveled_up = level > level_before;

        if leveled_up {
            log::info!("level up: {} -> {}", level_before, level);
        }
        self.last_event = Some(LockEvent {
            lines_cleared,
            score_delta,
            level,
            leveled_up,
        });

        self.spawn();
    }

    /// Dispatch a gameplay action.
    ///
    /// `Restart` starts a new game with the current config; `TogglePause`
    /// belongs to the host and is a no-op here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Hold => self.hold(),
            GameAction::Restart => {
                let config = self.config.clone();
                self.new_game(config);
                true
            }
            GameAction::TogglePause => false,
        }
    }
}
