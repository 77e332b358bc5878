//! Shared types module - data and constants used across the workspace
//!
//! Everything here is plain data with no external dependencies, so the engine,
//! the input mapping, and the host driver can all agree on the same vocabulary.
//!
//! # Cells
//!
//! A board cell is a [`Cell`]: `0` means empty, any positive value is the
//! shape-type identifier of the prototype that filled it. Identifiers are
//! assigned sequentially from `1` for each game session.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame interval (~60 FPS) |
//! | `DEFAULT_TICK_MS` | 800 | Gravity interval when the speed table is empty |
//! | `LEVEL_NOTICE_MS` | 800 | How long the level notification stays visible |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, EMPTY_CELL, LINE_SCORES};
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//! assert!(action.is_gameplay());
//!
//! assert_eq!(EMPTY_CELL, 0);
//! assert_eq!(LINE_SCORES[4], 800);
//! ```

/// A board cell: `EMPTY_CELL` or a shape-type identifier.
pub type Cell = u8;

/// Identifier of a shape prototype within one game session (always `>= 1`).
pub type ShapeId = u8;

/// The value of an empty board cell.
pub const EMPTY_CELL: Cell = 0;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval used when a speed table has no entries.
pub const DEFAULT_TICK_MS: u32 = 800;

/// Level notification lifetime (800ms), rescheduled on every new clear.
pub const LEVEL_NOTICE_MS: u32 = 800;

/// Smallest board width accepted by configuration validation.
pub const MIN_COLS: usize = 6;

/// Smallest board height accepted by configuration validation.
pub const MIN_ROWS: usize = 10;

/// Largest number of shape prototypes per session.
pub const MAX_SHAPE_TYPES: usize = 50;

/// Smallest shape bounding box edge.
pub const MIN_SHAPE_SIZE: usize = 2;

/// Accepted range for lines-per-level.
pub const MIN_LINES_PER_LEVEL: u32 = 1;
pub const MAX_LINES_PER_LEVEL: u32 = 20;

/// Line clear scoring table
///
/// Base points for clearing N lines in a single lock:
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
///
/// Larger simultaneous clears score 0 base points. Points are multiplied by the
/// current level (1-based).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Logical actions delivered by the input source
///
/// The first six map one-to-one onto the configurable key bindings and onto the
/// engine's per-action entry points. `TogglePause` and `Restart` are handled by
/// the host and stay deliverable while the game is paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it is resting
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to its resting position and lock it
    HardDrop,
    /// Swap the active piece with the held prototype
    Hold,
    /// Pause or resume the game
    TogglePause,
    /// Start a new game with the current configuration
    Restart,
}

impl GameAction {
    pub const ALL: [GameAction; 8] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::TogglePause,
        GameAction::Restart,
    ];

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("SOFTDROP"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("spin"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "hold" => Some(GameAction::Hold),
            "togglepause" | "pause" => Some(GameAction::TogglePause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
        }
    }

    /// Whether this action moves the active piece (suppressed while paused).
    pub fn is_gameplay(&self) -> bool {
        !matches!(self, GameAction::TogglePause | GameAction::Restart)
    }
}

/// Event recorded each time a piece locks.
///
/// The host takes it after an engine call to drive the transient level
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded for this lock
    pub score_delta: u32,
    /// Level after the lock's lines were counted
    pub level: u32,
    pub leveled_up: bool,
}

impl LockEvent {
    /// Whether this lock cleared any rows
    pub fn cleared(&self) -> bool {
        self.lines_cleared > 0
    }
}
