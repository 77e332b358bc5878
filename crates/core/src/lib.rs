//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of a falling-block puzzle whose piece shapes
//! are generated procedurally for every game. It has no dependencies on
//! terminal, timing or input handling:
//!
//! - **Deterministic**: the same seed and actions produce the same game
//! - **Clock-free**: the host decides when gravity ticks happen
//! - **Immutable boards**: locking and clearing return new boards
//!
//! # Module Structure
//!
//! - [`shape`]: square shape matrices, prototypes and live pieces
//! - [`board`]: the settled-cell grid, overlay and lock
//! - [`rotation`]: 90° clockwise rotation
//! - [`collision`]: the collision predicate and landing projection
//! - [`lines`]: full-row removal
//! - [`scoring`]: line scores and level progression
//! - [`generator`]: random prototype generation from a [`GameConfig`]
//! - [`config`]: configuration, defaults and validation
//! - [`rng`]: session RNG and uniform piece selection
//! - [`game_state`]: the piece lifecycle for one session
//! - [`snapshot`]: owned render state
//!
//! # Game Rules
//!
//! - Pieces spawn horizontally centered on the top row
//! - Rotation is clockwise only and is refused if the result collides (no kicks)
//! - Cells above the top edge never collide; pieces may overhang it
//! - A piece locks when a soft drop or gravity tick cannot move it down
//! - Clearing N lines scores `[0, 100, 300, 500, 800][N] × level`
//! - The level is `lines / linesPerLevel + 1`
//! - Hold swaps freely with no per-piece limit
//! - The game ends when a newly spawned piece collides
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState};
//! use blockfall_core::types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(!game.game_over());
//! assert_eq!(game.level(), 1);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod generator;
pub mod lines;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{collides, landing_y};
pub use config::{ConfigError, GameConfig, KeyBindings, SpeedEntry};
pub use game_state::{GameState, Phase};
pub use generator::generate_prototypes;
pub use lines::clear_lines;
pub use rng::{entropy_rng, seeded_rng, SessionRng};
pub use rotation::rotate;
pub use scoring::{level_for_lines, line_score};
pub use shape::{Piece, PieceProto, Shape};
pub use snapshot::GameSnapshot;
