//! Host module - the scheduler side of the engine boundary
//!
//! The engine owns no clock and no event queue. This crate supplies them for a
//! frame-driven host:
//!
//! - [`scheduler`]: gravity clock fed with elapsed milliseconds
//! - [`notice`]: the level banner countdown
//! - [`palette`]: per-shape display colors
//! - [`driver`]: pause gate and session lifecycle around a [`GameState`](crate::core::GameState)
//!
//! # Example
//!
//! ```
//! use blockfall_host::Driver;
//! use blockfall_host::core::GameConfig;
//! use blockfall_host::types::{GameAction, FRAME_MS};
//!
//! let mut driver = Driver::new(GameConfig::default(), Some(7));
//! driver.handle(GameAction::MoveLeft);
//! driver.advance(FRAME_MS);
//! assert!(!driver.paused());
//! ```

pub mod driver;
pub mod notice;
pub mod palette;
pub mod scheduler;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use driver::Driver;
pub use notice::LevelNotice;
pub use palette::{Palette, Rgb};
pub use scheduler::GravityClock;
