//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering. It names `crossterm` key
//! events with DOM-style key codes and maps them, through the configured
//! [`KeyBindings`](crate::core::KeyBindings), into
//! [`GameAction`](crate::types::GameAction)s.

pub mod map;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use map::{key_code_name, should_quit, KeyMap, PAUSE_CODE, RESTART_CODE};
