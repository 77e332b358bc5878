//! Terminal presentation: framebuffer, game view and renderer.
//!
//! The view is pure and unit-tested; only [`TerminalRenderer`] touches the
//! terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
