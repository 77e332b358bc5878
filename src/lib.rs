//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under short names and carries the terminal
//! presentation used by the `blockfall` binary.

pub use blockfall_core as core;
pub use blockfall_host as host;
pub use blockfall_input as input;
pub use blockfall_types as types;

pub mod term;
