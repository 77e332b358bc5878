use crate::board::Board;
use crate::shape::{Piece, PieceProto};

/// Owned copy of everything a renderer needs after an engine call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Settled cells only
    pub board: Board,
    /// Settled cells with the active piece stamped in
    pub display: Board,
    pub active: Option<Piece>,
    /// Landing projection of the active piece, display only
    pub ghost: Option<Piece>,
    pub next: Option<Piece>,
    pub hold: Option<PieceProto>,
    pub prototypes: Vec<PieceProto>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub tick_interval_ms: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && self.active.is_some()
    }
}
