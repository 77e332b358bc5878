//! Collision module - the single legality predicate
//!
//! Moves, soft drop, rotation, hard-drop probing, ghost projection and spawn
//! placement all ask the same question through [`collides`].

use crate::board::Board;
use crate::shape::{Piece, Shape};

/// Whether `piece`, translated by `(dx, dy)`, would collide on `board`.
///
/// When `shape_override` is given it replaces the piece's own shape, which is
/// how a prospective rotation is tested before it is committed. A cell
/// collides when it lies outside `[0, cols)`, at or below `rows`, or on a
/// filled board cell. Cells above the top row do not collide.
pub fn collides(
    board: &Board,
    piece: &Piece,
    dx: i32,
    dy: i32,
    shape_override: Option<&Shape>,
) -> bool {
    let shape = shape_override.unwrap_or(&piece.shape);
    let (x, y) = (piece.x + dx, piece.y + dy);
    shape
        .filled()
        .any(|(r, c)| board.is_blocked(x + c as i32, y + r as i32))
}

/// Lowest `y` the piece reaches by repeated one-row probes from where it is.
///
/// Returns the piece's own `y` when it cannot move down at all.
pub fn landing_y(board: &Board, piece: &Piece) -> i32 {
    let mut drop = 0;
    while !collides(board, piece, 0, drop + 1, None) {
        drop += 1;
        // A shape with no filled cells never collides; stop at the floor.
        if piece.y + drop >= board.rows() as i32 {
            break;
        }
    }
    piece.y + drop
}
