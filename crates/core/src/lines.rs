//! Line clearing - removes full rows in one pass over a post-lock board
//!
//! Full rows are dropped, the surviving rows keep their order, and fresh empty
//! rows are prepended so the grid keeps its height. This matches scanning
//! bottom to top, removing each full row and re-examining the same index.

use crate::board::Board;
use crate::types::{Cell, EMPTY_CELL};

/// Clear every full row of `board`.
///
/// Returns the new board and the number of rows removed (0 if none, in which
/// case the returned board equals the input).
pub fn clear_lines(board: &Board) -> (Board, u32) {
    let cols = board.cols();
    let rows = board.rows();

    let kept: Vec<&[Cell]> = board
        .iter_rows()
        .filter(|row| row.iter().any(|&cell| cell == EMPTY_CELL))
        .collect();
    let cleared = rows - kept.len();
    if cleared == 0 {
        return (board.clone(), 0);
    }

    let mut out = Board::new(rows, cols);
    for (i, row) in kept.iter().enumerate() {
        let y = (cleared + i) as i32;
        for (x, &cell) in row.iter().enumerate() {
            out.set(x as i32, y, cell);
        }
    }

    log::debug!("cleared {} line(s)", cleared);
    (out, cleared as u32)
}
