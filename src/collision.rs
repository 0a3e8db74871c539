//! Collision testing between a piece and the playfield

use crate::board::{Board, GRID_HEIGHT, GRID_WIDTH};
use crate::piece::Piece;

/// Would `piece`, offset by (dx, dy), overlap a wall, the floor, or a
/// filled cell?
///
/// Pure: nothing is mutated, and every movement, rotation and spawn
/// decision goes through here before the piece is touched. A cell above
/// the top row (y < 0) is not a collision by itself, so a piece may
/// legally overhang the top edge.
pub fn collides(piece: &Piece, board: &Board, dx: i32, dy: i32) -> bool {
    piece.occupied_cells().any(|(x, y)| {
        let (x, y) = (x + dx, y + dy);
        if x < 0 || x >= GRID_WIDTH as i32 || y >= GRID_HEIGHT as i32 {
            return true;
        }
        board.get(y, x).is_some_and(|cell| cell.is_filled())
    })
}
