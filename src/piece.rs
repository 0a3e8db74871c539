//! Active falling piece logic

use crate::board::GRID_WIDTH;
use crate::tetromino::{Color, Shape};

/// An active falling piece
///
/// Owns a working copy of its shape's occupancy matrix plus a top-left
/// origin in grid coordinates. The piece has no grid awareness:
/// `translate` and `rotate_clockwise` apply unconditionally, and the
/// session validates every move through the collision resolver first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Occupancy matrix in the current orientation, rows top to bottom
    pub cells: Vec<Vec<bool>>,
    /// Color tag reported to the renderer and stamped into the grid
    pub color: Color,
    /// Grid column of the matrix's left edge
    pub x: i32,
    /// Grid row of the matrix's top edge
    pub y: i32,
}

impl Piece {
    /// Place a shape at its spawn position: horizontally centered, top row
    pub fn spawn(shape: Shape) -> Self {
        let width = shape.width() as i32;
        Self {
            x: GRID_WIDTH as i32 / 2 - width / 2,
            y: 0,
            cells: shape.cells,
            color: shape.color,
        }
    }

    /// Shift the origin by (dx, dy). No bounds checks here; callers
    /// validate the destination first.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Replace the matrix with its 90-degree-clockwise transform.
    ///
    /// Does not check collision; the caller validates the new
    /// orientation and rolls it back if it does not fit.
    pub fn rotate_clockwise(&mut self) {
        self.cells = rotated_clockwise(&self.cells);
    }

    /// Absolute grid coordinates of every occupied cell
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(col, _)| (self.x + col as i32, self.y + row as i32))
        })
    }
}

/// 90-degree clockwise rotation: reverse the rows, then transpose.
/// Always builds a fresh matrix; a rows x cols input comes back
/// cols x rows.
fn rotated_clockwise(cells: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let rows = cells.len();
    let cols = cells.first().map_or(0, Vec::len);
    (0..cols)
        .map(|col| (0..rows).map(|row| cells[rows - 1 - row][col]).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetromino::Tetromino;

    fn piece(kind: Tetromino) -> Piece {
        Piece::spawn(Shape::new(kind, Color::Cyan))
    }

    #[test]
    fn test_spawn_is_centered_on_the_top_row() {
        let bar = piece(Tetromino::I);
        assert_eq!((bar.x, bar.y), (3, 0));
        let square = piece(Tetromino::O);
        assert_eq!((square.x, square.y), (4, 0));
        let tee = piece(Tetromino::T);
        assert_eq!((tee.x, tee.y), (4, 0));
    }

    #[test]
    fn test_translate_is_unconditional() {
        let mut bar = piece(Tetromino::I);
        bar.translate(-10, 3);
        assert_eq!((bar.x, bar.y), (-7, 3));
    }

    #[test]
    fn test_clockwise_rotation_of_the_bar() {
        let mut bar = piece(Tetromino::I);
        bar.rotate_clockwise();
        assert_eq!(bar.cells, vec![vec![true]; 4]);
    }

    #[test]
    fn test_square_rotation_is_a_no_op_in_appearance() {
        let mut square = piece(Tetromino::O);
        let before = square.cells.clone();
        square.rotate_clockwise();
        assert_eq!(square.cells, before);
    }

    #[test]
    fn test_four_rotations_restore_every_geometry() {
        for kind in Tetromino::all() {
            let mut p = piece(kind);
            let original = p.cells.clone();
            for _ in 0..4 {
                p.rotate_clockwise();
            }
            assert_eq!(p.cells, original, "{kind:?} should return to spawn orientation");
        }
    }

    #[test]
    fn test_occupied_cells_are_absolute() {
        let tee = piece(Tetromino::T);
        let cells: Vec<_> = tee.occupied_cells().collect();
        // T spawns at x=4: full top row, stem below the middle
        assert_eq!(cells, vec![(4, 0), (5, 0), (6, 0), (5, 1)]);
    }
}
