//! Shape catalog: the seven canonical piece geometries and colors
//!
//! Catalog patterns are static and never mutated; building a [`Shape`]
//! copies the pattern into a fresh matrix, so a live rotating piece
//! never aliases the catalog entry.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The 7 piece geometries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tetromino {
    I, // 1x4 bar
    O, // 2x2 square
    T,
    L,
    J,
    Z,
    S,
}

impl Tetromino {
    /// All geometries, in catalog order
    pub fn all() -> [Tetromino; 7] {
        [
            Tetromino::I,
            Tetromino::O,
            Tetromino::T,
            Tetromino::L,
            Tetromino::J,
            Tetromino::Z,
            Tetromino::S,
        ]
    }

    /// Canonical spawn pattern, rows top to bottom, 1 = occupied
    fn pattern(&self) -> &'static [&'static [u8]] {
        match self {
            Tetromino::I => &[&[1, 1, 1, 1]],
            Tetromino::O => &[&[1, 1], &[1, 1]],
            Tetromino::T => &[&[1, 1, 1], &[0, 1, 0]],
            Tetromino::L => &[&[1, 1, 1], &[1, 0, 0]],
            Tetromino::J => &[&[1, 1, 1], &[0, 0, 1]],
            Tetromino::Z => &[&[1, 1, 0], &[0, 1, 1]],
            Tetromino::S => &[&[0, 1, 1], &[1, 1, 0]],
        }
    }

    /// Build a fresh occupancy matrix for this geometry
    pub fn grid(&self) -> Vec<Vec<bool>> {
        self.pattern()
            .iter()
            .map(|row| row.iter().map(|&cell| cell != 0).collect())
            .collect()
    }
}

/// The 7 piece colors
///
/// An abstract tag: the engine reports it back out of the grid and the
/// renderer decides what it looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Cyan,
    Yellow,
    Magenta,
    Red,
    Green,
    Blue,
    Orange,
}

impl Color {
    /// All colors, in catalog order
    pub fn all() -> [Color; 7] {
        [
            Color::Cyan,
            Color::Yellow,
            Color::Magenta,
            Color::Red,
            Color::Green,
            Color::Blue,
            Color::Orange,
        ]
    }
}

/// A piece geometry paired with its color tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Occupancy matrix, rows top to bottom
    pub cells: Vec<Vec<bool>>,
    /// Color tag stamped into the grid when a piece of this shape locks
    pub color: Color,
}

impl Shape {
    /// Instantiate a catalog geometry with a color
    pub fn new(kind: Tetromino, color: Color) -> Self {
        Self {
            cells: kind.grid(),
            color,
        }
    }

    /// Uniformly random geometry paired with an independently uniform color.
    ///
    /// Geometry and color are two separate draws; any of the 49
    /// combinations can come up.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let kind = Tetromino::all()[rng.gen_range(0..7)];
        let color = Color::all()[rng.gen_range(0..7)];
        Self::new(kind, color)
    }

    /// Width of the occupancy matrix in columns
    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Height of the occupancy matrix in rows
    pub fn height(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_every_geometry_has_four_cells() {
        for kind in Tetromino::all() {
            let occupied: usize = kind
                .grid()
                .iter()
                .map(|row| row.iter().filter(|&&cell| cell).count())
                .sum();
            assert_eq!(occupied, 4, "{kind:?} should occupy 4 cells");
        }
    }

    #[test]
    fn test_grid_is_a_fresh_copy() {
        let mut grid = Tetromino::T.grid();
        grid[0][0] = false;
        // The catalog entry must be unaffected
        assert!(Tetromino::T.grid()[0][0]);
    }

    #[test]
    fn test_random_reaches_every_geometry_and_color() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut grids = HashSet::new();
        let mut colors = HashSet::new();
        for _ in 0..200 {
            let shape = Shape::random(&mut rng);
            grids.insert(shape.cells.clone());
            colors.insert(shape.color);
        }
        assert_eq!(grids.len(), 7);
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn test_shape_dimensions() {
        let bar = Shape::new(Tetromino::I, Color::Cyan);
        assert_eq!((bar.width(), bar.height()), (4, 1));
        let square = Shape::new(Tetromino::O, Color::Yellow);
        assert_eq!((square.width(), square.height()), (2, 2));
    }

    #[test]
    fn test_color_serde_round_trip() {
        let json = serde_json::to_string(&Color::Orange).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Orange);
    }
}
