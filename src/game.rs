//! Core game session: the state machine tying grid, pieces and scoring together

use crate::board::{Board, Cell};
use crate::collision::collides;
use crate::generator::ShapeGenerator;
use crate::piece::Piece;
use crate::score::Score;
use crate::tetromino::{Color, Shape};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Session phase
///
/// `GameOver` is terminal until an explicit [`Game::restart`]; there is
/// no automatic return to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Running,
    GameOver,
}

/// A single game session
///
/// The host owns exactly one of these and drives it synchronously:
/// commands apply immediately, and gravity advances only through the
/// elapsed time handed to [`Game::advance_time`]. Commands issued
/// outside the `Running` phase are deterministic no-ops; queries are
/// valid in every phase.
pub struct Game {
    /// The playfield
    pub board: Board,
    /// The falling piece; absent until the first start
    pub current_piece: Option<Piece>,
    /// Score and level tracking
    pub score: Score,
    /// Pre-generated preview of the shape that spawns next
    next_shape: Shape,
    generator: ShapeGenerator,
    phase: Phase,
    /// Time accumulated toward the next gravity step
    fall_timer: Duration,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a session with an entropy-seeded shape stream
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a session with a reproducible shape stream
    pub fn with_seed(seed: u64) -> Self {
        let mut generator = ShapeGenerator::with_seed(seed);
        let next_shape = generator.next();
        Self {
            board: Board::new(),
            current_piece: None,
            score: Score::new(),
            next_shape,
            generator,
            phase: Phase::NotStarted,
            fall_timer: Duration::ZERO,
        }
    }

    /// Current session phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cell state at (row, col); coordinates outside the grid read as empty
    pub fn grid_cell(&self, row: usize, col: usize) -> Cell {
        self.board.get(row as i32, col as i32).unwrap_or_default()
    }

    /// Absolute (x, y, color) of every occupied cell of the falling piece
    pub fn current_piece_cells(&self) -> Vec<(i32, i32, Color)> {
        match &self.current_piece {
            Some(piece) => piece
                .occupied_cells()
                .map(|(x, y)| (x, y, piece.color))
                .collect(),
            None => Vec::new(),
        }
    }

    /// The shape that spawns once the current piece locks
    pub fn next_piece_shape(&self) -> &Shape {
        &self.next_shape
    }

    /// Current points
    pub fn score(&self) -> u64 {
        self.score.points
    }

    /// Current level
    pub fn level(&self) -> u32 {
        self.score.level
    }

    /// Current gravity threshold
    pub fn fall_interval(&self) -> Duration {
        self.score.fall_interval()
    }

    /// Begin play. Valid only from `NotStarted`; otherwise a no-op.
    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            return;
        }
        tracing::info!("session started");
        self.begin();
    }

    /// Throw the session state away and begin a fresh game.
    ///
    /// The only way out of `GameOver`; also valid mid-game.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.score = Score::new();
        self.next_shape = self.generator.next();
        tracing::info!("session restarted");
        self.begin();
    }

    /// Promote the preview to a freshly spawned piece and enter `Running`
    fn begin(&mut self) {
        let shape = std::mem::replace(&mut self.next_shape, self.generator.next());
        self.current_piece = Some(Piece::spawn(shape));
        self.fall_timer = Duration::ZERO;
        self.phase = Phase::Running;
    }

    /// Move the falling piece one column left, if it fits
    pub fn move_left(&mut self) {
        self.shift(-1, 0);
    }

    /// Move the falling piece one column right, if it fits
    pub fn move_right(&mut self) {
        self.shift(1, 0);
    }

    fn shift(&mut self, dx: i32, dy: i32) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = &mut self.current_piece else {
            return;
        };
        if !collides(piece, &self.board, dx, dy) {
            piece.translate(dx, dy);
        }
    }

    /// One manual downward step.
    ///
    /// Resets the gravity timer on success so gravity does not
    /// double-apply right after; a blocked step does not lock the piece.
    pub fn soft_down(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = &mut self.current_piece else {
            return;
        };
        if !collides(piece, &self.board, 0, 1) {
            piece.translate(0, 1);
            self.fall_timer = Duration::ZERO;
        }
    }

    /// Rotate the falling piece clockwise.
    ///
    /// A rotation that would collide is rolled back, leaving the piece
    /// exactly as it was; there is no wall-kick correction.
    pub fn rotate(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = &mut self.current_piece else {
            return;
        };
        let previous = piece.cells.clone();
        piece.rotate_clockwise();
        if collides(piece, &self.board, 0, 0) {
            piece.cells = previous;
        }
    }

    /// Drop the falling piece straight down and lock it immediately
    pub fn hard_drop(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = &mut self.current_piece else {
            return;
        };
        while !collides(piece, &self.board, 0, 1) {
            piece.translate(0, 1);
        }
        self.lock();
        self.fall_timer = Duration::ZERO;
    }

    /// Inject elapsed wall-clock (or synthetic) time.
    ///
    /// Once the accumulated time reaches the fall interval, the piece
    /// takes one gravity step - down if the cell below is free,
    /// otherwise it locks - and the accumulator restarts from zero.
    pub fn advance_time(&mut self, elapsed: Duration) {
        if self.phase != Phase::Running {
            return;
        }
        self.fall_timer += elapsed;
        if self.fall_timer < self.score.fall_interval() {
            return;
        }
        self.fall_timer = Duration::ZERO;
        let grounded = match &self.current_piece {
            Some(piece) => collides(piece, &self.board, 0, 1),
            None => return,
        };
        if grounded {
            self.lock();
        } else if let Some(piece) = &mut self.current_piece {
            piece.translate(0, 1);
        }
    }

    /// Merge the current piece, clear lines, update scoring and promote
    /// the preview. Ends the game when the fresh piece has no room.
    fn lock(&mut self) {
        let Some(piece) = self.current_piece.take() else {
            return;
        };
        self.board.merge(&piece);
        let cleared = self.board.clear_full_lines();
        let level_before = self.score.level;
        self.score.add_clear(cleared);
        tracing::debug!("piece locked at ({}, {})", piece.x, piece.y);
        if cleared > 0 {
            tracing::info!(
                "cleared {} line(s), score {} level {}",
                cleared,
                self.score.points,
                self.score.level
            );
        }
        if self.score.level > level_before {
            tracing::info!("level up to {}", self.score.level);
        }

        let shape = std::mem::replace(&mut self.next_shape, self.generator.next());
        let promoted = Piece::spawn(shape);
        let blocked = collides(&promoted, &self.board, 0, 0);
        self.current_piece = Some(promoted);
        if blocked {
            self.phase = Phase::GameOver;
            tracing::info!("game over with {} points", self.score.points);
        }
    }
}
