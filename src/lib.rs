//! A falling-block puzzle engine
//!
//! `blockfall` is the game-state half of a falling-block game: the
//! playfield grid, the live piece, collision rules, line clearing and
//! score/level/speed progression. It draws nothing and reads no input -
//! a host loop feeds it commands plus elapsed time and renders from the
//! query surface. Gravity is driven entirely by the time the host
//! injects, so a test (or a replay) can feed synthetic durations and
//! get identical results.
//!
//! # Example
//!
//! ```
//! use blockfall::{Game, Phase};
//! use std::time::Duration;
//!
//! let mut game = Game::with_seed(42);
//! game.start();
//! assert_eq!(game.phase(), Phase::Running);
//!
//! // Host loop: apply input, then hand over the frame's elapsed time.
//! game.move_left();
//! game.rotate();
//! game.advance_time(Duration::from_millis(1100)); // one gravity step
//!
//! // Render from the query surface.
//! for (x, y, color) in game.current_piece_cells() {
//!     let _ = (x, y, color);
//! }
//! let _ = (game.score(), game.level(), game.next_piece_shape());
//! ```

pub mod board;
pub mod collision;
pub mod game;
pub mod generator;
pub mod piece;
pub mod score;
pub mod tetromino;

pub use board::{Board, Cell, GRID_HEIGHT, GRID_WIDTH};
pub use collision::collides;
pub use game::{Game, Phase};
pub use generator::ShapeGenerator;
pub use piece::Piece;
pub use score::Score;
pub use tetromino::{Color, Shape, Tetromino};
