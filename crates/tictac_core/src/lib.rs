//! Tic-tac-toe game core.
//!
//! A `BoardGame` owns a 3x3 board and the side to move, accepts moves,
//! rejects occupied cells and finished games, and derives its state
//! (in progress, won, drawn) from the board on demand.
//!
//! # Example
//!
//! ```
//! use tictac_core::{BoardGame, GameState, Mark, MoveError, Position};
//!
//! let mut game = BoardGame::new();
//! game.place_mark(Position::Center)?;
//! assert_eq!(game.to_move(), Mark::O);
//! assert_eq!(
//!     game.place_mark(Position::Center),
//!     Err(MoveError::CellOccupied(Position::Center))
//! );
//! assert_eq!(game.evaluate(), GameState::InProgress);
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::Board;
pub use game::{BoardGame, RecordError, Snapshot};
pub use position::{Position, PositionError};
pub use rules::{LINES, Line, LineKind};
pub use types::{Cell, GameState, Mark};
