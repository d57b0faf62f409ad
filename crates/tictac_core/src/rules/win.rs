//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which kind of line three cells form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Row 1-3, top to bottom.
    #[display("row {}", _0)]
    Row(u8),
    /// Column 1-3, left to right.
    #[display("column {}", _0)]
    Column(u8),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Three cells that win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    cells: [Position; 3],
}

impl Line {
    const fn new(kind: LineKind, cells: [Position; 3]) -> Self {
        Self { kind, cells }
    }

    /// Which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three cells, in board order.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// Returns the mark filling all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.cells.map(|pos| board.get(pos));
        match a.mark() {
            Some(mark) if a == b && b == c => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.cells.map(Position::index);
        write!(f, "{} ({a}-{b}-{c})", self.kind)
    }
}

/// Winning lines in the order they are checked: rows, columns, main
/// diagonal, anti-diagonal.
pub const LINES: [Line; 8] = {
    use Position::*;
    [
        // Rows
        Line::new(LineKind::Row(1), [TopLeft, TopCenter, TopRight]),
        Line::new(LineKind::Row(2), [MiddleLeft, Center, MiddleRight]),
        Line::new(LineKind::Row(3), [BottomLeft, BottomCenter, BottomRight]),
        // Columns
        Line::new(LineKind::Column(1), [TopLeft, MiddleLeft, BottomLeft]),
        Line::new(LineKind::Column(2), [TopCenter, Center, BottomCenter]),
        Line::new(LineKind::Column(3), [TopRight, MiddleRight, BottomRight]),
        // Diagonals
        Line::new(LineKind::MainDiagonal, [TopLeft, Center, BottomRight]),
        Line::new(LineKind::AntiDiagonal, [TopRight, Center, BottomLeft]),
    ]
};

/// Returns the first uniformly marked line and its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    LINES
        .iter()
        .find_map(|line| line.owner(board).map(|mark| (*line, mark)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a side has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}
