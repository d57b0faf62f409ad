//! The 3x3 grid of cells.

use crate::position::Position;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// 3x3 tic-tac-toe board.
///
/// Only the game engine mutates a board; everything else gets a
/// shared reference or a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.offset()]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.offset()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(mark))
            .count()
    }

    /// Counts the non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(3)
    }

    /// Iterates over empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |pos| self.is_empty(*pos))
    }
}

/// Renders the grid. The alternate form (`{:#}`) numbers empty cells.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hints = f.alternate();
        for (row, cells) in self.rows().enumerate() {
            if row > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_str("|")?;
                }
                match cell {
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                    Cell::Empty if hints => write!(f, "{}", row * 3 + col + 1)?,
                    Cell::Empty => f.write_str(" ")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|pos| board.is_empty(*pos)));
        assert_eq!(board.filled(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_count() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Marked(Mark::X));
        board.set(Position::TopLeft, Cell::Marked(Mark::O));
        assert_eq!(board.get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(board.count(Mark::X), 1);
        assert_eq!(board.count(Mark::O), 1);
        assert_eq!(board.empty_positions().count(), 7);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Marked(Mark::X));
        board.set(Position::Center, Cell::Marked(Mark::O));
        assert_eq!(board.to_string(), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
        assert_eq!(format!("{board:#}"), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
