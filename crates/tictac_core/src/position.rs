//! Board positions, addressed by 1-based index or (row, column).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell position on the 3x3 board.
///
/// Variants are declared row-major, so the discriminant is the
/// zero-based offset into the board and the 1-based index players type
/// is `offset + 1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
#[repr(u8)]
pub enum Position {
    /// Top-left (index 1)
    TopLeft,
    /// Top-center (index 2)
    TopCenter,
    /// Top-right (index 3)
    TopRight,
    /// Middle-left (index 4)
    MiddleLeft,
    /// Center (index 5)
    Center,
    /// Middle-right (index 6)
    MiddleRight,
    /// Bottom-left (index 7)
    BottomLeft,
    /// Bottom-center (index 8)
    BottomCenter,
    /// Bottom-right (index 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from its 1-based row-major index (1..=9).
    #[instrument]
    pub fn from_index(index: u8) -> Option<Self> {
        let offset = usize::from(index).checked_sub(1)?;
        Self::ALL.get(offset).copied()
    }

    /// Creates a position from zero-based (row, column) coordinates.
    #[instrument]
    pub fn from_coords(row: u8, column: u8) -> Option<Self> {
        if row > 2 || column > 2 {
            return None;
        }
        Self::from_index(row * 3 + column + 1)
    }

    /// Returns the 1-based row-major index (1..=9).
    pub fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the zero-based offset into the board's cell array.
    pub fn offset(self) -> usize {
        usize::from(self as u8)
    }

    /// Returns the zero-based row.
    pub fn row(self) -> u8 {
        self as u8 / 3
    }

    /// Returns the zero-based column.
    pub fn column(self) -> u8 {
        self as u8 % 3
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.index())
    }
}

/// Raw input that does not name a cell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PositionError {
    /// Input is not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),

    /// Input is an integer outside 1..=9.
    #[display("{} is not between 1 - 9", _0)]
    OutOfRange(i64),
}

impl std::error::Error for PositionError {}

impl TryFrom<i64> for Position {
    type Error = PositionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Position::from_index)
            .ok_or(PositionError::OutOfRange(value))
    }
}

impl FromStr for Position {
    type Err = PositionError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| PositionError::NotANumber(trimmed.to_string()))?;
        Position::try_from(value)
    }
}
