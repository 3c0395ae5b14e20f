//! The 7x7 board.
//!
//! `Board` owns exactly 49 [`Cell`]s, one per on-board coordinate, stored in
//! row-major order. It is the only place pieces live while in play.
//!
//! ## Fail-soft access
//!
//! Reads and writes at off-board coordinates never panic: reads return
//! `None`, writes are ignored. Legality checks rely on this to reject
//! out-of-range moves uniformly.
//!
//! ## Copies out
//!
//! Nothing handed to a caller borrows the board's storage mutably:
//! [`Board::cell`] and [`Board::cells`] return copies, and `Board` itself is
//! `Clone` for full snapshots.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::coord::{Coordinate, BOARD_SIZE};
use super::piece::Piece;
use crate::error::BoardError;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// The game board.
///
/// ```
/// use ninety_degrees::core::{Board, Color, Coordinate, Piece};
///
/// let mut board = Board::new();
/// board.place(Piece::queen(Color::White), Coordinate::new(0, 0));
///
/// assert_eq!(board.piece_at(Coordinate::new(0, 0)), Some(Piece::queen(Color::White)));
/// // Off-board reads fail soft
/// assert_eq!(board.cell(Coordinate::new(9, 9)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: Coordinate::all().map(Cell::new).collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        BOARD_SIZE
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> i32 {
        BOARD_SIZE
    }

    /// Copy of the cell at `coordinate`, or `None` if off the board.
    #[must_use]
    pub fn cell(&self, coordinate: Coordinate) -> Option<Cell> {
        coordinate.index().map(|i| self.cells[i])
    }

    /// Copies of all 49 cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    /// Occupant at `coordinate`; `None` when empty or off the board.
    #[must_use]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<Piece> {
        self.cell(coordinate).and_then(|c| c.piece())
    }

    /// Check whether `coordinate` is on the board and occupied.
    #[must_use]
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.piece_at(coordinate).is_some()
    }

    /// Place a piece, replacing any occupant. Ignored off the board.
    pub fn place(&mut self, piece: Piece, coordinate: Coordinate) {
        if let Some(i) = coordinate.index() {
            self.cells[i].place(piece);
        }
    }

    /// Remove and return the occupant at `coordinate`.
    ///
    /// Returns `None` for empty or off-board coordinates.
    pub fn remove(&mut self, coordinate: Coordinate) -> Option<Piece> {
        let i = coordinate.index()?;
        self.cells[i].remove()
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.remove();
        }
    }

    /// Iterate over occupied cells as `(coordinate, piece)` pairs.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.cells
            .iter()
            .filter_map(|c| c.piece().map(|p| (c.coordinate(), p)))
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        if cells.len() != CELL_COUNT {
            return Err(BoardError::CellCount { found: cells.len() });
        }
        for (index, (cell, expected)) in cells.iter().zip(Coordinate::all()).enumerate() {
            if cell.coordinate() != expected {
                return Err(BoardError::MisplacedCell {
                    index,
                    expected,
                    found: cell.coordinate(),
                });
            }
        }
        Ok(Self { cells })
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

/// Renders the board as seven labelled rows plus a column footer:
///
/// ```text
/// 0 RB PB PB PB -- -- --
/// ...
/// 6 -- -- -- PN PN PN RN
///   0  1  2  3  4  5  6
/// ```
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE as usize) {
            let label = row[0].coordinate().row;
            write!(f, "{}", label)?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "  {}", col)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::Color;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.cells().len(), CELL_COUNT);
        assert_eq!(board.piece_count(), 0);
        assert_eq!(board.rows(), 7);
        assert_eq!(board.columns(), 7);
        assert!(board.cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn test_cells_match_coordinates() {
        let board = Board::new();
        for coord in Coordinate::all() {
            assert_eq!(board.cell(coord).map(|c| c.coordinate()), Some(coord));
        }
    }

    #[test]
    fn test_place_and_remove() {
        let mut board = Board::new();
        let at = Coordinate::new(4, 2);

        board.place(Piece::pawn(Color::Black), at);
        assert_eq!(board.piece_at(at), Some(Piece::pawn(Color::Black)));
        assert!(board.is_occupied(at));

        assert_eq!(board.remove(at), Some(Piece::pawn(Color::Black)));
        assert!(!board.is_occupied(at));
        assert_eq!(board.remove(at), None);
    }

    #[test]
    fn test_off_board_access_fails_soft() {
        let mut board = Board::new();
        for coord in [Coordinate::new(-1, 0), Coordinate::new(0, 7), Coordinate::new(7, -3)] {
            board.place(Piece::queen(Color::White), coord);
            assert_eq!(board.cell(coord), None);
            assert_eq!(board.piece_at(coord), None);
            assert_eq!(board.remove(coord), None);
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_copies_do_not_alias() {
        let mut board = Board::new();
        board.place(Piece::pawn(Color::White), Coordinate::new(0, 1));

        let mut snapshot = board.clone();
        let mut cell = board.cell(Coordinate::new(0, 1)).unwrap();
        snapshot.clear();
        cell.remove();

        assert_eq!(board.piece_at(Coordinate::new(0, 1)), Some(Piece::pawn(Color::White)));
        assert_ne!(board, snapshot);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        board.place(Piece::pawn(Color::White), Coordinate::new(0, 1));
        board.place(Piece::queen(Color::Black), Coordinate::new(6, 6));
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new();
        board.place(Piece::queen(Color::White), Coordinate::new(0, 0));
        board.place(Piece::pawn(Color::Black), Coordinate::new(6, 6));

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "0 RB -- -- -- -- -- --");
        assert_eq!(lines[3], "3 -- -- -- -- -- -- --");
        assert_eq!(lines[6], "6 -- -- -- -- -- -- PN");
        assert_eq!(lines[7], "   0  1  2  3  4  5  6");
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::new();
        board.place(Piece::queen(Color::Black), Coordinate::new(3, 3));

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_rejects_malformed_cells() {
        let mut cells = Board::new().cells();
        cells.pop();
        assert_eq!(Board::try_from(cells), Err(BoardError::CellCount { found: 48 }));

        let mut cells = Board::new().cells();
        cells.swap(0, 1);
        assert!(matches!(
            Board::try_from(cells),
            Err(BoardError::MisplacedCell { index: 0, .. })
        ));
    }
}
