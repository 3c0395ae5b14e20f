//! Read-only board analysis.
//!
//! [`BoardQuery`] borrows a [`Board`] and answers the counting and geometry
//! questions the arbiter needs: how many pieces share a line, how far apart
//! two squares are, which way a move points, and where the Queens stand.
//! Off-board input never panics; it simply counts nothing.

use rustc_hash::FxHashMap;

use crate::core::board::Board;
use crate::core::coord::{Coordinate, Direction, BOARD_SIZE, CENTER};
use crate::core::piece::{Color, Piece, PieceKind};

/// Queries over a borrowed board.
#[derive(Clone, Copy, Debug)]
pub struct BoardQuery<'a> {
    board: &'a Board,
}

impl<'a> BoardQuery<'a> {
    #[must_use]
    pub const fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Occupied cells in `coordinate`'s row, counting `coordinate` itself
    /// only if it is occupied. Zero for a row off the board.
    #[must_use]
    pub fn line_count_horizontal(&self, coordinate: Coordinate) -> i32 {
        (0..BOARD_SIZE)
            .filter(|&col| self.board.is_occupied(Coordinate::new(coordinate.row, col)))
            .count() as i32
    }

    /// Occupied cells in `coordinate`'s column.
    #[must_use]
    pub fn line_count_vertical(&self, coordinate: Coordinate) -> i32 {
        (0..BOARD_SIZE)
            .filter(|&row| self.board.is_occupied(Coordinate::new(row, coordinate.col)))
            .count() as i32
    }

    #[must_use]
    pub fn distance_horizontal(&self, a: Coordinate, b: Coordinate) -> i32 {
        (a.col - b.col).abs()
    }

    #[must_use]
    pub fn distance_vertical(&self, a: Coordinate, b: Coordinate) -> i32 {
        (a.row - b.row).abs()
    }

    /// Unit direction from `from` toward `to`.
    ///
    /// `None` when the squares coincide or are not on a common line.
    #[must_use]
    pub fn direction(&self, from: Coordinate, to: Coordinate) -> Option<Direction> {
        use std::cmp::Ordering::*;

        match (to.row.cmp(&from.row), to.col.cmp(&from.col)) {
            (Less, Equal) => Some(Direction::North),
            (Greater, Equal) => Some(Direction::South),
            (Equal, Greater) => Some(Direction::East),
            (Equal, Less) => Some(Direction::West),
            _ => None,
        }
    }

    /// Pieces of `kind` and `color` on the board.
    #[must_use]
    pub fn count_pieces(&self, kind: PieceKind, color: Color) -> usize {
        let target = Piece::new(kind, color);
        self.board.pieces().filter(|&(_, p)| p == target).count()
    }

    /// Check whether `color`'s Queen stands on the center square.
    #[must_use]
    pub fn queen_at_center(&self, color: Color) -> bool {
        self.board.piece_at(CENTER) == Some(Piece::queen(color))
    }

    /// Check whether `color`'s Queen is still on the board.
    #[must_use]
    pub fn has_queen(&self, color: Color) -> bool {
        let queen = Piece::queen(color);
        self.board.pieces().any(|(_, p)| p == queen)
    }

    /// Tally of every piece on the board.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Piece, usize> {
        let mut tally = FxHashMap::default();
        for (_, piece) in self.board.pieces() {
            *tally.entry(piece).or_insert(0) += 1;
        }
        tally
    }
}
