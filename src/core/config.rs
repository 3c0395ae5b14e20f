//! Starting-position configuration.
//!
//! A [`Layout`] describes which pieces stand where before the first move and
//! which side opens. The arbiter applies layouts; it never hardcodes one
//! beyond [`Layout::standard`].
//!
//! ## Standard opening
//!
//! ```text
//! 0 RB PB PB PB -- -- --
//! 1 PB -- -- -- -- -- --
//! 2 PB -- -- -- -- -- --
//! 3 PB -- -- -- -- -- PN
//! 4 -- -- -- -- -- -- PN
//! 5 -- -- -- -- -- -- PN
//! 6 -- -- -- PN PN PN RN
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::coord::{Coordinate, BOARD_SIZE};
use super::piece::{Color, Piece};
use crate::error::LayoutError;

/// Pieces per side: one Queen and six Pawns.
pub const PIECES_PER_SIDE: usize = 7;

/// A starting position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Pieces and where they start, applied in order.
    pub placements: Vec<(Piece, Coordinate)>,

    /// Side that moves first.
    pub starting_turn: Color,
}

impl Layout {
    /// Create an empty layout.
    #[must_use]
    pub fn new(starting_turn: Color) -> Self {
        Self {
            placements: Vec::new(),
            starting_turn,
        }
    }

    /// The canonical opening: each Queen in its corner, three Pawns along
    /// the edge row and three down the edge column. White opens.
    #[must_use]
    pub fn standard() -> Self {
        let mut layout = Self::new(Color::White);
        let last = BOARD_SIZE - 1;

        for color in Color::ALL {
            // White builds from (0,0) outwards, Black mirrors from (6,6)
            let (corner, sign) = match color {
                Color::White => (0, 1),
                Color::Black => (last, -1),
            };
            layout = layout.with_piece(Piece::queen(color), Coordinate::new(corner, corner));
            for i in 1..=3 {
                let along_row = Coordinate::new(corner, corner + sign * i);
                layout = layout.with_piece(Piece::pawn(color), along_row);
            }
            for i in 1..=3 {
                let along_col = Coordinate::new(corner + sign * i, corner);
                layout = layout.with_piece(Piece::pawn(color), along_col);
            }
        }

        layout
    }

    /// Add a placement.
    #[must_use]
    pub fn with_piece(mut self, piece: Piece, coordinate: Coordinate) -> Self {
        self.placements.push((piece, coordinate));
        self
    }

    /// Set the opening side.
    #[must_use]
    pub fn with_starting_turn(mut self, color: Color) -> Self {
        self.starting_turn = color;
        self
    }

    /// Check the layout is playable: every placement on the board, no two on
    /// the same cell, at most one Queen and seven pieces per side.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = FxHashSet::default();
        let mut per_side = [0usize; 2];
        let mut queens = [0usize; 2];

        for &(piece, coordinate) in &self.placements {
            if !coordinate.is_on_board() {
                return Err(LayoutError::OffBoard { coordinate });
            }
            if !seen.insert(coordinate) {
                return Err(LayoutError::Collision { coordinate });
            }
            let side = piece.color.index();
            per_side[side] += 1;
            if piece.is_queen() {
                queens[side] += 1;
            }
            if per_side[side] > PIECES_PER_SIDE || queens[side] > 1 {
                return Err(LayoutError::TooManyPieces { color: piece.color });
            }
        }

        Ok(())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}
