//! A single board square.

use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use super::piece::{Color, Piece};

/// A fixed coordinate plus an optional occupant.
///
/// The coordinate never changes once the cell exists; the occupant is
/// replaced or cleared in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    coordinate: Coordinate,
    occupant: Option<Piece>,
}

impl Cell {
    /// Create an empty cell.
    #[must_use]
    pub const fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            occupant: None,
        }
    }

    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The occupant, if any.
    #[must_use]
    pub const fn piece(&self) -> Option<Piece> {
        self.occupant
    }

    /// Color of the occupant, `None` for an empty cell.
    #[must_use]
    pub fn piece_color(&self) -> Option<Color> {
        self.occupant.map(|p| p.color)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Put a piece here, replacing any previous occupant.
    pub fn place(&mut self, piece: Piece) {
        self.occupant = Some(piece);
    }

    /// Clear the cell, returning what was on it.
    pub fn remove(&mut self) -> Option<Piece> {
        self.occupant.take()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.occupant {
            Some(piece) => write!(f, "{}", piece),
            None => write!(f, "--"),
        }
    }
}
