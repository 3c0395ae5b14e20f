//! Move representation: an origin and a destination.
//!
//! A move names where a piece starts and where it should end up; the engine
//! derives direction and distance from the pair. Moves are plain values and
//! may be diagonal, degenerate or off the board. Legality is the arbiter's
//! concern, not the constructor's.
//!
//! Moves render in the game's notation, two `RC` coordinates joined by a
//! hyphen: `10-06` moves from row 1 column 0 to row 0 column 6.

use serde::{Deserialize, Serialize};

use super::coord::{Axis, Coordinate};

/// A requested move.
///
/// ```
/// use ninety_degrees::core::{Coordinate, Move};
///
/// let mv = Move::new(Coordinate::new(0, 0), Coordinate::new(0, 4));
/// assert_eq!(mv.to_string(), "00-04");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

impl Move {
    #[must_use]
    pub const fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Shorthand taking raw row/column pairs.
    #[must_use]
    pub const fn from_rc(origin: (i32, i32), destination: (i32, i32)) -> Self {
        Self::new(
            Coordinate::new(origin.0, origin.1),
            Coordinate::new(destination.0, destination.1),
        )
    }

    /// Axis of travel, or `None` unless exactly one of row/column changes.
    #[must_use]
    pub fn axis(&self) -> Option<Axis> {
        let same_row = self.origin.row == self.destination.row;
        let same_col = self.origin.col == self.destination.col;
        match (same_row, same_col) {
            (true, false) => Some(Axis::Horizontal),
            (false, true) => Some(Axis::Vertical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation() {
        let cases = [
            ((1, 0), (0, 6), "10-06"),
            ((0, 1), (3, 6), "01-36"),
            ((2, 4), (2, 6), "24-26"),
            ((6, 3), (3, 6), "63-36"),
            ((5, 5), (5, 6), "55-56"),
        ];
        for (origin, destination, text) in cases {
            assert_eq!(Move::from_rc(origin, destination).to_string(), text);
        }
    }

    #[test]
    fn test_axis() {
        assert_eq!(Move::from_rc((0, 0), (0, 4)).axis(), Some(Axis::Horizontal));
        assert_eq!(Move::from_rc((6, 6), (2, 6)).axis(), Some(Axis::Vertical));
        assert_eq!(Move::from_rc((0, 0), (4, 4)).axis(), None);
        assert_eq!(Move::from_rc((3, 3), (3, 3)).axis(), None);
    }

    #[test]
    fn test_move_equality() {
        let a = Move::from_rc((0, 0), (0, 4));
        let b = Move::new(Coordinate::new(0, 0), Coordinate::new(0, 4));
        assert_eq!(a, b);
        assert_ne!(a, Move::from_rc((0, 4), (0, 0)));
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::from_rc((3, 6), (0, 6));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
