//! Error types for board construction, layouts and the arbiter.

use crate::core::action::Move;
use crate::core::coord::Coordinate;
use crate::core::piece::Color;

/// Why a move was refused. Checks run in a fixed order and the first
/// failing one is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("origin or destination lies off the board")]
    OffBoard,

    #[error("origin and destination are the same square")]
    SameSquare,

    #[error("no side is on turn")]
    TurnUnset,

    #[error("origin square is empty")]
    EmptyOrigin,

    #[error("piece on origin belongs to {owner}, but {to_move} is on turn")]
    WrongColor { owner: Color, to_move: Color },

    #[error("move is not along a row or a column")]
    NotOrthogonal,

    #[error("move must cover {required} squares, covers {actual}")]
    WrongDistance { required: i32, actual: i32 },
}

/// Errors returned by [`Arbiter`](crate::rules::Arbiter) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArbiterError {
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: IllegalMove },

    #[error("{pieces} pieces given for {coordinates} coordinates")]
    LayoutMismatch { pieces: usize, coordinates: usize },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Problems with a starting [`Layout`](crate::core::Layout).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("placement at {coordinate} lies off the board")]
    OffBoard { coordinate: Coordinate },

    #[error("two pieces placed on {coordinate}")]
    Collision { coordinate: Coordinate },

    #[error("{color} has more pieces than a side may own")]
    TooManyPieces { color: Color },
}

/// A serialized board that does not describe 49 row-major cells.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 49 cells, found {found}")]
    CellCount { found: usize },

    #[error("cell {index} holds coordinate {found}, expected {expected}")]
    MisplacedCell {
        index: usize,
        expected: Coordinate,
        found: Coordinate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = ArbiterError::IllegalMove {
            mv: Move::from_rc((0, 0), (0, 1)),
            reason: IllegalMove::WrongDistance {
                required: 4,
                actual: 1,
            },
        };
        assert_eq!(
            err.to_string(),
            "illegal move 00-01: move must cover 4 squares, covers 1"
        );

        let err = IllegalMove::WrongColor {
            owner: Color::Black,
            to_move: Color::White,
        };
        assert_eq!(
            err.to_string(),
            "piece on origin belongs to Black, but White is on turn"
        );

        let err = ArbiterError::LayoutMismatch {
            pieces: 3,
            coordinates: 2,
        };
        assert_eq!(err.to_string(), "3 pieces given for 2 coordinates");

        let err = LayoutError::Collision {
            coordinate: Coordinate::new(2, 5),
        };
        assert_eq!(err.to_string(), "two pieces placed on 25");

        let err = BoardError::CellCount { found: 12 };
        assert_eq!(err.to_string(), "expected 49 cells, found 12");
    }

    #[test]
    fn test_layout_error_converts() {
        let err: ArbiterError = LayoutError::OffBoard {
            coordinate: Coordinate::new(-1, 0),
        }
        .into();
        assert_eq!(err.to_string(), "placement at -10 lies off the board");
    }
}
