//! Rules engine trait.
//!
//! `RulesEngine` is the seam a driver (CLI, GUI, search) talks to:
//! - Whose turn it is
//! - Whether a move is legal
//! - How a move changes the position
//! - Whether the game has ended, and how

use serde::{Deserialize, Serialize};

use crate::core::action::Move;
use crate::core::coord::Coordinate;
use crate::core::piece::Color;
use crate::error::ArbiterError;
use crate::rules::arbiter::PushOutcome;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Color),
    /// Both Queens left the board in the same push.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        match self {
            GameResult::Winner(c) => *c == color,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `is_legal`: Must never panic, whatever the coordinates
/// - `apply_move`: Must leave the position untouched when it returns `Err`
/// - `is_terminal`: Return `None` while the game continues
pub trait RulesEngine {
    /// Side on turn, `None` before a position is set up.
    fn to_move(&self) -> Option<Color>;

    /// Check a move against the current position.
    fn is_legal(&self, mv: Move) -> bool;

    /// Execute a move. The turn is not advanced.
    fn apply_move(&mut self, mv: Move) -> Result<PushOutcome, ArbiterError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate every legal move for the side on turn.
    ///
    /// Default implementation tries every on-board origin/destination pair.
    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for origin in Coordinate::all() {
            for destination in Coordinate::all() {
                let mv = Move::new(origin, destination);
                if self.is_legal(mv) {
                    moves.push(mv);
                }
            }
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Color::Black);
        assert!(!result.is_winner(Color::White));
        assert!(result.is_winner(Color::Black));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Color::White));
        assert!(!draw.is_winner(Color::Black));
    }

    /// Accepts exactly one move and never ends.
    struct OneMove(Move);

    impl RulesEngine for OneMove {
        fn to_move(&self) -> Option<Color> {
            Some(Color::White)
        }

        fn is_legal(&self, mv: Move) -> bool {
            mv == self.0
        }

        fn apply_move(&mut self, mv: Move) -> Result<PushOutcome, ArbiterError> {
            Ok(PushOutcome {
                mv,
                displaced: 1,
                evicted: Vec::new(),
            })
        }

        fn is_terminal(&self) -> Option<GameResult> {
            None
        }
    }

    #[test]
    fn test_default_legal_moves() {
        let only = Move::from_rc((2, 2), (2, 5));
        let engine = OneMove(only);
        assert_eq!(engine.legal_moves(), vec![only]);
    }
}
