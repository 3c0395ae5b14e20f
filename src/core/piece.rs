//! Pieces and the two sides.
//!
//! ## Color
//!
//! The two sides, `White` and `Black`. White always opens the standard game.
//!
//! ## Piece
//!
//! A `{kind, color}` value. Pieces are `Copy`: relocating a piece copies it,
//! so no two cells ever share one.
//!
//! Text codes follow the game's board notation: kind letter `P` (Pawn) or
//! `R` (Queen), then color letter `B` (White) or `N` (Black).

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Board notation letter.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'B',
            Color::Black => 'N',
        }
    }

    /// Index for two-slot per-color storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Kind of piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    /// The royal piece; losing it off the board loses the game.
    Queen,
}

impl PieceKind {
    /// Board notation letter.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Queen => 'R',
        }
    }
}

/// A piece on the board or in a reserve.
///
/// ```
/// use ninety_degrees::core::{Color, Piece, PieceKind};
///
/// let queen = Piece::new(PieceKind::Queen, Color::White);
/// assert_eq!(queen.to_string(), "RB");
/// assert_eq!(queen, Piece::queen(Color::White));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[must_use]
    pub const fn pawn(color: Color) -> Self {
        Self::new(PieceKind::Pawn, color)
    }

    #[must_use]
    pub const fn queen(color: Color) -> Self {
        Self::new(PieceKind::Queen, color)
    }

    #[must_use]
    pub fn is_queen(self) -> bool {
        self.kind == PieceKind::Queen
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.to_char(), self.color.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opposite() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.index(), 0);
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn test_piece_codes() {
        assert_eq!(Piece::pawn(Color::White).to_string(), "PB");
        assert_eq!(Piece::pawn(Color::Black).to_string(), "PN");
        assert_eq!(Piece::queen(Color::White).to_string(), "RB");
        assert_eq!(Piece::queen(Color::Black).to_string(), "RN");
    }

    #[test]
    fn test_piece_value_equality() {
        let a = Piece::new(PieceKind::Pawn, Color::Black);
        let b = Piece::pawn(Color::Black);
        assert_eq!(a, b);
        assert_ne!(a, Piece::pawn(Color::White));
        assert_ne!(a, Piece::queen(Color::Black));
        assert!(Piece::queen(Color::Black).is_queen());
        assert!(!a.is_queen());
    }

    #[test]
    fn test_serialization() {
        let piece = Piece::queen(Color::Black);
        let json = serde_json::to_string(&piece).unwrap();
        let deserialized: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, deserialized);
    }
}
