//! Per-color capture store.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::piece::{Color, Piece, PieceKind};

/// Most pieces a reserve can hold: one Queen and six Pawns.
pub const RESERVE_CAPACITY: usize = 7;

/// Captured pieces of a single color, in capture order.
///
/// Additions of the wrong color or beyond capacity are refused and leave
/// the reserve unchanged.
///
/// ```
/// use ninety_degrees::core::{Color, Piece};
/// use ninety_degrees::zones::Reserve;
///
/// let mut reserve = Reserve::new(Color::White);
/// assert!(reserve.add(Piece::pawn(Color::White)));
/// assert!(!reserve.add(Piece::pawn(Color::Black)));
/// assert_eq!(reserve.count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reserve {
    color: Color,
    pieces: SmallVec<[Piece; RESERVE_CAPACITY]>,
}

impl Reserve {
    /// Create an empty reserve owned by `color`.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            pieces: SmallVec::new(),
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Store a captured piece.
    ///
    /// Returns `false` without storing when the piece belongs to the other
    /// side or the reserve is full.
    pub fn add(&mut self, piece: Piece) -> bool {
        if piece.color != self.color {
            debug!(reserve = %self.color, %piece, "rejected piece of the other color");
            return false;
        }
        if self.is_full() {
            debug!(reserve = %self.color, %piece, "rejected piece, reserve full");
            return false;
        }
        self.pieces.push(piece);
        true
    }

    /// Number of stored pieces.
    #[must_use]
    pub fn count(&self) -> usize {
        self.pieces.len()
    }

    /// Number of stored pieces of `kind`.
    #[must_use]
    pub fn count_kind(&self, kind: PieceKind) -> usize {
        self.pieces.iter().filter(|p| p.kind == kind).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pieces.len() >= RESERVE_CAPACITY
    }

    /// Copy of the contents in capture order.
    #[must_use]
    pub fn pieces(&self) -> Vec<Piece> {
        self.pieces.to_vec()
    }
}
