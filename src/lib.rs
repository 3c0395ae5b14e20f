//! # ninety-degrees
//!
//! Rule engine for Ninety Degrees, a two-player push game on a 7x7 board.
//!
//! ## The Game
//!
//! Each side owns one Queen and six Pawns. On its turn a side moves one of
//! its pieces along a row or column, and the distance is not chosen: it
//! equals the number of pieces on the line perpendicular to the move.
//! The moving piece pushes everything in its path, and pieces driven off
//! the edge are captured into their owner's reserve.
//!
//! A side wins by putting its Queen on the center square or by pushing the
//! opposing Queen off the board. Losing both Queens in one push is a draw.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: The arbiter owns its board; callers only ever get
//!    copies, so no outside code can change a position behind its back.
//!
//! 2. **Fail Soft**: Off-board reads return `None`, off-board writes are
//!    ignored and legality checks answer `false` instead of panicking.
//!
//! 3. **Explicit Errors**: Operations that can refuse return `Result` with
//!    a reason (see [`error`]).
//!
//! ## Modules
//!
//! - `core`: Coordinates, pieces, cells, the board, moves and layouts
//! - `zones`: Per-color reserves of captured pieces
//! - `rules`: Board queries, the arbiter and the `RulesEngine` trait
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Axis, Board, Cell, Color, Coordinate, Direction, Layout, Move, Piece, PieceKind,
    BOARD_SIZE, CENTER,
};

pub use crate::zones::{Reserve, RESERVE_CAPACITY};

pub use crate::rules::{Arbiter, BoardQuery, GameResult, PushOutcome, RulesEngine};

pub use crate::error::{ArbiterError, BoardError, IllegalMove, LayoutError};
