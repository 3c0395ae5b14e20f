//! Core value types: geometry, pieces, cells, the board, moves and layouts.
//!
//! Everything here is plain data. Game rules live in [`crate::rules`]; the
//! capture store lives in [`crate::zones`].

pub mod coord;
pub mod piece;
pub mod cell;
pub mod board;
pub mod action;
pub mod config;

pub use coord::{Axis, Coordinate, Direction, BOARD_SIZE, CENTER};
pub use piece::{Color, Piece, PieceKind};
pub use cell::Cell;
pub use board::{Board, CELL_COUNT};
pub use action::Move;
pub use config::{Layout, PIECES_PER_SIDE};
