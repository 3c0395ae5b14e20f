//! Off-board storage for captured pieces.
//!
//! A piece pushed past the edge leaves play for good and lands in the
//! [`Reserve`] of its own color. Reserves only grow during a game.

pub mod reserve;

pub use reserve::{Reserve, RESERVE_CAPACITY};
