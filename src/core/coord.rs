//! Board geometry: coordinates, directions and axes.
//!
//! ## Coordinate
//!
//! A `(row, column)` pair. Coordinates are plain values and may lie off the
//! board: a push computes target squares before checking whether they still
//! fit, so the on-board check belongs to the consumer
//! (see [`Coordinate::is_on_board`]).
//!
//! ## Direction
//!
//! One of the four orthogonal unit steps. Rows grow southwards, columns grow
//! eastwards, so row 0 is the northern edge.

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: i32 = 7;

/// Board position, possibly off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

/// The single cell that wins the game for a Queen standing on it.
pub const CENTER: Coordinate = Coordinate::new(3, 3);

impl Coordinate {
    /// Create a coordinate. No bounds check is performed.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check whether this coordinate lies inside `[0, 6] x [0, 6]`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Coordinate `distance` cells away in `direction`.
    ///
    /// ```
    /// use ninety_degrees::core::{Coordinate, Direction};
    ///
    /// let origin = Coordinate::new(0, 3);
    /// assert_eq!(origin.step(Direction::West, 2), Coordinate::new(0, 1));
    /// // Stepping past the edge is allowed; the result is simply off-board.
    /// assert!(!origin.step(Direction::North, 1).is_on_board());
    /// ```
    #[must_use]
    pub const fn step(self, direction: Direction, distance: i32) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr * distance, self.col + dc * distance)
    }

    /// Row-major index into a board's cell array, if on the board.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.is_on_board()
            .then(|| (self.row * BOARD_SIZE + self.col) as usize)
    }

    /// Iterate over all 49 on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate::new(row, col)))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

/// Orthogonal unit direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards row 6.
    South,
    /// Towards column 6.
    East,
    /// Towards column 0.
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// `(row, column)` offset of a single step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Axis this direction travels along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Vertical,
            Direction::East | Direction::West => Axis::Horizontal,
        }
    }
}

/// Line orientation on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Along a row (column varies).
    Horizontal,
    /// Along a column (row varies).
    Vertical,
}

impl Axis {
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_board_bounds() {
        assert!(Coordinate::new(0, 0).is_on_board());
        assert!(Coordinate::new(6, 6).is_on_board());
        assert!(!Coordinate::new(-1, 0).is_on_board());
        assert!(!Coordinate::new(0, 7).is_on_board());
        assert!(!Coordinate::new(7, 7).is_on_board());
    }

    #[test]
    fn test_step_each_direction() {
        let c = Coordinate::new(3, 3);
        assert_eq!(c.step(Direction::North, 2), Coordinate::new(1, 3));
        assert_eq!(c.step(Direction::South, 3), Coordinate::new(6, 3));
        assert_eq!(c.step(Direction::East, 1), Coordinate::new(3, 4));
        assert_eq!(c.step(Direction::West, 4), Coordinate::new(3, -1));
        assert_eq!(c.step(Direction::East, 0), c);
    }

    #[test]
    fn test_index_row_major() {
        assert_eq!(Coordinate::new(0, 0).index(), Some(0));
        assert_eq!(Coordinate::new(1, 0).index(), Some(7));
        assert_eq!(Coordinate::new(6, 6).index(), Some(48));
        assert_eq!(Coordinate::new(0, -1).index(), None);
    }

    #[test]
    fn test_all_coordinates() {
        let all: Vec<_> = Coordinate::all().collect();
        assert_eq!(all.len(), 49);
        assert_eq!(all[0], Coordinate::new(0, 0));
        assert_eq!(all[48], Coordinate::new(6, 6));
        assert!(all.iter().all(|c| c.is_on_board()));
    }

    #[test]
    fn test_direction_opposite_and_axis() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.opposite().axis(), dir.axis());
        }
        assert_eq!(Direction::North.axis(), Axis::Vertical);
        assert_eq!(Direction::West.axis(), Axis::Horizontal);
        assert_eq!(Axis::Horizontal.perpendicular(), Axis::Vertical);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coordinate::new(1, 0)), "10");
        assert_eq!(format!("{}", CENTER), "33");
    }

    #[test]
    fn test_serialization() {
        let c = Coordinate::new(2, 5);
        let json = serde_json::to_string(&c).unwrap();
        let deserialized: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }
}
