//! The referee: legality, push execution, turn keeping and game end.
//!
//! The [`Arbiter`] owns the board for the whole game together with one
//! [`Reserve`] per side, the side on turn and the number of pushes made.
//! Everything it hands out is a copy.
//!
//! ## Legality
//!
//! A piece of the side on turn moves along its row or column. The distance
//! is fixed by the perpendicular line: a horizontal move must cover exactly
//! as many squares as there are pieces in the origin's column, a vertical
//! move as many as there are pieces in the origin's row.
//!
//! ## Pushing
//!
//! The moving piece travels `d` squares and drives ahead of it every piece
//! standing in its path. The contiguous run starting at the origin shifts
//! rigidly by `d`; any piece the shifted run would land on is pushed one
//! square beyond the piece in front of it. Pieces driven past the edge go to
//! the reserve of their own color.
//!
//! ## Game end
//!
//! The game ends when a Queen leaves the board or a Queen reaches the
//! center. Capture outranks the center: a side whose Queen is gone loses
//! even if its opponent's Queen stands on (3,3) after the same push.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::core::action::Move;
use crate::core::board::Board;
use crate::core::config::Layout;
use crate::core::coord::{Coordinate, BOARD_SIZE};
use crate::core::piece::{Color, Piece};
use crate::error::{ArbiterError, IllegalMove};
use crate::rules::engine::{GameResult, RulesEngine};
use crate::rules::query::BoardQuery;
use crate::zones::Reserve;

/// What a single push did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushOutcome {
    /// The executed move.
    pub mv: Move,
    /// Pieces relocated, the moving piece included.
    pub displaced: usize,
    /// Pieces driven off the board, in push order.
    pub evicted: Vec<Piece>,
}

/// A piece caught by a push, with where it stood and where it goes.
#[derive(Clone, Copy, Debug)]
struct Displacement {
    from: Coordinate,
    piece: Piece,
    to: Coordinate,
}

/// Game referee.
///
/// ```
/// use ninety_degrees::core::{Board, Color, Move};
/// use ninety_degrees::rules::Arbiter;
///
/// let mut arbiter = Arbiter::new(Board::new());
/// arbiter.setup_standard_position();
///
/// let mv = Move::from_rc((0, 0), (0, 4));
/// assert!(arbiter.is_legal(mv));
///
/// let outcome = arbiter.push(mv).unwrap();
/// assert_eq!(outcome.evicted.len(), 1);
/// assert_eq!(arbiter.reserve(Color::White).count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arbiter {
    board: Board,
    reserves: [Reserve; 2],
    turn: Option<Color>,
    move_count: u32,
}

impl Arbiter {
    /// Take ownership of `board`. No side is on turn until a setup call.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            reserves: Self::empty_reserves(),
            turn: None,
            move_count: 0,
        }
    }

    /// Give the board back, ending the arbiter's life.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    fn empty_reserves() -> [Reserve; 2] {
        [Reserve::new(Color::White), Reserve::new(Color::Black)]
    }

    // === Setup ===

    /// Reset to the standard opening with White to move.
    pub fn setup_standard_position(&mut self) {
        self.reset_to(&Layout::standard());
        debug!("standard position set up");
    }

    /// Place `pieces[i]` on `coordinates[i]` over the current board.
    ///
    /// The board is not cleared and reserves are kept. Off-board coordinates
    /// are skipped. Sets the turn and resets the move count.
    pub fn setup_custom(
        &mut self,
        pieces: &[Piece],
        coordinates: &[Coordinate],
        starting_turn: Color,
    ) -> Result<(), ArbiterError> {
        if pieces.len() != coordinates.len() {
            return Err(ArbiterError::LayoutMismatch {
                pieces: pieces.len(),
                coordinates: coordinates.len(),
            });
        }

        for (&piece, &coordinate) in pieces.iter().zip(coordinates) {
            self.board.place(piece, coordinate);
        }
        self.turn = Some(starting_turn);
        self.move_count = 0;

        debug!(pieces = pieces.len(), turn = %starting_turn, "custom position set up");
        Ok(())
    }

    /// Clear the board and reserves, then apply a validated layout.
    pub fn setup_layout(&mut self, layout: &Layout) -> Result<(), ArbiterError> {
        layout.validate()?;
        self.reset_to(layout);
        debug!(
            pieces = layout.placements.len(),
            turn = %layout.starting_turn,
            "layout set up"
        );
        Ok(())
    }

    fn reset_to(&mut self, layout: &Layout) {
        self.board.clear();
        self.reserves = Self::empty_reserves();
        for &(piece, coordinate) in &layout.placements {
            self.board.place(piece, coordinate);
        }
        self.turn = Some(layout.starting_turn);
        self.move_count = 0;
    }

    // === Accessors ===

    /// Snapshot of the board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    #[must_use]
    pub const fn turn(&self) -> Option<Color> {
        self.turn
    }

    /// Hand the turn to the other side. Does nothing before setup.
    pub fn swap_turn(&mut self) {
        self.turn = self.turn.map(Color::opposite);
    }

    /// Number of pushes executed since the last setup.
    #[must_use]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Snapshot of `color`'s reserve.
    #[must_use]
    pub fn reserve(&self, color: Color) -> Reserve {
        self.reserves[color.index()].clone()
    }

    fn query(&self) -> BoardQuery<'_> {
        BoardQuery::new(&self.board)
    }

    // === Legality ===

    /// Check a move, reporting the first rule it breaks.
    pub fn check_move(&self, mv: Move) -> Result<(), IllegalMove> {
        let Move {
            origin,
            destination,
        } = mv;

        if !origin.is_on_board() || !destination.is_on_board() {
            return Err(IllegalMove::OffBoard);
        }
        if origin == destination {
            return Err(IllegalMove::SameSquare);
        }

        let to_move = self.turn.ok_or(IllegalMove::TurnUnset)?;
        let piece = self.board.piece_at(origin).ok_or(IllegalMove::EmptyOrigin)?;
        if piece.color != to_move {
            return Err(IllegalMove::WrongColor {
                owner: piece.color,
                to_move,
            });
        }

        let query = self.query();
        let (required, actual) = if origin.row == destination.row {
            (
                query.line_count_vertical(origin),
                query.distance_horizontal(origin, destination),
            )
        } else if origin.col == destination.col {
            (
                query.line_count_horizontal(origin),
                query.distance_vertical(origin, destination),
            )
        } else {
            return Err(IllegalMove::NotOrthogonal);
        };

        if actual != required {
            return Err(IllegalMove::WrongDistance { required, actual });
        }
        Ok(())
    }

    /// Check whether `mv` may be played now. Never panics.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    // === Execution ===

    /// Execute a legal move. The turn is left unchanged.
    ///
    /// An illegal move is rejected with [`ArbiterError::IllegalMove`] and
    /// nothing changes.
    pub fn push(&mut self, mv: Move) -> Result<PushOutcome, ArbiterError> {
        if let Err(reason) = self.check_move(mv) {
            warn!(%mv, %reason, "rejected illegal push");
            return Err(ArbiterError::IllegalMove { mv, reason });
        }

        let displacements = self.sweep(mv);

        for d in &displacements {
            self.board.remove(d.from);
        }

        let mut evicted = Vec::new();
        for d in &displacements {
            if d.to.is_on_board() {
                self.board.place(d.piece, d.to);
            } else {
                self.reserves[d.piece.color.index()].add(d.piece);
                evicted.push(d.piece);
            }
        }
        self.move_count += 1;

        debug!(
            %mv,
            displaced = displacements.len(),
            evicted = evicted.len(),
            move_count = self.move_count,
            census = ?self.query().census(),
            "push executed"
        );
        if let Some(result) = self.result() {
            info!(%mv, ?result, "game over");
        }

        Ok(PushOutcome {
            mv,
            displaced: displacements.len(),
            evicted,
        })
    }

    /// Collect every piece a legal move displaces and its target square.
    fn sweep(&self, mv: Move) -> SmallVec<[Displacement; BOARD_SIZE as usize]> {
        let mut out = SmallVec::new();
        let query = self.query();

        let (Some(direction), Some(piece)) = (
            query.direction(mv.origin, mv.destination),
            self.board.piece_at(mv.origin),
        ) else {
            return out;
        };
        // One of the two is zero for an orthogonal move
        let distance = query.distance_horizontal(mv.origin, mv.destination)
            + query.distance_vertical(mv.origin, mv.destination);

        out.push(Displacement {
            from: mv.origin,
            piece,
            to: mv.destination,
        });

        // Offset from the origin where the last displaced piece lands
        let mut frontier = distance;
        let mut offset = 1;
        loop {
            let at = mv.origin.step(direction, offset);
            if offset > frontier || !at.is_on_board() {
                break;
            }
            if let Some(piece) = self.board.piece_at(at) {
                frontier += 1;
                out.push(Displacement {
                    from: at,
                    piece,
                    to: mv.origin.step(direction, frontier),
                });
            }
            offset += 1;
        }

        out
    }

    /// Push, then hand the turn over.
    pub fn play(&mut self, mv: Move) -> Result<PushOutcome, ArbiterError> {
        let outcome = self.push(mv)?;
        self.swap_turn();
        Ok(outcome)
    }

    // === Game end ===

    /// Check whether either Queen is gone or on the center.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        let query = self.query();
        !query.has_queen(Color::White)
            || !query.has_queen(Color::Black)
            || query.queen_at_center(Color::White)
            || query.queen_at_center(Color::Black)
    }

    /// The winning side, `None` while the game runs or after a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self.result()? {
            GameResult::Winner(color) => Some(color),
            GameResult::Draw => None,
        }
    }

    /// Final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }

        let query = self.query();
        match (query.has_queen(Color::White), query.has_queen(Color::Black)) {
            (false, false) => Some(GameResult::Draw),
            (true, false) => Some(GameResult::Winner(Color::White)),
            (false, true) => Some(GameResult::Winner(Color::Black)),
            (true, true) => Color::ALL
                .into_iter()
                .find(|&c| query.queen_at_center(c))
                .map(GameResult::Winner),
        }
    }
}

impl RulesEngine for Arbiter {
    fn to_move(&self) -> Option<Color> {
        self.turn
    }

    fn is_legal(&self, mv: Move) -> bool {
        Arbiter::is_legal(self, mv)
    }

    fn apply_move(&mut self, mv: Move) -> Result<PushOutcome, ArbiterError> {
        self.push(mv)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result()
    }
}
