use crate::board::{Board, Move};
use crate::location::Location;
use crate::piece::{Color, Piece};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("square is outside the board")]
    OutOfBounds,
    #[error("no piece on the source square")]
    EmptySource,
    #[error("that piece belongs to the other player")]
    WrongTurn,
    #[error("cannot capture your own piece")]
    OwnPieceCapture,
    #[error("the piece cannot move like that")]
    IllegalGeometry,
    #[error("the move would leave your king in check")]
    ExposesKing,
}

pub struct Game {
    board: Board,
    current_player: Color,
    finished: bool,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            current_player: to_move,
            finished: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // Pure query: never mutates game state. Conditions are checked in order
    // and the first failure wins, so the caller gets the most specific
    // rejection reason.
    pub fn validate(&self, from: Location, to: Location) -> Result<(), MoveError> {
        if self.finished {
            return Err(MoveError::GameOver);
        }
        if !Board::is_inside_pair(from, to) {
            return Err(MoveError::OutOfBounds);
        }
        let piece = self.board.piece_at(from).ok_or(MoveError::EmptySource)?;
        if piece.color != self.current_player {
            return Err(MoveError::WrongTurn);
        }
        if let Some(target) = self.board.piece_at(to) {
            if target.color == self.current_player {
                return Err(MoveError::OwnPieceCapture);
            }
        }
        if !reachable(&self.board, piece, to) {
            return Err(MoveError::IllegalGeometry);
        }
        if leaves_king_exposed(&self.board, from, to, self.current_player) {
            return Err(MoveError::ExposesKing);
        }
        Ok(())
    }

    pub fn is_valid_move(&self, from: Location, to: Location) -> bool {
        self.validate(from, to).is_ok()
    }

    // Commits the move onto the live board, then runs checkmate detection
    // for the opponent. This is the only place `finished` is set.
    pub fn play_move(&mut self, from: Location, to: Location) -> Result<(), MoveError> {
        self.validate(from, to)?;
        self.board.apply(Move::new(from, to));
        let opponent = self.current_player.opposite();
        if is_checkmate(&self.board, opponent) {
            self.finished = true;
        }
        self.current_player = opponent;
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// Geometric and occupancy legality for a single piece, with no regard for
// whose turn it is or for king safety. Both move validation and attack
// detection sit on top of this.
fn reachable(board: &Board, piece: &Piece, to: Location) -> bool {
    let from = piece.location;
    if !Board::is_inside_pair(from, to) || from == to {
        return false;
    }

    // Displacement measured as from minus to; flip the y axis for Black so
    // one template table serves both colors.
    let dx = from.x - to.x;
    let mut dy = from.y - to.y;
    if piece.color == Color::Black {
        dy = -dy;
    }

    if piece.repeatable() {
        return reachable_sliding(board, from, to, dx, dy, piece);
    }

    for t in piece.templates() {
        if t.dx != dx || t.dy != dy {
            continue;
        }
        if t.capture_only {
            // Pawn diagonals need an enemy piece to take.
            return match board.piece_at(to) {
                Some(target) => target.color != piece.color,
                None => false,
            };
        }
        if t.quiet_only && board.piece_at(to).is_some() {
            return false;
        }
        if t.first_move_only {
            if from.y != piece.color.pawn_rank() {
                return false;
            }
            // The jumped square must be open as well.
            let mid = Location::new(from.x, (from.y + to.y) / 2);
            if board.piece_at(mid).is_some() {
                return false;
            }
        }
        return true;
    }
    false
}

fn reachable_sliding(
    board: &Board,
    from: Location,
    to: Location,
    dx: i8,
    dy: i8,
    piece: &Piece,
) -> bool {
    for t in piece.templates() {
        for i in 1..=8i8 {
            if t.dx * i == dx && t.dy * i == dy {
                return path_is_clear(board, from, to);
            }
        }
    }
    false
}

// Walks the squares strictly between `from` and `to` along a straight or
// diagonal line.
fn path_is_clear(board: &Board, from: Location, to: Location) -> bool {
    let step_x = (to.x - from.x).signum();
    let step_y = (to.y - from.y).signum();
    let mut cur = Location::new(from.x + step_x, from.y + step_y);
    while cur != to {
        if board.piece_at(cur).is_some() {
            return false;
        }
        cur = Location::new(cur.x + step_x, cur.y + step_y);
    }
    true
}

// True iff any piece of `color` could land on `target` by raw reachability.
// Deliberately ignores king safety on the attacking side.
pub fn attacks(board: &Board, color: Color, target: Location) -> bool {
    board.pieces_of(color).any(|p| reachable(board, p, target))
}

pub fn in_check(board: &Board, color: Color) -> bool {
    attacks(board, color.opposite(), board.king_of(color).location)
}

fn leaves_king_exposed(board: &Board, from: Location, to: Location, color: Color) -> bool {
    let mut scratch = board.clone();
    scratch.apply(Move::new(from, to));
    in_check(&scratch, color)
}

// Escape-square test only: the king is mated when it is in check and every
// square its own templates reach is still attacked after stepping there.
// Blocking the attacker or capturing it are not considered. Candidates that
// are off-board or hold a friendly piece are not escapes, so the in-check
// guard is what keeps a merely boxed-in king (all candidates filtered out,
// as in the starting position) from counting as mated.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !in_check(board, color) {
        return false;
    }
    let from = board.king_of(color).location;
    for t in board.king_of(color).templates() {
        let to = Location::new(from.x - t.dx, from.y - t.dy);
        if !Board::is_inside(to) {
            continue;
        }
        if let Some(occupant) = board.piece_at(to) {
            if occupant.color == color {
                continue;
            }
        }
        let mut scratch = board.clone();
        scratch.apply(Move::new(from, to));
        if !attacks(&scratch, color.opposite(), to) {
            return false;
        }
    }
    true
}
