use crate::location::Location;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    // The rank a pawn of this color starts on. White pawns sit on row 6 and
    // walk toward row 0, Black pawns sit on row 1 and walk toward row 7.
    pub fn pawn_rank(&self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

// One legal step shape for a piece kind. Displacements are expressed as
// (from - to) with White's forward direction positive; the rule engine flips
// the y axis for Black so both colors share the same tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTemplate {
    pub dx: i8,
    pub dy: i8,
    pub capture_only: bool,
    pub quiet_only: bool,
    pub first_move_only: bool,
}

impl MoveTemplate {
    const fn step(dx: i8, dy: i8) -> Self {
        Self {
            dx,
            dy,
            capture_only: false,
            quiet_only: false,
            first_move_only: false,
        }
    }

    const fn push(dx: i8, dy: i8) -> Self {
        Self {
            dx,
            dy,
            capture_only: false,
            quiet_only: true,
            first_move_only: false,
        }
    }

    const fn double_push(dx: i8, dy: i8) -> Self {
        Self {
            dx,
            dy,
            capture_only: false,
            quiet_only: true,
            first_move_only: true,
        }
    }

    const fn take(dx: i8, dy: i8) -> Self {
        Self {
            dx,
            dy,
            capture_only: true,
            quiet_only: false,
            first_move_only: false,
        }
    }
}

const PAWN_TEMPLATES: &[MoveTemplate] = &[
    MoveTemplate::push(0, 1),
    MoveTemplate::double_push(0, 2),
    MoveTemplate::take(1, 1),
    MoveTemplate::take(-1, 1),
];

const KNIGHT_TEMPLATES: &[MoveTemplate] = &[
    MoveTemplate::step(1, 2),
    MoveTemplate::step(-1, 2),
    MoveTemplate::step(1, -2),
    MoveTemplate::step(-1, -2),
    MoveTemplate::step(2, 1),
    MoveTemplate::step(-2, 1),
    MoveTemplate::step(2, -1),
    MoveTemplate::step(-2, -1),
];

const BISHOP_TEMPLATES: &[MoveTemplate] = &[
    MoveTemplate::step(1, 1),
    MoveTemplate::step(1, -1),
    MoveTemplate::step(-1, 1),
    MoveTemplate::step(-1, -1),
];

const ROOK_TEMPLATES: &[MoveTemplate] = &[
    MoveTemplate::step(1, 0),
    MoveTemplate::step(-1, 0),
    MoveTemplate::step(0, 1),
    MoveTemplate::step(0, -1),
];

const QUEEN_TEMPLATES: &[MoveTemplate] = &[
    MoveTemplate::step(1, 0),
    MoveTemplate::step(-1, 0),
    MoveTemplate::step(0, 1),
    MoveTemplate::step(0, -1),
    MoveTemplate::step(1, 1),
    MoveTemplate::step(1, -1),
    MoveTemplate::step(-1, 1),
    MoveTemplate::step(-1, -1),
];

const KING_TEMPLATES: &[MoveTemplate] = &[
    MoveTemplate::step(1, 0),
    MoveTemplate::step(-1, 0),
    MoveTemplate::step(0, 1),
    MoveTemplate::step(0, -1),
    MoveTemplate::step(1, 1),
    MoveTemplate::step(1, -1),
    MoveTemplate::step(-1, 1),
    MoveTemplate::step(-1, -1),
];

impl PieceKind {
    pub fn templates(self) -> &'static [MoveTemplate] {
        match self {
            PieceKind::Pawn => PAWN_TEMPLATES,
            PieceKind::Knight => KNIGHT_TEMPLATES,
            PieceKind::Bishop => BISHOP_TEMPLATES,
            PieceKind::Rook => ROOK_TEMPLATES,
            PieceKind::Queen => QUEEN_TEMPLATES,
            PieceKind::King => KING_TEMPLATES,
        }
    }

    // Sliding pieces may scale their templates by any multiplier up to the
    // board width.
    pub fn repeatable(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub location: Location,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, location: Location) -> Self {
        Self {
            kind,
            color,
            location,
        }
    }

    pub fn templates(&self) -> &'static [MoveTemplate] {
        self.kind.templates()
    }

    pub fn repeatable(&self) -> bool {
        self.kind.repeatable()
    }

    // Single-character board encoding: uppercase for Black, lowercase for
    // White.
    pub fn letter(&self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_uppercase(),
        }
    }
}
