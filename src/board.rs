use crate::location::Location;
use crate::piece::{Color, Piece, PieceKind};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Location,
    pub to: Location,
}

impl Move {
    pub fn new(from: Location, to: Location) -> Self {
        Self { from, to }
    }
}

// The board owns every live piece. At most one piece per square; pieces are
// value types, so `clone` yields a fully independent copy suitable for
// speculative move application.
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl Board {
    pub fn new() -> Self {
        let mut pieces = Vec::with_capacity(32);

        for x in 0..8 {
            pieces.push(Piece::new(PieceKind::Pawn, Color::Black, Location::new(x, 1)));
            pieces.push(Piece::new(PieceKind::Pawn, Color::White, Location::new(x, 6)));
        }

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (x, &kind) in back_rank.iter().enumerate() {
            pieces.push(Piece::new(kind, Color::Black, Location::new(x as i8, 0)));
            pieces.push(Piece::new(kind, Color::White, Location::new(x as i8, 7)));
        }

        Self { pieces }
    }

    pub fn empty() -> Self {
        Self { pieces: Vec::new() }
    }

    // Fixture helper; panics rather than tolerating a broken setup.
    pub fn place(&mut self, piece: Piece) {
        assert!(
            Self::is_inside(piece.location),
            "piece placed outside the board at {}",
            piece.location
        );
        assert!(
            self.piece_at(piece.location).is_none(),
            "two pieces on {}",
            piece.location
        );
        self.pieces.push(piece);
    }

    pub fn is_inside(location: Location) -> bool {
        (0..=7).contains(&location.x) && (0..=7).contains(&location.y)
    }

    pub fn is_inside_pair(from: Location, to: Location) -> bool {
        Self::is_inside(from) && Self::is_inside(to)
    }

    pub fn piece_at(&self, location: Location) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.location == location)
    }

    pub fn remove_at(&mut self, location: Location) -> bool {
        match self.pieces.iter().position(|p| p.location == location) {
            Some(idx) => {
                self.pieces.remove(idx);
                true
            }
            None => false,
        }
    }

    // Raw structural mutation: captures whatever sits on `to`, relocates the
    // mover. Legality is the rule engine's job and must be settled before
    // this is called.
    pub fn apply(&mut self, mv: Move) {
        self.remove_at(mv.to);
        let idx = self
            .pieces
            .iter()
            .position(|p| p.location == mv.from)
            .unwrap_or_else(|| panic!("no piece to move at {}", mv.from));
        let mut piece = self.pieces.remove(idx);
        piece.location = mv.to;
        self.pieces.push(piece);
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.color == color)
    }

    // Panics if the king is gone: a legal game always has exactly one king
    // per color, so a miss means an upstream mutation bug.
    pub fn king_of(&self, color: Color) -> &Piece {
        self.pieces
            .iter()
            .find(|p| p.color == color && p.kind == PieceKind::King)
            .unwrap_or_else(|| panic!("no {color} king on the board"))
    }

    // Read-only view for rendering and persistence collaborators, sorted in
    // board-scan order.
    pub fn snapshot(&self) -> Vec<(Location, PieceKind, Color)> {
        let mut triples: Vec<_> = self
            .pieces
            .iter()
            .map(|p| (p.location, p.kind, p.color))
            .collect();
        triples.sort_by_key(|(loc, _, _)| (loc.y, loc.x));
        triples
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..8 {
            for x in 0..8 {
                match self.piece_at(Location::new(x, y)) {
                    Some(piece) => write!(f, "[{}]", piece.letter())?,
                    None => write!(f, "[ ]")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
