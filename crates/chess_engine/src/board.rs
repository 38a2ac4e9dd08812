//! Board representation and occupancy queries
//!
//! A [`Position`] is a flat array of 64 occupancy slots plus an arena of
//! [`Piece`]s. Slots hold [`PieceId`]s (indices into the arena) rather than
//! references, which keeps the whole thing `Clone` without any aliasing:
//! cloning a position is a deep copy that shares nothing with the original.
//!
//! Captured pieces stay in the arena but no slot refers to them any more.

use std::fmt;

use crate::constants::INITIAL_LAYOUT;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

/// The 8x8 board, its pieces and the side to move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [Option<PieceId>; 64],
    pieces: Vec<Piece>,
    turn: Color,
}

impl Default for Position {
    fn default() -> Self {
        Position::standard()
    }
}

impl Position {
    /// An empty board with `turn` to move
    pub fn empty(turn: Color) -> Self {
        Position {
            squares: [None; 64],
            pieces: Vec::with_capacity(32),
            turn,
        }
    }

    /// The standard starting position with White to move
    pub fn standard() -> Self {
        // INITIAL_LAYOUT is a compile-time constant, every cell is well formed
        match Position::from_layout(&INITIAL_LAYOUT, Color::White) {
            Ok(position) => position,
            Err(e) => unreachable!("initial layout is malformed: {e}"),
        }
    }

    /// Build a position from a rank-major grid of two-character codes
    ///
    /// Each cell is either empty or a color (`w`/`b`) followed by a kind
    /// (`P N B R Q K`). Row 0 is Black's back rank.
    pub fn from_layout<S: AsRef<str>>(
        layout: &[[S; 8]; 8],
        turn: Color,
    ) -> ChessEngineResult<Self> {
        let mut position = Position::empty(turn);

        for (y, row) in layout.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let code = cell.as_ref().trim();
                if code.is_empty() {
                    continue;
                }

                let invalid = || ChessEngineError::InvalidLayoutCode {
                    row: y,
                    col: x,
                    code: code.to_string(),
                };

                let mut chars = code.chars();
                let color = chars.next().and_then(Color::from_code).ok_or_else(invalid)?;
                let kind = chars.next().and_then(PieceKind::from_code).ok_or_else(invalid)?;
                if chars.next().is_some() {
                    return Err(invalid());
                }

                let square = Square::new(x as u8, y as u8).ok_or_else(invalid)?;
                position.place(kind, color, square);
            }
        }

        Ok(position)
    }

    /// Checked coordinate lookup; no clamping for out-of-range input
    #[inline]
    pub fn square_at(&self, x: i32, y: i32) -> Option<Square> {
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Square::new(x as u8, y as u8)
        } else {
            None
        }
    }

    /// Id of the piece standing on `square`
    #[inline]
    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.occupant(square).map(|id| &self.pieces[id as usize])
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Color of the piece on `square`, if any
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|p| p.color)
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id as usize]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id as usize]
    }

    /// Overwrite a slot without touching the piece's stored coordinate
    ///
    /// Only for move application and check simulation, which keep the
    /// coordinate invariant themselves.
    #[inline]
    pub(crate) fn set_occupant(&mut self, square: Square, id: Option<PieceId>) {
        self.squares[square.index()] = id;
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    pub(crate) fn flip_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Put a new piece on `square`, replacing whatever was there
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> PieceId {
        debug_assert!(self.pieces.len() < PieceId::MAX as usize);
        let id = self.pieces.len() as PieceId;
        self.pieces.push(Piece::new(kind, color, square));
        self.squares[square.index()] = Some(id);
        id
    }

    /// Clear `square`, returning the piece that stood there
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
            .take()
            .map(|id| self.pieces[id as usize])
    }

    /// Every occupied square with its piece, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Every square holding a piece of `color`, row-major
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }

    /// Square of `color`'s king, if there is one on the board
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Structurally independent copy for a search branch
    #[inline]
    pub fn deep_copy(&self) -> Position {
        self.clone()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8u8 {
            for x in 0..8u8 {
                let symbol = Square::new(x, y)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |p| p.symbol());
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
