//! # Core Types - Colors, Pieces, Squares and Moves
//!
//! ## Overview
//!
//! These are the value types every other module speaks in. They are all small
//! and `Copy`, so they can be passed around freely during search without
//! borrowing headaches.
//!
//! ## Coordinate System
//!
//! Squares use screen-style coordinates: `x` is the file (0 = a-file) and `y`
//! is the row counted from the top of the board. Black's back rank is `y = 0`
//! and White's back rank is `y = 7`, so White pawns advance towards smaller
//! `y` values:
//!
//! ```text
//!   x:  0 1 2 3 4 5 6 7
//! y=0   r n b q k b n r   rank 8
//! y=1   p p p p p p p p   rank 7
//! ...
//! y=6   P P P P P P P P   rank 2
//! y=7   R N B Q K B N R   rank 1
//! ```
//!
//! Formal notation therefore maps `(x, y)` to file `a + x` and rank `8 - y`.
//!
//! ## Piece Identity
//!
//! Pieces live in an arena inside [`crate::board::Position`] and squares hold
//! a [`PieceId`] into it. The id is a plain index: copying a position copies
//! the arena and the occupancy array, and every id stays valid in the copy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a piece inside a position's piece arena
pub type PieceId = u8;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta for a pawn of this color moving forward
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color starts on
    #[inline]
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row the king and rooks of this color start on
    #[inline]
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Single-character prefix used in layout codes (`w` / `b`)
    pub fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_code(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// The six kinds of chess piece
///
/// This is a closed set: move generation matches on it exhaustively, so a
/// kind without move rules cannot compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Single-character notation (`' '` for pawns)
    pub fn notation(self) -> char {
        match self {
            PieceKind::Pawn => ' ',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Letter used in layout codes, where pawns are spelled `P`
    pub fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            other => other.notation(),
        }
    }

    pub fn from_code(c: char) -> Option<PieceKind> {
        match c {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Light or dark board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareShade {
    Light,
    Dark,
}

/// A board coordinate, always within `0..8` on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Build a square, or `None` when either coordinate is off the board
    #[inline]
    pub fn new(x: u8, y: u8) -> Option<Square> {
        if x < 8 && y < 8 {
            Some(Square { x, y })
        } else {
            None
        }
    }

    /// Build a square from a row-major index (`0..64`)
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Square {
                x: (index % 8) as u8,
                y: (index / 8) as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    /// Row-major index into the 64-square array
    #[inline]
    pub fn index(self) -> usize {
        self.y as usize * 8 + self.x as usize
    }

    /// Square reached by adding `(dx, dy)`, if it stays on the board
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Square {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    pub fn shade(self) -> SquareShade {
        if (self.x + self.y) % 2 == 0 {
            SquareShade::Light
        } else {
            SquareShade::Dark
        }
    }

    /// Formal coordinate such as `e2`
    pub fn coord(self) -> String {
        let file = (b'a' + self.x) as char;
        let rank = 8 - self.y;
        format!("{file}{rank}")
    }

    /// Parse a formal coordinate such as `e2`
    pub fn from_coord(coord: &str) -> Option<Square> {
        let mut chars = coord.trim().chars();
        let file = chars.next()?.to_ascii_lowercase();
        let rank = chars.next()?.to_digit(10)?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !(1..=8).contains(&rank) {
            return None;
        }
        Square::new(file as u8 - b'a', 8 - rank as u8)
    }

    /// Iterate all 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coord())
    }
}

/// A piece on (or captured from) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Kept equal to the square that holds this piece's id
    pub pos: Square,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, pos: Square) -> Self {
        Piece {
            kind,
            color,
            pos,
            has_moved: false,
        }
    }

    /// Character used by the ASCII board dump: uppercase White, lowercase Black
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.code(),
            Color::Black => self.kind.code().to_ascii_lowercase(),
        }
    }
}

/// An origin/destination pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
