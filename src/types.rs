//! # Core Types - Coordinates, Pieces and Moves
//!
//! ## Overview
//!
//! The playing field is three stacked 8×8 boards. Every square is addressed by a
//! [`Position`] triple `(x, y, layer)`:
//!
//! - `x` - file, 0 (a) to 7 (h)
//! - `y` - rank, 0 (White's back rank) to 7 (Black's back rank)
//! - `layer` - 0 (bottom, where the armies start) to 2 (top, empty at start)
//!
//! Positions are only ever built inside the bounds. Stepping off the board with
//! [`Position::offset`] yields `None`, which lets move generation scan rays without
//! any special casing at the edges.
//!
//! ## Piece Identity
//!
//! A [`Piece`] carries a stable [`PieceId`]. The id survives every move, including
//! promotion (which swaps the type in place). Captured pieces are dropped and their
//! id is never handed out again.
//!
//! ## Moves
//!
//! Two move shapes exist:
//! - [`MoveCandidate`] - a bare from/to request (plus promotion choice) produced by
//!   the generator and consumed by the executor and the search
//! - [`Move`] - the record of an applied move with its snapshot and derived flags

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identity of a piece for the whole game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [PieceColor::White, PieceColor::Black];

    #[inline]
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank direction pawns of this color advance in
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    /// Rank pawns start on and may double-step from
    #[inline]
    pub fn pawn_start_rank(self) -> u8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => 6,
        }
    }

    /// Far rank where pawns promote
    #[inline]
    pub fn promotion_rank(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }

    #[inline]
    pub fn back_rank(self) -> u8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "White"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Material value in centipawns
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            PieceType::Pawn => PAWN_VALUE,
            PieceType::Knight => KNIGHT_VALUE,
            PieceType::Bishop => BISHOP_VALUE,
            PieceType::Rook => ROOK_VALUE,
            PieceType::Queen => QUEEN_VALUE,
            PieceType::King => KING_VALUE,
        }
    }

    /// Whether a pawn may turn into this type
    #[inline]
    pub fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceType::Knight | PieceType::Bishop | PieceType::Rook | PieceType::Queen
        )
    }

    /// Letter used in move notation (pawns use `P`)
    pub fn symbol(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A square on the three-layer board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
    pub layer: u8,
}

impl Position {
    /// Build a position from in-bounds coordinates.
    ///
    /// Out-of-bounds input is a programming error; use [`Position::try_new`] for
    /// untrusted coordinates.
    pub const fn new(x: u8, y: u8, layer: u8) -> Self {
        assert!((x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE);
        assert!((layer as usize) < LAYER_COUNT);
        Position { x, y, layer }
    }

    /// Build a position from untrusted coordinates
    pub fn try_new(x: i32, y: i32, layer: i32) -> ChessEngineResult<Self> {
        if Self::in_bounds(x, y, layer) {
            Ok(Position {
                x: x as u8,
                y: y as u8,
                layer: layer as u8,
            })
        } else {
            Err(ChessEngineError::InvalidPosition { x, y, layer })
        }
    }

    #[inline]
    fn in_bounds(x: i32, y: i32, layer: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&x)
            && (0..BOARD_SIZE as i32).contains(&y)
            && (0..LAYER_COUNT as i32).contains(&layer)
    }

    /// True when every coordinate is inside the board (for deserialized data)
    #[inline]
    pub fn is_valid(self) -> bool {
        Self::in_bounds(self.x as i32, self.y as i32, self.layer as i32)
    }

    /// Step by a delta; `None` when the result leaves the board
    #[inline]
    pub fn offset(self, dx: i8, dy: i8, dlayer: i8) -> Option<Position> {
        let x = self.x as i32 + dx as i32;
        let y = self.y as i32 + dy as i32;
        let layer = self.layer as i32 + dlayer as i32;
        if Self::in_bounds(x, y, layer) {
            Some(Position {
                x: x as u8,
                y: y as u8,
                layer: layer as u8,
            })
        } else {
            None
        }
    }

    /// Same square on another layer
    #[inline]
    pub fn with_layer(self, layer: u8) -> Option<Position> {
        ((layer as usize) < LAYER_COUNT).then_some(Position { layer, ..self })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({}, {}, layer {})", self.x, self.y, self.layer);
        }
        let file = (b'a' + self.x) as char;
        write!(f, "{}{}L{}", file, self.y + 1, self.layer)
    }
}

/// Parses the display notation, e.g. `e2L0`
impl FromStr for Position {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ChessEngineError::UnknownSquare {
            input: s.to_string(),
        };
        let &[file, rank, b'L', layer] = s.trim().as_bytes() else {
            return Err(unknown());
        };
        if !file.is_ascii_lowercase() || !rank.is_ascii_digit() || !layer.is_ascii_digit() {
            return Err(unknown());
        }
        Position::try_new(
            i32::from(file - b'a'),
            i32::from(rank - b'0') - 1,
            i32::from(layer - b'0'),
        )
        .map_err(|_| unknown())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub piece_type: PieceType,
    pub color: PieceColor,
    pub position: Position,
    pub has_moved: bool,
}

/// A from/to request, as produced by move generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCandidate {
    pub from: Position,
    pub to: Position,
    /// Promotion choice; only meaningful for a pawn reaching its far rank
    pub promotion: Option<PieceType>,
}

impl MoveCandidate {
    pub fn new(from: Position, to: Position) -> Self {
        MoveCandidate {
            from,
            to,
            promotion: None,
        }
    }
}

impl fmt::Display for MoveCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "={}", promotion.symbol())?;
        }
        Ok(())
    }
}

/// Record of an applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// The moving piece as it stood before the move
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Type the pawn became, if this move promoted
    pub promotion: Option<PieceType>,
    /// The side now to move is in check
    pub is_check: bool,
    pub is_checkmate: bool,
    /// Always false: this variant has no castling
    pub is_castling: bool,
    /// Always false: this variant has no en passant
    pub is_en_passant: bool,
    pub is_layer_move: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.captured.is_some() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            self.piece.piece_type.symbol(),
            self.from,
            separator,
            self.to
        )?;
        if let Some(promotion) = self.promotion {
            write!(f, "={}", promotion.symbol())?;
        }
        if self.is_checkmate {
            write!(f, "#")?;
        } else if self.is_check {
            write!(f, "+")?;
        }
        Ok(())
    }
}
