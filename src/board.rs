//! Board store
//!
//! Owns every piece on the three-layer board. The grid holds piece ids and the
//! piece list holds the pieces themselves, indexed by id. Both sides of that
//! mirror are only ever written together inside this module, so a piece's
//! `position` and its grid slot cannot drift apart.
//!
//! Simulation goes through [`Board::apply`] / [`Board::revert`]: `apply` returns a
//! [`BoardUndo`] holding exactly what is needed to restore the previous
//! position, which keeps self-check tests and search free of board clones.

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;
use serde::{Deserialize, Serialize};

type Grid = [[[Option<PieceId>; BOARD_SIZE]; BOARD_SIZE]; LAYER_COUNT];

const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Minor pieces each side starts with on the middle layer, as (file, type)
const MIDDLE_LAYER_MINORS: [(u8, PieceType); 2] = [(2, PieceType::Knight), (5, PieceType::Bishop)];

/// Three-layer grid of optional pieces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot", into = "BoardSnapshot")]
pub struct Board {
    grid: Grid,
    /// Slot `i` holds the piece with id `i`; captured pieces leave `None`
    pieces: Vec<Option<Piece>>,
}

/// Everything needed to take back one [`Board::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardUndo {
    pub piece_id: PieceId,
    pub from: Position,
    pub to: Position,
    had_moved: bool,
    original_type: PieceType,
    pub captured: Option<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board
    pub fn new() -> Self {
        Board {
            grid: [[[None; BOARD_SIZE]; BOARD_SIZE]; LAYER_COUNT],
            pieces: Vec::with_capacity(40),
        }
    }

    /// The starting position.
    ///
    /// Layer 0 carries the usual back ranks and pawns, layer 1 a knight and a
    /// bishop per side, and layer 2 starts empty.
    pub fn standard() -> Self {
        let mut board = Board::new();
        for color in PieceColor::ALL {
            let back = color.back_rank();
            for (x, piece_type) in BACK_RANK.iter().enumerate() {
                board.place(*piece_type, color, Position::new(x as u8, back, 0));
            }
            for x in 0..BOARD_SIZE as u8 {
                board.place(
                    PieceType::Pawn,
                    color,
                    Position::new(x, color.pawn_start_rank(), 0),
                );
            }
            for (x, piece_type) in MIDDLE_LAYER_MINORS {
                board.place(piece_type, color, Position::new(x, back, MIDDLE_LAYER));
            }
        }
        board
    }

    /// Put a new piece on an empty square and return its id
    pub fn add_piece(
        &mut self,
        piece_type: PieceType,
        color: PieceColor,
        position: Position,
    ) -> ChessEngineResult<PieceId> {
        if !position.is_valid() {
            return Err(ChessEngineError::InvalidPosition {
                x: position.x as i32,
                y: position.y as i32,
                layer: position.layer as i32,
            });
        }
        if !self.is_empty(position) {
            return Err(ChessEngineError::SquareOccupied { position });
        }
        Ok(self.place(piece_type, color, position))
    }

    fn place(&mut self, piece_type: PieceType, color: PieceColor, position: Position) -> PieceId {
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(Some(Piece {
            id,
            piece_type,
            color,
            position,
            has_moved: false,
        }));
        self.set_slot(position, Some(id));
        id
    }

    #[inline]
    fn slot(&self, pos: Position) -> Option<PieceId> {
        self.grid[pos.layer as usize][pos.y as usize][pos.x as usize]
    }

    #[inline]
    fn set_slot(&mut self, pos: Position, id: Option<PieceId>) {
        self.grid[pos.layer as usize][pos.y as usize][pos.x as usize] = id;
    }

    /// Piece standing on `pos`
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&Piece> {
        self.slot(pos).and_then(|id| self.piece(id))
    }

    /// O(1) lookup by id; `None` once the piece has been captured
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.slot(pos).is_none()
    }

    #[inline]
    pub fn color_at(&self, pos: Position) -> Option<PieceColor> {
        self.get(pos).map(|piece| piece.color)
    }

    /// All pieces on the board, in id order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().flatten()
    }

    /// One side's pieces, in id order
    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn king(&self, color: PieceColor) -> Option<&Piece> {
        self.pieces_of(color)
            .find(|piece| piece.piece_type == PieceType::King)
    }

    pub fn count(&self, color: PieceColor, piece_type: PieceType) -> usize {
        self.pieces_of(color)
            .filter(|piece| piece.piece_type == piece_type)
            .count()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Only the two kings are left
    pub fn only_kings_remain(&self) -> bool {
        self.pieces().all(|piece| piece.piece_type == PieceType::King)
    }

    /// Move whatever stands on `from` to `to`, capturing any occupant of `to`.
    ///
    /// Performs no rule checking. Returns `None` (and leaves the board alone) if
    /// `from` is empty or equals `to`.
    pub fn apply(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceType>,
    ) -> Option<BoardUndo> {
        if from == to {
            return None;
        }
        let id = self.slot(from)?;
        let captured = self
            .slot(to)
            .and_then(|victim| self.pieces[victim.index()].take());

        let piece = self.pieces[id.index()].as_mut()?;
        let undo = BoardUndo {
            piece_id: id,
            from,
            to,
            had_moved: piece.has_moved,
            original_type: piece.piece_type,
            captured,
        };
        piece.position = to;
        piece.has_moved = true;
        if let Some(promoted) = promotion {
            piece.piece_type = promoted;
        }

        self.set_slot(from, None);
        self.set_slot(to, Some(id));
        Some(undo)
    }

    /// Take back an [`apply`](Board::apply). Undos must be reverted in reverse order.
    pub fn revert(&mut self, undo: BoardUndo) {
        if let Some(piece) = self
            .pieces
            .get_mut(undo.piece_id.index())
            .and_then(Option::as_mut)
        {
            piece.position = undo.from;
            piece.has_moved = undo.had_moved;
            piece.piece_type = undo.original_type;
        }
        self.set_slot(undo.from, Some(undo.piece_id));
        match undo.captured {
            Some(victim) => {
                self.set_slot(undo.to, Some(victim.id));
                self.pieces[victim.id.index()] = Some(victim);
            }
            None => self.set_slot(undo.to, None),
        }
    }

    /// Check that grid and piece list mirror each other exactly
    pub fn is_consistent(&self) -> bool {
        let tracked = self
            .pieces()
            .all(|piece| self.slot(piece.position) == Some(piece.id));
        let occupied = self
            .grid
            .iter()
            .flatten()
            .flatten()
            .filter(|slot| slot.is_some())
            .count();
        tracked && occupied == self.piece_count()
    }
}

/// Serialized form of a [`Board`]: the piece list alone, grid rebuilt on load
#[derive(Serialize, Deserialize)]
struct BoardSnapshot {
    pieces: Vec<Option<Piece>>,
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        BoardSnapshot {
            pieces: board.pieces,
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = ChessEngineError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for (index, slot) in snapshot.pieces.iter().enumerate() {
            let Some(piece) = slot else {
                continue;
            };
            if piece.id.index() != index {
                return Err(ChessEngineError::InvalidSnapshot {
                    message: format!("piece id {} stored in slot {}", piece.id.0, index),
                });
            }
            if !piece.position.is_valid() {
                return Err(ChessEngineError::InvalidSnapshot {
                    message: format!("piece {} is off the board", piece.id.0),
                });
            }
            if !board.is_empty(piece.position) {
                return Err(ChessEngineError::InvalidSnapshot {
                    message: format!("two pieces share square {}", piece.position),
                });
            }
            board.set_slot(piece.position, Some(piece.id));
        }
        board.pieces = snapshot.pieces;
        Ok(board)
    }
}
