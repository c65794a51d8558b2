//! Core value types shared by the board model, move generation and reducer.
//!
//! Pieces, tile markers and move descriptions live here so every subsystem
//! can import one stable set of names.

use serde::{Deserialize, Serialize};

pub use crate::game_state::coordinates::{AxialCoordinate, GridCoordinate};
pub use crate::game_state::game_state::GameState;

/// Side that owns a piece. White moves on even turns, black on odd turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceOwner {
    White,
    Black,
}

impl PieceOwner {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceOwner::White => 0,
            PieceOwner::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceOwner::White => PieceOwner::Black,
            PieceOwner::Black => PieceOwner::White,
        }
    }

    /// Owner whose turn it is for the given turn counter.
    #[inline]
    pub const fn for_turn(turn: u32) -> Self {
        if turn % 2 == 0 {
            PieceOwner::White
        } else {
            PieceOwner::Black
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PieceOwner::White => "white",
            PieceOwner::Black => "black",
        }
    }
}

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
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Kinds a pawn may turn into.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// Kinds a pawn may become on its promotion tile.
pub const PROMOTION_PIECE_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// Identity of one piece instance. Never reused within an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    /// Stable label used to find the piece again from serialized data.
    pub tag: String,
    pub kind: PieceKind,
    pub pos: GridCoordinate,
    pub axial: AxialCoordinate,
    pub has_moved: bool,
    pub owner: PieceOwner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    Standard,
    Capture,
    EnPassantCapture,
    Promotion,
}

/// One candidate destination for one piece, valid only for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInfo {
    pub axial: AxialCoordinate,
    pub move_type: MoveType,
    /// Grid position of the moving piece when the move was generated.
    pub source: GridCoordinate,
    pub promo_piece: Option<PieceKind>,
}

/// Transient and permanent markers carried by a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStatus {
    /// The owner attacks this tile.
    Threatening(PieceOwner),
    /// A pawn of this owner skipped over the tile with a double step.
    EnPassant(PieceOwner),
    PawnOrigin(PieceOwner),
    MoveHighlight,
    CaptureHighlight,
    /// Pawns of this owner promote on reaching the tile.
    PromoTile(PieceOwner),
    Move(MoveInfo),
}

impl TileStatus {
    #[inline]
    pub fn as_move(&self) -> Option<&MoveInfo> {
        match self {
            TileStatus::Move(info) => Some(info),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_highlight(&self) -> bool {
        matches!(self, TileStatus::MoveHighlight | TileStatus::CaptureHighlight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverState {
    Unfinished,
    WhiteVictory,
    BlackVictory,
    WhiteStalemated,
    BlackStalemated,
}

impl GameOverState {
    #[inline]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameOverState::Unfinished)
    }

    pub const fn victory_for(owner: PieceOwner) -> Self {
        match owner {
            PieceOwner::White => GameOverState::WhiteVictory,
            PieceOwner::Black => GameOverState::BlackVictory,
        }
    }

    pub const fn stalemated(owner: PieceOwner) -> Self {
        match owner {
            PieceOwner::White => GameOverState::WhiteStalemated,
            PieceOwner::Black => GameOverState::BlackStalemated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_parity_maps_even_to_white() {
        assert_eq!(PieceOwner::for_turn(0), PieceOwner::White);
        assert_eq!(PieceOwner::for_turn(1), PieceOwner::Black);
        assert_eq!(PieceOwner::for_turn(42), PieceOwner::White);
    }

    #[test]
    fn only_move_status_carries_a_payload() {
        let info = MoveInfo {
            axial: AxialCoordinate::new(0, 0),
            move_type: MoveType::Standard,
            source: GridCoordinate::new(5, 6),
            promo_piece: None,
        };
        assert_eq!(TileStatus::Move(info).as_move(), Some(&info));
        assert_eq!(TileStatus::MoveHighlight.as_move(), None);
        assert!(TileStatus::CaptureHighlight.is_highlight());
        assert!(!TileStatus::PromoTile(PieceOwner::White).is_highlight());
    }
}
