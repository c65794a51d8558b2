use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Per-piece generator. Pure with respect to the state it reads.
pub type MoveCalculationFunction = fn(&GameState, &Piece) -> Vec<MoveInfo>;

pub const fn move_calculation_for(kind: PieceKind) -> MoveCalculationFunction {
    match kind {
        PieceKind::Pawn => generate_pawn_moves,
        PieceKind::Knight => generate_knight_moves,
        PieceKind::Bishop => generate_bishop_moves,
        PieceKind::Rook => generate_rook_moves,
        PieceKind::Queen => generate_queen_moves,
        PieceKind::King => generate_king_moves,
    }
}

#[inline]
pub fn generate_piece_moves(game_state: &GameState, piece: &Piece) -> Vec<MoveInfo> {
    move_calculation_for(piece.kind)(game_state, piece)
}

/// Produces every move `owner` may make in `game_state`.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, game_state: &GameState, owner: PieceOwner) -> Vec<MoveInfo>;
}

/// Raw piece geometry; never looks at king safety.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState, owner: PieceOwner) -> Vec<MoveInfo> {
        game_state
            .board
            .pieces_of(owner)
            .flat_map(|piece| generate_piece_moves(game_state, piece))
            .collect()
    }
}
