use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::moves_from_targets;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(game_state: &GameState, piece: &Piece) -> Vec<MoveInfo> {
    let board = &game_state.board;
    moves_from_targets(board, piece, queen_attacks(board, piece.axial))
}
