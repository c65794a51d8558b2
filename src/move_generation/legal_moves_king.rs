use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::moves_from_targets;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(game_state: &GameState, piece: &Piece) -> Vec<MoveInfo> {
    let board = &game_state.board;
    moves_from_targets(board, piece, king_attacks(board, piece.axial))
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn king_opening_moves() {
        let state = GameState::new_game();
        let king = state.board.find_piece_by_tag("white-king-1").unwrap();

        let mut targets: Vec<_> = generate_king_moves(&state, king)
            .into_iter()
            .map(|m| (m.axial.q, m.axial.r))
            .collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![(1, 3), (2, 2)]);
    }
}
