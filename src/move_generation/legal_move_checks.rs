//! Threat maps and king-safety queries.

use std::collections::HashSet;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Cells `piece` attacks, occupied or not, regardless of who stands there.
pub fn piece_attacks(board: &Board, piece: &Piece) -> Vec<AxialCoordinate> {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(board, piece.owner, piece.axial),
        PieceKind::Knight => knight_attacks(board, piece.axial),
        PieceKind::Bishop => bishop_attacks(board, piece.axial),
        PieceKind::Rook => rook_attacks(board, piece.axial),
        PieceKind::Queen => queen_attacks(board, piece.axial),
        PieceKind::King => king_attacks(board, piece.axial),
    }
}

pub fn attacked_tiles(board: &Board, attacker: PieceOwner) -> HashSet<AxialCoordinate> {
    board
        .pieces_of(attacker)
        .flat_map(|piece| piece_attacks(board, piece))
        .collect()
}

pub fn is_square_attacked(board: &Board, square: AxialCoordinate, attacker: PieceOwner) -> bool {
    board
        .pieces_of(attacker)
        .any(|piece| piece_attacks(board, piece).contains(&square))
}

pub fn attackers_to_square(
    board: &Board,
    square: AxialCoordinate,
    attacker: PieceOwner,
) -> Vec<(AxialCoordinate, PieceKind)> {
    board
        .pieces_of(attacker)
        .filter(|piece| piece_attacks(board, piece).contains(&square))
        .map(|piece| (piece.axial, piece.kind))
        .collect()
}

/// A side without a king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, owner: PieceOwner) -> bool {
    let Some(king) = board.king_position(owner) else {
        return false;
    };
    is_square_attacked(board, king, owner.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nobody_is_in_check_at_start() {
        let state = GameState::new_game();
        assert!(!is_king_in_check(&state.board, PieceOwner::White));
        assert!(!is_king_in_check(&state.board, PieceOwner::Black));
    }

    #[test]
    fn defended_pieces_count_as_attacked() {
        let state = GameState::new_game();
        // bishop on (0, 3) sits on the queen's diagonal
        assert!(is_square_attacked(&state.board, AxialCoordinate::new(0, 3), PieceOwner::White));
        let threats = attacked_tiles(&state.board, PieceOwner::White);
        assert!(threats.contains(&AxialCoordinate::new(0, 2)));
        assert!(threats.contains(&AxialCoordinate::new(2, 2)));
        assert!(!threats.contains(&AxialCoordinate::new(0, -3)));
    }

    #[test]
    fn rook_gives_check_along_file() {
        let mut state = GameState::new_empty();
        state.spawn_piece(PieceKind::King, PieceOwner::Black, AxialCoordinate::new(5, -5));
        state.spawn_piece(PieceKind::Rook, PieceOwner::White, AxialCoordinate::new(5, 0));

        assert!(is_king_in_check(&state.board, PieceOwner::Black));
        assert_eq!(
            attackers_to_square(&state.board, AxialCoordinate::new(5, -5), PieceOwner::White),
            vec![(AxialCoordinate::new(5, 0), PieceKind::Rook)]
        );

        state.spawn_piece(PieceKind::Pawn, PieceOwner::Black, AxialCoordinate::new(5, -2));
        assert!(!is_king_in_check(&state.board, PieceOwner::Black));
    }
}
