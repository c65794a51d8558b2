//! Bishop geometry: the six hex diagonals (vertex-sharing neighbours).
//!
//! A hex bishop stays on one of three tile colours for the whole game,
//! which is why the starting layout gives each side three of them.

use crate::game_state::board::Board;
use crate::game_state::chess_types::AxialCoordinate;
use crate::moves::hex_rays::{slide_attacks, HexOffset};

pub const BISHOP_DIRECTIONS: [HexOffset; 6] =
    [(1, -2), (2, -1), (1, 1), (-1, 2), (-2, 1), (-1, -1)];

#[inline]
pub fn bishop_attacks(board: &Board, from: AxialCoordinate) -> Vec<AxialCoordinate> {
    slide_attacks(board, from, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::board::create_initial_board;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_from_centre_sees_twelve_cells() {
        let board = create_initial_board();
        assert_eq!(bishop_attacks(&board, AxialCoordinate::new(0, 0)).len(), 12);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let mut state = GameState::new_empty();
        state.spawn_piece(PieceKind::Knight, PieceOwner::White, AxialCoordinate::new(1, 1));
        let attacks = bishop_attacks(&state.board, AxialCoordinate::new(0, 0));

        assert!(attacks.contains(&AxialCoordinate::new(1, 1)));
        assert!(!attacks.contains(&AxialCoordinate::new(2, 2)));
    }
}
