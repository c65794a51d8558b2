use crate::game_state::board::Board;
use crate::game_state::chess_types::AxialCoordinate;
use crate::moves::bishop_moves::{bishop_attacks, BISHOP_DIRECTIONS};
use crate::moves::hex_rays::HexOffset;
use crate::moves::rook_moves::{rook_attacks, ROOK_DIRECTIONS};

pub const QUEEN_DIRECTIONS: [HexOffset; 12] = generate_queen_directions();

#[inline]
pub fn queen_attacks(board: &Board, from: AxialCoordinate) -> Vec<AxialCoordinate> {
    let mut attacks = rook_attacks(board, from);
    attacks.extend(bishop_attacks(board, from));
    attacks
}

const fn generate_queen_directions() -> [HexOffset; 12] {
    let mut table = [(0i8, 0i8); 12];
    let mut i = 0usize;

    while i < 6 {
        table[i] = ROOK_DIRECTIONS[i];
        table[i + 6] = BISHOP_DIRECTIONS[i];
        i += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{queen_attacks, QUEEN_DIRECTIONS};
    use crate::game_state::board::create_initial_board;
    use crate::game_state::chess_types::AxialCoordinate;

    #[test]
    fn queen_directions_are_distinct() {
        let mut dirs = QUEEN_DIRECTIONS.to_vec();
        dirs.sort_unstable();
        dirs.dedup();
        assert_eq!(dirs.len(), 12);
    }

    #[test]
    fn queen_attacks_match_union() {
        let board = create_initial_board();
        assert_eq!(queen_attacks(&board, AxialCoordinate::new(0, 0)).len(), 42);
    }
}
