use crate::game_state::board::Board;
use crate::game_state::chess_types::AxialCoordinate;
use crate::moves::hex_rays::{step_attacks, HexOffset};

/// Two orthogonal steps followed by one step turned 60 degrees either way.
pub const KNIGHT_OFFSETS: [HexOffset; 12] = [
    (1, -3),
    (2, -3),
    (3, -2),
    (3, -1),
    (2, 1),
    (1, 2),
    (-1, 3),
    (-2, 3),
    (-3, 2),
    (-3, 1),
    (-2, -1),
    (-1, -2),
];

#[inline]
pub fn knight_attacks(board: &Board, from: AxialCoordinate) -> Vec<AxialCoordinate> {
    step_attacks(board, from, &KNIGHT_OFFSETS)
}
