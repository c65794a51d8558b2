//! Rook geometry: the six orthogonal hex directions (edge-sharing neighbours).

use crate::game_state::board::Board;
use crate::game_state::chess_types::AxialCoordinate;
use crate::moves::hex_rays::{slide_attacks, HexOffset};

pub const ROOK_DIRECTIONS: [HexOffset; 6] = [(0, -1), (1, -1), (1, 0), (0, 1), (-1, 1), (-1, 0)];

#[inline]
pub fn rook_attacks(board: &Board, from: AxialCoordinate) -> Vec<AxialCoordinate> {
    slide_attacks(board, from, &ROOK_DIRECTIONS)
}
