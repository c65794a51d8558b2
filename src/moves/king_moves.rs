//! King geometry: one step along any rook or bishop direction.

use crate::game_state::board::Board;
use crate::game_state::chess_types::AxialCoordinate;
use crate::moves::hex_rays::{step_attacks, HexOffset};
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub const KING_OFFSETS: [HexOffset; 12] = QUEEN_DIRECTIONS;

#[inline]
pub fn king_attacks(board: &Board, from: AxialCoordinate) -> Vec<AxialCoordinate> {
    step_attacks(board, from, &KING_OFFSETS)
}
