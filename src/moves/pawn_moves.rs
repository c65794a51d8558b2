//! Pawn geometry.
//!
//! Pawns walk along their file (constant `q`): white toward `r = -5`, black
//! toward `r = +5`. They capture on the two edge-sharing neighbours of the
//! forward cell.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{AxialCoordinate, PieceOwner};
use crate::moves::hex_rays::{step_attacks, HexOffset};

const WHITE_PAWN_FORWARD: HexOffset = (0, -1);
const BLACK_PAWN_FORWARD: HexOffset = (0, 1);

const WHITE_PAWN_CAPTURES: [HexOffset; 2] = [(-1, 0), (1, -1)];
const BLACK_PAWN_CAPTURES: [HexOffset; 2] = [(1, 0), (-1, 1)];

#[inline]
pub const fn pawn_forward(owner: PieceOwner) -> HexOffset {
    match owner {
        PieceOwner::White => WHITE_PAWN_FORWARD,
        PieceOwner::Black => BLACK_PAWN_FORWARD,
    }
}

#[inline]
pub const fn pawn_capture_offsets(owner: PieceOwner) -> [HexOffset; 2] {
    match owner {
        PieceOwner::White => WHITE_PAWN_CAPTURES,
        PieceOwner::Black => BLACK_PAWN_CAPTURES,
    }
}

#[inline]
pub fn pawn_attacks(board: &Board, owner: PieceOwner, from: AxialCoordinate) -> Vec<AxialCoordinate> {
    step_attacks(board, from, &pawn_capture_offsets(owner))
}

/// Cell holding the pawn that can be taken en passant by a capture landing
/// on `target`.
#[inline]
pub const fn en_passant_victim(capturer: PieceOwner, target: AxialCoordinate) -> AxialCoordinate {
    let (dq, dr) = pawn_forward(capturer);
    target.offset(-dq, -dr)
}
