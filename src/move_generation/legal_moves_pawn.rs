use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::build_move;
use crate::moves::pawn_moves::{pawn_attacks, pawn_forward};

pub fn generate_pawn_moves(game_state: &GameState, piece: &Piece) -> Vec<MoveInfo> {
    let board = &game_state.board;
    let owner = piece.owner;
    let (dq, dr) = pawn_forward(owner);
    let mut out = Vec::with_capacity(4);

    let one_step = piece.axial.offset(dq, dr);
    if is_empty(board, one_step) {
        out.push(pawn_move(board, piece, one_step, MoveType::Standard));

        let on_origin = board
            .tile(piece.pos)
            .is_some_and(|tile| tile.has_status(TileStatus::PawnOrigin(owner)));
        if !piece.has_moved && on_origin {
            let two_step = one_step.offset(dq, dr);
            if is_empty(board, two_step) {
                out.push(pawn_move(board, piece, two_step, MoveType::Standard));
            }
        }
    }

    // captures and en-passant
    for target in pawn_attacks(board, owner, piece.axial) {
        let Some(tile) = board.tile_at_axial(target) else {
            continue;
        };
        match tile.owner() {
            Some(occupant) if occupant != owner => {
                out.push(pawn_move(board, piece, target, MoveType::Capture));
            }
            Some(_) => {}
            None if tile.has_status(TileStatus::EnPassant(owner.opposite())) => {
                out.push(build_move(piece, target, MoveType::EnPassantCapture));
            }
            None => {}
        }
    }

    out
}

fn is_empty(board: &Board, axial: AxialCoordinate) -> bool {
    board
        .tile_at_axial(axial)
        .is_some_and(|tile| tile.content.is_none())
}

/// Upgrades the move to a promotion when it lands in the mover's promo zone.
fn pawn_move(board: &Board, piece: &Piece, target: AxialCoordinate, move_type: MoveType) -> MoveInfo {
    let promotes = board
        .tile_at_axial(target)
        .is_some_and(|tile| tile.has_status(TileStatus::PromoTile(piece.owner)));
    if promotes {
        build_move(piece, target, MoveType::Promotion)
    } else {
        build_move(piece, target, move_type)
    }
}
