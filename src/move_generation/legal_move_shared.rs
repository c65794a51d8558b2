use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Turns raw attack targets into moves: friendly-occupied targets are
/// dropped, enemy-occupied ones become captures.
pub fn moves_from_targets(
    board: &Board,
    piece: &Piece,
    targets: impl IntoIterator<Item = AxialCoordinate>,
) -> Vec<MoveInfo> {
    targets
        .into_iter()
        .filter_map(|target| {
            let tile = board.tile_at_axial(target)?;
            let move_type = match tile.owner() {
                Some(owner) if owner == piece.owner => return None,
                Some(_) => MoveType::Capture,
                None => MoveType::Standard,
            };
            Some(build_move(piece, target, move_type))
        })
        .collect()
}

#[inline]
pub fn build_move(piece: &Piece, target: AxialCoordinate, move_type: MoveType) -> MoveInfo {
    MoveInfo {
        axial: target,
        move_type,
        source: piece.pos,
        promo_piece: None,
    }
}
