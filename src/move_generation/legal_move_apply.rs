//! Executes a generated move against the board.
//!
//! The piece's own `pos`/`axial` are rewritten together with the tile
//! contents so the two views of its location never drift apart.

use tracing::trace;

use crate::game_state::board::capture_content;
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::en_passant_victim;

/// What happened when a move was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub mover: PieceId,
    pub kind: PieceKind,
    pub owner: PieceOwner,
    pub from: GridCoordinate,
    pub to: GridCoordinate,
    pub captured: Option<Piece>,
    /// Tile skipped by a pawn double step, now marked en-passant eligible.
    pub en_passant_tile: Option<GridCoordinate>,
    pub reaches_promotion: bool,
}

/// Applies `info` in place. Returns `None`, leaving the state untouched,
/// when the source tile is empty or the target is not a playable tile.
pub fn apply_move_in_place(game_state: &mut GameState, info: &MoveInfo) -> Option<AppliedMove> {
    let (mover_id, owner) = game_state
        .board
        .tile(info.source)?
        .content
        .as_ref()
        .map(|piece| (piece.id, piece.owner))?;
    let to = game_state.board.tile_at_axial(info.axial)?.pos;

    let mut captured = capture_content(game_state, to);
    if info.move_type == MoveType::EnPassantCapture {
        let victim_pos = game_state
            .board
            .tile_at_axial(en_passant_victim(owner, info.axial))
            .map(|tile| tile.pos);
        if let Some(victim_pos) = victim_pos {
            captured = capture_content(game_state, victim_pos).or(captured);
        }
    }

    // lift-off
    let mut piece = game_state.board.take_content(info.source)?;
    let origin = piece.axial;

    // touch-down
    piece.pos = to;
    piece.axial = info.axial;
    piece.has_moved = true;
    let kind = piece.kind;

    let target_tile = game_state.board.tile_mut(to)?;
    let reaches_promotion =
        kind == PieceKind::Pawn && target_tile.has_status(TileStatus::PromoTile(owner));
    target_tile.content = Some(piece);

    let en_passant_tile = if kind == PieceKind::Pawn {
        mark_double_step(game_state, owner, origin, info.axial)
    } else {
        None
    };

    trace!(
        from_q = origin.q,
        from_r = origin.r,
        to_q = info.axial.q,
        to_r = info.axial.r,
        "move applied"
    );

    Some(AppliedMove {
        mover: mover_id,
        kind,
        owner,
        from: info.source,
        to,
        captured,
        en_passant_tile,
        reaches_promotion,
    })
}

/// Applies `info` to a copy of `game_state`.
pub fn apply_move(game_state: &GameState, info: &MoveInfo) -> Option<(GameState, AppliedMove)> {
    let mut next = game_state.clone();
    let applied = apply_move_in_place(&mut next, info)?;
    Some((next, applied))
}

fn mark_double_step(
    game_state: &mut GameState,
    owner: PieceOwner,
    origin: AxialCoordinate,
    target: AxialCoordinate,
) -> Option<GridCoordinate> {
    let dr = target.r - origin.r;
    if target.q != origin.q || dr.abs() != 2 {
        return None;
    }
    let skipped = game_state
        .board
        .tile_at_axial_mut(origin.offset(0, dr / 2))?;
    skipped.add_status(TileStatus::EnPassant(owner));
    Some(skipped.pos)
}
