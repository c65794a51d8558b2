//! Turn boundary bookkeeping.
//!
//! `end_turn` tears down everything that only lives for one turn and hands
//! the move to the other side; `start_turn` rebuilds threat markers and the
//! move markers the acting side may use.

use tracing::{debug, info};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{attacked_tiles, attackers_to_square};
use crate::move_generation::legal_move_generator::generate_moves_for;

pub fn end_turn(game_state: &mut GameState) {
    let mover = game_state.current_player();
    // The mover had its one chance at the opponent's en-passant tiles.
    let expiring = mover.opposite();
    game_state.board.retain_statuses(|status| match status {
        TileStatus::Move(_) | TileStatus::MoveHighlight | TileStatus::CaptureHighlight => false,
        TileStatus::EnPassant(owner) => *owner != expiring,
        _ => true,
    });
    game_state.selected = None;
    game_state.turn += 1;
    debug!(turn = game_state.turn, ended_by = mover.label(), "turn ended");
}

pub fn start_turn(game_state: &mut GameState) {
    game_state.board.retain_statuses(|status| {
        !matches!(
            status,
            TileStatus::Move(_)
                | TileStatus::Threatening(_)
                | TileStatus::MoveHighlight
                | TileStatus::CaptureHighlight
        )
    });
    mark_threats(game_state);

    let player = game_state.current_player();
    let moves = generate_moves_for(game_state, player);

    if moves.is_empty() {
        let checkers = game_state
            .board
            .king_position(player)
            .map(|king| attackers_to_square(&game_state.board, king, player.opposite()))
            .unwrap_or_default();
        game_state.game_over_state = if checkers.is_empty() {
            GameOverState::stalemated(player)
        } else {
            GameOverState::victory_for(player.opposite())
        };
        info!(
            turn = game_state.turn,
            outcome = ?game_state.game_over_state,
            ?checkers,
            "no moves left"
        );
        return;
    }

    let count = moves.len();
    for info in moves {
        if let Some(tile) = game_state.board.tile_at_axial_mut(info.axial) {
            tile.statuses.push(TileStatus::Move(info));
        }
    }
    debug!(turn = game_state.turn, player = player.label(), moves = count, "turn started");
}

fn mark_threats(game_state: &mut GameState) {
    for owner in [PieceOwner::White, PieceOwner::Black] {
        for axial in attacked_tiles(&game_state.board, owner) {
            if let Some(tile) = game_state.board.tile_at_axial_mut(axial) {
                tile.add_status(TileStatus::Threatening(owner));
            }
        }
    }
}
