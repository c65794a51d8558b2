//! Full legal move generation pipeline.
//!
//! Runs every piece generator for one side, then applies each candidate to
//! a scratch copy of the state and discards those that leave the mover's
//! own king threatened.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState, owner: PieceOwner) -> Vec<MoveInfo> {
        PseudoLegalMoveGenerator
            .generate_moves(game_state, owner)
            .into_iter()
            .filter(|info| {
                apply_move(game_state, info)
                    .is_some_and(|(next, _)| !is_king_in_check(&next.board, owner))
            })
            .collect()
    }
}

/// Generator selected by the state's rules configuration.
pub fn generate_moves_for(game_state: &GameState, owner: PieceOwner) -> Vec<MoveInfo> {
    if game_state.config.filter_self_check {
        LegalMoveGenerator.generate_moves(game_state, owner)
    } else {
        PseudoLegalMoveGenerator.generate_moves(game_state, owner)
    }
}
