//! Move-path enumeration for validating the turn cycle end to end.
//!
//! Unlike a bare generator count, every node here goes through the public
//! intents (select, attempt, promote), so the counts also exercise marker
//! materialization and turn bookkeeping.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
    pub stalemates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
        self.stalemates += rhs.stalemates;
    }
}

/// Every move marker currently on the board.
pub fn materialized_moves(game_state: &GameState) -> Vec<MoveInfo> {
    game_state
        .board
        .tiles()
        .flat_map(|tile| tile.move_statuses().copied())
        .collect()
}

/// Successor states reachable in one turn, one per promotion choice.
pub fn successors(game_state: &GameState) -> Vec<(MoveInfo, GameState)> {
    let mut out = Vec::new();
    for info in materialized_moves(game_state) {
        let mut next = game_state.clone();
        next.select_tile(Some(info.source));
        if next.try_attempt_move(info.axial).is_err() {
            continue;
        }
        if next.pawn_promotion_flag {
            for kind in PROMOTION_PIECE_KINDS {
                let mut promoted = next.clone();
                promoted.execute_promote_piece(kind);
                out.push((info, promoted));
            }
        } else {
            out.push((info, next));
        }
    }
    out
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (info, next) in successors(game_state) {
        if depth == 1 {
            total.merge(leaf_counts(game_state, &info, &next));
        } else {
            total.merge(perft(&next, depth - 1));
        }
    }
    total
}

fn leaf_counts(prev: &GameState, info: &MoveInfo, next: &GameState) -> PerftCounts {
    let captured = prev.board.pieces().count() > next.board.pieces().count();
    let defender = next.current_player();
    PerftCounts {
        nodes: 1,
        captures: usize::from(captured),
        en_passant: usize::from(info.move_type == MoveType::EnPassantCapture),
        promotions: usize::from(info.move_type == MoveType::Promotion),
        checks: usize::from(is_king_in_check(&next.board, defender)),
        checkmates: usize::from(matches!(
            next.game_over_state,
            GameOverState::WhiteVictory | GameOverState::BlackVictory
        )),
        stalemates: usize::from(matches!(
            next.game_over_state,
            GameOverState::WhiteStalemated | GameOverState::BlackStalemated
        )),
    }
}
