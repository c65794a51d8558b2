//! Seeded random playouts driven entirely through the public intents.
//!
//! Each ply picks one of the live move markers uniformly, selects its source
//! tile, attempts the move and, when a promotion is pending, picks a random
//! promotion kind. Used for soak-testing the turn cycle and by the
//! `random_playout` binary.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, warn};

use crate::game_state::chess_types::*;
use crate::game_state::config::RulesConfig;
use crate::move_generation::perft::materialized_moves;
use crate::moves::move_descriptions::{serialize_move, SerializedMove};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
    pub rules: RulesConfig,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 0,
            rules: RulesConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    /// `Unfinished` when the ply limit was reached first.
    pub outcome: GameOverState,
    pub final_state: GameState,
    pub played_moves: Vec<SerializedMove>,
}

/// Plays one random turn on `game_state`.
///
/// Returns the move in transport form, or `None` when the game is already
/// over or no marker could be played.
pub fn play_random_ply(game_state: &mut GameState, rng: &mut StdRng) -> Option<SerializedMove> {
    if game_state.game_over_state.is_finished() {
        return None;
    }

    let candidates = materialized_moves(game_state);
    let info = *candidates.choose(rng)?;
    let mut serialized = serialize_move(game_state, &info, None)?;

    game_state.select_tile(Some(info.source));
    if let Err(reason) = game_state.try_attempt_move(info.axial) {
        warn!(%reason, "materialized move was rejected");
        return None;
    }

    if game_state.pawn_promotion_flag {
        let kind = PROMOTION_PIECE_KINDS
            .choose(rng)
            .copied()
            .unwrap_or(PieceKind::Queen);
        game_state.execute_promote_piece(kind);
        serialized.promo_piece_type = Some(kind);
    }

    Some(serialized)
}

pub fn run_playout(config: &PlayoutConfig) -> PlayoutResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut state = GameState::with_config(config.rules);
    let mut played_moves = Vec::new();

    while played_moves.len() < usize::from(config.max_plies) {
        let Some(mv) = play_random_ply(&mut state, &mut rng) else {
            break;
        };
        played_moves.push(mv);
    }

    debug!(
        seed = config.seed,
        plies = played_moves.len(),
        outcome = ?state.game_over_state,
        "playout finished"
    );

    PlayoutResult {
        outcome: state.game_over_state,
        final_state: state,
        played_moves,
    }
}
