//! Intent values for collaborators that queue actions instead of calling
//! `GameState` methods directly.

use tracing::debug;

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::SerializedMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ResetBoard,
    SelectTile(Option<GridCoordinate>),
    HighlightMoves(Piece),
    UnhighlightMoves(Piece),
    UnhighlightAllMoves,
    AttemptMove(AxialCoordinate),
    ExecutePromotePiece(PieceKind),
    ApplySerializedMove(SerializedMove),
}

impl GameState {
    /// Applies one intent. Intents that do not fit the current state are no-ops.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::ResetBoard => self.reset_board(),
            Intent::SelectTile(pos) => self.select_tile(pos),
            Intent::HighlightMoves(piece) => self.highlight_moves(&piece),
            Intent::UnhighlightMoves(piece) => self.unhighlight_moves(&piece),
            Intent::UnhighlightAllMoves => self.unhighlight_all_moves(),
            Intent::AttemptMove(target) => self.attempt_move(target),
            Intent::ExecutePromotePiece(kind) => self.execute_promote_piece(kind),
            Intent::ApplySerializedMove(serialized) => {
                if let Err(reason) = self.apply_serialized_move(&serialized) {
                    debug!(%reason, "serialized move ignored");
                }
            }
        }
    }
}

/// Next state after `intent`; `state` itself is left as it was.
pub fn reduce(state: &GameState, intent: Intent) -> GameState {
    let mut next = state.clone();
    next.dispatch(intent);
    next
}

/// Applies intents in arrival order.
pub fn reduce_all<I>(state: &GameState, intents: I) -> GameState
where
    I: IntoIterator<Item = Intent>,
{
    let mut next = state.clone();
    for intent in intents {
        next.dispatch(intent);
    }
    next
}
