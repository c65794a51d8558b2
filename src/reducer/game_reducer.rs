//! Public intents applied to a `GameState`.
//!
//! Every intent is total: an intent that does not make sense in the current
//! state is logged and ignored, leaving the state exactly as it was.

use tracing::debug;

use crate::errors::{IntentRejection, IntentResult};
use crate::game_state::board::{clear_move_highlights, reset_game_board};
use crate::game_state::chess_types::*;
use crate::game_state::turn_cycle::{end_turn, start_turn};
use crate::move_generation::legal_move_apply::{apply_move_in_place, AppliedMove};
use crate::moves::move_descriptions::{resolve_serialized_move, SerializedMove};

impl GameState {
    pub fn reset_board(&mut self) {
        debug!("resetting board");
        self.game_over_state = GameOverState::Unfinished;
        self.selected = None;
        self.turn = 0;
        self.pawn_promotion_flag = false;
        self.promotion_tile = None;
        reset_game_board(self);
        start_turn(self);
    }

    /// Selects a playable tile, or clears the selection with `None`.
    pub fn select_tile(&mut self, pos: Option<GridCoordinate>) {
        match pos {
            None => self.selected = None,
            Some(pos) if self.board.tile(pos).is_some_and(|tile| tile.playable) => {
                self.selected = Some(pos);
            }
            Some(pos) => debug!(col = pos.col, row = pos.row, "ignoring selection of boundary tile"),
        }
    }

    /// Highlights the destinations already materialized for `piece`.
    pub fn highlight_moves(&mut self, piece: &Piece) {
        clear_move_highlights(self);
        if !self.is_on_board(piece) {
            return;
        }
        for tile in self.board.tiles_mut() {
            let Some(info) = tile.move_from(piece.pos).copied() else {
                continue;
            };
            let captures = match info.move_type {
                MoveType::Capture | MoveType::EnPassantCapture => true,
                MoveType::Promotion => tile.content.is_some(),
                MoveType::Standard => false,
            };
            tile.add_status(if captures {
                TileStatus::CaptureHighlight
            } else {
                TileStatus::MoveHighlight
            });
        }
    }

    pub fn unhighlight_moves(&mut self, piece: &Piece) {
        if !self.is_on_board(piece) {
            return;
        }
        for tile in self.board.tiles_mut() {
            if tile.move_from(piece.pos).is_some() {
                tile.statuses.retain(|status| !status.is_highlight());
            }
        }
    }

    pub fn unhighlight_all_moves(&mut self) {
        clear_move_highlights(self);
    }

    pub fn attempt_move(&mut self, target: AxialCoordinate) {
        if let Err(reason) = self.try_attempt_move(target) {
            debug!(%reason, "move intent ignored");
        }
    }

    /// Moves the selected piece to `target` if a move marker allows it.
    pub fn try_attempt_move(&mut self, target: AxialCoordinate) -> IntentResult<AppliedMove> {
        if self.game_over_state.is_finished() {
            return Err(IntentRejection::GameOver(self.game_over_state));
        }
        if self.pawn_promotion_flag {
            return Err(IntentRejection::PromotionPending);
        }
        let source = self.selected.ok_or(IntentRejection::NoSelection)?;
        let mover = self
            .selected_piece()
            .ok_or(IntentRejection::EmptySelection {
                col: source.col,
                row: source.row,
            })?;

        let expected = self.current_player();
        if mover.owner != expected {
            return Err(IntentRejection::WrongTurn {
                expected,
                actual: mover.owner,
            });
        }

        let tile = self
            .board
            .tile_at_axial(target)
            .ok_or(IntentRejection::NoSuchTile {
                q: target.q,
                r: target.r,
            })?;
        let no_match = IntentRejection::NoMatchingMove {
            q: target.q,
            r: target.r,
        };
        let info = tile.move_from(source).copied().ok_or(no_match.clone())?;

        let applied = apply_move_in_place(self, &info).ok_or(no_match)?;

        if applied
            .captured
            .as_ref()
            .is_some_and(|piece| piece.kind == PieceKind::King)
        {
            self.game_over_state = GameOverState::victory_for(applied.owner);
            end_turn(self);
            debug!(outcome = ?self.game_over_state, "king captured");
            return Ok(applied);
        }

        if applied.reaches_promotion {
            self.pawn_promotion_flag = true;
            self.promotion_tile = Some(applied.to);
            debug!(
                mover = applied.mover.0,
                col = applied.to.col,
                row = applied.to.row,
                "awaiting promotion choice"
            );
        } else {
            end_turn(self);
            start_turn(self);
        }
        Ok(applied)
    }

    pub fn execute_promote_piece(&mut self, kind: PieceKind) {
        if let Err(reason) = self.try_execute_promote_piece(kind) {
            debug!(%reason, "promotion intent ignored");
        }
    }

    /// Replaces the pawn on the promotion tile. Kinds a pawn cannot become
    /// fall back to a queen.
    pub fn try_execute_promote_piece(&mut self, kind: PieceKind) -> IntentResult<PieceId> {
        if !self.pawn_promotion_flag {
            return Err(IntentRejection::NoPromotionPending);
        }
        let pos = self
            .promotion_tile
            .ok_or(IntentRejection::NoPromotionPending)?;
        let kind = if kind.is_promotion_target() {
            kind
        } else {
            PieceKind::Queen
        };
        let owner = self.current_player();
        let pawn_tag = self
            .board
            .tile(pos)
            .and_then(|tile| tile.content.as_ref())
            .map(|pawn| pawn.tag.clone())
            .unwrap_or_else(|| format!("{}-pawn", owner.label()));

        let mut piece = self.create_piece(kind, pos, owner, format!("{pawn_tag}={}", kind.label()));
        piece.has_moved = true;
        let id = piece.id;
        let tile = self
            .board
            .tile_mut(pos)
            .ok_or(IntentRejection::NoPromotionPending)?;
        tile.content = Some(piece);

        self.pawn_promotion_flag = false;
        self.promotion_tile = None;
        debug!(kind = kind.label(), owner = owner.label(), "pawn promoted");

        end_turn(self);
        start_turn(self);
        Ok(id)
    }

    /// Replays a move received from another engine instance: selects the
    /// tagged piece, moves it and, if needed, promotes it. Applied entirely
    /// or not at all.
    pub fn apply_serialized_move(&mut self, serialized: &SerializedMove) -> IntentResult<()> {
        if self.board.find_piece_by_tag(&serialized.source_tag).is_none() {
            return Err(IntentRejection::UnknownTag(serialized.source_tag.clone()));
        }
        let info = resolve_serialized_move(self, serialized).ok_or(
            IntentRejection::NoMatchingMove {
                q: serialized.axial.q,
                r: serialized.axial.r,
            },
        )?;

        let mut next = self.clone();
        next.select_tile(Some(info.source));
        next.try_attempt_move(info.axial)?;
        if next.pawn_promotion_flag {
            let kind = serialized
                .promo_piece_type
                .ok_or(IntentRejection::MissingPromotionChoice)?;
            next.try_execute_promote_piece(kind)?;
        }
        *self = next;
        Ok(())
    }

    fn is_on_board(&self, piece: &Piece) -> bool {
        self.board
            .tile(piece.pos)
            .and_then(|tile| tile.content.as_ref())
            .is_some_and(|live| live.id == piece.id)
    }
}
