//! Authoritative engine state.
//!
//! `GameState` exclusively owns the board. Collaborators read it as a
//! snapshot and change it only through the intents in `reducer`.

use crate::game_state::board::{create_initial_board, Board, Tile};
use crate::game_state::chess_types::*;
use crate::game_state::config::RulesConfig;
use crate::game_state::coordinates::grid_to_axial;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub game_over_state: GameOverState,
    pub board: Board,
    /// Tile picked up by the acting player. Lookup only.
    pub selected: Option<GridCoordinate>,
    pub turn: u32,
    pub pawn_promotion_flag: bool,
    pub promotion_tile: Option<GridCoordinate>,
    pub config: RulesConfig,
    next_piece_id: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            game_over_state: GameOverState::Unfinished,
            board: create_initial_board(),
            selected: None,
            turn: 0,
            pawn_promotion_flag: false,
            promotion_tile: None,
            config: RulesConfig::default(),
            next_piece_id: 0,
        }
    }
}

impl GameState {
    /// Empty scaffold with no pieces placed.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Starting position with white to move.
    pub fn new_game() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        let mut state = Self {
            config,
            ..Self::default()
        };
        state.reset_board();
        state
    }

    #[inline]
    pub fn current_player(&self) -> PieceOwner {
        PieceOwner::for_turn(self.turn)
    }

    #[inline]
    pub fn selected_tile(&self) -> Option<&Tile> {
        self.selected.and_then(|pos| self.board.tile(pos))
    }

    #[inline]
    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected_tile().and_then(|tile| tile.content.as_ref())
    }

    /// Builds a fresh piece with a new identity. The caller places it.
    pub fn create_piece(
        &mut self,
        kind: PieceKind,
        pos: GridCoordinate,
        owner: PieceOwner,
        tag: String,
    ) -> Piece {
        let id = PieceId(self.next_piece_id);
        self.next_piece_id += 1;
        Piece {
            id,
            tag,
            kind,
            pos,
            axial: grid_to_axial(pos),
            has_moved: false,
            owner,
        }
    }

    /// Places `piece` on the playable tile at `axial`, replacing any occupant.
    ///
    /// Intended for setting up positions in tests and tools; the piece's
    /// coordinates are rewritten to match the tile.
    pub fn place_piece(&mut self, axial: AxialCoordinate, mut piece: Piece) -> bool {
        let Some(tile) = self.board.tile_at_axial_mut(axial) else {
            return false;
        };
        piece.pos = tile.pos;
        piece.axial = tile.axial;
        tile.content = Some(piece);
        true
    }

    /// Creates and places a piece with a generated tag.
    pub fn spawn_piece(
        &mut self,
        kind: PieceKind,
        owner: PieceOwner,
        axial: AxialCoordinate,
    ) -> Option<PieceId> {
        let pos = self.board.tile_at_axial(axial)?.pos;
        let tag = format!("{}-{}-{}", owner.label(), kind.label(), self.next_piece_id);
        let piece = self.create_piece(kind, pos, owner, tag);
        let id = piece.id;
        self.place_piece(axial, piece);
        Some(id)
    }
}
