//! Tile grid storage and board-wide maintenance helpers.
//!
//! `Board` owns every `Tile` in an 11x11 column-major grid. Boundary tiles
//! are padding only: they are never given content or markers.

use tracing::{debug, trace};

use crate::game_state::chess_rules::{BOARD_SIZE, WHITE_STARTING_LAYOUT};
use crate::game_state::chess_types::*;
use crate::game_state::coordinates::{
    axial_to_grid, file_bounds, grid_to_axial, is_playable_axial, mirror_across_ranks,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: usize,
    pub pos: GridCoordinate,
    pub axial: AxialCoordinate,
    pub content: Option<Piece>,
    pub statuses: Vec<TileStatus>,
    pub playable: bool,
    pub boundary: bool,
}

impl Tile {
    #[inline]
    pub fn has_status(&self, status: TileStatus) -> bool {
        self.statuses.contains(&status)
    }

    /// Adds `status` unless an equal marker is already present.
    pub fn add_status(&mut self, status: TileStatus) {
        if !self.has_status(status) {
            self.statuses.push(status);
        }
    }

    pub fn move_statuses(&self) -> impl Iterator<Item = &MoveInfo> + '_ {
        self.statuses.iter().filter_map(TileStatus::as_move)
    }

    /// The move marker on this tile generated for the piece standing at `source`.
    pub fn move_from(&self, source: GridCoordinate) -> Option<&MoveInfo> {
        self.move_statuses().find(|info| info.source == source)
    }

    #[inline]
    pub fn owner(&self) -> Option<PieceOwner> {
        self.content.as_ref().map(|piece| piece.owner)
    }
}

/// Builds a tile with no content and no markers.
pub fn create_tile(pos: GridCoordinate) -> Tile {
    let axial = grid_to_axial(pos);
    let playable = is_playable_axial(axial);
    Tile {
        id: pos.index(),
        pos,
        axial,
        content: None,
        statuses: Vec::new(),
        playable,
        boundary: !playable,
    }
}

/// Column-major grid of tiles, indexed `[col][row]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Vec<Tile>>,
}

impl Board {
    #[inline]
    pub fn tile(&self, pos: GridCoordinate) -> Option<&Tile> {
        self.columns
            .get(pos.col as usize)
            .and_then(|column| column.get(pos.row as usize))
    }

    #[inline]
    pub fn tile_mut(&mut self, pos: GridCoordinate) -> Option<&mut Tile> {
        self.columns
            .get_mut(pos.col as usize)
            .and_then(|column| column.get_mut(pos.row as usize))
    }

    /// Playable tile at `axial`, or `None` for boundary and out-of-range cells.
    pub fn tile_at_axial(&self, axial: AxialCoordinate) -> Option<&Tile> {
        axial_to_grid(axial)
            .and_then(|pos| self.tile(pos))
            .filter(|tile| tile.playable)
    }

    pub fn tile_at_axial_mut(&mut self, axial: AxialCoordinate) -> Option<&mut Tile> {
        let pos = axial_to_grid(axial)?;
        self.tile_mut(pos).filter(|tile| tile.playable)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.columns.iter().flatten()
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> + '_ {
        self.columns.iter_mut().flatten()
    }

    pub fn playable_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles().filter(|tile| tile.playable)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.tiles().filter_map(|tile| tile.content.as_ref())
    }

    pub fn pieces_of(&self, owner: PieceOwner) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.owner == owner)
    }

    pub fn find_piece_by_id(&self, id: PieceId) -> Option<&Piece> {
        self.pieces().find(|piece| piece.id == id)
    }

    pub fn find_piece_by_tag(&self, tag: &str) -> Option<&Piece> {
        self.pieces().find(|piece| piece.tag == tag)
    }

    pub fn king_position(&self, owner: PieceOwner) -> Option<AxialCoordinate> {
        self.pieces_of(owner)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.axial)
    }

    /// Removes every marker matching `predicate` board-wide.
    pub fn retain_statuses<F>(&mut self, mut keep: F)
    where
        F: FnMut(&TileStatus) -> bool,
    {
        for tile in self.tiles_mut() {
            tile.statuses.retain(|status| keep(status));
        }
    }

    /// Removes and returns the piece on `pos`.
    pub fn take_content(&mut self, pos: GridCoordinate) -> Option<Piece> {
        self.tile_mut(pos).and_then(|tile| tile.content.take())
    }
}

/// Empty scaffold: every tile created, nothing placed, no markers.
pub fn create_initial_board() -> Board {
    let columns = (0..BOARD_SIZE as u8)
        .map(|col| {
            (0..BOARD_SIZE as u8)
                .map(|row| create_tile(GridCoordinate::new(col, row)))
                .collect()
        })
        .collect();
    Board { columns }
}

pub fn get_tile_at_axial(state: &GameState, axial: AxialCoordinate) -> Option<&Tile> {
    state.board.tile_at_axial(axial)
}

pub fn get_tile_at_axial_mut(state: &mut GameState, axial: AxialCoordinate) -> Option<&mut Tile> {
    state.board.tile_at_axial_mut(axial)
}

/// Removes the piece standing on `pos` from play.
pub fn capture_content(state: &mut GameState, pos: GridCoordinate) -> Option<Piece> {
    let captured = state.board.take_content(pos);
    if let Some(piece) = &captured {
        trace!(tag = %piece.tag, col = pos.col, row = pos.row, "piece captured");
    }
    captured
}

/// Drops every move and capture highlight on the board.
pub fn clear_move_highlights(state: &mut GameState) {
    state.board.retain_statuses(|status| !status.is_highlight());
}

/// Wipes the board and places both armies in their starting layout.
pub fn reset_game_board(state: &mut GameState) {
    for tile in state.board.tiles_mut() {
        tile.content = None;
        tile.statuses.clear();
    }

    mark_promotion_zones(&mut state.board);

    for owner in [PieceOwner::White, PieceOwner::Black] {
        let mut counts = [0usize; 6];
        for (kind, q, r) in WHITE_STARTING_LAYOUT {
            let white_axial = AxialCoordinate::new(q, r);
            let axial = match owner {
                PieceOwner::White => white_axial,
                PieceOwner::Black => mirror_across_ranks(white_axial),
            };
            let Some(pos) = axial_to_grid(axial) else {
                continue;
            };
            counts[kind.index()] += 1;
            let tag = format!("{}-{}-{}", owner.label(), kind.label(), counts[kind.index()]);
            let piece = state.create_piece(kind, pos, owner, tag);
            if let Some(tile) = state.board.tile_mut(pos) {
                if kind == PieceKind::Pawn {
                    tile.add_status(TileStatus::PawnOrigin(owner));
                }
                tile.content = Some(piece);
            }
        }
    }
    debug!("board reset to starting layout");
}

fn mark_promotion_zones(board: &mut Board) {
    for tile in board.tiles_mut().filter(|tile| tile.playable) {
        let (top, bottom) = file_bounds(tile.axial.q);
        if tile.axial.r == top {
            tile.add_status(TileStatus::PromoTile(PieceOwner::White));
        }
        if tile.axial.r == bottom {
            tile.add_status(TileStatus::PromoTile(PieceOwner::Black));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::PLAYABLE_TILE_COUNT;

    #[test]
    fn initial_board_is_empty_scaffold() {
        let board = create_initial_board();
        assert_eq!(board.tiles().count(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(board.playable_tiles().count(), PLAYABLE_TILE_COUNT);
        assert!(board.tiles().all(|tile| tile.content.is_none()));
        assert!(board.tiles().all(|tile| tile.statuses.is_empty()));
        assert!(board.tiles().all(|tile| tile.playable != tile.boundary));
    }

    #[test]
    fn boundary_cells_are_not_resolvable() {
        let board = create_initial_board();
        assert!(board.tile_at_axial(AxialCoordinate::new(5, 5)).is_none());
        assert!(board.tile_at_axial(AxialCoordinate::new(9, 0)).is_none());
        assert!(board.tile_at_axial(AxialCoordinate::new(5, -5)).is_some());
    }

    #[test]
    fn reset_places_both_armies() {
        let mut state = GameState::new_empty();
        reset_game_board(&mut state);

        assert_eq!(state.board.pieces_of(PieceOwner::White).count(), 18);
        assert_eq!(state.board.pieces_of(PieceOwner::Black).count(), 18);
        assert_eq!(
            state.board.king_position(PieceOwner::Black),
            Some(AxialCoordinate::new(1, -5))
        );

        for tile in state.board.tiles() {
            if let Some(piece) = &tile.content {
                assert_eq!(piece.pos, tile.pos);
                assert_eq!(piece.axial, tile.axial);
                assert!(tile.playable);
            }
        }
    }

    #[test]
    fn reset_marks_origins_and_promotion_zones() {
        let mut state = GameState::new_empty();
        reset_game_board(&mut state);

        let white_origins = state
            .board
            .tiles()
            .filter(|tile| tile.has_status(TileStatus::PawnOrigin(PieceOwner::White)))
            .count();
        let white_promos = state
            .board
            .tiles()
            .filter(|tile| tile.has_status(TileStatus::PromoTile(PieceOwner::White)))
            .count();
        assert_eq!(white_origins, 9);
        assert_eq!(white_promos, 11);

        let top_of_centre = get_tile_at_axial(&state, AxialCoordinate::new(0, -5)).unwrap();
        assert!(top_of_centre.has_status(TileStatus::PromoTile(PieceOwner::White)));
        assert!(!top_of_centre.has_status(TileStatus::PromoTile(PieceOwner::Black)));
    }

    #[test]
    fn tags_are_unique() {
        let mut state = GameState::new_empty();
        reset_game_board(&mut state);
        let mut tags: Vec<&str> = state.board.pieces().map(|p| p.tag.as_str()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), 36);
        assert!(state.board.find_piece_by_tag("black-pawn-9").is_some());
    }

    #[test]
    fn capture_removes_content() {
        let mut state = GameState::new_empty();
        reset_game_board(&mut state);
        let pos = axial_to_grid(AxialCoordinate::new(0, 1)).unwrap();
        let captured = capture_content(&mut state, pos).expect("pawn on f5");
        assert_eq!(captured.kind, PieceKind::Pawn);
        assert!(state.board.tile(pos).unwrap().content.is_none());
        assert!(capture_content(&mut state, pos).is_none());
    }

    #[test]
    fn clear_move_highlights_keeps_other_markers() {
        let mut state = GameState::new_empty();
        reset_game_board(&mut state);
        let pos = axial_to_grid(AxialCoordinate::new(0, -5)).unwrap();
        let tile = get_tile_at_axial_mut(&mut state, AxialCoordinate::new(0, -5)).unwrap();
        tile.add_status(TileStatus::MoveHighlight);
        tile.add_status(TileStatus::CaptureHighlight);

        clear_move_highlights(&mut state);
        let tile = state.board.tile(pos).unwrap();
        assert_eq!(tile.statuses, vec![TileStatus::PromoTile(PieceOwner::White)]);
    }
}
