//! Transport form of a move.
//!
//! `SerializedMove` names the moving piece by its stable tag instead of its
//! grid position or identity, so a move recorded on one engine instance can
//! be replayed on another that reached the same position.
//!
//! `type` and `promoPieceType` are encoded as variant names (`"Standard"`,
//! `"Queen"`), not as numeric discriminants.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedMove {
    pub axial: AxialCoordinate,
    #[serde(rename = "type")]
    pub move_type: MoveType,
    pub source_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_piece_type: Option<PieceKind>,
}

/// Serialized form of `info`, or `None` when its source tile is empty.
pub fn serialize_move(
    game_state: &GameState,
    info: &MoveInfo,
    promo_piece_type: Option<PieceKind>,
) -> Option<SerializedMove> {
    let source = game_state.board.tile(info.source)?.content.as_ref()?;
    Some(SerializedMove {
        axial: info.axial,
        move_type: info.move_type,
        source_tag: source.tag.clone(),
        promo_piece_type: promo_piece_type.or(info.promo_piece),
    })
}

/// Finds the live move marker matching `serialized` in the current turn.
pub fn resolve_serialized_move(
    game_state: &GameState,
    serialized: &SerializedMove,
) -> Option<MoveInfo> {
    let piece = game_state.board.find_piece_by_tag(&serialized.source_tag)?;
    let tile = game_state.board.tile_at_axial(serialized.axial)?;
    tile.move_from(piece.pos)
        .filter(|info| info.move_type == serialized.move_type)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening_double_step(state: &GameState) -> MoveInfo {
        let target = state
            .board
            .tile_at_axial(AxialCoordinate::new(2, -1))
            .expect("h-file cell");
        *target.move_statuses().next().expect("h-pawn double step")
    }

    #[test]
    fn serialized_move_uses_tags_and_camel_case() {
        let state = GameState::new_game();
        let info = opening_double_step(&state);
        let serialized = serialize_move(&state, &info, None).unwrap();
        assert_eq!(serialized.source_tag, "white-pawn-7");

        let json = serde_json::to_value(&serialized).unwrap();
        assert_eq!(json["sourceTag"], "white-pawn-7");
        assert_eq!(json["type"], "Standard");
        assert_eq!(json["axial"]["q"], 2);
        assert!(json.get("promoPieceType").is_none());
    }

    #[test]
    fn remote_engine_replays_the_same_move() {
        let mut local = GameState::new_game();
        let info = opening_double_step(&local);
        let wire = serde_json::to_string(&serialize_move(&local, &info, None).unwrap()).unwrap();

        local.select_tile(Some(info.source));
        local.attempt_move(info.axial);

        let mut remote = GameState::new_game();
        let received: SerializedMove = serde_json::from_str(&wire).unwrap();
        assert_eq!(resolve_serialized_move(&remote, &received), Some(info));
        remote.apply_serialized_move(&received).unwrap();

        assert_eq!(remote.turn, local.turn);
        let positions = |s: &GameState| {
            let mut tags: Vec<_> = s.board.pieces().map(|p| (p.tag.clone(), p.axial)).collect();
            tags.sort_by(|a, b| a.0.cmp(&b.0));
            tags
        };
        assert_eq!(positions(&remote), positions(&local));
    }

    #[test]
    fn unknown_tag_changes_nothing() {
        let mut state = GameState::new_game();
        let before = state.clone();
        let bogus = SerializedMove {
            axial: AxialCoordinate::new(0, 0),
            move_type: MoveType::Standard,
            source_tag: "white-dragon-1".to_owned(),
            promo_piece_type: None,
        };
        assert!(resolve_serialized_move(&state, &bogus).is_none());
        assert!(state.apply_serialized_move(&bogus).is_err());
        assert_eq!(state, before);
    }
}
