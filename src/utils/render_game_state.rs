//! Terminal-oriented Unicode board renderer.
//!
//! Draws the hexagon one axial row at a time, indenting each row so the
//! cells line up as they would on a pointy-top hex board. White is at the
//! bottom.

use crate::game_state::board::Tile;
use crate::game_state::chess_rules::BOARD_RADIUS;
use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
///
/// Empty cells are `·`, highlighted destinations `+` (move) or `x` (capture).
pub fn render_game_state(game_state: &GameState) -> String {
    let mut lines = Vec::with_capacity((2 * BOARD_RADIUS + 1) as usize);

    for r in -BOARD_RADIUS..=BOARD_RADIUS {
        let mut line = " ".repeat(r.unsigned_abs() as usize);
        let q_min = (-BOARD_RADIUS).max(-BOARD_RADIUS - r);
        let q_max = BOARD_RADIUS.min(BOARD_RADIUS - r);

        let cells: Vec<String> = (q_min..=q_max)
            .map(|q| {
                let symbol = game_state
                    .board
                    .tile_at_axial(AxialCoordinate::new(q, r))
                    .map(tile_symbol)
                    .unwrap_or(' ');
                symbol.to_string()
            })
            .collect();
        line.push_str(&cells.join(" "));
        lines.push(line);
    }

    lines.join("\n")
}

fn tile_symbol(tile: &Tile) -> char {
    if let Some(piece) = &tile.content {
        return piece_to_unicode(piece.owner, piece.kind);
    }
    if tile.has_status(TileStatus::CaptureHighlight) {
        'x'
    } else if tile.has_status(TileStatus::MoveHighlight) {
        '+'
    } else {
        '·'
    }
}

fn piece_to_unicode(owner: PieceOwner, kind: PieceKind) -> char {
    match (owner, kind) {
        (PieceOwner::White, PieceKind::Pawn) => '♙',
        (PieceOwner::White, PieceKind::Knight) => '♘',
        (PieceOwner::White, PieceKind::Bishop) => '♗',
        (PieceOwner::White, PieceKind::Rook) => '♖',
        (PieceOwner::White, PieceKind::Queen) => '♕',
        (PieceOwner::White, PieceKind::King) => '♔',
        (PieceOwner::Black, PieceKind::Pawn) => '♟',
        (PieceOwner::Black, PieceKind::Knight) => '♞',
        (PieceOwner::Black, PieceKind::Bishop) => '♝',
        (PieceOwner::Black, PieceKind::Rook) => '♜',
        (PieceOwner::Black, PieceKind::Queen) => '♛',
        (PieceOwner::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::chess_types::GameState;

    #[test]
    fn renders_every_playable_cell_once() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);

        let cells: usize = lines.iter().map(|l| l.split_whitespace().count()).sum();
        assert_eq!(cells, 91);
        assert_eq!(rendered.chars().filter(|&c| c == '♙').count(), 9);
        assert_eq!(rendered.chars().filter(|&c| c == '♚').count(), 1);
        assert_eq!(lines[5].split_whitespace().count(), 11);
    }
}
