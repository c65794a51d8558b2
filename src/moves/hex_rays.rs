//! Occupancy-aware ray tracing over axial coordinates.
//!
//! Sliding pieces extend along a direction until they leave the playable
//! hexagon or hit the first occupied tile; the occupied tile itself is part
//! of the ray so callers can decide between capture and block.

use crate::game_state::board::Board;
use crate::game_state::chess_types::AxialCoordinate;

pub type HexOffset = (i8, i8);

pub fn trace_ray(board: &Board, from: AxialCoordinate, step: HexOffset) -> Vec<AxialCoordinate> {
    let mut ray = Vec::new();
    let mut cursor = from.offset(step.0, step.1);

    while let Some(tile) = board.tile_at_axial(cursor) {
        ray.push(cursor);
        if tile.content.is_some() {
            break;
        }
        cursor = cursor.offset(step.0, step.1);
    }

    ray
}

pub fn slide_attacks(
    board: &Board,
    from: AxialCoordinate,
    directions: &[HexOffset],
) -> Vec<AxialCoordinate> {
    directions
        .iter()
        .flat_map(|&step| trace_ray(board, from, step))
        .collect()
}

/// Single-jump targets that land on the board.
pub fn step_attacks(
    board: &Board,
    from: AxialCoordinate,
    offsets: &[HexOffset],
) -> Vec<AxialCoordinate> {
    offsets
        .iter()
        .map(|&(dq, dr)| from.offset(dq, dr))
        .filter(|&target| board.tile_at_axial(target).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::create_initial_board;

    #[test]
    fn empty_board_ray_runs_to_edge() {
        let board = create_initial_board();
        let ray = trace_ray(&board, AxialCoordinate::new(0, 0), (0, -1));
        assert_eq!(ray.len(), 5);
        assert_eq!(ray.last(), Some(&AxialCoordinate::new(0, -5)));
    }

    #[test]
    fn step_attacks_drop_off_board_targets() {
        let board = create_initial_board();
        let corner = AxialCoordinate::new(5, -5);
        let targets = step_attacks(&board, corner, &[(1, 0), (0, 1), (-1, 0)]);
        assert_eq!(targets, vec![AxialCoordinate::new(5, -4), AxialCoordinate::new(4, -5)]);
    }
}
