//! Grid storage index <-> axial hex coordinate mapping.
//!
//! The board is stored as an 11x11 grid. The playable area is the radius-5
//! hexagon centred on grid cell (5, 5); every direction vector used by move
//! generation is expressed in axial space so the storage shape never leaks
//! into the rules.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::{BOARD_RADIUS, BOARD_SIZE};

/// Index into the physical storage grid (`0..BOARD_SIZE` on each axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoordinate {
    pub col: u8,
    pub row: u8,
}

impl GridCoordinate {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Row-major index, used as the tile id.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }
}

/// Hex-native coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxialCoordinate {
    pub q: i8,
    pub r: i8,
}

impl AxialCoordinate {
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }

    #[inline]
    pub const fn offset(self, dq: i8, dr: i8) -> Self {
        Self::new(self.q + dq, self.r + dr)
    }

    /// Third cube component; `q + r + s == 0`.
    #[inline]
    pub const fn s(self) -> i16 {
        -(self.q as i16) - self.r as i16
    }

    #[inline]
    pub fn is_playable(self) -> bool {
        is_playable_axial(self)
    }

    #[inline]
    pub fn distance_to(self, other: AxialCoordinate) -> i16 {
        hex_distance(self, other)
    }
}

const CENTER: i8 = BOARD_RADIUS;

pub fn is_playable_axial(axial: AxialCoordinate) -> bool {
    let radius = BOARD_RADIUS as i16;
    (axial.q as i16).abs() <= radius
        && (axial.r as i16).abs() <= radius
        && axial.s().abs() <= radius
}

/// Steps between two cells moving only to edge-sharing neighbours.
pub fn hex_distance(a: AxialCoordinate, b: AxialCoordinate) -> i16 {
    let dq = (a.q as i16 - b.q as i16).abs();
    let dr = (a.r as i16 - b.r as i16).abs();
    let ds = (a.s() - b.s()).abs();
    (dq + dr + ds) / 2
}

pub fn grid_to_axial(pos: GridCoordinate) -> AxialCoordinate {
    AxialCoordinate::new(pos.col as i8 - CENTER, pos.row as i8 - CENTER)
}

/// Storage cell for `axial`, or `None` when it falls outside the grid.
///
/// A `Some` result can still be a boundary cell; check `is_playable_axial`
/// when that matters.
pub fn axial_to_grid(axial: AxialCoordinate) -> Option<GridCoordinate> {
    let col = axial.q as i16 + CENTER as i16;
    let row = axial.r as i16 + CENTER as i16;
    let size = BOARD_SIZE as i16;
    if !(0..size).contains(&col) || !(0..size).contains(&row) {
        return None;
    }
    Some(GridCoordinate::new(col as u8, row as u8))
}

/// Top and bottom `r` of the file `q` inside the playable hexagon.
pub fn file_bounds(q: i8) -> (i8, i8) {
    let top = (-BOARD_RADIUS).max((-BOARD_RADIUS).saturating_sub(q));
    let bottom = BOARD_RADIUS.min(BOARD_RADIUS.saturating_sub(q));
    (top, bottom)
}

/// Reflect across the board's horizontal midline, keeping the file.
#[inline]
pub const fn mirror_across_ranks(axial: AxialCoordinate) -> AxialCoordinate {
    AxialCoordinate::new(axial.q, -axial.q - axial.r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_grid_cells() -> impl Iterator<Item = GridCoordinate> {
        (0..BOARD_SIZE as u8)
            .flat_map(|col| (0..BOARD_SIZE as u8).map(move |row| GridCoordinate::new(col, row)))
    }

    #[test]
    fn playable_cells_round_trip() {
        let mut playable = 0;
        for pos in all_grid_cells() {
            let axial = grid_to_axial(pos);
            if is_playable_axial(axial) {
                playable += 1;
                assert_eq!(axial_to_grid(axial), Some(pos));
            }
        }
        assert_eq!(playable, 91);
    }

    #[test]
    fn outside_storage_resolves_to_none() {
        assert_eq!(axial_to_grid(AxialCoordinate::new(6, 0)), None);
        assert_eq!(axial_to_grid(AxialCoordinate::new(0, -6)), None);
        assert!(axial_to_grid(AxialCoordinate::new(5, 5)).is_some());
        assert!(!is_playable_axial(AxialCoordinate::new(5, 5)));
    }

    #[test]
    fn file_bounds_follow_hexagon_edge() {
        assert_eq!(file_bounds(0), (-5, 5));
        assert_eq!(file_bounds(5), (-5, 0));
        assert_eq!(file_bounds(-5), (0, 5));
        assert_eq!(file_bounds(2), (-5, 3));
    }

    #[test]
    fn mirror_keeps_cells_on_the_board() {
        for pos in all_grid_cells() {
            let axial = grid_to_axial(pos);
            if is_playable_axial(axial) {
                let mirrored = mirror_across_ranks(axial);
                assert!(is_playable_axial(mirrored));
                assert_eq!(mirror_across_ranks(mirrored), axial);
            }
        }
    }

    #[test]
    fn extreme_coordinates_are_not_playable() {
        assert!(!is_playable_axial(AxialCoordinate::new(i8::MIN, 0)));
        assert!(!is_playable_axial(AxialCoordinate::new(i8::MIN, i8::MIN)));
        assert!(!is_playable_axial(AxialCoordinate::new(i8::MAX, i8::MAX)));
        assert_eq!(AxialCoordinate::new(i8::MIN, i8::MIN).s(), 256);
        assert_eq!(
            hex_distance(AxialCoordinate::new(i8::MIN, 0), AxialCoordinate::new(i8::MAX, 0)),
            255
        );
        assert_eq!(axial_to_grid(AxialCoordinate::new(i8::MIN, 0)), None);
        assert_eq!(file_bounds(i8::MAX), (-5, -122));
        assert_eq!(file_bounds(i8::MIN), (123, 5));
    }

    #[test]
    fn distance_counts_hex_steps() {
        let origin = AxialCoordinate::new(0, 0);
        assert_eq!(origin.distance_to(AxialCoordinate::new(1, -1)), 1);
        assert_eq!(origin.distance_to(AxialCoordinate::new(2, -1)), 2);
        assert_eq!(origin.distance_to(AxialCoordinate::new(-5, 5)), 5);
    }
}
