//! Canonical rule constants for Gliński-style hexagonal chess.
//!
//! Board dimensions and the white starting layout. Black's layout is the
//! white one reflected across the board's horizontal midline.

use crate::game_state::chess_types::PieceKind;

/// Storage grid edge length.
pub const BOARD_SIZE: usize = 11;

/// Distance from the centre cell to the edge of the playable hexagon.
pub const BOARD_RADIUS: i8 = 5;

/// Number of playable cells on a radius-5 hexagon.
pub const PLAYABLE_TILE_COUNT: usize = 91;

/// White pieces as `(kind, q, r)`. White advances toward decreasing `r`.
pub const WHITE_STARTING_LAYOUT: [(PieceKind, i8, i8); 18] = [
    (PieceKind::King, 1, 4),
    (PieceKind::Queen, -1, 5),
    (PieceKind::Bishop, 0, 5),
    (PieceKind::Bishop, 0, 4),
    (PieceKind::Bishop, 0, 3),
    (PieceKind::Knight, -2, 5),
    (PieceKind::Knight, 2, 3),
    (PieceKind::Rook, -3, 5),
    (PieceKind::Rook, 3, 2),
    (PieceKind::Pawn, -4, 5),
    (PieceKind::Pawn, -3, 4),
    (PieceKind::Pawn, -2, 3),
    (PieceKind::Pawn, -1, 2),
    (PieceKind::Pawn, 0, 1),
    (PieceKind::Pawn, 1, 1),
    (PieceKind::Pawn, 2, 1),
    (PieceKind::Pawn, 3, 1),
    (PieceKind::Pawn, 4, 1),
];
