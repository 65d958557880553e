//! Pieces module - the seven tetromino definitions
//!
//! Each shape is four occupied cells inside an N×N bounding box, N ∈ {2, 3, 4}.
//! Cell offsets are `(row, col)` in screen order: box row 0 is the top of the box,
//! box column 0 its left edge. Every box is large enough to hold all four
//! orientations of its shape, so rotation never needs to resize it.

use crate::types::PieceKind;

/// Offset of a single cell inside the bounding box: `(row, col)`, top-left origin.
pub type CellOffset = (u8, u8);

/// Up to four box rows of column bits, top row first. Bit `c` is box column `c`.
pub type BoxBits = [u8; 4];

/// Immutable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: PieceKind,
    /// Side of the square bounding box.
    pub box_size: u8,
    pub cells: [CellOffset; 4],
}

impl Shape {
    /// Occupied-cell bitmap of the spawn orientation.
    pub fn box_bits(&self) -> BoxBits {
        let mut bits = [0u8; 4];
        for &(row, col) in &self.cells {
            bits[row as usize] |= 1 << col;
        }
        bits
    }
}

/// The catalog, indexed by [`PieceKind::index`].
pub const SHAPES: [Shape; 7] = [
    // ....
    // ####
    // ....
    // ....
    Shape {
        kind: PieceKind::I,
        box_size: 4,
        cells: [(1, 0), (1, 1), (1, 2), (1, 3)],
    },
    // #..
    // ###
    // ...
    Shape {
        kind: PieceKind::J,
        box_size: 3,
        cells: [(0, 0), (1, 0), (1, 1), (1, 2)],
    },
    // ..#
    // ###
    // ...
    Shape {
        kind: PieceKind::L,
        box_size: 3,
        cells: [(0, 2), (1, 0), (1, 1), (1, 2)],
    },
    // ##
    // ##
    Shape {
        kind: PieceKind::O,
        box_size: 2,
        cells: [(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    // .##
    // ##.
    // ...
    Shape {
        kind: PieceKind::S,
        box_size: 3,
        cells: [(0, 1), (0, 2), (1, 0), (1, 1)],
    },
    // .#.
    // ###
    // ...
    Shape {
        kind: PieceKind::T,
        box_size: 3,
        cells: [(0, 1), (1, 0), (1, 1), (1, 2)],
    },
    // ##.
    // .##
    // ...
    Shape {
        kind: PieceKind::Z,
        box_size: 3,
        cells: [(0, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Look up the catalog entry for a piece kind.
pub fn get_shape(kind: PieceKind) -> &'static Shape {
    &SHAPES[kind.index()]
}
