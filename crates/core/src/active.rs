//! Active piece - the single falling tetromino
//!
//! The piece keeps its occupied cells as a bitmap of its bounding box
//! ([`BoxBits`], top row first) plus the board position of the box: `x` is the
//! board column of the box's left edge, `y` the board row of its bottom edge.
//! Either may go negative while empty box columns or rows hang past a wall or
//! the floor.
//!
//! Nothing here checks for collisions implicitly. Callers move or rotate, then
//! ask [`ActivePiece::collides`] and undo if needed.

use crate::board::{Board, Row};
use crate::pieces::{get_shape, BoxBits};
use crate::rotation;
use crate::types::{PieceKind, RotateDir};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: PieceKind,
    box_size: u8,
    bits: BoxBits,
    x: i8,
    y: i8,
}

impl ActivePiece {
    /// Create a piece in its catalog orientation at the spawn position.
    ///
    /// The box is centred horizontally with its bottom row two rows below the
    /// top edge, so the upper rows of the box start above the visible board.
    /// No collision test happens here.
    pub fn spawn(kind: PieceKind, board: &Board) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            box_size: shape.box_size,
            bits: shape.box_bits(),
            x: ((board.width() - shape.box_size) / 2) as i8,
            y: board.height() as i8 - 2,
        }
    }

    /// Create a piece in its catalog orientation at an explicit position.
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            box_size: shape.box_size,
            bits: shape.box_bits(),
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn box_size(&self) -> u8 {
        self.box_size
    }

    pub fn bits(&self) -> BoxBits {
        self.bits
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Board row covered by box row `r` (box rows count from the top).
    #[inline(always)]
    fn board_row(&self, r: usize) -> i32 {
        self.y as i32 + (self.box_size as i32 - 1 - r as i32)
    }

    /// Box row bits shifted to board columns, or `None` if a cell is past a wall.
    #[inline(always)]
    fn placed(&self, bits: u8, full: Row) -> Option<Row> {
        let mask = if self.x < 0 {
            let cut = (-self.x) as u32;
            if bits as u32 & ((1 << cut) - 1) != 0 {
                return None;
            }
            (bits as Row) >> cut
        } else {
            (bits as Row) << self.x as u32
        };
        if mask & !full != 0 {
            return None;
        }
        Some(mask)
    }

    /// Test the piece against floor, walls, and landed cells.
    ///
    /// With `pending_drop` the test is made one row lower, which is how landing
    /// is detected before the move that would cause it. Rows above the board
    /// never overlap landed cells, but walls and floor still apply there.
    pub fn collides(&self, board: &Board, pending_drop: bool) -> bool {
        let drop = pending_drop as i32;
        let height = board.height() as i32;

        for (r, &bits) in self.bits.iter().enumerate() {
            if bits == 0 {
                continue;
            }
            let row = self.board_row(r) - drop;
            if row < 0 {
                return true;
            }
            let Some(mask) = self.placed(bits, board.full_mask()) else {
                return true;
            };
            if row < height && board.row(row as usize) & mask != 0 {
                return true;
            }
        }

        false
    }

    /// Move down one row unless the piece has already landed.
    ///
    /// Returns `true` (without moving) when the piece is resting on the floor
    /// or on landed cells.
    pub fn advance(&mut self, board: &Board) -> bool {
        let landed = self.collides(board, true);
        if !landed {
            self.y -= 1;
        }
        landed
    }

    /// Shift horizontally by `dx` columns.
    pub fn shift(&mut self, dx: i8) {
        self.x += dx;
    }

    /// Rotate a quarter turn in place within the bounding box.
    pub fn rotate(&mut self, dir: RotateDir) {
        rotation::rotate(&mut self.bits, self.box_size, dir);
    }

    /// XOR the piece cells into the board.
    ///
    /// The piece must not overlap landed cells (every move has been collision
    /// tested). Cells above the top edge are discarded.
    pub fn merge_into(&self, board: &mut Board) {
        let height = board.height() as i32;
        let full = board.full_mask();

        for (r, &bits) in self.bits.iter().enumerate() {
            if bits == 0 {
                continue;
            }
            let row = self.board_row(r);
            if row < 0 || row >= height {
                debug_assert!(row >= 0, "merging a piece below the floor");
                continue;
            }
            let Some(mask) = self.placed(bits, full) else {
                debug_assert!(false, "merging a piece past a wall");
                continue;
            };
            debug_assert_eq!(board.row(row as usize) & mask, 0, "piece overlaps board");
            board.toggle(row as usize, mask);
        }
    }

    /// OR the visible piece cells into a copy of the board rows.
    pub fn overlay(&self, rows: &mut [Row], full: Row) {
        for (r, &bits) in self.bits.iter().enumerate() {
            if bits == 0 {
                continue;
            }
            let row = self.board_row(r);
            if row < 0 || row as usize >= rows.len() {
                continue;
            }
            if let Some(mask) = self.placed(bits, full) {
                rows[row as usize] |= mask;
            }
        }
    }

    /// Board cells `(row, col)` covered by the piece, including any above the top edge.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.bits.iter().enumerate().flat_map(move |(r, &bits)| {
            (0..4).filter(move |c| bits >> c & 1 == 1).map(move |c| {
                (self.board_row(r), self.x as i32 + c as i32)
            })
        })
    }
}
