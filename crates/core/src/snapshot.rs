use crate::board::{Board, Row, Rows};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// What a renderer gets to see: board rows with the active piece overlaid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    /// Floor first, same packing as [`Board`].
    pub rows: Rows,
    pub next: Option<PieceKind>,
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            rows: Rows::new(),
            next: None,
        }
    }
}

impl BoardSnapshot {
    /// Copy the landed cells of `board`, reusing the row buffer.
    pub fn copy_board(&mut self, board: &Board) {
        self.width = board.width();
        self.height = board.height();
        self.rows.clear();
        // Capacity matches the board's, so this never fails.
        let _ = self.rows.try_extend_from_slice(board.rows());
        self.next = None;
    }

    pub fn row(&self, row: usize) -> Row {
        self.rows[row]
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.rows[row] >> col & 1 == 1
    }

    pub fn occupied_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }
}
