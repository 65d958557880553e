//! Board module - manages the grid of landed cells
//!
//! Each row is packed into a single [`Row`] word: bit `c` is column `c`, counted
//! from the left wall. Rows live in a fixed-capacity `ArrayVec`, so nothing here
//! allocates after construction.
//!
//! Coordinates: `row` ranges 0..height with row 0 at the floor, `col` ranges
//! 0..width from the left wall.

use arrayvec::ArrayVec;
use log::debug;

use crate::types::{MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH, MIN_BOARD_SIDE};

/// One packed board row. Bit `c` set means column `c` is occupied.
pub type Row = u32;

/// Row storage with room for the tallest supported board.
pub type Rows = ArrayVec<Row, { MAX_BOARD_HEIGHT as usize }>;

/// The playfield of landed piece material
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    full: Row,
    rows: Rows,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        debug_assert!((MIN_BOARD_SIDE..=MAX_BOARD_WIDTH).contains(&width));
        debug_assert!((MIN_BOARD_SIDE..=MAX_BOARD_HEIGHT).contains(&height));

        let mut rows = Rows::new();
        for _ in 0..height {
            rows.push(0);
        }
        Self {
            width,
            height,
            full: (1 << width) - 1,
            rows,
        }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Mask with one bit per column.
    pub fn full_mask(&self) -> Row {
        self.full
    }

    /// Packed contents of one row.
    #[inline(always)]
    pub fn row(&self, row: usize) -> Row {
        self.rows[row]
    }

    /// All rows, floor first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Check whether a cell holds landed material.
    ///
    /// Both coordinates must be on the board.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        debug_assert!(col < self.width as usize);
        self.rows[row] >> col & 1 == 1
    }

    /// Set or clear a single cell.
    pub fn set(&mut self, row: usize, col: usize, occupied: bool) {
        debug_assert!(col < self.width as usize);
        if occupied {
            self.rows[row] |= 1 << col;
        } else {
            self.rows[row] &= !(1 << col);
        }
    }

    /// Replace a whole row. Bits outside the board width are dropped.
    pub fn set_row(&mut self, row: usize, bits: Row) {
        self.rows[row] = bits & self.full;
    }

    /// Toggle the cells in `mask` (symmetric difference).
    pub fn toggle(&mut self, row: usize, mask: Row) {
        debug_assert_eq!(mask & !self.full, 0);
        self.rows[row] ^= mask;
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows[row] == self.full
    }

    /// Check if a row has no occupied cell
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.rows[row] == 0
    }

    /// Number of occupied cells on the whole board.
    pub fn occupied_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    /// Remove the half-open row range `[low, high)`.
    ///
    /// Rows from `high` up slide down to start at `low`; the `high - low` rows at
    /// the top become empty.
    pub fn collapse(&mut self, low: usize, high: usize) {
        let height = self.height as usize;
        debug_assert!(low < high, "collapse range must be non-empty");
        debug_assert!(high <= height, "collapse range must be on the board");

        self.rows.copy_within(high..height, low);
        for row in &mut self.rows[height - (high - low)..height] {
            *row = 0;
        }
    }

    /// Remove every full row, scanning up from the floor.
    ///
    /// A run of consecutive full rows is collapsed in one go when the scan reaches
    /// the first non-full row above it; the scan then resumes at the row that slid
    /// down into the run's place. Scanning stops at the first empty row, since
    /// nothing can be resting above it. Returns the number of rows removed.
    pub fn scan_and_collapse(&mut self) -> usize {
        let height = self.height as usize;
        let mut removed = 0;
        let mut run_start: Option<usize> = None;
        let mut row = 0;

        while row < height {
            if self.is_row_full(row) {
                run_start.get_or_insert(row);
                row += 1;
                continue;
            }

            if let Some(low) = run_start.take() {
                debug!("collapsing rows {}..{}", low, row);
                self.collapse(low, row);
                removed += row - low;
                row = low;
                continue;
            }

            if self.is_row_empty(row) {
                break;
            }
            row += 1;
        }

        // A run that reaches the top row has no non-full row above it.
        if let Some(low) = run_start {
            debug!("collapsing rows {}..{}", low, height);
            self.collapse(low, height);
            removed += height - low;
        }

        removed
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            *row = 0;
        }
    }

    /// Build a board from text rows, top row first (`#` occupied, anything else empty).
    ///
    /// Handy for setting up positions in tests and benchmarks.
    pub fn from_rows(width: u8, picture: &[&str]) -> Self {
        let height = picture.len() as u8;
        let mut board = Self::new(width, height);
        for (i, line) in picture.iter().enumerate() {
            let row = height as usize - 1 - i;
            for (col, ch) in line.chars().take(width as usize).enumerate() {
                if ch == '#' {
                    board.set(row, col, true);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, row: usize) {
        board.set_row(row, board.full_mask());
    }

    #[test]
    fn test_board_new_is_empty() {
        let board = Board::new(10, 20);
        assert_eq!(board.rows().len(), 20);
        assert_eq!(board.full_mask(), 0x3FF);
        assert_eq!(board.occupied_count(), 0);
        for row in 0..20 {
            assert!(board.is_row_empty(row));
            assert!(!board.is_row_full(row));
        }
    }

    #[test]
    fn test_set_and_query_cells() {
        let mut board = Board::new(10, 20);
        board.set(0, 0, true);
        board.set(19, 9, true);

        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(19, 9));
        assert!(!board.is_occupied(0, 1));
        assert_eq!(board.row(0), 0b1);
        assert_eq!(board.row(19), 1 << 9);

        board.set(0, 0, false);
        assert!(board.is_row_empty(0));
    }

    #[test]
    fn test_set_row_masks_to_width() {
        let mut board = Board::new(4, 4);
        board.set_row(0, 0xFF);
        assert_eq!(board.row(0), 0xF);
        assert!(board.is_row_full(0));
    }

    #[test]
    fn test_collapse_postcondition() {
        let mut board = Board::new(10, 20);
        for row in 0..20 {
            board.set_row(row, row as Row + 1);
        }
        let before = board.clone();

        board.collapse(4, 6);

        for row in 0..4 {
            assert_eq!(board.row(row), before.row(row));
        }
        for row in 4..18 {
            assert_eq!(board.row(row), before.row(row + 2));
        }
        for row in 18..20 {
            assert!(board.is_row_empty(row));
        }
    }

    #[test]
    fn test_collapse_top_rows() {
        let mut board = Board::new(4, 4);
        for row in 0..4 {
            board.set_row(row, 0b0101);
        }
        board.collapse(2, 4);
        assert_eq!(board.rows(), &[0b0101, 0b0101, 0, 0]);
    }

    #[test]
    fn test_scan_single_full_row() {
        let mut board = Board::from_rows(
            4,
            &[
                "....", //
                ".#..", //
                "####", //
                "#.##", //
            ],
        );
        assert_eq!(board.scan_and_collapse(), 1);
        assert_eq!(board.rows(), &[0b1101, 0b0010, 0, 0]);
    }

    #[test]
    fn test_scan_separated_groups() {
        let mut board = Board::new(4, 8);
        fill_row(&mut board, 0);
        fill_row(&mut board, 1);
        board.set_row(2, 0b0001);
        fill_row(&mut board, 3);
        board.set_row(4, 0b0110);
        fill_row(&mut board, 5);
        fill_row(&mut board, 6);
        board.set_row(7, 0b1000);

        assert_eq!(board.scan_and_collapse(), 5);
        assert_eq!(board.rows(), &[0b0001, 0b0110, 0b1000, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_scan_full_run_reaching_top() {
        let mut board = Board::new(4, 4);
        board.set_row(0, 0b0011);
        fill_row(&mut board, 1);
        fill_row(&mut board, 2);
        fill_row(&mut board, 3);

        assert_eq!(board.scan_and_collapse(), 3);
        assert_eq!(board.rows(), &[0b0011, 0, 0, 0]);
    }

    #[test]
    fn test_scan_stops_at_empty_row() {
        let mut board = Board::new(4, 6);
        board.set_row(0, 0b0111);
        // Unreachable by play: full row floating above an empty one.
        fill_row(&mut board, 2);

        assert_eq!(board.scan_and_collapse(), 0);
        assert!(board.is_row_full(2));
    }

    #[test]
    fn test_scan_whole_board_full() {
        let mut board = Board::new(4, 4);
        for row in 0..4 {
            fill_row(&mut board, row);
        }
        assert_eq!(board.scan_and_collapse(), 4);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_from_rows_orientation() {
        let board = Board::from_rows(4, &["#...", "...#"]);
        assert!(board.is_occupied(1, 0));
        assert!(board.is_occupied(0, 3));
        assert_eq!(board.occupied_count(), 2);
    }
}
