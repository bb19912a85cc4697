//! Board module - manages the game grid
//!
//! The board is a width x height grid where each cell is empty or holds the kind
//! of the piece that locked there. Storage is a flat row-major vector sized once
//! at construction; dimensions never change afterwards.
//! Coordinates: (x, y) with x growing to the right and y growing downward, so
//! row 0 is the top of the well.

use serde::Serialize;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// One cell as seen by a render sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub x: u8,
    pub y: u8,
    pub cell: Cell,
}

impl CellView {
    pub fn occupied(&self) -> bool {
        self.cell.is_some()
    }

    /// Palette tag, 0 for empty
    pub fn tag(&self) -> u8 {
        self.cell.map_or(0, PieceKind::color_tag)
    }
}

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the default 10x20 dimensions
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board of the given size.
    ///
    /// Size limits are enforced by [`crate::config::EngineConfig::validate`].
    pub fn with_size(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || y < 0 || x as u8 >= self.width || y as u8 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline(always)]
    fn row_range(&self, y: usize) -> std::ops::Range<usize> {
        let start = y * self.width as usize;
        start..start + self.width as usize
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Occupancy with walls: anything outside the grid counts as occupied.
    ///
    /// This is the single predicate placement checks are built on.
    #[inline]
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        !matches!(self.get(x, y), Some(None))
    }

    /// Check if position is inside the grid and empty
    #[inline]
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        !self.is_occupied(x, y)
    }

    /// Fill a cell. Returns false (and does nothing) if out of bounds.
    pub fn set_cell(&mut self, x: i8, y: i8, kind: PieceKind) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = Some(kind);
                true
            }
            None => false,
        }
    }

    /// Empty a cell. Returns false (and does nothing) if out of bounds.
    pub fn clear_cell(&mut self, x: i8, y: i8) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = None;
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.cells[self.row_range(y)].iter().all(|cell| cell.is_some())
    }

    /// Check if a row has no filled cells
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return true;
        }
        self.cells[self.row_range(y)].iter().all(|cell| cell.is_none())
    }

    /// Delete row `y`, shift every row above it down by one and insert an empty
    /// row at the top. Out-of-range rows are ignored.
    pub fn remove_row_and_collapse(&mut self, y: usize) {
        if y >= self.height as usize {
            return;
        }

        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Rows that are currently full, top to bottom
    pub fn full_rows(&self) -> Vec<u8> {
        (0..self.height)
            .filter(|&y| self.is_row_full(y as usize))
            .collect()
    }

    /// Write a piece's absolute cells into the grid, overwriting what is there.
    /// Out-of-bounds cells are skipped; returns false if any were.
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], kind: PieceKind) -> bool {
        cells
            .iter()
            .fold(true, |all_in, &(x, y)| self.set_cell(x, y, kind) && all_in)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Height of the stack: rows from the highest filled cell to the floor
    pub fn stack_height(&self) -> u8 {
        (0..self.height)
            .find(|&y| !self.is_row_empty(y as usize))
            .map_or(0, |top| self.height - top)
    }

    /// Iterate every cell in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(idx, &cell)| CellView {
            x: (idx % width) as u8,
            y: (idx / width) as u8,
            cell,
        })
    }

    /// Get a reference to the internal cells slice
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Build a board from text rows, one string per row from the top.
    ///
    /// `.` or space is empty, a piece letter (`i o z s j l t`, any case) fills the
    /// cell with that kind, and any other character fills it with `I`.
    /// Rows shorter than the widest row are padded with empty cells.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u8;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u8;
        let mut board = Self::with_size(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' || ch == ' ' {
                    continue;
                }
                let kind = PieceKind::from_str(&ch.to_string()).unwrap_or(PieceKind::I);
                board.set_cell(x as i8, y as i8, kind);
            }
        }
        board
    }

    /// Render as text rows using lowercase kind letters and `.` for empty
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height as usize)
            .map(|y| {
                self.cells[self.row_range(y)]
                    .iter()
                    .map(|cell| cell.map_or(".", |k| k.as_str()))
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_out_of_bounds_counts_as_occupied() {
        let board = Board::with_size(6, 8);
        assert!(board.is_occupied(-1, 0));
        assert!(board.is_occupied(6, 0));
        assert!(board.is_occupied(0, -1));
        assert!(board.is_occupied(0, 8));
        assert!(!board.is_occupied(5, 7));
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set_cell(0, 0, PieceKind::I);
        board.set_cell(5, 10, PieceKind::T);

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_collapse_preserves_columns() {
        let mut board = Board::from_rows(&[
            "t...",
            ".s..",
            "iiii",
            "..z.",
        ]);
        board.remove_row_and_collapse(2);
        assert_eq!(board.to_rows(), vec!["....", "t...", ".s..", "..z."]);
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows = ["..o.", "jl..", "tttt"];
        let board = Board::from_rows(&rows);
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
        assert_eq!(board.to_rows(), rows.to_vec());
    }

    #[test]
    fn test_stack_height() {
        let mut board = Board::with_size(4, 5);
        assert_eq!(board.stack_height(), 0);
        board.set_cell(2, 3, PieceKind::O);
        assert_eq!(board.stack_height(), 2);
    }
}
