//! Line clear - find full rows and compact the board.

use serde::Serialize;

use crate::board::Board;

/// Result of one clearing pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineClear {
    /// Row indices as they were found, top to bottom, each in the coordinates
    /// of the board at the moment it was removed.
    pub rows: Vec<u8>,
}

impl LineClear {
    pub fn count(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Remove every full row in place, scanning top to bottom.
///
/// Removing a row only moves rows that were already scanned, so one pass is
/// enough.
pub fn clear_full_rows(board: &mut Board) -> LineClear {
    let mut rows = Vec::new();
    for y in 0..board.height() as usize {
        if board.is_row_full(y) {
            board.remove_row_and_collapse(y);
            rows.push(y as u8);
        }
    }
    LineClear { rows }
}

/// Non-mutating form: returns the rows cleared and the compacted board.
pub fn clear_lines(board: &Board) -> (LineClear, Board) {
    let mut next = board.clone();
    let cleared = clear_full_rows(&mut next);
    (cleared, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_full_rows_leaves_board_alone() {
        let board = Board::from_rows(&["....", "ii.i", "oo.o"]);
        let (cleared, next) = clear_lines(&board);
        assert!(cleared.is_empty());
        assert_eq!(next, board);
    }

    #[test]
    fn test_single_row() {
        let board = Board::from_rows(&["t...", "jjjj", ".z.."]);
        let (cleared, next) = clear_lines(&board);
        assert_eq!(cleared.rows, vec![1]);
        assert_eq!(next.to_rows(), vec!["....", "t...", ".z.."]);
    }

    #[test]
    fn test_separated_rows() {
        let board = Board::from_rows(&["s...", "iiii", ".l..", "oooo", "..t."]);
        let mut compacted = board.clone();
        let cleared = clear_full_rows(&mut compacted);
        assert_eq!(cleared.count(), 2);
        assert_eq!(
            compacted.to_rows(),
            vec!["....", "....", "s...", ".l..", "..t."]
        );
    }

    #[test]
    fn test_stacked_rows() {
        let board = Board::from_rows(&[".j..", "iiii", "iiii", "t..."]);
        let (cleared, next) = clear_lines(&board);
        assert_eq!(cleared.rows, vec![1, 2]);
        assert_eq!(next.to_rows(), vec!["....", "....", ".j..", "t..."]);
        assert!(next.full_rows().is_empty());
    }
}
