//! Placement checks shared by shifts, rotations, drops and spawns.

use crate::board::Board;
use crate::cursor::PieceCursor;
use crate::shapes;
use crate::types::PieceKind;

/// True iff every cell of `kind` at `rotation` around `(x, y)` is inside the
/// board and empty.
///
/// Any pivot is accepted. Offsets saturate at the `i8` limits, which are well
/// outside every board, so extreme pivots are simply blocked.
#[inline]
pub fn can_place(board: &Board, kind: PieceKind, rotation: u8, x: i8, y: i8) -> bool {
    shapes::cells(kind, rotation)
        .iter()
        .all(|&(dx, dy)| board.is_empty(x.saturating_add(dx), y.saturating_add(dy)))
}

/// [`can_place`] for a cursor
#[inline]
pub fn cursor_fits(board: &Board, cursor: &PieceCursor) -> bool {
    can_place(board, cursor.kind, cursor.rotation(), cursor.x, cursor.y)
}

/// Lowest row the cursor can fall to from its current position
pub fn landing_y(board: &Board, cursor: &PieceCursor) -> i8 {
    let mut probe = *cursor;
    while cursor_fits(board, &probe.dropped()) {
        probe = probe.dropped();
    }
    probe.y
}
