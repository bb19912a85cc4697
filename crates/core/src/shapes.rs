//! Shapes module - the static piece catalog
//!
//! Every kind has a fixed 4-slot rotation table of 4 cell offsets measured from
//! the pivot (x grows right, y grows down). Kinds with fewer distinct
//! orientations repeat entries so rotation arithmetic never needs special cases;
//! `rotation_count` says how many slots are meaningful.

use crate::types::{PieceKind, PIECE_CELLS};

/// Offset of a single cell relative to the piece pivot
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the pivot
pub type PieceShape = [CellOffset; PIECE_CELLS];

/// Rotation table for one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub rotation_count: u8,
    pub rotations: [PieceShape; 4],
}

const I_DEF: ShapeDef = ShapeDef {
    kind: PieceKind::I,
    rotation_count: 2,
    rotations: [
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
        [(0, -1), (0, 0), (0, 1), (0, 2)],
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
        [(0, -1), (0, 0), (0, 1), (0, 2)],
    ],
};

const O_DEF: ShapeDef = ShapeDef {
    kind: PieceKind::O,
    rotation_count: 1,
    rotations: [[(0, 0), (1, 0), (0, 1), (1, 1)]; 4],
};

const Z_DEF: ShapeDef = ShapeDef {
    kind: PieceKind::Z,
    rotation_count: 2,
    rotations: [
        [(-1, 0), (0, 0), (0, 1), (1, 1)],
        [(0, -1), (0, 0), (-1, 0), (-1, 1)],
        [(-1, 0), (0, 0), (0, 1), (1, 1)],
        [(0, -1), (0, 0), (-1, 0), (-1, 1)],
    ],
};

const S_DEF: ShapeDef = ShapeDef {
    kind: PieceKind::S,
    rotation_count: 2,
    rotations: [
        [(0, 0), (1, 0), (-1, 1), (0, 1)],
        [(-1, -1), (-1, 0), (0, 0), (0, 1)],
        [(0, 0), (1, 0), (-1, 1), (0, 1)],
        [(-1, -1), (-1, 0), (0, 0), (0, 1)],
    ],
};

const J_DEF: ShapeDef = ShapeDef {
    kind: PieceKind::J,
    rotation_count: 4,
    rotations: [
        [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        [(1, -1), (0, -1), (0, 0), (0, 1)],
        [(1, 1), (1, 0), (0, 0), (-1, 0)],
        [(-1, 1), (0, 1), (0, 0), (0, -1)],
    ],
};

const L_DEF: ShapeDef = ShapeDef {
    kind: PieceKind::L,
    rotation_count: 4,
    rotations: [
        [(1, -1), (-1, 0), (0, 0), (1, 0)],
        [(1, 1), (0, -1), (0, 0), (0, 1)],
        [(-1, 1), (1, 0), (0, 0), (-1, 0)],
        [(-1, -1), (0, 1), (0, 0), (0, -1)],
    ],
};

const T_DEF: ShapeDef = ShapeDef {
    kind: PieceKind::T,
    rotation_count: 4,
    rotations: [
        [(-1, 0), (0, 0), (1, 0), (0, -1)],
        [(0, -1), (0, 0), (0, 1), (1, 0)],
        [(-1, 0), (0, 0), (1, 0), (0, 1)],
        [(0, -1), (0, 0), (0, 1), (-1, 0)],
    ],
};

/// Catalog indexed by [`PieceKind::index`]
pub static CATALOG: [ShapeDef; 7] = [I_DEF, O_DEF, Z_DEF, S_DEF, J_DEF, L_DEF, T_DEF];

/// Look up the rotation table for a kind
#[inline]
pub fn shape_def(kind: PieceKind) -> &'static ShapeDef {
    &CATALOG[kind.index()]
}

/// Number of meaningful orientations (1, 2 or 4)
#[inline]
pub fn rotation_count(kind: PieceKind) -> u8 {
    shape_def(kind).rotation_count
}

/// Cell offsets for a kind and rotation; the rotation wraps modulo `rotation_count`
#[inline]
pub fn cells(kind: PieceKind, rotation: u8) -> PieceShape {
    let def = shape_def(kind);
    def.rotations[(rotation % def.rotation_count) as usize]
}

/// Rotation index one step counter-clockwise
#[inline]
pub fn rotate_ccw(kind: PieceKind, rotation: u8) -> u8 {
    let count = rotation_count(kind);
    (rotation % count + count - 1) % count
}

/// Bounding box of a shape as `(min_dx, min_dy, max_dx, max_dy)`
pub fn extent(shape: &PieceShape) -> (i8, i8, i8, i8) {
    shape.iter().fold(
        (i8::MAX, i8::MAX, i8::MIN, i8::MIN),
        |(lx, ly, hx, hy), &(dx, dy)| (lx.min(dx), ly.min(dy), hx.max(dx), hy.max(dy)),
    )
}
