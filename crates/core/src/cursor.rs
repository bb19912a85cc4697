//! The falling piece: kind, rotation index and pivot position.

use serde::Serialize;

use crate::shapes::{self, PieceShape};
use crate::types::{Coord, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceCursor {
    pub kind: PieceKind,
    /// Always below `rotation_count(kind)`
    rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl PieceCursor {
    /// Rotation is reduced modulo the kind's rotation count.
    pub fn new(kind: PieceKind, rotation: u8, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: rotation % shapes::rotation_count(kind),
            x,
            y,
        }
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Relative offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        shapes::cells(self.kind, self.rotation)
    }

    /// Absolute board cells
    pub fn cells(&self) -> [Coord; 4] {
        self.shape()
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }

    pub fn shifted(&self, dx: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            ..*self
        }
    }

    pub fn dropped(&self) -> Self {
        Self {
            y: self.y.saturating_add(1),
            ..*self
        }
    }

    pub fn rotated_ccw(&self) -> Self {
        Self {
            rotation: shapes::rotate_ccw(self.kind, self.rotation),
            ..*self
        }
    }
}
