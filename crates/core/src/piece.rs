//! Piece module - tetromino shapes and placement
//!
//! A [`Piece`] is a small `Copy` value: kind, four cell offsets, an anchor
//! position and a rotation counter. Moving or rotating never mutates a piece
//! in place; it returns a new one, so callers can test a candidate with
//! [`collides`](crate::collision::collides) before committing to it.

use crate::rotation::rotate_shape;
use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type Shape = [CellOffset; 4];

/// Spawn shape for a piece kind.
///
/// I lives in a 4x4 box, everything else in the 3x3 box the rotation
/// transform pivots around.
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => [(0, 1), (1, 1), (2, 1), (3, 1)],
        PieceKind::O => [(1, 0), (2, 0), (1, 1), (2, 1)],
        PieceKind::T => [(1, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::S => [(1, 0), (2, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
        PieceKind::J => [(0, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::L => [(2, 0), (0, 1), (1, 1), (2, 1)],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub rotation: Rotation,
}

impl Piece {
    /// A fresh piece at the default spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// A fresh piece (spawn orientation) anchored at (x, y)
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            x,
            y,
            rotation: Rotation::North,
        }
    }

    /// Absolute grid coordinates of the four cells
    ///
    /// Saturates at the `i8` limits instead of overflowing.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }

    /// The same piece moved by (dx, dy). Saturates instead of wrapping.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// One quarter turn of the shape, anchor unchanged.
    ///
    /// No legality check; see [`try_rotate`](crate::rotation::try_rotate).
    pub fn rotated(&self) -> Self {
        Self {
            shape: rotate_shape(&self.shape),
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    /// Lowest row (largest y) any cell occupies
    pub fn bottom(&self) -> i8 {
        self.cells().iter().map(|&(_, y)| y).max().unwrap_or(self.y)
    }
}
