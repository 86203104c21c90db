//! Rotation with a fixed horizontal kick list.
//!
//! Every shape turns with the same transform, `(x, y) -> (2 - y, x)`: a
//! quarter turn clockwise about the centre of a 3x3 box. The I piece's 4x4
//! box is treated the same way, so it wobbles a column between turns.
//!
//! This is not SRS. There are no per-orientation tables and no
//! vertical kicks. A blocked turn retries at each offset of [`KICK_OFFSETS`]
//! in order and otherwise fails.

use tracing::debug;

use crate::collision::collides;
use crate::grid::Grid;
use crate::piece::{Piece, Shape};

/// Horizontal kick offsets, in priority order
pub const KICK_OFFSETS: [i8; 4] = [-1, 1, -2, 2];

/// Apply one quarter turn to every offset of `shape`.
pub fn rotate_shape(shape: &Shape) -> Shape {
    shape.map(|(x, y)| (2 - y, x))
}

/// Rotate `piece` on `grid`, kicking sideways when needed.
///
/// Returns the placed piece, or `None` when the unkicked turn and every kick
/// collide.
pub fn try_rotate(piece: &Piece, grid: &Grid) -> Option<Piece> {
    let turned = piece.rotated();
    if !collides(&turned, grid) {
        return Some(turned);
    }

    let kicked = KICK_OFFSETS
        .iter()
        .map(|&dx| turned.shifted(dx, 0))
        .find(|candidate| !collides(candidate, grid));

    if let Some(placed) = kicked {
        debug!(kind = ?piece.kind, kick = placed.x - piece.x, "rotation kicked");
    }
    kicked
}
