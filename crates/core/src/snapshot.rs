//! Render-facing copy of a session.
//!
//! A [`GameSnapshot`] owns everything a view needs, so rendering never
//! borrows the live [`GameState`](crate::GameState). Reuse one snapshot across
//! frames with [`GameState::snapshot_into`](crate::GameState::snapshot_into)
//! to keep the cell buffer allocation.

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Absolute cells; rows above the board are negative.
    pub cells: [(i8, i8); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major settled cells, `width * height` long
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub ghost: Option<[(i8, i8); 4]>,
    pub next: PieceKind,
    pub hold: Option<PieceKind>,
    pub hold_used: bool,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
    pub piece_id: u32,
}

impl GameSnapshot {
    /// Settled cell at (x, y); `None` when empty or outside the board.
    pub fn cell(&self, x: i8, y: i8) -> Cell {
        if x < 0 || y < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .flatten()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
